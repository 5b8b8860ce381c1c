//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# morphcloud configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "morphcloud"
# width = 1280           # 200-8192
# height = 800           # 200-8192

[camera]
# fov_degrees = 35.0     # 10-120
# distance = 16.0        # 1-100
# near = 0.1
# far = 100.0
# auto_rotate_speed = 0.0  # radians per second, 0-5

[particles]
# size = 0.4             # 0.01-5.0
# max_pixel_ratio = 2.0  # 1-4

[morph]
# duration = 2.5         # seconds, 0.1-30
# auto_cycle = true
# interval = 4.0         # seconds between automatic morphs, 0.5-600
# initial_shape = 0

[colors]
# color_a = "#ff7300"
# color_b = "#0091ff"
# clear = "#160920"
# randomize = true
# transition = 2.5       # seconds, 0-30

[shapes]
# path = "/path/to/shapes.json"   # {"shapes":[{"name":"..","positions":[[x,y,z],...]}]}
# seed = 1234

[logging]
level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
