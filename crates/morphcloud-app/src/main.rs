mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use morphcloud_config::CloudConfig;

/// Directive used when no source names a usable filter.
const DEFAULT_LOG_DIRECTIVE: &str = "morphcloud=info";

/// A bare level is scoped to the `morphcloud` crates; anything containing
/// `=` is passed through as a full directive.
fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("morphcloud={level}")
    }
}

/// Pick the log filter: `--log-level` first, then a non-blank `RUST_LOG`,
/// then the config level. A source that fails to parse is skipped with a
/// note on stderr, since the subscriber is not up yet.
fn build_filter(cli_level: Option<&str>, rust_log: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        match EnvFilter::try_new(log_directive(level)) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring --log-level {level:?}: {e}"),
        }
    }
    if let Some(env) = rust_log.filter(|v| !v.trim().is_empty()) {
        match EnvFilter::try_new(env) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring RUST_LOG {env:?}: {e}"),
        }
    }
    EnvFilter::try_new(log_directive(config_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

fn main() {
    let args = cli::parse();

    // The config is read before logging is up so its level can apply; a
    // failure is reported once the subscriber exists.
    let loaded = morphcloud_config::load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or("info");

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let cli_level = args.log_level.as_deref();
    let filter = build_filter(cli_level, rust_log.as_deref(), config_level);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("morphcloud v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CloudConfig::default()
    });
    if let Some(path) = args.shapes {
        tracing::info!(path = %path.display(), "Using shape file override");
        config.shapes.path = Some(path);
    }
    if let Some(seed) = args.seed {
        config.shapes.seed = Some(seed);
    }
    tracing::info!(
        morph_duration = config.morph.duration,
        auto_cycle = config.morph.auto_cycle,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::MorphCloudApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
