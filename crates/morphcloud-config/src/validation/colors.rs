//! Color format validation.

use crate::schema::CloudConfig;
use morphcloud_common::Rgb;

use super::helpers::validate_range_f64;

pub(crate) fn validate_colors(errors: &mut Vec<String>, config: &CloudConfig) {
    let colors = &config.colors;
    for (name, value) in [
        ("colors.color_a", &colors.color_a),
        ("colors.color_b", &colors.color_b),
        ("colors.clear", &colors.clear),
    ] {
        if Rgb::from_hex(value).is_none() {
            errors.push(format!("{name} = {value:?} is not a #RRGGBB color"));
        }
    }
    validate_range_f64(errors, "colors.transition", colors.transition, 0.0, 30.0);
}
