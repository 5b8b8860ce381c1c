//! Shared constants for the app state.

use std::time::Duration;

/// How often the rolling FPS figure is logged.
pub const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);
