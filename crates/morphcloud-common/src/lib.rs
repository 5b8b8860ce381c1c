pub mod errors;
pub mod types;

pub use errors::{CloudError, ConfigError, MorphError};
pub use types::Rgb;

pub type Result<T> = std::result::Result<T, CloudError>;
