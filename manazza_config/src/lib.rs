mod config;
mod environment;
mod loader;

pub use config::Config;
pub use environment::Environment;
pub use loader::{parse_config, parse_config_str};

pub const SOFTWARE_NAME: &str = "Manazza";
pub const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct ConfigError(&'static str);
