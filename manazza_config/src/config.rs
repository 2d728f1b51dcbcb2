use std::net::Ipv6Addr;
use std::path::PathBuf;

use log::{Level as LogLevel};
use serde::Deserialize;

use super::environment::Environment;
use super::ConfigError;

fn default_log_level() -> LogLevel { LogLevel::Info }

const fn default_analytics_enabled() -> bool { true }
const fn default_page_cache_ttl() -> u64 { 60 * 60 } // 1 hour
const fn default_page_cache_size() -> usize { 100 }

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    // Properties auto-populated from the environment
    #[serde(skip)]
    pub environment: Environment,

    #[serde(skip)]
    pub config_path: String,

    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,

    pub http_host: Option<String>,
    pub http_port: Option<u32>,
    // Overrides http_host and http_port
    pub http_socket: Option<String>,

    // Directory with page fragments (<name>.html)
    pub pages_dir: PathBuf,
    pub static_dir: Option<PathBuf>,

    #[serde(default = "default_analytics_enabled")]
    pub analytics_enabled: bool,
    // Overrides collector script location.
    // Default path must be proxied to the collector by the hosting platform
    pub analytics_script_src: Option<String>,

    // Rendered page cache
    #[serde(default = "default_page_cache_ttl")]
    pub page_cache_ttl: u64,
    #[serde(default = "default_page_cache_size")]
    pub page_cache_size: usize,
}

impl Config {
    pub fn try_http_socket(&self) -> Result<String, ConfigError> {
        let http_socket = match (&self.http_socket, &self.http_host, self.http_port) {
            (Some(http_socket), _, _) => http_socket.clone(),
            (None, Some(http_host), Some(http_port)) => {
                if http_host.parse::<Ipv6Addr>().is_ok() {
                    format!("[{http_host}]:{http_port}")
                } else {
                    format!("{http_host}:{http_port}")
                }
            },
            _ => return Err(ConfigError(
                "either http_socket or http_host and http_port must be specified",
            )),
        };
        Ok(http_socket)
    }

    pub fn http_socket(&self) -> String {
        self.try_http_socket().expect("HTTP socket should be already validated")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.try_http_socket()?;
        if !self.pages_dir.is_dir() {
            return Err(ConfigError("pages directory does not exist"));
        };
        if let Some(ref static_dir) = self.static_dir {
            if !static_dir.is_dir() {
                return Err(ConfigError("static directory does not exist"));
            };
        };
        if let Some(ref script_src) = self.analytics_script_src {
            if !script_src.starts_with('/') && !script_src.starts_with("https://") {
                return Err(ConfigError(
                    "analytics_script_src must be a path or HTTPS URL",
                ));
            };
        };
        if self.page_cache_size == 0 {
            return Err(ConfigError("page_cache_size must be greater than 0"));
        };
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Config {
    pub fn for_test(pages_dir: &std::path::Path) -> Self {
        Self {
            environment: Environment::Development,
            config_path: "config.yaml".to_string(),
            log_level: LogLevel::Debug,
            http_host: Some("127.0.0.1".to_string()),
            http_port: Some(8380),
            http_socket: None,
            pages_dir: pages_dir.to_path_buf(),
            static_dir: None,
            analytics_enabled: true,
            analytics_script_src: None,
            page_cache_ttl: default_page_cache_ttl(),
            page_cache_size: default_page_cache_size(),
        }
    }
}
