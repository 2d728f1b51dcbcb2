use log::Level;

use manazza_config::{
    parse_config,
    Config,
    Environment,
    SOFTWARE_NAME,
    SOFTWARE_VERSION,
};
use manazza_layout::{
    metadata::SITE_METADATA,
    Analytics,
    RootLayout,
};

use crate::logger::configure_logger;

pub fn initialize_app(
    override_log_level: Option<Level>,
) -> Config {
    let (config, config_warnings) = parse_config();
    let log_level = override_log_level.unwrap_or(config.log_level);
    configure_logger(log_level);
    log::info!(
        "{} v{}, environment = '{:?}'",
        SOFTWARE_NAME,
        SOFTWARE_VERSION,
        config.environment,
    );
    log::info!("config loaded from {}", config.config_path);
    for warning in config_warnings {
        log::warn!("{}", warning);
    };
    config
}

pub fn analytics_for(config: &Config) -> Option<Analytics> {
    if !config.analytics_enabled {
        return None;
    };
    let analytics = match (&config.analytics_script_src, &config.environment) {
        (Some(script_src), _) => Analytics::with_script_src(script_src),
        (None, Environment::Development) => Analytics::debug(),
        (None, Environment::Production) => Analytics::production(),
    };
    Some(analytics)
}

// Panics on errors
pub fn prepare_layout(config: &Config) -> RootLayout {
    if let Err(error) = SITE_METADATA.validate() {
        panic!("invalid page metadata: {error}");
    };
    let analytics = analytics_for(config);
    match analytics {
        Some(ref analytics) => log::info!("analytics collector: {}", analytics.script_src),
        None => log::info!("analytics disabled"),
    };
    RootLayout::site(analytics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_for() {
        let config = Config::for_test(&std::env::temp_dir());
        assert_eq!(analytics_for(&config), Some(Analytics::debug()));

        let config = Config {
            environment: Environment::Production,
            ..Config::for_test(&std::env::temp_dir())
        };
        assert_eq!(analytics_for(&config), Some(Analytics::production()));

        let config = Config {
            analytics_enabled: false,
            ..Config::for_test(&std::env::temp_dir())
        };
        assert_eq!(analytics_for(&config), None);
    }

    #[test]
    fn test_analytics_for_custom_script_src() {
        let config = Config {
            environment: Environment::Production,
            analytics_script_src: Some("https://cdn.example.org/insights.js".to_string()),
            ..Config::for_test(&std::env::temp_dir())
        };
        let analytics = analytics_for(&config).unwrap();
        assert_eq!(analytics.script_src, "https://cdn.example.org/insights.js");
        assert_eq!(analytics.origin(), Some("https://cdn.example.org"));
    }

    #[test]
    fn test_prepare_layout() {
        let config = Config::for_test(&std::env::temp_dir());
        let layout = prepare_layout(&config);
        assert_eq!(layout.metadata().canonical, "https://www.tomasmanazza.com/");
        assert_eq!(layout.analytics(), Some(&Analytics::debug()));
    }
}
