use std::str::FromStr;

use serde::Deserialize;

use super::ConfigError;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let environment = match value {
            "development" => Environment::Development,
            "production" => Environment::Production,
            _ => return Err(ConfigError("invalid environment type")),
        };
        Ok(environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_str() {
        assert_eq!(
            Environment::from_str("development").unwrap(),
            Environment::Development,
        );
        assert_eq!(
            Environment::from_str("production").unwrap(),
            Environment::Production,
        );
        let error = Environment::from_str("staging").err().unwrap();
        assert_eq!(error.to_string(), "invalid environment type");
    }
}
