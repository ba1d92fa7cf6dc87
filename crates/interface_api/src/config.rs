//! API configuration

use config::{Config, ConfigError, Environment};

use core_kernel::{CoreError, Currency};

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Currency claimed amounts are displayed in
    pub currency: Currency,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            currency: Currency::INR,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` when a variable is set but cannot be
    /// parsed, and `CoreError::Money` for an unknown `API_CURRENCY`
    pub fn from_env() -> Result<Self, CoreError> {
        let source = Config::builder()
            .add_source(Environment::with_prefix("API"))
            .build()
            .map_err(|err| CoreError::configuration(err.to_string()))?;
        Self::from_source(&source)
    }

    /// Reads each setting from an already built source
    ///
    /// Keys that are absent keep their default value; the others must parse.
    pub fn from_source(source: &Config) -> Result<Self, CoreError> {
        let defaults = Self::default();

        let host = optional(source.get_string("host"))?.unwrap_or(defaults.host);
        let log_level = optional(source.get_string("log_level"))?.unwrap_or(defaults.log_level);

        let port = match optional(source.get_int("port"))? {
            Some(port) => u16::try_from(port).map_err(|_| {
                CoreError::configuration(format!("API_PORT {} is not a valid port", port))
            })?,
            None => defaults.port,
        };

        let currency = match optional(source.get_string("currency"))? {
            Some(code) => code.parse::<Currency>()?,
            None => defaults.currency,
        };

        Ok(Self {
            host,
            port,
            log_level,
            currency,
        })
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a missing key to `None` and any other lookup failure to a
/// configuration error
fn optional<T>(value: Result<T, ConfigError>) -> Result<Option<T>, CoreError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(err) => Err(CoreError::configuration(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::MoneyError;

    fn source(pairs: &[(&str, &str)]) -> Config {
        pairs
            .iter()
            .fold(Config::builder(), |builder, (key, value)| {
                builder.set_override(*key, *value).unwrap()
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.currency, Currency::INR);
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = ApiConfig::from_source(&source(&[])).unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency, Currency::INR);
    }

    #[test]
    fn test_set_keys_override_only_themselves() {
        let config =
            ApiConfig::from_source(&source(&[("port", "3000"), ("currency", "usd")])).unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency, Currency::USD);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let err = ApiConfig::from_source(&source(&[("currency", "XYZ")])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Money(MoneyError::UnknownCurrency(ref code)) if code == "XYZ"
        ));
    }

    #[test]
    fn test_unparsable_port_is_rejected() {
        let err = ApiConfig::from_source(&source(&[("port", "eighty")])).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn test_out_of_range_port_is_rejected() {
        let err = ApiConfig::from_source(&source(&[("port", "70000")])).unwrap_err();
        assert!(matches!(err, CoreError::Configuration(ref msg) if msg.contains("70000")));
    }
}
