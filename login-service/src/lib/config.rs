use std::env;

use auth::Scheme;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub auth: AuthConfig,
}

/// Authentication section.
///
/// The scheme has no default: leaving it out is a configuration error.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub scheme: Scheme,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SCHEME, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SCHEME=md5 overrides auth.scheme
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_parses_plain_scheme() {
        let config = parse("[auth]\nscheme = \"plain\"").expect("Failed to parse config");
        assert_eq!(config.auth.scheme, Scheme::Plain);
    }

    #[test]
    fn test_parses_md5_scheme() {
        let config = parse("[auth]\nscheme = \"md5\"").expect("Failed to parse config");
        assert_eq!(config.auth.scheme, Scheme::Md5);
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        assert!(parse("[auth]\nscheme = \"sha512\"").is_err());
    }

    #[test]
    fn test_missing_scheme_is_rejected() {
        assert!(parse("[auth]\n").is_err());
        assert!(parse("").is_err());
    }
}
