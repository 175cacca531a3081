use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default UTC offset in hours (Indochina time), the civil timezone the
/// traditional calendar is computed in.
pub const DEFAULT_TIMEZONE: f64 = 7.0;

/// Top-level amlich configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AmlichConfig {
    /// UTC offset in hours applied to all astronomical evaluations.
    #[serde(default)]
    pub timezone: Option<f64>,
}

impl AmlichConfig {
    /// Loads configuration from `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Resolves the effective timezone: CLI flag over config file over
    /// the built-in default.
    pub fn resolve_timezone(&self, cli_override: Option<f64>) -> f64 {
        cli_override
            .or(self.timezone)
            .unwrap_or(DEFAULT_TIMEZONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let config = AmlichConfig::load(Path::new("no-such-amlich.toml")).unwrap();
        assert!(config.timezone.is_none());
        assert_eq!(config.resolve_timezone(None), DEFAULT_TIMEZONE);
    }

    #[test]
    fn cli_overrides_config() {
        let config = AmlichConfig {
            timezone: Some(8.0),
        };
        assert_eq!(config.resolve_timezone(None), 8.0);
        assert_eq!(config.resolve_timezone(Some(-5.0)), -5.0);
    }

    #[test]
    fn parses_timezone() {
        let config: AmlichConfig = toml::from_str("timezone = 9.5").unwrap();
        assert_eq!(config.timezone, Some(9.5));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<AmlichConfig>("time_zone = 7.0").is_err());
    }
}
