/// Listing core configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | true in production, else false | JSON console output |
/// | LOG_DIR | (unset) | Enables rotating file logs |
/// | SUPERADMIN_IDS | (empty) | Comma separated actor ids seeded as superadmins |
///
/// # Example
///
/// ```ignore
/// ENVIRONMENT=production LOG_DIR=/var/log/listing SUPERADMIN_IDS=u1,u9 ./host
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Runtime environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    /// Directory for rotating log files; console only when `None`
    pub log_dir: Option<String>,
    /// Initial elevated-privilege set for the in-memory registry
    pub superadmin_ids: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let is_production = environment == "production";

        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(is_production),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            superadmin_ids: lookup("SUPERADMIN_IDS")
                .map(|ids| parse_id_list(&ids))
                .unwrap_or_default(),
            environment,
        }
    }

    /// Override the log directory, mostly for tests
    pub fn with_log_dir(mut self, log_dir: impl Into<String>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(config.log_dir.is_none());
        assert!(config.superadmin_ids.is_empty());
        assert!(config.is_development());
    }

    #[test]
    fn test_production_defaults_to_json_logs() {
        let config = config_from(&[("ENVIRONMENT", "production")]);
        assert!(config.is_production());
        assert!(config.log_json);

        let config = config_from(&[("ENVIRONMENT", "production"), ("LOG_JSON", "false")]);
        assert!(!config.log_json);
    }

    #[test]
    fn test_superadmin_ids_parsing() {
        let config = config_from(&[("SUPERADMIN_IDS", " u1, ,u9,")]);
        assert_eq!(config.superadmin_ids, vec!["u1", "u9"]);
    }

    #[test]
    fn test_blank_log_dir_is_ignored() {
        assert!(config_from(&[("LOG_DIR", "  ")]).log_dir.is_none());
        let config = Config::default().with_log_dir("/tmp/logs");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/logs"));
    }
}
