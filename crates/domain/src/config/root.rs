use super::acl::AclConfig;
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub acl: AclConfig,
}

/// Values supplied on the command line that win over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `path` (or defaults when `None`) and apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Structural checks that do not need the filesystem or a filter build.
    ///
    /// A rule set without policies is valid: it claims its zones and lets
    /// every query through.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        for (set_idx, rule_set) in self.acl.rule_sets.iter().enumerate() {
            if rule_set.zones.is_empty() && self.acl.zones.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "rule set {} has no zones and there are no enclosing zones",
                    set_idx
                )));
            }
            for (policy_idx, policy) in rule_set.policies.iter().enumerate() {
                match (policy.net.is_empty(), policy.file.is_some()) {
                    (true, false) => {
                        return Err(ConfigError::Validation(format!(
                            "policy {}/{} names no network",
                            set_idx, policy_idx
                        )))
                    }
                    (false, true) => {
                        return Err(ConfigError::Validation(format!(
                            "policy {}/{} sets both 'net' and 'file'",
                            set_idx, policy_idx
                        )))
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
