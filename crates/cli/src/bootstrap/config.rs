use dnsacl_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: &str, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(Some(config_path), cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once logging is up, since the level itself comes from the file.
pub fn log_config_summary(config_path: &str, config: &Config) {
    info!(
        config_file = config_path,
        zones = ?config.acl.zones,
        default_backend = %config.acl.default_backend,
        rule_sets = config.acl.rule_sets.len(),
        "Configuration loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_file_with_override() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
            [logging]
            level = "info"

            [[acl.rule_sets]]
            zones = ["example.org"]
            [[acl.rule_sets.policies]]
            action = "block"
            net = ["PRIVATE"]
            "#,
        )
        .unwrap();

        let config = load_config(
            file.path().to_str().unwrap(),
            CliOverrides {
                log_level: Some("debug".to_string()),
            },
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.acl.rule_sets.len(), 1);
    }

    #[test]
    fn test_load_config_rejects_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[logging]\nlevel = \"loud\"\n").unwrap();

        assert!(load_config(file.path().to_str().unwrap(), CliOverrides::default()).is_err());
    }
}
