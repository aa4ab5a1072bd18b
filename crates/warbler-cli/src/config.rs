use serde::{Deserialize, Serialize};
use warbler_storage::StoreConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: StoreConfig,
}

impl AppConfig {
    /// Reads the TOML file at `path`, then lets `DATABASE_URL` override the
    /// configured database.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        Self::load_with_database_url(path, std::env::var("DATABASE_URL").ok())
    }

    /// Same as [`AppConfig::load`] with the `DATABASE_URL` value passed in.
    fn load_with_database_url(path: &str, database_url: Option<String>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path, e))?;
        let mut config = Self::parse(&content)?;
        config.database.apply_database_url(database_url);
        Ok(config)
    }

    fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warbler_common::DEFAULT_IMAGE_URL;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.database.url, "sqlite://data/warbler.db?mode=rwc");
        assert_eq!(config.database.bcrypt_cost, bcrypt_default_cost());
        assert_eq!(config.database.default_image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn database_section_overrides_defaults() {
        let config = AppConfig::parse(
            r#"
            [database]
            url = "postgres://localhost/warbler_test"
            bcrypt_cost = 6
            default_image_url = "/static/images/anon.png"
            "#,
        )
        .unwrap();
        assert_eq!(config.database.url, "postgres://localhost/warbler_test");
        assert_eq!(config.database.bcrypt_cost, 6);
        assert_eq!(config.database.default_image_url, "/static/images/anon.png");
        assert!(!config.database.is_sqlite());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warbler.toml");
        std::fs::write(&path, "[database]\nbcrypt_cost = 5\n").unwrap();

        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.database.bcrypt_cost, 5);
    }

    #[test]
    fn database_url_takes_precedence_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warbler.toml");
        std::fs::write(&path, "[database]\nurl = \"sqlite://dev.db?mode=rwc\"\n").unwrap();

        let config = AppConfig::load_with_database_url(
            path.to_str().unwrap(),
            Some("sqlite://warbler_test.db?mode=rwc".to_string()),
        )
        .unwrap();
        assert_eq!(config.database.url, "sqlite://warbler_test.db?mode=rwc");
    }

    #[test]
    fn empty_database_url_keeps_config_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warbler.toml");
        std::fs::write(&path, "[database]\nurl = \"sqlite://dev.db?mode=rwc\"\n").unwrap();

        let config =
            AppConfig::load_with_database_url(path.to_str().unwrap(), Some(String::new())).unwrap();
        assert_eq!(config.database.url, "sqlite://dev.db?mode=rwc");
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = AppConfig::load("/nonexistent/warbler.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    fn bcrypt_default_cost() -> u32 {
        StoreConfig::default().bcrypt_cost
    }
}
