use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub content: ContentConfig,
    #[serde(default)]
    pub sanity: Option<SanityConfig>,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Каталог со сборкой frontend (trunk build)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: default_static_dir(),
        }
    }
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Источник контента
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Headless CMS через HTTP (GROQ)
    Sanity,
    /// Локальная копия схемы в SQLite
    Sqlite,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    pub source: ContentSource,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Только для sqlite: наполнить пустое хранилище демо-данными
    #[serde(default)]
    pub seed_demo: bool,
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_true")]
    pub use_cdn: bool,
    #[serde(default)]
    pub token: Option<String>,
    /// Базовый адрес API вместо `https://<project>.api[cdn].sanity.io`
    #[serde(default)]
    pub api_host: Option<String>,
}

fn default_api_version() -> String {
    "2024-01-01".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    /// Каталог с файлами изображений для sqlite-хранилища
    pub dir: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            dir: "media".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[content]
source = "sqlite"
request_timeout_secs = 10
seed_demo = true

[database]
path = "target/db/content.db"

[media]
dir = "media"
"#;

impl Config {
    /// Проверка согласованности секций
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.content.source == ContentSource::Sanity {
            let sanity = self
                .sanity
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("[sanity] section is required when content.source = \"sanity\""))?;
            if sanity.project_id.trim().is_empty() || sanity.dataset.trim().is_empty() {
                anyhow::bail!("sanity.project_id and sanity.dataset must not be empty");
            }
        }
        if self.content.request_timeout_secs == 0 {
            anyhow::bail!("content.request_timeout_secs must be greater than zero");
        }
        Ok(())
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Resolve a configured path relative to the executable directory
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content.source, ContentSource::Sqlite);
        assert_eq!(config.database.path, "target/db/content.db");
        assert!(config.sanity.is_none());
    }

    #[test]
    fn test_sanity_section_required() {
        let toml = r#"
            [content]
            source = "sanity"

            [database]
            path = "x.db"
        "#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_sanity_config_defaults() {
        let toml = r#"
            [content]
            source = "sanity"

            [sanity]
            project_id = "abc123"
            dataset = "production"

            [database]
            path = "x.db"
        "#;
        let config = parse_config(toml).unwrap();
        let sanity = config.sanity.unwrap();
        assert_eq!(sanity.api_version, "2024-01-01");
        assert!(sanity.use_cdn);
        assert_eq!(config.content.request_timeout_secs, 10);
        assert_eq!(config.media.dir, "media");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let toml = r#"
            [content]
            source = "sqlite"
            request_timeout_secs = 0

            [database]
            path = "x.db"
        "#;
        assert!(parse_config(toml).is_err());
    }
}
