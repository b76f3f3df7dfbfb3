/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_cors")]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsSettings {
    /// Allow any origin, method and header
    #[serde(default = "default_permissive")]
    pub permissive: bool,
}

impl StorageSettings {
    /// Database file path, or `None` for in-memory databases
    pub fn database_path(&self) -> Option<&Path> {
        let path = self
            .database_url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        let path = path.split('?').next().unwrap_or_default();

        if path.is_empty() || path.starts_with(':') {
            return None;
        }
        Some(Path::new(path))
    }

    /// Directory that must exist before the database file can be created
    pub fn database_dir(&self) -> Option<PathBuf> {
        self.database_path()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// Database name shown by diagnostics: the file stem of the URL
    pub fn database_name(&self) -> Option<String> {
        self.database_path()?
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file and the environment.
    ///
    /// Environment variables use the `VIBE_` prefix and `__` between
    /// sections, e.g. `VIBE_SERVER__PORT=9000`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("VIBE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set VIBE_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ServerError::Config("Port must be non-zero".to_string()));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/vibe.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_cors() -> CorsSettings {
    CorsSettings {
        permissive: default_permissive(),
    }
}

fn default_permissive() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            cors: default_cors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.max_connections, 5);
        assert!(config.cors.permissive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let mut config = ServerConfig::default();
        config.storage.database_url = "  ".to_string();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn database_name_is_file_stem() {
        let mut storage = default_storage();
        assert_eq!(storage.database_name().as_deref(), Some("vibe"));

        storage.database_url = "sqlite:///var/lib/music/catalog.db?mode=rwc".to_string();
        assert_eq!(storage.database_name().as_deref(), Some("catalog"));

        storage.database_url = "sqlite::memory:".to_string();
        assert_eq!(storage.database_name(), None);
    }

    #[test]
    fn database_dir_is_parent_of_file() {
        let mut storage = default_storage();
        assert_eq!(storage.database_dir(), Some(PathBuf::from("./data")));

        storage.database_url = "sqlite://vibe.db".to_string();
        assert_eq!(storage.database_dir(), None);

        storage.database_url = "sqlite::memory:".to_string();
        assert_eq!(storage.database_dir(), None);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9100\n\n[storage]\ndatabase_url = \"sqlite://./test.db\""
        )
        .unwrap();

        let config = ServerConfig::load_from(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.database_url, "sqlite://./test.db");
        assert_eq!(config.storage.max_connections, 5);
    }
}
