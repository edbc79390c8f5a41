use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub admin_email: String,
    #[serde(default = "default_garden_cache_ttl")]
    pub garden_cache_ttl_secs: u64,
    #[serde(default = "default_send_confirmations")]
    pub send_confirmations: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_garden_cache_ttl() -> u64 {
    300
}
fn default_send_confirmations() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            admin_email: String::new(),
            garden_cache_ttl_secs: default_garden_cache_ttl(),
            send_confirmations: default_send_confirmations(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rvolunteerlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rvolunteerlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rvolunteerlog.conf")
    }

    /// Return the full path of the SQLite row store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rvolunteerlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Initialize configuration directory, config file and database file.
    ///
    /// Returns the configuration that was written (or would have been, in
    /// test mode).
    pub fn init_all(
        custom_db: Option<&str>,
        admin_email: Option<&str>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };
        config.database = db_path.to_string_lossy().to_string();
        if let Some(email) = admin_email {
            config.admin_email = email.trim().to_string();
        }

        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::Config(format!("cannot create {}: {e}", parent.display())))?;
        }

        Ok(config)
    }
}
