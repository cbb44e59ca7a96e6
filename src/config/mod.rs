use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database.
    pub database: String,
    /// Path of the JSON alias document (canonical name -> variants).
    pub aliases: String,
    /// Event type the participant leaderboard is computed over.
    #[serde(default = "default_leaderboard_type")]
    pub leaderboard_type: String,
    /// Size of the standalone `top` leaderboard.
    #[serde(default = "default_leaderboard_limit")]
    pub leaderboard_limit: u32,
    /// Cap of the per-family recent-events lists on the dashboard.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
}

fn default_leaderboard_type() -> String {
    "cum".to_string()
}
fn default_leaderboard_limit() -> u32 {
    3
}
fn default_recent_limit() -> u32 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            aliases: Self::aliases_file().to_string_lossy().to_string(),
            leaderboard_type: default_leaderboard_type(),
            leaderboard_limit: default_leaderboard_limit(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lifestats")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".lifestats")
        }
    }

    /// Return the full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("lifestats.conf")
    }

    /// Return the full path of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("lifestats.sqlite")
    }

    /// Return the full path of the alias document.
    pub fn aliases_file() -> PathBuf {
        Self::config_dir().join("name_aliases.json")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
