use crate::core::spec_parser::EventDefaults;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_address")]
    pub default_address: String,
    #[serde(default = "default_capacity")]
    pub default_capacity: u32,
    /// Start time of a defaulted event, "HH:MM".
    #[serde(default = "default_time")]
    pub default_time: String,
    #[serde(default = "default_title_template")]
    pub title_template: String,
}

fn default_address() -> String {
    EventDefaults::default().address
}
fn default_capacity() -> u32 {
    21
}
fn default_time() -> String {
    "19:00".to_string()
}
fn default_title_template() -> String {
    EventDefaults::default().title_template
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            default_address: default_address(),
            default_capacity: default_capacity(),
            default_time: default_time(),
            title_template: default_title_template(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("kickoff")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".kickoff")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kickoff.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("kickoff.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Defaults handed to the specification parser.
    pub fn event_defaults(&self) -> AppResult<EventDefaults> {
        let time = parse_time(&self.default_time).ok_or_else(|| {
            AppError::Config(format!("default_time '{}' is not HH:MM", self.default_time))
        })?;
        if self.default_capacity == 0 {
            return Err(AppError::Config("default_capacity must be at least 1".into()));
        }

        Ok(EventDefaults {
            address: self.default_address.clone(),
            capacity: self.default_capacity,
            time,
            title_template: self.title_template.clone(),
        })
    }

    /// Initialize configuration file and database location.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Self::with_database(db_path.to_string_lossy().to_string());

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }
}
