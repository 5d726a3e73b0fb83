use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Board preselected by `add` when `--board` is not given.
    /// Empty means "first entry of the catalog".
    #[serde(default)]
    pub default_board: String,
    #[serde(default = "default_show_glyphs")]
    pub show_glyphs: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_show_glyphs() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_board: String::new(),
            show_glyphs: default_show_glyphs(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("surfsync")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".surfsync")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("surfsync.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("surfsync.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A broken config file is reported and replaced by defaults rather
    /// than aborting: every command must stay usable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        warning(format!("Unreadable config file ({}), using defaults.", e));
                        Config::default()
                    }
                },
                Err(e) => {
                    warning(format!("Failed to read config file ({}), using defaults.", e));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Write the configuration back to its standard location.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::other(format!("config encode: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided (~ expanded, otherwise kept as given so
        // later invocations resolve it the same way) or the standard
        // location.
        let db_path = match custom_name {
            Some(name) => expand_tilde(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
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
