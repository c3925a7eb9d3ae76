use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_meditation_goal")]
    pub meditation_goal_minutes: f64,
    #[serde(default = "default_hydration_goal")]
    pub hydration_goal_oz: f64,
    #[serde(default = "default_cardio_goal")]
    pub cardio_goal_minutes: f64,
    #[serde(default = "default_fasting_target")]
    pub fasting_target_hours: u32,
    #[serde(default = "default_workout_goals")]
    pub workout_goals: BTreeMap<String, u32>,
    #[serde(default = "default_measurement_unit")]
    pub measurement_unit: String,
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_meditation_goal() -> f64 {
    10.0
}
fn default_hydration_goal() -> f64 {
    64.0
}
fn default_cardio_goal() -> f64 {
    30.0
}
fn default_fasting_target() -> u32 {
    16
}
fn default_workout_goals() -> BTreeMap<String, u32> {
    [("pushups", 50), ("situps", 50), ("squats", 50)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
fn default_measurement_unit() -> String {
    "in".to_string()
}
fn default_recent_activity_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(default_database())
    }
}

impl Config {
    pub fn with_database(database: String) -> Self {
        Self {
            database,
            meditation_goal_minutes: default_meditation_goal(),
            hydration_goal_oz: default_hydration_goal(),
            cardio_goal_minutes: default_cardio_goal(),
            fasting_target_hours: default_fasting_target(),
            workout_goals: default_workout_goals(),
            measurement_unit: default_measurement_unit(),
            recent_activity_limit: default_recent_activity_limit(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fittrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".fittrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fittrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fittrack.sqlite")
    }

    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from file, or return defaults if missing or malformed.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Malformed configuration file {} ({}), using defaults",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Cannot read configuration file {} ({}), using defaults",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Write the configuration file.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
    }

    /// Initialize configuration and database files. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join("fittrack.sqlite"),
        };

        if !is_test {
            let config = Config::with_database(db_path.to_string_lossy().to_string());
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    /// Goal for `exercise`, if one is configured.
    pub fn workout_goal(&self, exercise: &str) -> Option<u32> {
        self.workout_goals.get(exercise).copied()
    }
}
