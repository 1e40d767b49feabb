//! Runtime configuration for the review event store.

use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "db.sqlite3";
pub const DB_PATH_ENV: &str = "REVIEW_EVENTS_DB";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl Config {
    /// Reads `REVIEW_EVENTS_DB`, falling back to the defaults.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(DB_PATH_ENV).ok())
    }

    fn from_env_value(db_path: Option<String>) -> Self {
        match db_path {
            Some(path) if !path.trim().is_empty() => Self {
                db_path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }

    /// A path given on the command line wins over the environment.
    pub fn with_db_path(mut self, db_path: Option<PathBuf>) -> Self {
        if let Some(path) = db_path {
            self.db_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path() {
        assert_eq!(Config::default().db_path, PathBuf::from("db.sqlite3"));
    }

    #[test]
    fn test_env_value_overrides_default() {
        let config = Config::from_env_value(Some("reviews.db".to_string()));
        assert_eq!(config.db_path, PathBuf::from("reviews.db"));
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        let blank = Config::from_env_value(Some("  ".to_string()));
        assert_eq!(blank, Config::default());
        assert_eq!(Config::from_env_value(None), Config::default());
    }

    #[test]
    fn test_flag_wins_over_env() {
        let config = Config::from_env_value(Some("env.db".to_string()))
            .with_db_path(Some(PathBuf::from("flag.db")));
        assert_eq!(config.db_path, PathBuf::from("flag.db"));

        let config = Config::from_env_value(Some("env.db".to_string())).with_db_path(None);
        assert_eq!(config.db_path, PathBuf::from("env.db"));
    }
}
