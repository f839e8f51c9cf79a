//! Locations of gleaner's per-user files

use std::path::PathBuf;

/// Directory name under the home directory
const APP_DIR: &str = ".gleaner";

/// Resolves the per-user config and history files
#[derive(Debug, Clone)]
pub struct Paths {
    pub app_dir: PathBuf,
}

impl Paths {
    /// Resolve paths under the current user's home directory
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self::with_root(home.join(APP_DIR)))
    }

    /// Use an explicit application directory
    pub fn with_root(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
        }
    }

    /// Default config.json path
    pub fn config_file(&self) -> PathBuf {
        self.app_dir.join("config.json")
    }

    /// Search history JSONL path
    pub fn history_file(&self) -> PathBuf {
        self.app_dir.join("history.jsonl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_new() {
        let paths = Paths::new().unwrap();
        assert!(paths.app_dir.ends_with(".gleaner"));
    }

    #[test]
    fn test_files_live_under_app_dir() {
        let paths = Paths::with_root("/tmp/gleaner-test");
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/gleaner-test/config.json")
        );
        assert!(paths.history_file().ends_with("history.jsonl"));
        assert!(paths.history_file().starts_with(&paths.app_dir));
    }
}
