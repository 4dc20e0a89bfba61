use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "clockdrill";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|pd| pd.config_dir().join("preferences.json"))
    }

    pub fn db_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join("history.db"))
        } else {
            ProjectDirs::from("", "", APP_NAME)
                .map(|proj_dirs| proj_dirs.data_local_dir().join("history.db"))
        }
    }

    /// Both files inside one directory, e.g. from `--data-dir`.
    pub fn in_dir(dir: &Path) -> (PathBuf, PathBuf) {
        (dir.join("preferences.json"), dir.join("history.db"))
    }
}
