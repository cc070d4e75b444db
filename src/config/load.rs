use crate::config::types::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, Config};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// 尋找設定檔
    ///
    /// 依序檢查：
    /// 1. `./config.json`
    /// 2. `~/.config/rename-sony-photos/config.json`
    #[must_use]
    pub fn find_path() -> Option<PathBuf> {
        Self::find_path_in(Path::new("."), dirs::home_dir().as_deref())
    }

    fn find_path_in(current_dir: &Path, home_dir: Option<&Path>) -> Option<PathBuf> {
        let local = current_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        let user = home_dir?
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME);
        user.is_file().then_some(user)
    }

    /// 讀取找到的設定檔，找不到時使用預設值
    pub fn load_or_default() -> Result<Self> {
        match Self::find_path() {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{
                "target_path": "/custom/target",
                "backup_path": "/custom/backup",
                "destination_path": "/custom/destination",
                "tmp_dir": "/custom/tmp"
            }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.target_path, PathBuf::from("/custom/target"));
        assert_eq!(config.backup_path, PathBuf::from("/custom/backup"));
        assert_eq!(config.destination_path, PathBuf::from("/custom/destination"));
        assert_eq!(config.tmp_dir, PathBuf::from("/custom/tmp"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "target_path": "/Volumes/SD" }"#).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.target_path, PathBuf::from("/Volumes/SD"));
        assert_eq!(config.backup_path, Config::default().backup_path);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not: [valid").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_find_path_prefers_current_directory() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let user_dir = home.path().join(".config").join(CONFIG_DIR_NAME);
        fs::create_dir_all(&user_dir).unwrap();
        fs::write(user_dir.join(CONFIG_FILE_NAME), "{}").unwrap();
        fs::write(cwd.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        let found = Config::find_path_in(cwd.path(), Some(home.path())).unwrap();
        assert_eq!(found, cwd.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_find_path_falls_back_to_user_config() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let user_dir = home.path().join(".config").join(CONFIG_DIR_NAME);
        fs::create_dir_all(&user_dir).unwrap();
        fs::write(user_dir.join(CONFIG_FILE_NAME), "{}").unwrap();

        let found = Config::find_path_in(cwd.path(), Some(home.path())).unwrap();
        assert_eq!(found, user_dir.join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_find_path_none() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        assert!(Config::find_path_in(cwd.path(), Some(home.path())).is_none());
        assert!(Config::find_path_in(cwd.path(), None).is_none());
    }
}
