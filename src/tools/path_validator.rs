use crate::error::{OrganizeError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 確認路徑存在且為資料夾
pub fn check_directory_exists(path: &Path) -> Result<()> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(OrganizeError::NotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(OrganizeError::Stat {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    if !metadata.is_dir() {
        return Err(OrganizeError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| OrganizeError::CreateDirectory {
        path: path.to_path_buf(),
        source: e,
    })
}
