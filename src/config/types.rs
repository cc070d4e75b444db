use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 設定檔名稱
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 使用者設定目錄下的子資料夾名稱
pub const CONFIG_DIR_NAME: &str = "rename-sony-photos";

pub const DEFAULT_TARGET_PATH: &str = "/Volumes/1-1";
pub const DEFAULT_BACKUP_PATH: &str = "/Volumes/1-2";
pub const DEFAULT_DESTINATION_PATH: &str = "/Volumes/a7iii";

/// 應用程式設定
///
/// 檔案中缺少的欄位會使用預設值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 主要 SD 卡的掛載路徑
    pub target_path: PathBuf,
    /// 備份 SD 卡的掛載路徑
    pub backup_path: PathBuf,
    /// 照片最終存放位置
    pub destination_path: PathBuf,
    /// 暫存資料夾
    pub tmp_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_default();
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            backup_path: PathBuf::from(DEFAULT_BACKUP_PATH),
            destination_path: PathBuf::from(DEFAULT_DESTINATION_PATH),
            tmp_dir: home_dir.join("Pictures").join("tmp"),
        }
    }
}
