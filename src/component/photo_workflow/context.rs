use crate::config::Config;
use std::path::{Path, PathBuf};

/// 相機存放照片的資料夾名稱
pub const DCIM_DIR_NAME: &str = "DCIM";

/// 一次工作流程執行所需的路徑與模式，執行期間不會被修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowContext {
    pub target_path: PathBuf,
    pub backup_path: PathBuf,
    pub destination_path: PathBuf,
    pub tmp_dir: PathBuf,
    pub dry_run: bool,
}

impl WorkflowContext {
    #[must_use]
    pub fn from_config(config: &Config, dry_run: bool) -> Self {
        Self {
            target_path: config.target_path.clone(),
            backup_path: config.backup_path.clone(),
            destination_path: config.destination_path.clone(),
            tmp_dir: config.tmp_dir.clone(),
            dry_run,
        }
    }

    #[must_use]
    pub fn source_dcim(&self) -> PathBuf {
        self.target_path.join(DCIM_DIR_NAME)
    }

    #[must_use]
    pub fn backup_dcim(&self) -> PathBuf {
        self.backup_path.join(DCIM_DIR_NAME)
    }
}

/// 由掛載路徑取得磁碟區名稱，例如 `/Volumes/1-1` 為 `1-1`
#[must_use]
pub fn volume_name(mount_path: &Path) -> String {
    mount_path
        .file_name()
        .unwrap_or(mount_path.as_os_str())
        .to_string_lossy()
        .into_owned()
}
