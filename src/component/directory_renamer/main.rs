//! 批次重新命名日期目錄

use super::date_codec::{convert_dir_name, is_valid_date_dir};
use crate::error::{OrganizeError, Result};
use chrono::{Datelike, Local};
use log::{info, warn};
use std::fs::{self, FileType};
use std::io;
use std::path::Path;

/// 單一目錄的處理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: String, to: String },
    /// 名稱不是相機格式，維持原狀
    Skipped { name: String },
    Failed { name: String, reason: String },
}

/// 一次批次重新命名的結果，依目錄名稱排序
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameReport {
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    #[must_use]
    pub fn renamed_count(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed { .. }))
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Skipped { .. }))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}

/// 由目前的系統年份取得世紀前綴（例如 2025 年為 `"20"`）
#[must_use]
pub fn current_century_prefix() -> String {
    Local::now().year().to_string().chars().take(2).collect()
}

/// 將 `path` 底下相機格式的子目錄就地重新命名為 `YYYY-MM-DD`
///
/// 整批使用同一個世紀前綴。單一目錄失敗只會記錄下來，不會中斷其他目錄；
/// 只有無法讀取 `path` 本身時才回傳錯誤。
pub fn rename_directories(path: &Path, century_prefix: &str) -> Result<RenameReport> {
    // 先讀完整份清單再改名，避免改名後的項目又被列出
    let mut dir_names: Vec<String> = fs::read_dir(path)
        .map_err(|e| OrganizeError::DirectoryRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Error reading entry in {}: {e}", path.display());
                None
            }
        })
        .filter(|entry| is_directory_entry(&entry.path(), entry.file_type()))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    dir_names.sort();

    let mut report = RenameReport::default();

    for dir_name in dir_names {
        if !is_valid_date_dir(&dir_name) {
            info!("Skipping directory (invalid format): {dir_name}");
            report.outcomes.push(RenameOutcome::Skipped { name: dir_name });
            continue;
        }

        let outcome = match rename_one(path, &dir_name, century_prefix) {
            Ok(new_name) => {
                info!("Renamed: {dir_name} -> {new_name}");
                RenameOutcome::Renamed {
                    from: dir_name,
                    to: new_name,
                }
            }
            Err(e) => {
                warn!("Error renaming {dir_name}: {e}");
                RenameOutcome::Failed {
                    name: dir_name,
                    reason: e.to_string(),
                }
            }
        };
        report.outcomes.push(outcome);
    }

    Ok(report)
}

/// 讀不到檔案類型的項目記錄後略過
fn is_directory_entry(path: &Path, file_type: io::Result<FileType>) -> bool {
    match file_type {
        Ok(file_type) => file_type.is_dir(),
        Err(e) => {
            warn!("Skipping {} (cannot read file type): {e}", path.display());
            false
        }
    }
}

fn rename_one(parent: &Path, dir_name: &str, century_prefix: &str) -> Result<String> {
    let new_name = convert_dir_name(dir_name, century_prefix)?;
    let from = parent.join(dir_name);
    let to = parent.join(&new_name);

    fs::rename(&from, &to).map_err(|e| OrganizeError::Rename { from, to, source: e })?;
    Ok(new_name)
}
