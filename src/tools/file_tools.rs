//! 遞迴複製與清空資料夾

use crate::error::{OrganizeError, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 將 `src` 整個目錄樹複製到 `dst`
///
/// 目標資料夾不存在時會自動建立，檔案權限一併保留。
/// 任何讀取、建立或複製失敗都會中止整個操作，已複製的部分不會被清除。
pub fn copy_tree(src: &Path, dst: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        info!(
            "[DRY RUN] Would copy directory: {} -> {}",
            src.display(),
            dst.display()
        );
        return Ok(());
    }

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            OrganizeError::Copy {
                path,
                source: e.into(),
            }
        })?;

        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| OrganizeError::CreateDirectory {
                path: target.clone(),
                source: e,
            })?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// 複製單一檔案（`fs::copy` 會一併帶上權限位元）
fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|e| OrganizeError::Copy {
        path: src.to_path_buf(),
        source: e,
    })?;
    debug!("Copied: {} -> {}", src.display(), dst.display());
    Ok(())
}

/// 刪除資料夾內所有內容，但保留資料夾本身
pub fn remove_contents(dir: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        info!("[DRY RUN] Would remove contents of: {}", dir.display());
        return Ok(());
    }

    let entries = fs::read_dir(dir).map_err(|e| OrganizeError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| OrganizeError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        // 不跟隨符號連結，連結本身當作檔案刪除
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
        let removed = if is_dir {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| OrganizeError::Delete {
            path: path.clone(),
            source: e,
        })?;
        debug!("Removed: {}", path.display());
    }

    Ok(())
}
