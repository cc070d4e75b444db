//! 複製、重新命名、刪除與退出 SD 卡的完整流程

use super::context::{WorkflowContext, volume_name};
use crate::component::directory_renamer::{
    RenameReport, current_century_prefix, rename_directories,
};
use crate::error::{OrganizeError, Result, WorkflowStage};
use crate::tools::{
    VolumeEjector, check_directory_exists, copy_tree, eject_volume, ensure_directory_exists,
    platform_ejector, remove_contents,
};
use log::{info, warn};
use std::path::Path;

/// 完整流程的執行結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
    /// 暫存資料夾的重新命名結果，dry-run 時為 `None`
    pub rename: Option<RenameReport>,
    /// 退出磁碟區失敗時的警告訊息
    pub eject_warning: Option<String>,
}

/// 備份卡清理的執行結果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub eject_warning: Option<String>,
}

/// SD 卡照片整理流程
pub struct PhotoWorkflow {
    ejector: Box<dyn VolumeEjector>,
    /// 固定的世紀前綴，未設定時在重新命名階段由系統時間取得
    century_prefix: Option<String>,
}

impl Default for PhotoWorkflow {
    fn default() -> Self {
        Self::new(platform_ejector())
    }
}

impl PhotoWorkflow {
    #[must_use]
    pub fn new(ejector: Box<dyn VolumeEjector>) -> Self {
        Self {
            ejector,
            century_prefix: None,
        }
    }

    /// 指定重新命名時使用的世紀前綴
    #[must_use]
    pub fn with_century_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.century_prefix = Some(prefix.into());
        self
    }

    /// 執行完整流程
    ///
    /// 1. 確認目的地與來源 `DCIM` 存在
    /// 2. 建立暫存資料夾並複製 `DCIM` 內容
    /// 3. 在暫存資料夾中重新命名日期目錄
    /// 4. 複製到目的地
    /// 5. 清空來源 `DCIM` 與暫存資料夾
    /// 6. 退出來源磁碟區（失敗只會警告）
    ///
    /// 任何階段失敗都會立即中止，已完成的部分不會復原。
    pub fn run(&self, context: &WorkflowContext) -> Result<WorkflowReport> {
        let dry_run = context.dry_run;
        let tmp_dir = context.tmp_dir.as_path();
        let source_dcim = context.source_dcim();

        check_directory_exists(&context.destination_path)
            .map_err(|e| OrganizeError::DestinationMissing(Box::new(e)))?;
        check_directory_exists(&source_dcim)
            .map_err(|e| OrganizeError::SourceMissing(Box::new(e)))?;

        if dry_run {
            info!(
                "[DRY RUN] Would create temporary directory: {}",
                tmp_dir.display()
            );
        } else {
            ensure_directory_exists(tmp_dir)
                .map_err(|e| e.at_stage(WorkflowStage::CreateStaging))?;
        }

        info!(
            "Copying photos from {} to {}",
            source_dcim.display(),
            tmp_dir.display()
        );
        copy_tree(&source_dcim, tmp_dir, dry_run)
            .map_err(|e| e.at_stage(WorkflowStage::CopyToStaging))?;

        info!("Renaming directories in {}", tmp_dir.display());
        let rename = if dry_run {
            info!("[DRY RUN] Would rename directories in: {}", tmp_dir.display());
            None
        } else {
            Some(self.rename_staging(tmp_dir)?)
        };

        info!(
            "Copying renamed directories to {}",
            context.destination_path.display()
        );
        copy_tree(tmp_dir, &context.destination_path, dry_run)
            .map_err(|e| e.at_stage(WorkflowStage::CopyToDestination))?;

        info!("Deleting photos from source: {}", source_dcim.display());
        remove_contents(&source_dcim, dry_run)
            .map_err(|e| e.at_stage(WorkflowStage::DeleteSource))?;

        info!("Cleaning up temporary directory: {}", tmp_dir.display());
        remove_contents(tmp_dir, dry_run).map_err(|e| e.at_stage(WorkflowStage::CleanStaging))?;

        let eject_warning = self.eject(&context.target_path, dry_run);

        Ok(WorkflowReport {
            rename,
            eject_warning,
        })
    }

    /// 清空備份卡的 `DCIM` 並退出
    pub fn run_backup_cleanup(&self, context: &WorkflowContext) -> Result<CleanupReport> {
        let backup_dcim = context.backup_dcim();

        check_directory_exists(&context.backup_path)
            .map_err(|e| OrganizeError::BackupMissing(Box::new(e)))?;
        check_directory_exists(&backup_dcim)
            .map_err(|e| OrganizeError::BackupSourceMissing(Box::new(e)))?;

        info!("Deleting photos from backup: {}", backup_dcim.display());
        remove_contents(&backup_dcim, context.dry_run)
            .map_err(|e| e.at_stage(WorkflowStage::DeleteBackup))?;

        let eject_warning = self.eject(&context.backup_path, context.dry_run);

        Ok(CleanupReport { eject_warning })
    }

    fn rename_staging(&self, tmp_dir: &Path) -> Result<RenameReport> {
        let century_prefix = self
            .century_prefix
            .clone()
            .unwrap_or_else(current_century_prefix);

        let report = rename_directories(tmp_dir, &century_prefix)
            .map_err(|e| e.at_stage(WorkflowStage::RenameInStaging))?;

        if report.failed_count() > 0 {
            warn!(
                "{} directories could not be renamed and were copied as-is",
                report.failed_count()
            );
        }
        Ok(report)
    }

    /// 退出磁碟區，失敗時回傳警告訊息而不是錯誤
    fn eject(&self, mount_path: &Path, dry_run: bool) -> Option<String> {
        let volume = volume_name(mount_path);
        info!("Ejecting volume: {volume}");

        match eject_volume(self.ejector.as_ref(), &volume, dry_run) {
            Ok(_) => None,
            Err(e) => {
                warn!("Warning: {e}");
                Some(e.to_string())
            }
        }
    }
}
