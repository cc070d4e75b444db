//! 各執行模式的進入點

use crate::component::PhotoWorkflow;
use crate::component::directory_renamer::{
    RenameReport, current_century_prefix, rename_directories,
};
use crate::component::photo_workflow::WorkflowContext;
use crate::config::{CONFIG_FILE_NAME, Config, save_config};
use crate::error::OrganizeError;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

fn log_dry_run_banner() {
    info!("=== DRY RUN MODE ===");
    info!("No actual changes will be made");
}

/// 在目前目錄建立預設設定檔
pub fn run_create_config() -> Result<PathBuf> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    save_config(&Config::default(), &path).context("Failed to create config file")?;
    info!("Default configuration file created: {}", path.display());
    Ok(path)
}

/// 讀取指定的設定檔，未指定時搜尋預設位置
pub fn load_configuration(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(),
    };
    config.context("Failed to load config")
}

pub fn run_workflow(workflow: &PhotoWorkflow, config: &Config, dry_run: bool) -> Result<()> {
    if dry_run {
        log_dry_run_banner();
    }
    info!("Starting workflow: copy, rename, and delete");

    let context = WorkflowContext::from_config(config, dry_run);
    let report = workflow
        .run(&context)
        .inspect_err(warn_if_volume_missing)
        .context("Workflow failed")?;

    if let Some(rename) = &report.rename {
        log_rename_summary(rename);
    }
    info!("Workflow completed successfully");
    Ok(())
}

pub fn run_backup_cleanup(workflow: &PhotoWorkflow, config: &Config, dry_run: bool) -> Result<()> {
    if dry_run {
        log_dry_run_banner();
    }
    info!("Starting backup cleanup");

    let context = WorkflowContext::from_config(config, dry_run);
    workflow
        .run_backup_cleanup(&context)
        .inspect_err(warn_if_volume_missing)
        .context("Backup cleanup failed")?;

    info!("Backup cleanup completed successfully");
    Ok(())
}

/// 只重新命名單一資料夾內的日期目錄
///
/// 路徑優先順序：`--path`、設定檔的 `target_path`、目前目錄。
/// dry-run 時只記錄將要處理的路徑。
pub fn run_rename_only(
    config: &Config,
    path_override: Option<&Path>,
    dry_run: bool,
) -> Result<Option<RenameReport>> {
    let path = rename_target(config, path_override);

    if dry_run {
        log_dry_run_banner();
        info!("Would rename directories in: {}", path.display());
        return Ok(None);
    }

    info!("Renaming directories in: {}", path.display());
    let report = rename_directories(&path, &current_century_prefix())
        .context("Failed to rename directories")?;

    log_rename_summary(&report);
    info!("Directory renaming completed successfully");
    Ok(Some(report))
}

fn rename_target(config: &Config, path_override: Option<&Path>) -> PathBuf {
    if let Some(path) = path_override {
        return path.to_path_buf();
    }
    if config.target_path.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        config.target_path.clone()
    }
}

/// 最內層錯誤為路徑不存在時，取得該路徑
fn missing_path(err: &OrganizeError) -> Option<&Path> {
    match err.root() {
        OrganizeError::NotFound(path) => Some(path.as_path()),
        _ => None,
    }
}

fn warn_if_volume_missing(err: &OrganizeError) {
    if let Some(path) = missing_path(err) {
        warn!("{} not found, is the card mounted?", path.display());
    }
}

fn log_rename_summary(report: &RenameReport) {
    info!(
        "Renamed: {}, skipped: {}, failed: {}",
        report.renamed_count(),
        report.skipped_count(),
        report.failed_count()
    );
}
