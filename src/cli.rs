use clap::Parser;
use std::path::PathBuf;

/// 將 Sony 相機的日期目錄（0YYMMDD0）轉為 YYYY-MM-DD，並整理 SD 卡上的照片
#[derive(Parser, Debug)]
#[command(name = "sony_photo_organize")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Target path to rename directories (overrides config)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Create a default configuration file
    #[arg(long)]
    pub create_config: bool,

    /// Run full workflow: copy, rename, and delete
    #[arg(long)]
    pub workflow: bool,

    /// Delete files from backup SD card and eject
    #[arg(long)]
    pub backup_cleanup: bool,

    /// Show what would be done without making any changes
    #[arg(long)]
    pub dry_run: bool,
}

/// 依旗標決定的執行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    CreateConfig,
    Workflow,
    BackupCleanup,
    RenameOnly,
}

impl Cli {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.create_config {
            Mode::CreateConfig
        } else if self.workflow {
            Mode::Workflow
        } else if self.backup_cleanup {
            Mode::BackupCleanup
        } else {
            Mode::RenameOnly
        }
    }
}
