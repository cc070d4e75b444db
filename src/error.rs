//! 錯誤型別
//!
//! 目錄檢查、複製、刪除、重新命名與退出磁碟等操作共用的錯誤列舉

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 工作流程的各個階段，用於標示失敗發生的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    CreateStaging,
    CopyToStaging,
    RenameInStaging,
    CopyToDestination,
    DeleteSource,
    CleanStaging,
    DeleteBackup,
}

impl WorkflowStage {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CreateStaging => "failed to create temporary directory",
            Self::CopyToStaging => "failed to copy files to temp directory",
            Self::RenameInStaging => "failed to rename directories",
            Self::CopyToDestination => "failed to copy to destination",
            Self::DeleteSource => "failed to delete source files",
            Self::CleanStaging => "failed to clean temporary directory",
            Self::DeleteBackup => "failed to delete backup files",
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Error, Debug)]
pub enum OrganizeError {
    /// 相機目錄名稱長度不是 8
    #[error("invalid directory name length: {0}")]
    InvalidLength(String),

    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory does not exist: {0}")]
    NotFound(PathBuf),

    #[error("path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to check directory {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to eject volume {volume}: {message}")]
    Eject { volume: String, message: String },

    #[error("destination check failed: {0}")]
    DestinationMissing(#[source] Box<OrganizeError>),

    #[error("source DCIM check failed: {0}")]
    SourceMissing(#[source] Box<OrganizeError>),

    #[error("backup path check failed: {0}")]
    BackupMissing(#[source] Box<OrganizeError>),

    #[error("backup DCIM check failed: {0}")]
    BackupSourceMissing(#[source] Box<OrganizeError>),

    #[error("{stage}: {source}")]
    Stage {
        stage: WorkflowStage,
        #[source]
        source: Box<OrganizeError>,
    },
}

pub type Result<T> = std::result::Result<T, OrganizeError>;

impl OrganizeError {
    /// 將錯誤包裝為某個工作流程階段的失敗
    #[must_use]
    pub fn at_stage(self, stage: WorkflowStage) -> Self {
        Self::Stage {
            stage,
            source: Box::new(self),
        }
    }

    /// 取得最內層的錯誤（去除前置檢查與階段包裝）
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::DestinationMissing(inner)
            | Self::SourceMissing(inner)
            | Self::BackupMissing(inner)
            | Self::BackupSourceMissing(inner)
            | Self::Stage { source: inner, .. } => inner.root(),
            other => other,
        }
    }
}
