//! 退出磁碟區
//!
//! 只有 macOS 提供 `diskutil eject`，其他平台使用不做任何事的實作。

use crate::error::{OrganizeError, Result};
use log::info;
use std::process::Command;

/// 可退出磁碟區的外部元件
pub trait VolumeEjector {
    /// 此平台是否支援退出磁碟區
    fn is_supported(&self) -> bool;

    fn eject(&self, volume_name: &str) -> Result<()>;
}

/// 透過 `diskutil eject` 退出磁碟區
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskutilEjector;

impl DiskutilEjector {
    #[must_use]
    pub fn build_command(volume_name: &str) -> Command {
        let mut cmd = Command::new("diskutil");
        cmd.args(["eject", volume_name]);
        cmd
    }
}

impl VolumeEjector for DiskutilEjector {
    fn is_supported(&self) -> bool {
        true
    }

    fn eject(&self, volume_name: &str) -> Result<()> {
        let output = Self::build_command(volume_name)
            .output()
            .map_err(|e| OrganizeError::Eject {
                volume: volume_name.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(OrganizeError::Eject {
                volume: volume_name.to_string(),
                message: format!("{}\nOutput: {}", output.status, combined.trim_end()),
            });
        }

        Ok(())
    }
}

/// 不支援退出磁碟區的平台
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEjector;

impl VolumeEjector for NoopEjector {
    fn is_supported(&self) -> bool {
        false
    }

    fn eject(&self, _volume_name: &str) -> Result<()> {
        Ok(())
    }
}

/// 依目前平台選擇退出磁碟區的實作
#[must_use]
pub fn platform_ejector() -> Box<dyn VolumeEjector> {
    if cfg!(target_os = "macos") {
        Box::new(DiskutilEjector)
    } else {
        Box::new(NoopEjector)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EjectOutcome {
    Ejected,
    Unsupported,
    DryRun,
}

pub fn eject_volume(
    ejector: &dyn VolumeEjector,
    volume_name: &str,
    dry_run: bool,
) -> Result<EjectOutcome> {
    if dry_run {
        info!("[DRY RUN] Would eject volume: {volume_name}");
        return Ok(EjectOutcome::DryRun);
    }
    if !ejector.is_supported() {
        info!(
            "Eject not supported on {}, skipping",
            std::env::consts::OS
        );
        return Ok(EjectOutcome::Unsupported);
    }

    ejector.eject(volume_name)?;
    info!("Successfully ejected volume: {volume_name}");
    Ok(EjectOutcome::Ejected)
}
