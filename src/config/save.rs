use crate::config::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    // 設定檔只給擁有者讀寫
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}
