//! SD 卡照片整理流程元件
//!
//! 將照片從 SD 卡複製到暫存資料夾、轉換目錄名稱、複製到目的地，
//! 最後清空來源並退出磁碟區

mod context;
mod main;

pub use context::{DCIM_DIR_NAME, WorkflowContext, volume_name};
pub use main::{CleanupReport, PhotoWorkflow, WorkflowReport};
