//! 相機日期目錄重新命名元件
//!
//! 將 `0YYMMDD0` 格式的目錄名稱轉為 `YYYY-MM-DD`

mod date_codec;
mod main;

pub use date_codec::{EXPECTED_DIR_NAME_LENGTH, convert_dir_name, is_valid_date_dir};
pub use main::{RenameOutcome, RenameReport, current_century_prefix, rename_directories};
