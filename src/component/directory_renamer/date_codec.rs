//! 相機日期目錄名稱轉換
//!
//! 相機產生的目錄名稱格式為 `0YYMMDD0`，頭尾兩個位元為填充，
//! 轉換後為 `YYYY-MM-DD`。

use crate::error::{OrganizeError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// 相機目錄名稱的固定長度
pub const EXPECTED_DIR_NAME_LENGTH: usize = 8;

static REGEX_DATE_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("Invalid regex"));

/// 是否為相機產生的日期目錄名稱（剛好 8 個 ASCII 數字）
///
/// 不檢查月份與日期是否合理。
#[must_use]
pub fn is_valid_date_dir(name: &str) -> bool {
    REGEX_DATE_DIR.is_match(name)
}

/// 將 `0YYMMDD0` 轉換為 `YYYY-MM-DD`
///
/// # Arguments
/// * `name` - 相機目錄名稱
/// * `century_prefix` - 年份前兩碼，例如 `"20"`
///
/// 只依位置切割，不做月份或日期範圍檢查；頭尾填充位元直接捨棄，
/// 因此轉換無法反推。
pub fn convert_dir_name(name: &str, century_prefix: &str) -> Result<String> {
    if name.len() != EXPECTED_DIR_NAME_LENGTH {
        return Err(OrganizeError::InvalidLength(name.to_string()));
    }

    let (Some(year_suffix), Some(month), Some(day)) =
        (name.get(1..3), name.get(3..5), name.get(5..7))
    else {
        // 8 個位元組但切在多位元組字元中間
        return Err(OrganizeError::InvalidLength(name.to_string()));
    };

    Ok(format!("{century_prefix}{year_suffix}-{month}-{day}"))
}
