//! エラー型定義
//!
//! Display の文字列はブラウザの alert にそのまま出るので、利用者向けの短い文にする。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid JSON file")]
    InvalidJson,

    #[error("error reading JSON file")]
    JsonRead(#[source] serde_json::Error),

    #[error("error writing JSON: {0}")]
    JsonWrite(#[source] serde_json::Error),

    #[error("unsupported format, use .json or .xlsx")]
    UnsupportedFormat(String),

    #[error("error reading spreadsheet file: {0}")]
    Spreadsheet(String),

    #[error("Excel generation error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
