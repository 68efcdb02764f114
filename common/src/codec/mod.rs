//! 名簿ファイル形式
//!
//! 各コーデックは `encode(&[Guest]) -> bytes` / `decode(bytes) -> Vec<Guest>` の組。
//! `ImportFormat` がファイル名からデコーダを選ぶ。

pub mod json;
pub mod xlsx;

use crate::error::{Error, Result};
use crate::types::Guest;
use std::path::Path;

/// インポート時のファイル選択で受け付ける拡張子
pub const ACCEPTED_EXTENSIONS: &str = ".json, .xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Xlsx,
}

impl ImportFormat {
    /// 拡張子で判定（大文字小文字は区別しない）
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(ImportFormat::Json),
            Some("xlsx") => Ok(ImportFormat::Xlsx),
            _ => Err(Error::UnsupportedFormat(file_name.to_string())),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<Vec<Guest>> {
        match self {
            ImportFormat::Json => json::decode(bytes),
            ImportFormat::Xlsx => xlsx::decode(bytes),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportFormat::Json => "json",
            ImportFormat::Xlsx => "xlsx",
        }
    }
}
