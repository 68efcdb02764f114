//! JSON配列コーデック
//!
//! 保存スロットと `.json` のインポート/エクスポートで使う。トップレベルが
//! 配列であれば要素は検証も補完もせずそのまま取り込む。

use crate::error::{Error, Result};
use crate::types::Guest;
use serde_json::Value;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 整形済み配列（`.json` エクスポート用）
pub fn encode(guests: &[Guest]) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(guests).map_err(Error::JsonWrite)
}

/// 1行の配列（保存スロット用）
pub fn encode_compact(guests: &[Guest]) -> Result<String> {
    serde_json::to_string(guests).map_err(Error::JsonWrite)
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Guest>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let value: Value = serde_json::from_slice(bytes).map_err(Error::JsonRead)?;

    match value {
        Value::Array(items) => Ok(items.into_iter().map(Guest::from).collect()),
        _ => Err(Error::InvalidJson),
    }
}
