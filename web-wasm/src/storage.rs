//! `localStorage` を使う名簿ストア

use convidados_common::{Error, KvStore, Result};

/// ブラウザの `localStorage`。使えない環境（プライベートモード、Cookie無効）では
/// 読み込みは空、書き込みはエラーになる
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn unavailable() -> Error {
    Error::Storage("localStorage unavailable".to_string())
}

impl KvStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        local_storage()
            .ok_or_else(unavailable)?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        local_storage()
            .ok_or_else(unavailable)?
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
