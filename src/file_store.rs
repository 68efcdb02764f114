//! ファイル版キー・バリューストア
//!
//! 全スロットを1つのJSONオブジェクトとしてディスクに置く（CLI版の
//! `localStorage` 代わり）。変更のたびにファイルを書き直す。

use convidados_common::{Error as RosterError, KvStore, Result as RosterResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// ストアを開く。ファイルが無い・読めない場合は空で始める
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path).unwrap_or_default();
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Option<BTreeMap<String, String>> {
        let file = File::open(path).ok()?;
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "storage file unreadable, starting empty");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> RosterResult<()> {
        let storage_error = |e: std::io::Error| RosterError::Storage(format!("{}: {}", self.path.display(), e));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(storage_error)?;
        }
        let file = File::create(&self.path).map_err(storage_error)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.entries)
            .map_err(|e| RosterError::Storage(e.to_string()))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> RosterResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> RosterResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()
        } else {
            Ok(())
        }
    }
}
