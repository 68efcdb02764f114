use crate::error::{ChecklistError, Result};
use convidados_common::EXPORT_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルの `storage_path` より優先される環境変数
pub const STORAGE_ENV: &str = "CONVIDADOS_STORAGE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_path: Option<PathBuf>,
    pub export_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ChecklistError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("convidados"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 名簿ファイルの場所: 環境変数 → 設定ファイル → デフォルト
    pub fn resolve_storage_path(&self) -> Result<PathBuf> {
        if let Ok(path) = std::env::var(STORAGE_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        match &self.storage_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("storage.json")),
        }
    }

    pub fn set_storage_path(&mut self, path: PathBuf) -> Result<()> {
        self.storage_path = Some(path);
        self.save()
    }
}
