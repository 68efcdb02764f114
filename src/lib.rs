//! Guest Checklist CLI
//!
//! 共通の名簿マネージャを使うコマンドライン版。
//! 名簿はブラウザのストレージではなくローカルのJSONファイルに保存する。

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod file_store;
