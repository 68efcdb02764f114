use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChecklistError {
    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Roster(#[from] convidados_common::Error),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, ChecklistError>;
