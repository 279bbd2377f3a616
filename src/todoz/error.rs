use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Invalid UTF-8 input: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, TodozError>;
