use thiserror::Error;

/// Errors raised while building a [`TranslationTable`](crate::TranslationTable).
///
/// Translating a line never fails; only loading a table does.
#[derive(Error, Debug)]
pub enum LolError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid translation table: {0}")]
    InvalidTable(String),

    #[error("Translation table has no entries")]
    EmptyTable,
}

pub type LolResult<T> = Result<T, LolError>;
