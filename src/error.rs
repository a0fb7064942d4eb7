//! Construction-time failures.
//!
//! Only loading can fail: once a [`crate::Responder`] exists, every turn is
//! total and returns a plain string.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Tokenizer model unavailable: {0}")]
    Tokenizer(String),

    #[error("Stop-word list unavailable: {0}")]
    StopWords(String),

    #[error("Lemmatization dictionary unavailable: {0}")]
    Lexicon(String),

    #[error("Knowledge base invalid: {0}")]
    Knowledge(String),

    #[error("Phrase set '{0}' is empty")]
    Phrases(&'static str),

    #[error("Failed to read resource '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ResourceError>;
