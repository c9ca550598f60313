// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// A string that is not one of an enum's known wire values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized {kind} value: {value:?}")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

/// The registry already holds `u32::MAX`, so no fresh id exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no gem id left to allocate for {key:?} (largest id is {max})")]
pub struct IdsExhausted {
    pub key: String,
    pub max: u32,
}

/// The page did not look the way the extractor expects, or a row could not
/// be given an id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("section #{0} not found in document")]
    MissingSection(&'static str),

    /// `expected` names the precondition; `path` is the ancestor chain of the
    /// element that failed it.
    #[error("{expected} (at {path})")]
    Structure { expected: &'static str, path: String },

    #[error("{source} (at {path})")]
    UnknownGemType { source: UnknownValue, path: String },

    #[error("level text {text:?} is not of the form (<digits>) (at {path})")]
    BadLevel { text: String, path: String },

    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: &'static str, reason: String },

    #[error(transparent)]
    Ids(#[from] IdsExhausted),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error on {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("malformed registry {}: {source}", .path.display())]
    Registry { path: PathBuf, source: serde_json::Error },

    #[error("malformed registry {}: {reason}", .path.display())]
    RegistryInvalid { path: PathBuf, reason: String },

    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
