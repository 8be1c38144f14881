//! Errors raised while building the engine's collaborators.
//!
//! Game outcomes are never errors: a rejected word is reported through
//! `WordStatus`. `LoadError` only covers setup, such as reading a word list
//! or parsing a tile distribution.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to construct a dictionary or letter pool.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tile entry `{entry}` is not of the form LETTER:COUNT")]
    MalformedTile { entry: String },

    #[error("tile entry `{entry}` has an invalid count")]
    InvalidCount {
        entry: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("letter `{letter}` appears more than once in the tile distribution")]
    DuplicateLetter { letter: char },
}
