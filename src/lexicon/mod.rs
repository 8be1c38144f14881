//! External collaborators: the tile supply and the dictionary.
//!
//! The engine only talks to the `LetterPool` and `Dictionary` traits.
//! `TileBag` and `WordList` are ready-made implementations.

pub mod dictionary;
pub mod pool;

pub use dictionary::{Dictionary, WordList};
pub use pool::{LetterPool, TileBag};
