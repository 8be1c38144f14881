//! Core types: users, words, snapshots, randomness, configuration.
//!
//! Everything here is a value. Snapshots and words are immutable once
//! built; the only mutable piece is the random source, owned by the engine.

pub mod user;
pub mod word;
pub mod rng;
pub mod config;
pub mod state;

pub use user::{User, UserId};
pub use word::{Word, WordId};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::EngineConfig;
pub use state::GameState;
