//! Commonly used types and utilities for ease of import.

pub use crate::{score, Code, GameEngine, GameStatus, Score, Solver};

#[cfg(feature = "std")]
pub use crate::{run_local, run_remote, GameApi, HttpGameApi, InMemoryGameApi, RemoteSession};
