#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod code;
mod common;
mod config;
mod game;
mod scoring;
mod solver;
#[cfg(feature = "std")]
mod console;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod transport;

pub use code::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use scoring::*;
pub use solver::*;
#[cfg(feature = "std")]
pub use console::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
#[cfg(feature = "std")]
pub use protocol::{ApiError, GameApi, SessionId};
#[cfg(feature = "std")]
pub use session::RemoteSession;
#[cfg(feature = "std")]
pub use transport::{http::HttpGameApi, in_memory::InMemoryGameApi};
