//! Implementations of `GameApi`.

#[cfg(feature = "std")]
pub mod http;
#[cfg(feature = "std")]
pub mod in_memory;
