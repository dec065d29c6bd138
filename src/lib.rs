//! This file is the root of the `plait_core` Rust crate.
//!
//! plait decodes a framed binary container format: one to three chained
//! streams, each optionally compressed (escape/dictionary RLE), encrypted
//! (LFSR keystream XOR), and checksummed, with split floating-point streams
//! rejoined into a flat `f32` byte buffer at the end.
//!
//! The crate is a pure in-memory decoder. Callers hand it the full container
//! buffer and a [`config::DecodeOptions`]; file I/O, password prompting, and
//! the encode direction are the caller's business.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod container;
pub mod kernels;
pub mod pipeline;
pub mod utils;

mod error;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use config::{Credential, DecodeOptions};
pub use error::PlaitError;
pub use observability::enable_verbose_logging;
pub use pipeline::decode_container;
