// In: src/error.rs

//! This module defines the single, unified error type for the entire plait library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaitError {
    // =========================================================================
    // === Format Errors (malformed containers; fatal, no partial output)
    // =========================================================================
    /// The buffer ended before the header did. `need` is the byte count the
    /// header layout requires up to and including the field that could not be
    /// read, so callers can report the exact truncation point.
    #[error("truncated stream header: need {need} bytes, have {have}")]
    TruncatedHeader { need: usize, have: usize },

    /// The three magic/version bytes did not match. Every byte must match;
    /// a single corrupted byte is enough to reject the header.
    #[error("bad magic bytes: expected {expected:02x?}, got {actual:02x?}")]
    BadMagic { expected: [u8; 3], actual: [u8; 3] },

    /// The frame chain violates the container shape rules (continuation on a
    /// non-float stream, data region past the end of the buffer, and so on).
    #[error("stream chain error: {0}")]
    ChainFormatError(String),

    /// The chain terminated with a frame count the format does not define.
    #[error("unsupported stream count: {0} (expected 1, 2 (float), or 3 (float3))")]
    UnsupportedStreamCount(usize),

    /// Split-float input streams whose lengths do not describe the same
    /// number of floats.
    #[error("float stream length mismatch: {0}")]
    StreamLengthMismatch(String),

    // =========================================================================
    // === Integrity & Size Errors
    // =========================================================================
    #[error("checksum mismatch: header declares {expected:#06x}, data sums to {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    /// The fully decoded stream does not have the length the header promised.
    /// Also the visible symptom of decompression hitting its output limit.
    #[error("decoded stream is {actual} bytes but header declares {expected}")]
    SizeMismatch { expected: u64, actual: u64 },

    // =========================================================================
    // === Credential Errors
    // =========================================================================
    /// A stream is flagged encrypted but the caller supplied no credential.
    #[error("stream is encrypted but no credential was supplied")]
    MissingCredential,

    /// The keystream generator has a fixed point at zero, so an all-zero key
    /// would produce a constant pad. Rejected rather than silently decoding
    /// garbage.
    #[error("degenerate encryption key: zero is a fixed point of the keystream generator")]
    DegenerateKey,

    // =========================================================================
    // === Internal Errors
    // =========================================================================
    #[error("internal logic error (this is a bug): {0}")]
    InternalError(String),
}
