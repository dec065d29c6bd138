// In: src/container/format.rs

//! Defines all on-disk constants for the plait container format.
//! This is the single source of truth for the frame header layout, the flag
//! bit assignments, and the alignment rules that govern how frames are chained
//! inside a single buffer.

//==================================================================================
// I. Frame Header Layout
//==================================================================================

/// The magic/version bytes that open every frame header. All three must match
/// exactly for a header to be accepted.
pub const STREAM_MAGIC: [u8; 3] = [0x02, 0x13, 0x03];

/// Size of the mandatory header prefix: magic (3) + flags (1) + original size
/// (8) + stored size (8).
pub const BASE_HEADER_LEN: usize = 20;

/// Size of the compression dictionary carried by compressed frames.
pub const DICTIONARY_LEN: usize = 16;

/// Size of the expected-checksum field carried by checksummed frames.
pub const CHECKSUM_FIELD_LEN: usize = 2;

/// The largest header the format can produce (all optional fields present).
pub const MAX_HEADER_LEN: usize = BASE_HEADER_LEN + DICTIONARY_LEN + CHECKSUM_FIELD_LEN;

//==================================================================================
// II. Flag Bits (byte 3 of the header, most-significant bit first)
//==================================================================================

/// The payload was compressed with the escape/dictionary scheme.
pub const FLAG_COMPRESSED: u8 = 0x80;
/// The payload was encrypted with the keystream cipher.
pub const FLAG_ENCRYPTED: u8 = 0x40;
/// The header carries an expected checksum for the stored payload.
pub const FLAG_CHECKSUMMED: u8 = 0x20;
/// Another frame header follows this frame's data region.
pub const FLAG_CONTINUATION: u8 = 0x10;
/// This frame is one stream of a split floating-point encoding.
pub const FLAG_FLOAT: u8 = 0x08;
/// The split floating-point encoding uses 3 streams instead of 2.
pub const FLAG_FLOAT3: u8 = 0x04;
// The low 2 bits of the flag byte are reserved.

//==================================================================================
// III. Chaining & Compression Constants
//==================================================================================

/// Frame headers begin on this alignment boundary.
pub const HEADER_ALIGN: usize = 4096;
/// Each frame's data region begins on this alignment boundary after its header.
pub const DATA_ALIGN: usize = 4096;

/// The escape sentinel of the compression scheme.
pub const ESCAPE_BYTE: u8 = 0x07;

/// Upper bound on the bytes a single two-byte escape sequence can expand to.
/// Callers size decompression output limits as `MAX_RUN_LENGTH *` stored size.
pub const MAX_RUN_LENGTH: usize = 16;
