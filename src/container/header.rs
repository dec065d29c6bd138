//! Parsing for the fixed-layout frame header that opens every stream.
//!
//! The header is the authoritative description of one frame: which transforms
//! were applied to its payload, how large the payload is on disk and after
//! decoding, and whether another frame follows. Parsing fails closed: any
//! malformed or undersized input returns an error and no partial header is
//! ever exposed.

use crate::container::format::{
    BASE_HEADER_LEN, CHECKSUM_FIELD_LEN, DICTIONARY_LEN, FLAG_CHECKSUMMED, FLAG_COMPRESSED,
    FLAG_CONTINUATION, FLAG_ENCRYPTED, FLAG_FLOAT, FLAG_FLOAT3, STREAM_MAGIC,
};
use crate::error::PlaitError;

//==================================================================================
// 1. Public Structs
//==================================================================================

/// The parsed configuration of a single stream frame.
///
/// Optional fields mirror the flag bits: `dictionary` is present exactly when
/// the frame is compressed, `expected_checksum` exactly when it is
/// checksummed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHeader {
    /// Exact count of header bytes consumed (magic + flags + sizes + optional
    /// dictionary + optional checksum), independent of the alignment padding
    /// that follows on disk.
    pub header_len: usize,

    pub is_compressed: bool,
    pub is_encrypted: bool,
    pub is_checksummed: bool,

    /// Whether another frame header follows this frame's data region.
    pub has_continuation: bool,

    /// Whether this frame is one stream of a split floating-point encoding.
    pub is_float: bool,
    /// Whether the split encoding uses 3 streams instead of 2.
    pub is_float3: bool,

    /// Compression dictionary, present iff `is_compressed`.
    pub dictionary: Option<[u8; DICTIONARY_LEN]>,

    /// Expected checksum of the stored payload, present iff `is_checksummed`.
    pub expected_checksum: Option<u16>,

    /// Size of the payload after full decoding, in bytes.
    pub orig_size: u64,
    /// Size of the payload as stored on disk, in bytes.
    pub stored_size: u64,
}

//==================================================================================
// 2. Parsing
//==================================================================================

/// Parses one frame header from the start of `buf`.
///
/// Multi-byte fields are big-endian. All three magic bytes must match; a
/// single corrupted byte rejects the header. When the buffer is too short for
/// a field the flags call for, the returned `TruncatedHeader` error carries
/// the full byte count the header would have needed (`need`), so callers can
/// report the exact truncation point even though no header value is exposed.
pub fn parse_stream_header(buf: &[u8]) -> Result<StreamHeader, PlaitError> {
    if buf.len() < BASE_HEADER_LEN {
        return Err(PlaitError::TruncatedHeader {
            need: BASE_HEADER_LEN,
            have: buf.len(),
        });
    }

    let actual_magic = [buf[0], buf[1], buf[2]];
    if actual_magic != STREAM_MAGIC {
        return Err(PlaitError::BadMagic {
            expected: STREAM_MAGIC,
            actual: actual_magic,
        });
    }

    let flags = buf[3];
    let is_compressed = flags & FLAG_COMPRESSED != 0;
    let is_encrypted = flags & FLAG_ENCRYPTED != 0;
    let is_checksummed = flags & FLAG_CHECKSUMMED != 0;
    let has_continuation = flags & FLAG_CONTINUATION != 0;
    let is_float = flags & FLAG_FLOAT != 0;
    let is_float3 = flags & FLAG_FLOAT3 != 0;

    let orig_size = u64::from_be_bytes(buf[4..12].try_into().unwrap());
    let stored_size = u64::from_be_bytes(buf[12..20].try_into().unwrap());

    let mut cursor = BASE_HEADER_LEN;

    let dictionary = if is_compressed {
        if buf.len() < cursor + DICTIONARY_LEN {
            return Err(PlaitError::TruncatedHeader {
                need: cursor + DICTIONARY_LEN,
                have: buf.len(),
            });
        }
        let mut dictionary = [0u8; DICTIONARY_LEN];
        dictionary.copy_from_slice(&buf[cursor..cursor + DICTIONARY_LEN]);
        cursor += DICTIONARY_LEN;
        Some(dictionary)
    } else {
        None
    };

    let expected_checksum = if is_checksummed {
        if buf.len() < cursor + CHECKSUM_FIELD_LEN {
            // `need` already includes the checksum field, the truncation point.
            return Err(PlaitError::TruncatedHeader {
                need: cursor + CHECKSUM_FIELD_LEN,
                have: buf.len(),
            });
        }
        let value = u16::from_be_bytes([buf[cursor], buf[cursor + 1]]);
        cursor += CHECKSUM_FIELD_LEN;
        Some(value)
    } else {
        None
    };

    Ok(StreamHeader {
        header_len: cursor,
        is_compressed,
        is_encrypted,
        is_checksummed,
        has_continuation,
        is_float,
        is_float3,
        dictionary,
        expected_checksum,
        orig_size,
        stored_size,
    })
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
