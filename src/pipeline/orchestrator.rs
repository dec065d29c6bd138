// In: src/pipeline/orchestrator.rs

//! The top-level orchestration of a container decode.
//!
//! This module acts as a pure coordinator. It runs the chain analyzer as a
//! validation pre-pass, then decodes each frame through the fixed stage order
//! (checksum verification, decryption, decompression), and finally dispatches
//! to the float rejoiner or passes the single raw stream through. Every
//! intermediate buffer has exactly one owner and is moved forward between
//! stages; nothing is cached across invocations.

use crate::config::DecodeOptions;
use crate::container::chain::{FrameRecord, StreamChain, StreamLayout};
use crate::container::format::MAX_RUN_LENGTH;
use crate::error::PlaitError;
use crate::kernels::{checksum, float_join, rle, stream_cipher};

//==================================================================================
// 1. Public Orchestration API
//==================================================================================

/// Decodes a complete container buffer into its final output bytes.
///
/// The result is the raw payload for a single-stream container, or the flat
/// little-endian `f32` byte buffer for a 2- or 3-stream float container. Any
/// validation or integrity failure aborts the whole decode; no partial output
/// is ever returned.
pub fn decode_container(buf: &[u8], options: &DecodeOptions) -> Result<Vec<u8>, PlaitError> {
    // 1. Validation pre-pass over every header in the chain. An invalid
    //    trailing frame must fail the decode before any payload work happens.
    let chain = StreamChain::analyze(buf, options.max_streams)?;

    // 2. Decode each frame's payload in chain order.
    let mut streams = Vec::with_capacity(chain.frames.len());
    for frame in &chain.frames {
        streams.push(decode_frame(buf, frame, options)?);
    }

    // 3. Reassemble the final output.
    match chain.layout {
        StreamLayout::Raw => Ok(streams.swap_remove(0)),
        StreamLayout::Float2 => {
            let mut output = Vec::new();
            float_join::join_two_stream(&streams[0], &streams[1], &mut output)?;
            Ok(output)
        }
        StreamLayout::Float3 => {
            let mut output = Vec::new();
            float_join::join_three_stream(&streams[0], &streams[1], &streams[2], &mut output)?;
            Ok(output)
        }
    }
}

//==================================================================================
// 2. Per-Frame Decoding
//==================================================================================

/// Decodes one frame's stored payload into its original bytes.
///
/// Stage order is fixed by the format: the checksum covers the stored bytes
/// exactly as they sit on disk, decryption reverses the outermost transform,
/// and decompression reverses the innermost one. The decoded length must
/// equal the header's original size.
fn decode_frame(
    buf: &[u8],
    frame: &FrameRecord,
    options: &DecodeOptions,
) -> Result<Vec<u8>, PlaitError> {
    let header = &frame.header;

    // The chain analyzer already bounds checked this region.
    let stored = &buf[frame.data_offset..frame.data_offset + header.stored_size as usize];

    if let Some(expected) = header.expected_checksum {
        let actual = checksum::checksum(stored);
        if actual != expected {
            return Err(PlaitError::ChecksumMismatch { expected, actual });
        }
    }

    let mut data = stored.to_vec();

    if header.is_encrypted {
        let credential = options
            .credential
            .as_ref()
            .ok_or(PlaitError::MissingCredential)?;
        let mut decrypted = Vec::new();
        stream_cipher::decrypt(&data, credential.key(), &mut decrypted)?;
        data = decrypted;
    }

    if let Some(dictionary) = &header.dictionary {
        // Worst case each stored escape pair expands to MAX_RUN_LENGTH bytes.
        let output_limit = data.len().saturating_mul(MAX_RUN_LENGTH);
        let mut decompressed = Vec::new();
        rle::decompress(&data, dictionary, &mut decompressed, output_limit)?;
        data = decompressed;
    }

    if data.len() as u64 != header.orig_size {
        return Err(PlaitError::SizeMismatch {
            expected: header.orig_size,
            actual: data.len() as u64,
        });
    }

    log::debug!(
        "frame at offset {} decoded: {} stored -> {} original bytes",
        frame.offset,
        header.stored_size,
        data.len()
    );

    Ok(data)
}
