//! Frame-chain analysis: the validation pre-pass that walks every header in a
//! container buffer before any payload is decoded.
//!
//! Frames are chained by a continuation flag; each frame's data region starts
//! on the next 4096-byte boundary after its header, and the next header (if
//! any) starts on the next 4096-byte boundary after the data region. The walk
//! re-derives these offsets once, up front, and records them in an explicit
//! arena of [`FrameRecord`]s so later stages never touch raw offset math.
//!
//! An invalid trailing frame must abort the whole decode before any partial
//! output exists, which is why this is a distinct pass rather than something
//! interleaved with payload decoding.

use crate::container::format::{DATA_ALIGN, HEADER_ALIGN};
use crate::container::header::{parse_stream_header, StreamHeader};
use crate::error::PlaitError;
use crate::utils::align_up;

//==================================================================================
// 1. Public Structs
//==================================================================================

/// The validated shape of a whole container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamLayout {
    /// A single stream of arbitrary raw bytes.
    Raw,
    /// Two streams: sign+fraction, then exponent.
    Float2,
    /// Three streams: fraction, then exponent, then packed signs.
    Float3,
}

/// One frame of a validated chain, with its offsets resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    /// Byte offset of this frame's header within the container buffer.
    pub offset: usize,
    /// Byte offset of this frame's (aligned) data region.
    pub data_offset: usize,
    pub header: StreamHeader,
}

/// A fully validated frame chain: every header parsed, every offset bounds
/// checked, and the float-mode flags consistent with the frame count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamChain {
    pub frames: Vec<FrameRecord>,
    pub layout: StreamLayout,
}

//==================================================================================
// 2. Chain Analysis
//==================================================================================

impl StreamChain {
    /// Walks and validates the frame chain at the start of `buf`.
    ///
    /// `max_streams` bounds the walk; a chain that has not terminated within
    /// that many frames fails. Frame counts other than 1, 2, or 3 fail, as do
    /// float-mode flags inconsistent with the count (checked on every frame,
    /// not just the terminal one), continuation on a non-float frame, and any
    /// header or data region that runs past the end of the buffer.
    pub fn analyze(buf: &[u8], max_streams: usize) -> Result<Self, PlaitError> {
        let mut frames = Vec::new();
        let mut offset = 0usize;

        for index in 0..max_streams {
            let header = parse_stream_header(&buf[offset..])?;
            let data_offset = align_up(offset + header.header_len, DATA_ALIGN);

            let data_end = data_offset
                .checked_add(header.stored_size as usize)
                .ok_or_else(|| {
                    PlaitError::ChainFormatError(format!(
                        "frame {} stored size overflows the address space",
                        index
                    ))
                })?;
            if data_end > buf.len() {
                return Err(PlaitError::ChainFormatError(format!(
                    "frame {} data region ends at {} but the buffer is {} bytes",
                    index,
                    data_end,
                    buf.len()
                )));
            }

            log::debug!(
                "frame {}: header_len={} stored={} orig={} flags[c={} e={} k={} f={} f3={} cont={}]",
                index,
                header.header_len,
                header.stored_size,
                header.orig_size,
                header.is_compressed,
                header.is_encrypted,
                header.is_checksummed,
                header.is_float,
                header.is_float3,
                header.has_continuation,
            );

            let has_continuation = header.has_continuation;
            if has_continuation && !header.is_float {
                return Err(PlaitError::ChainFormatError(format!(
                    "frame {} continues the chain but is not a float stream",
                    index
                )));
            }

            frames.push(FrameRecord {
                offset,
                data_offset,
                header,
            });

            if !has_continuation {
                let layout = Self::resolve_layout(&frames)?;
                log_metric!(
                    "event" = "analyze_streams",
                    "outcome" = &format!("{:?}", layout),
                    "frames" = &frames.len()
                );
                return Ok(Self { frames, layout });
            }

            // Skip to the data region, then to the next header boundary.
            offset = align_up(data_end, HEADER_ALIGN);
            if offset >= buf.len() {
                return Err(PlaitError::ChainFormatError(format!(
                    "continuation after frame {} extends past the end of the buffer",
                    index
                )));
            }
        }

        Err(PlaitError::ChainFormatError(format!(
            "no terminal frame within the first {} streams",
            max_streams
        )))
    }

    /// Maps a terminated chain onto one of the supported layouts, enforcing
    /// the float-mode flag rules on every frame.
    fn resolve_layout(frames: &[FrameRecord]) -> Result<StreamLayout, PlaitError> {
        match frames.len() {
            1 => Ok(StreamLayout::Raw),
            2 => {
                if frames
                    .iter()
                    .all(|f| f.header.is_float && !f.header.is_float3)
                {
                    Ok(StreamLayout::Float2)
                } else {
                    Err(PlaitError::ChainFormatError(
                        "2-stream container without consistent float flags".to_string(),
                    ))
                }
            }
            3 => {
                if frames
                    .iter()
                    .all(|f| f.header.is_float && f.header.is_float3)
                {
                    Ok(StreamLayout::Float3)
                } else {
                    Err(PlaitError::ChainFormatError(
                        "3-stream container without consistent float3 flags".to_string(),
                    ))
                }
            }
            count => Err(PlaitError::UnsupportedStreamCount(count)),
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
