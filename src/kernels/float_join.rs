//! This module contains the pure, stateless kernels for reassembling 32-bit
//! IEEE-754 floats that were split across parallel byte streams.
//!
//! The 2-stream form carries sign+fraction together (3 bytes per float, low
//! fraction byte first, with the sign bit in the top of the third byte) and
//! the exponent separately (1 byte per float). The 3-stream form carries the
//! fraction alone (3 bytes per float, top bit of the third byte unused), the
//! exponent (1 byte per float), and the signs as a packed bit stream,
//! MSB-first within each byte, final partial byte zero-padded.
//!
//! Both kernels emit the standard sign(1)/exponent(8)/fraction(23) layout as
//! four little-endian bytes per float. Stream lengths must agree on the float
//! count exactly; any disagreement fails without producing output.

use crate::error::PlaitError;

/// Bytes per float in a sign+fraction or fraction stream.
const FRACTION_GROUP_LEN: usize = 3;
/// Bytes per reconstructed IEEE-754 single.
const FLOAT_LEN: usize = 4;

//==================================================================================
// 1. Public API
//==================================================================================

/// Rejoins a sign+fraction stream and an exponent stream into a flat
/// little-endian `f32` byte buffer.
///
/// For each float, with sign+fraction bytes `b0, b1, b2` and exponent byte
/// `e`, the output bytes are:
///
/// ```text
/// byte0 = b0                        (fraction bits  0..8)
/// byte1 = b1                        (fraction bits  8..16)
/// byte2 = (e << 7) | (b2 & 0x7F)    (exponent bit 0, fraction bits 16..23)
/// byte3 = (b2 & 0x80) | (e >> 1)    (sign, exponent bits 1..8)
/// ```
pub fn join_two_stream(
    signfrac: &[u8],
    exp: &[u8],
    output_buf: &mut Vec<u8>,
) -> Result<(), PlaitError> {
    if signfrac.len() % FRACTION_GROUP_LEN != 0 {
        return Err(PlaitError::StreamLengthMismatch(format!(
            "sign+fraction stream is {} bytes, not a multiple of {}",
            signfrac.len(),
            FRACTION_GROUP_LEN
        )));
    }
    let num_floats = signfrac.len() / FRACTION_GROUP_LEN;
    if exp.len() != num_floats {
        return Err(PlaitError::StreamLengthMismatch(format!(
            "exponent stream holds {} floats but sign+fraction stream holds {}",
            exp.len(),
            num_floats
        )));
    }

    output_buf.clear();
    output_buf.reserve(num_floats * FLOAT_LEN);

    for i in 0..num_floats {
        let b0 = signfrac[i * FRACTION_GROUP_LEN];
        let b1 = signfrac[i * FRACTION_GROUP_LEN + 1];
        let b2 = signfrac[i * FRACTION_GROUP_LEN + 2];
        let e = exp[i];

        output_buf.push(b0);
        output_buf.push(b1);
        output_buf.push((e << 7) | (b2 & 0x7F));
        output_buf.push((b2 & 0x80) | (e >> 1));
    }

    Ok(())
}

/// Rejoins separate fraction, exponent, and sign streams into a flat
/// little-endian `f32` byte buffer.
///
/// The bit assembly follows the 2-stream layout except that the sign comes
/// from the packed sign stream and the unused top bit of the third fraction
/// byte is ignored. Sign bit `i` lives in `sign[i / 8]` at bit `7 - (i % 8)`.
pub fn join_three_stream(
    frac: &[u8],
    exp: &[u8],
    sign: &[u8],
    output_buf: &mut Vec<u8>,
) -> Result<(), PlaitError> {
    if frac.len() % FRACTION_GROUP_LEN != 0 {
        return Err(PlaitError::StreamLengthMismatch(format!(
            "fraction stream is {} bytes, not a multiple of {}",
            frac.len(),
            FRACTION_GROUP_LEN
        )));
    }
    let num_floats = frac.len() / FRACTION_GROUP_LEN;
    if exp.len() != num_floats {
        return Err(PlaitError::StreamLengthMismatch(format!(
            "exponent stream holds {} floats but fraction stream holds {}",
            exp.len(),
            num_floats
        )));
    }
    let expected_sign_len = num_floats.div_ceil(8);
    if sign.len() != expected_sign_len {
        return Err(PlaitError::StreamLengthMismatch(format!(
            "sign stream is {} bytes but {} floats need {}",
            sign.len(),
            num_floats,
            expected_sign_len
        )));
    }

    output_buf.clear();
    output_buf.reserve(num_floats * FLOAT_LEN);

    for i in 0..num_floats {
        let f0 = frac[i * FRACTION_GROUP_LEN];
        let f1 = frac[i * FRACTION_GROUP_LEN + 1];
        let f2 = frac[i * FRACTION_GROUP_LEN + 2];
        let e = exp[i];
        let sign_bit = (sign[i / 8] >> (7 - (i % 8))) & 1;

        output_buf.push(f0);
        output_buf.push(f1);
        output_buf.push((e << 7) | (f2 & 0x7F));
        output_buf.push((sign_bit << 7) | (e >> 1));
    }

    Ok(())
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
