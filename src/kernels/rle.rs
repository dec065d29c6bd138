//! This module contains the pure, stateless kernel for reversing the format's
//! escape/dictionary run-length scheme.
//!
//! The scheme has no addressable back-references: the only repeated content it
//! can express is a single byte drawn from a 16-entry dictionary carried in
//! the frame header. A literal byte passes through unchanged; the escape
//! sentinel `0x07` opens a two-byte sequence whose second byte either marks a
//! literal sentinel (`0x00`) or packs a repeat count and dictionary index as
//! nibbles. Decompression is therefore a single forward scan.

use crate::container::format::{DICTIONARY_LEN, ESCAPE_BYTE};
use crate::error::PlaitError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Decompresses `input` into `output_buf`, stopping when the input is
/// exhausted or `max_output_len` bytes have been produced.
///
/// Reaching the output limit truncates safely rather than overflowing; the
/// caller is expected to size the limit at the worst-case 16x expansion and
/// to treat a short result as a size mismatch. A lone escape byte at the end
/// of the input (an escape with no operand) ends the stream.
///
/// Escape sequence handling:
/// - `0x07 0x00` emits one literal `0x07` byte.
/// - `0x07 0xRI` emits `R` copies of `dictionary[I]` (`R` = high nibble,
///   `I` = low nibble).
///
/// Both forms consume exactly two input bytes.
pub fn decompress(
    input: &[u8],
    dictionary: &[u8; DICTIONARY_LEN],
    output_buf: &mut Vec<u8>,
    max_output_len: usize,
) -> Result<(), PlaitError> {
    output_buf.clear();

    let mut input_index = 0;
    while input_index < input.len() && output_buf.len() < max_output_len {
        let current = input[input_index];

        if current == ESCAPE_BYTE {
            if input_index + 1 >= input.len() {
                break;
            }
            let operand = input[input_index + 1];

            if operand == 0x00 {
                output_buf.push(ESCAPE_BYTE);
            } else {
                let repeat_count = (operand >> 4) as usize;
                let dictionary_index = (operand & 0x0F) as usize;
                let value = dictionary[dictionary_index];

                for _ in 0..repeat_count {
                    if output_buf.len() >= max_output_len {
                        break;
                    }
                    output_buf.push(value);
                }
            }

            input_index += 2;
        } else {
            output_buf.push(current);
            input_index += 1;
        }
    }

    Ok(())
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
