//! This module provides a set of shared, low-level utility functions used
//! throughout the plait Rust core.
//!
//! Its primary responsibilities include:
//! 1.  Alignment arithmetic for the container's 4096-byte frame boundaries.
//! 2.  Providing safe, validated conversions between raw byte slices and typed
//!     slices, with all `unsafe` delegated to `bytemuck`.

use bytemuck;

use crate::error::PlaitError;

//==================================================================================
// 1. Core Utility Functions
//==================================================================================

/// Rounds `value` up to the next multiple of `alignment`.
///
/// `align_up(0, a)` is 0; a value already on a boundary is returned unchanged.
/// `alignment` must be nonzero (callers pass the fixed format constants).
pub fn align_up(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment > 0);
    (value + alignment - 1) / alignment * alignment
}

/// Copies a typed slice into a plain byte vector.
///
/// Used by tests to compare reconstructed float buffers against `f32` slices
/// without hand-writing the little-endian byte expansion.
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(slice: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(slice).to_vec()
}

/// Safely reinterprets a byte slice as a slice of a primitive type.
///
/// Returns an error if the byte slice length or alignment does not fit the
/// target type `T`.
pub fn safe_bytes_to_typed_slice<T>(bytes: &[u8]) -> Result<&[T], PlaitError>
where
    T: bytemuck::Pod,
{
    bytemuck::try_cast_slice(bytes)
        .map_err(|e| PlaitError::InternalError(format!("Failed to cast byte slice: {}", e)))
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up_basic_cases() {
        assert_eq!(align_up(0, 4096), 0);
        assert_eq!(align_up(1, 4096), 4096);
        assert_eq!(align_up(4096, 4096), 4096);
        assert_eq!(align_up(4097, 4096), 8192);
        assert_eq!(align_up(38, 4096), 4096);
    }

    #[test]
    fn test_typed_slice_to_bytes_f32() {
        let floats: Vec<f32> = vec![1.0, -2.5];
        let bytes = typed_slice_to_bytes(&floats);
        assert_eq!(bytes[..4], 1.0f32.to_le_bytes());
        assert_eq!(bytes[4..], (-2.5f32).to_le_bytes());
    }

    #[test]
    fn test_safe_cast_rejects_ragged_length() {
        let bytes = [0u8; 7];
        let result = safe_bytes_to_typed_slice::<u32>(&bytes);
        assert!(matches!(result, Err(PlaitError::InternalError(_))));
    }
}
