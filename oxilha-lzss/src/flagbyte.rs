//! Flag-byte LZSS with an 8KB window (`-lh4-` .. `-lh7-`).
//!
//! Input is a sequence of groups: one flag byte followed by up to eight
//! tokens. Flag bits are examined LSB first. A set bit is a raw byte; a clear
//! bit is a two-byte reference:
//!
//! ```text
//! byte1 = offset bits 0-7
//! byte2 = offset bits 8-11 (high nibble) | length - 3 (low nibble)
//! ```
//!
//! The copy starts `offset` bytes behind the current window position.
//!
//! This is a fixed token layout. The Huffman-coded literal/length alphabet
//! that real `-lh5-` archives layer on top of these tokens is not decoded.

use crate::lzss::output_capacity;
use oxilha_core::RingBuffer;

/// Minimum match length; the length nibble stores `length - MIN_MATCH`.
pub const MIN_MATCH: usize = 3;
/// Tokens described by one flag byte.
pub const TOKENS_PER_GROUP: u32 = 8;

/// Decoder for the flag-byte LZSS methods.
#[derive(Debug)]
pub struct FlagByteDecoder {
    /// Sliding window.
    window: RingBuffer,
}

impl FlagByteDecoder {
    /// Create a decoder with a zeroed 8KB window.
    pub fn new() -> Self {
        Self {
            window: RingBuffer::lzss_8k(),
        }
    }

    /// Split a reference token into `(offset, length)`.
    #[inline]
    pub fn split_reference(byte1: u8, byte2: u8) -> (usize, usize) {
        let offset = (((byte2 & 0xF0) as usize) << 4) | byte1 as usize;
        let length = (byte2 & 0x0F) as usize + MIN_MATCH;
        (offset, length)
    }

    /// Decode `input` until `original_size` bytes exist or input runs out.
    pub fn decode(&mut self, input: &[u8], original_size: usize) -> Vec<u8> {
        let mut output = Vec::with_capacity(output_capacity(input.len(), original_size));
        let mut pos = 0usize;

        'groups: while output.len() < original_size {
            let Some(&flags) = input.get(pos) else {
                break;
            };
            pos += 1;

            for bit in 0..TOKENS_PER_GROUP {
                if output.len() >= original_size {
                    break 'groups;
                }

                if flags & (1 << bit) != 0 {
                    let Some(&byte) = input.get(pos) else {
                        break 'groups;
                    };
                    pos += 1;
                    output.push(byte);
                    self.window.write_byte(byte);
                } else {
                    let (Some(&byte1), Some(&byte2)) = (input.get(pos), input.get(pos + 1))
                    else {
                        break 'groups;
                    };
                    pos += 2;

                    let (offset, length) = Self::split_reference(byte1, byte2);
                    let start = self.window.index_behind(offset);
                    self.window
                        .copy_match(start, length, &mut output, original_size);
                }
            }
        }

        output
    }
}

impl Default for FlagByteDecoder {
    fn default() -> Self {
        Self::new()
    }
}
