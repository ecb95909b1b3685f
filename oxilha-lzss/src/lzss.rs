//! Bit-flag LZSS with a 4KB dictionary (`-lh1-`).
//!
//! The payload is a LSB-first bit stream of tokens:
//!
//! ```text
//! 1 <8 bits literal>
//! 0 <12 bits dictionary position> <4 bits length - 3>
//! ```
//!
//! A match copies from an absolute dictionary position, and every copied
//! byte is appended to the dictionary as it is produced.

use oxilha_core::{BitReader, RingBuffer};

/// Bits used for a dictionary position.
pub const POSITION_BITS: u8 = 12;
/// Bits used for a match length.
pub const LENGTH_BITS: u8 = 4;
/// Minimum match length; the length field stores `length - MIN_MATCH`.
pub const MIN_MATCH: usize = 3;
/// Upper bound on output bytes per input byte for both token layouts
/// (an 18-byte match costs 17 bits here and 2 bytes plus a flag bit there).
pub const MAX_EXPANSION: usize = 9;

/// Capacity to reserve for decoding `input_len` bytes into at most
/// `original_size` bytes.
#[inline]
pub fn output_capacity(input_len: usize, original_size: usize) -> usize {
    original_size.min(input_len.saturating_mul(MAX_EXPANSION))
}

/// LZSS token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LzssToken {
    /// A literal byte.
    Literal(u8),
    /// A copy from the dictionary.
    Match {
        /// Absolute dictionary position of the first byte to copy.
        position: u16,
        /// Number of bytes to copy.
        length: u16,
    },
}

/// Read the next token, or `None` when the stream ends mid-token.
pub fn read_token(reader: &mut BitReader<'_>) -> Option<LzssToken> {
    if reader.read_bit()? {
        return reader.read_byte().map(LzssToken::Literal);
    }

    let position = reader.read_bits(POSITION_BITS)? as u16;
    let length = reader.read_bits(LENGTH_BITS)? as u16 + MIN_MATCH as u16;
    Some(LzssToken::Match { position, length })
}

/// Decoder for the 4KB bit-flag LZSS method.
#[derive(Debug)]
pub struct LzssDecoder {
    /// Dictionary.
    ring: RingBuffer,
}

impl LzssDecoder {
    /// Create a decoder with a zeroed 4KB dictionary.
    pub fn new() -> Self {
        Self {
            ring: RingBuffer::lzss_4k(),
        }
    }

    /// Apply one token, appending at most `limit - output.len()` bytes.
    pub fn apply(&mut self, token: LzssToken, output: &mut Vec<u8>, limit: usize) {
        match token {
            LzssToken::Literal(byte) => {
                if output.len() < limit {
                    output.push(byte);
                    self.ring.write_byte(byte);
                }
            }
            LzssToken::Match { position, length } => {
                self.ring
                    .copy_match(position as usize, length as usize, output, limit);
            }
        }
    }

    /// Decode `input` until `original_size` bytes exist or input runs out.
    pub fn decode(&mut self, input: &[u8], original_size: usize) -> Vec<u8> {
        let mut reader = BitReader::new(input);
        let mut output = Vec::with_capacity(output_capacity(input.len(), original_size));

        while output.len() < original_size {
            let Some(token) = read_token(&mut reader) else {
                break;
            };
            self.apply(token, &mut output, original_size);
        }

        output
    }
}

impl Default for LzssDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pack `(value, bit_count)` fields LSB-first.
    fn pack_bits(fields: &[(u32, u8)]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut acc: u64 = 0;
        let mut bits = 0u32;
        for &(value, count) in fields {
            acc |= (value as u64) << bits;
            bits += count as u32;
            while bits >= 8 {
                out.push(acc as u8);
                acc >>= 8;
                bits -= 8;
            }
        }
        if bits > 0 {
            out.push(acc as u8);
        }
        out
    }

    fn literal(byte: u8) -> [(u32, u8); 2] {
        [(1, 1), (byte as u32, 8)]
    }

    fn reference(position: u32, length: u32) -> [(u32, u8); 3] {
        [(0, 1), (position, 12), (length - 3, 4)]
    }

    #[test]
    fn test_decode_literals() {
        let mut fields = Vec::new();
        for &b in b"Hi!" {
            fields.extend(literal(b));
        }
        let input = pack_bits(&fields);

        let output = LzssDecoder::new().decode(&input, 3);
        assert_eq!(output, b"Hi!");
    }

    #[test]
    fn test_decode_match_repeats_pattern() {
        let mut fields = Vec::new();
        fields.extend(literal(b'A'));
        fields.extend(literal(b'B'));
        fields.extend(reference(0, 6));
        let input = pack_bits(&fields);

        assert_eq!(input, [0x83, 0x0A, 0x01, 0x80, 0x01]);
        assert_eq!(LzssDecoder::new().decode(&input, 8), b"ABABABAB");
    }

    #[test]
    fn test_self_referential_run() {
        let mut fields = Vec::new();
        fields.extend(literal(b'z'));
        fields.extend(reference(0, 18));
        let input = pack_bits(&fields);

        let output = LzssDecoder::new().decode(&input, 19);
        assert_eq!(output, vec![b'z'; 19]);
    }

    #[test]
    fn test_stops_at_original_size() {
        let mut fields = Vec::new();
        fields.extend(literal(b'q'));
        fields.extend(reference(0, 18));
        let input = pack_bits(&fields);

        let output = LzssDecoder::new().decode(&input, 4);
        assert_eq!(output, b"qqqq");
    }

    #[test]
    fn test_partial_output_on_exhausted_input() {
        let mut fields = Vec::new();
        fields.extend(literal(b'a'));
        fields.extend(literal(b'b'));
        let input = pack_bits(&fields);

        let output = LzssDecoder::new().decode(&input, 100);
        assert_eq!(output, b"ab");
    }

    #[test]
    fn test_output_capacity() {
        assert_eq!(output_capacity(0, 100 * 1024 * 1024), 0);
        assert_eq!(output_capacity(10, 1000), 90);
        assert_eq!(output_capacity(1000, 10), 10);
        assert_eq!(output_capacity(usize::MAX, 7), 7);

        let output = LzssDecoder::new().decode(&[], 1 << 30);
        assert_eq!(output.capacity(), 0);
    }

    #[test]
    fn test_read_token() {
        let mut fields = Vec::new();
        fields.extend(literal(0x7F));
        fields.extend(reference(0xABC, 18));
        let input = pack_bits(&fields);

        let mut reader = BitReader::new(&input);
        assert_eq!(read_token(&mut reader), Some(LzssToken::Literal(0x7F)));
        assert_eq!(
            read_token(&mut reader),
            Some(LzssToken::Match {
                position: 0xABC,
                length: 18
            })
        );
        assert_eq!(read_token(&mut reader), None);
    }

    #[test]
    fn test_reference_to_unwritten_slot_reads_zero() {
        let input = pack_bits(&reference(100, 3));
        assert_eq!(LzssDecoder::new().decode(&input, 3), vec![0, 0, 0]);
    }
}
