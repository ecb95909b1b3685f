//! Bit-level reading for LZSS token streams.
//!
//! # Bit Ordering
//!
//! LHA bit-flag streams are LSB-first: the first bit consumed is the least
//! significant bit of the first byte, and a multi-bit value is assembled with
//! its first bit in the LSB position. One input byte supplies eight bits
//! before the next byte is pulled.
//!
//! # Example
//!
//! ```
//! use oxilha_core::bitstream::BitReader;
//!
//! let data = [0b1010_0101];
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(3), Some(0b101));
//! assert_eq!(reader.read_bit(), Some(false));
//! assert_eq!(reader.read_bits(4), Some(0b1010));
//! assert_eq!(reader.read_bit(), None);
//! ```

/// Maximum number of bits a single read may request.
pub const MAX_READ_BITS: u8 = 24;

/// A bit-level reader over a byte slice.
///
/// All cursor state lives in the struct: the borrowed buffer, the next byte
/// position, and a small bit buffer holding at most 32 pending bits.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source bytes.
    data: &'a [u8],
    /// Index of the next byte to pull into the bit buffer.
    position: usize,
    /// Pending bits (LSB-first).
    buffer: u32,
    /// Number of valid bits in `buffer`.
    bits_in_buffer: u8,
    /// Total bits consumed.
    total_bits_read: u64,
}

impl<'a> BitReader<'a> {
    /// Create a new `BitReader` over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get the total number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Number of whole input bytes pulled into the bit buffer so far.
    pub fn bytes_consumed(&self) -> usize {
        self.position
    }

    /// Number of bits still available (buffered plus unread bytes).
    pub fn bits_remaining(&self) -> u64 {
        self.bits_in_buffer as u64 + (self.data.len() - self.position) as u64 * 8
    }

    /// Pull whole bytes until at least `count` bits are buffered.
    ///
    /// Returns `false` when the input runs out first; bits already buffered
    /// stay in place.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> bool {
        while self.bits_in_buffer < count {
            let Some(&byte) = self.data.get(self.position) else {
                return false;
            };
            self.buffer |= (byte as u32) << self.bits_in_buffer;
            self.bits_in_buffer += 8;
            self.position += 1;
        }
        true
    }

    /// Read up to 24 bits from the stream.
    ///
    /// Returns `None` without consuming anything when fewer than `count`
    /// bits remain.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Option<u32> {
        debug_assert!(
            count <= MAX_READ_BITS,
            "Cannot read more than 24 bits at once"
        );

        if count == 0 {
            return Some(0);
        }

        if !self.fill_buffer(count) {
            return None;
        }

        let mask = (1u32 << count) - 1;
        let result = self.buffer & mask;

        self.buffer >>= count;
        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Some(result)
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Option<bool> {
        self.read_bits(1).map(|bit| bit != 0)
    }

    /// Read eight bits as a byte.
    pub fn read_byte(&mut self) -> Option<u8> {
        self.read_bits(8).map(|value| value as u8)
    }

    /// Check whether every input bit has been consumed.
    pub fn is_eof(&self) -> bool {
        self.bits_in_buffer == 0 && self.position >= self.data.len()
    }
}
