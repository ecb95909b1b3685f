//! Ring buffer (sliding dictionary) for LZSS decompression.
//!
//! The dictionary is a fixed-capacity array with a wrapping write index.
//! Back-references are resolved by index arithmetic on that array, one byte
//! at a time, so a match may read bytes it wrote earlier in the same copy.
//!
//! # Sizes
//!
//! - `-lh1-`: 4 KB (4096 bytes)
//! - `-lh4-` .. `-lh7-`: 8 KB (8192 bytes)

/// Common dictionary sizes.
pub mod sizes {
    /// Dictionary size for the bit-flag LZSS method (4 KB).
    pub const LZSS_4K: usize = 4096;
    /// Dictionary size for the flag-byte LZSS methods (8 KB).
    pub const LZSS_8K: usize = 8192;
}

/// A fixed-capacity circular dictionary.
///
/// The buffer starts zero-filled, so references into not-yet-written slots
/// read `0x00`.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    /// The underlying buffer.
    buffer: Vec<u8>,
    /// Current write position (next byte will be written here).
    position: usize,
    /// Mask for efficient modulo (capacity - 1).
    mask: usize,
}

impl RingBuffer {
    /// Create a new ring buffer with the specified capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is not a power of 2 or is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        assert!(
            capacity.is_power_of_two(),
            "Capacity must be a power of 2, got {}",
            capacity
        );

        Self {
            buffer: vec![0; capacity],
            position: 0,
            mask: capacity - 1,
        }
    }

    /// Dictionary for the 4 KB bit-flag method.
    pub fn lzss_4k() -> Self {
        Self::new(sizes::LZSS_4K)
    }

    /// Dictionary for the 8 KB flag-byte methods.
    pub fn lzss_8k() -> Self {
        Self::new(sizes::LZSS_8K)
    }

    /// Get the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Get the current write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Write a single byte at the write position and advance it.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buffer[self.position] = byte;
        self.position = (self.position + 1) & self.mask;
    }

    /// Read the byte stored at `index`, taken modulo the capacity.
    #[inline]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.buffer[index & self.mask]
    }

    /// Index `distance` slots behind the write position, wrapped.
    #[inline]
    pub fn index_behind(&self, distance: usize) -> usize {
        self.position.wrapping_sub(distance) & self.mask
    }

    /// Copy `length` bytes starting at dictionary index `start`.
    ///
    /// Each byte is read, appended to `output`, and written back into the
    /// dictionary before the next one is read, so overlapping sources
    /// produce repeating runs. Copying stops early once `output` holds
    /// `limit` bytes. Returns the number of bytes copied.
    pub fn copy_match(
        &mut self,
        start: usize,
        length: usize,
        output: &mut Vec<u8>,
        limit: usize,
    ) -> usize {
        let mut src = start & self.mask;
        let mut copied = 0;

        while copied < length && output.len() < limit {
            let byte = self.byte_at(src);
            output.push(byte);
            self.write_byte(byte);
            src = (src + 1) & self.mask;
            copied += 1;
        }

        copied
    }
}
