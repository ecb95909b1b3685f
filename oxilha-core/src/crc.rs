//! Checksums used by LHA archives.
//!
//! - **CRC-16/XMODEM** (polynomial 0x1021, MSB-first, initial value 0):
//!   integrity value stored in every entry header.
//! - **Header checksum**: 8-bit additive sum over the header bytes that
//!   follow the size and checksum fields.

/// CRC-16 lookup table (polynomial 0x1021, MSB-first).
const CRC16_TABLE: [u16; 256] = {
    let mut table = [0u16; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut j = 0;
        while j < 8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// CRC-16 calculator (CCITT polynomial, MSB-first).
///
/// - Polynomial: 0x1021
/// - Initial value: 0x0000
/// - No reflection, no final XOR
///
/// # Example
///
/// ```
/// use oxilha_core::crc::Crc16;
///
/// let mut crc = Crc16::new();
/// crc.update(b"123456789");
/// assert_eq!(crc.finalize(), 0x31C3);
/// ```
#[derive(Debug, Clone)]
pub struct Crc16 {
    crc: u16,
}

impl Crc16 {
    /// Create a new CRC-16 calculator.
    pub fn new() -> Self {
        Self { crc: 0x0000 }
    }

    /// Reset the CRC to its initial state.
    pub fn reset(&mut self) {
        self.crc = 0x0000;
    }

    /// Update the CRC with more data.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            let index = ((self.crc >> 8) ^ byte as u16) & 0xFF;
            self.crc = (self.crc << 8) ^ CRC16_TABLE[index as usize];
        }
    }

    /// Get the current CRC value.
    pub fn value(&self) -> u16 {
        self.crc
    }

    /// Finalize and return the CRC value.
    pub fn finalize(self) -> u16 {
        self.crc
    }

    /// Compute CRC-16 for a slice in one call.
    pub fn compute(data: &[u8]) -> u16 {
        let mut crc = Self::new();
        crc.update(data);
        crc.finalize()
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum of `length` bytes starting at `start`, modulo 256.
///
/// Bytes past the end of `bytes` are not counted, so a short buffer yields
/// the sum of whatever is present.
pub fn header_checksum(bytes: &[u8], start: usize, length: usize) -> u8 {
    bytes
        .iter()
        .skip(start)
        .take(length)
        .fold(0u8, |acc, &b| acc.wrapping_add(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit-at-a-time reference implementation.
    fn crc16_bitwise(data: &[u8]) -> u16 {
        let mut crc: u16 = 0;
        for &byte in data {
            crc ^= (byte as u16) << 8;
            for _ in 0..8 {
                if crc & 0x8000 != 0 {
                    crc = (crc << 1) ^ 0x1021;
                } else {
                    crc <<= 1;
                }
            }
        }
        crc
    }

    #[test]
    fn test_crc16_empty() {
        assert_eq!(Crc16::compute(b""), 0x0000);
    }

    #[test]
    fn test_crc16_zero_byte() {
        assert_eq!(Crc16::compute(&[0x00]), 0x0000);
    }

    #[test]
    fn test_crc16_check() {
        // Standard CRC-16/XMODEM check value for "123456789"
        assert_eq!(Crc16::compute(b"123456789"), 0x31C3);
    }

    #[test]
    fn test_crc16_incremental() {
        let mut crc = Crc16::new();
        crc.update(b"12345");
        crc.update(b"6789");
        assert_eq!(crc.value(), 0x31C3);

        crc.reset();
        assert_eq!(crc.finalize(), 0x0000);
    }

    #[test]
    fn test_crc16_matches_bitwise_reference() {
        let mut data = Vec::with_capacity(1024);
        let mut seed: u32 = 0x1234_5678;
        for _ in 0..1024 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            data.push((seed >> 16) as u8);
        }

        for len in [0, 1, 2, 7, 64, 255, 1024] {
            assert_eq!(
                Crc16::compute(&data[..len]),
                crc16_bitwise(&data[..len]),
                "length {}",
                len
            );
        }
    }

    #[test]
    fn test_crc16_stable() {
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(Crc16::compute(data), Crc16::compute(data));
    }

    #[test]
    fn test_header_checksum() {
        let bytes = [0x10, 0xFF, 0x01, 0x02, 0xFF, 0x80, 0x80];
        assert_eq!(header_checksum(&bytes, 2, 2), 0x03);
        // 0x01 + 0x02 + 0xFF + 0x80 + 0x80 = 0x202
        assert_eq!(header_checksum(&bytes, 2, 5), 0x02);
        assert_eq!(header_checksum(&bytes, 0, 0), 0x00);
    }

    #[test]
    fn test_header_checksum_short_buffer() {
        let bytes = [0x05, 0x00, 0x01, 0x01];
        assert_eq!(header_checksum(&bytes, 2, 100), 0x02);
        assert_eq!(header_checksum(&bytes, 10, 4), 0x00);
    }
}
