//! Bounds-checked little-endian reads over the archive buffer.

use crate::header::StopReason;

/// A read position into an in-memory archive.
#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at `position`.
    pub(crate) fn new(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    /// Current position.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Bytes left after the current position.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Read `count` bytes and advance.
    pub(crate) fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], StopReason> {
        let available = self.remaining();
        if count > available {
            return Err(StopReason::Truncated {
                needed: count,
                available,
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read a fixed-size array and advance.
    pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], StopReason> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, StopReason> {
        Ok(self.read_array::<1>()?[0])
    }

    pub(crate) fn read_u16_le(&mut self) -> Result<u16, StopReason> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub(crate) fn read_u32_le(&mut self) -> Result<u32, StopReason> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Advance by `count` bytes.
    pub(crate) fn skip(&mut self, count: usize) -> Result<(), StopReason> {
        self.read_bytes(count).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data, 0);

        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x12345678);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_truncated_read_does_not_advance() {
        let data = [0xAA, 0xBB, 0xCC];
        let mut cursor = ByteCursor::new(&data, 1);

        let err = cursor.read_u32_le().unwrap_err();
        assert_eq!(
            err,
            StopReason::Truncated {
                needed: 4,
                available: 2
            }
        );
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[0xBB, 0xCC]);
    }

    #[test]
    fn test_skip() {
        let data = [0u8; 10];
        let mut cursor = ByteCursor::new(&data, 2);
        cursor.skip(5).unwrap();
        assert_eq!(cursor.position(), 7);
        assert!(cursor.skip(4).is_err());
    }

    #[test]
    fn test_start_past_end() {
        let data = [1u8, 2];
        let cursor = ByteCursor::new(&data, 5);
        assert_eq!(cursor.remaining(), 0);
    }
}
