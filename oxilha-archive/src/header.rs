//! LHA entry headers, levels 0 to 2.
//!
//! Common layout (offsets from the header start):
//!
//! ```text
//!  0  header size      1   0 = end of archive
//!  1  header checksum  1   sum of bytes [2, 2 + header size) mod 256
//!  2  method tag       5
//!  7  compressed size  4   little-endian
//! 11  original size    4   little-endian
//! 15  packed time      2
//! 17  packed date      2
//! 19  attributes       1
//! 20  level            1
//! 21  filename length  1
//! 22  filename         N
//! 22+N CRC-16          2
//! 24+N OS id           1   level >= 1
//! ```
//!
//! Level 1 follows with extension blocks, each a 2-byte size (counting the
//! size field) and `size - 2` content bytes, ended by a zero size. Level 2
//! follows with a 2-byte total header size; anything it declares beyond the
//! header-size byte is skipped.

use crate::cursor::ByteCursor;
use crate::filename::{
    decode_directory, decode_filename, read_filename, strip_control, with_placeholder,
};
use crate::options::ReaderOptions;
use crate::time::DosDateTime;
use oxilha_core::error::{LhaError, Result};
use oxilha_core::header_checksum;
use oxilha_lzss::LhaMethod;
use std::fmt;

/// Extension type carrying the filename.
const EXT_FILENAME: u8 = 0x01;
/// Extension type carrying the directory name.
const EXT_DIRECTORY: u8 = 0x02;

/// Header level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeaderLevel {
    /// Level 0: base fields only.
    #[default]
    Level0,
    /// Level 1: OS id and extension blocks.
    Level1,
    /// Level 2: OS id and total header size.
    Level2,
}

impl HeaderLevel {
    /// Parse the level byte.
    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Level0),
            1 => Some(Self::Level1),
            2 => Some(Self::Level2),
            _ => None,
        }
    }

    /// The level byte.
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Level0 => 0,
            Self::Level1 => 1,
            Self::Level2 => 2,
        }
    }

    /// Header-size byte value for an empty filename.
    pub fn header_size_without_name(&self) -> usize {
        match self {
            // method, sizes, time, date, attributes, level, name length, CRC
            Self::Level0 => 22,
            // + OS id + extension terminator
            Self::Level1 => 25,
            // + OS id + total header size
            Self::Level2 => 25,
        }
    }
}

/// Why header parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// A zero header-size byte.
    EndMarker,
    /// The cursor reached the end of the buffer.
    Exhausted,
    /// A field or payload runs past the end of the buffer.
    Truncated {
        /// Bytes the field needed.
        needed: usize,
        /// Bytes that were left.
        available: usize,
    },
    /// Header-size byte above the configured limit.
    InvalidHeaderSize(u8),
    /// Method tag outside the LHA family.
    UnknownMethod([u8; 5]),
    /// Compressed size larger than the rest of the buffer.
    CompressedSizeOutOfBounds {
        /// Declared compressed size.
        declared: u32,
        /// Bytes left after the size fields.
        remaining: usize,
    },
    /// Original size above the configured limit.
    OriginalSizeTooLarge {
        /// Declared original size.
        declared: u32,
        /// Configured limit.
        limit: u64,
    },
    /// Level byte other than 0, 1, or 2.
    UnsupportedLevel(u8),
    /// Level-1 extension block with a size below 2.
    MalformedExtension(u16),
}

impl StopReason {
    /// Whether this is the archive's normal end rather than damage.
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::EndMarker | Self::Exhausted)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndMarker => write!(f, "end-of-archive marker"),
            Self::Exhausted => write!(f, "end of input"),
            Self::Truncated { needed, available } => {
                write!(f, "truncated: needed {} bytes, {} left", needed, available)
            }
            Self::InvalidHeaderSize(size) => write!(f, "invalid header size {}", size),
            Self::UnknownMethod(tag) => {
                write!(f, "unknown method tag {:?}", String::from_utf8_lossy(tag))
            }
            Self::CompressedSizeOutOfBounds {
                declared,
                remaining,
            } => write!(
                f,
                "compressed size {} exceeds remaining {} bytes",
                declared, remaining
            ),
            Self::OriginalSizeTooLarge { declared, limit } => {
                write!(f, "original size {} exceeds limit {}", declared, limit)
            }
            Self::UnsupportedLevel(level) => write!(f, "unsupported header level {}", level),
            Self::MalformedExtension(size) => write!(f, "malformed extension size {}", size),
        }
    }
}

/// Result of parsing at one position.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderOutcome {
    /// A complete header.
    Parsed(LhaHeader),
    /// No entry here; reading stops.
    End(StopReason),
}

/// LHA header.
#[derive(Debug, Clone, PartialEq)]
pub struct LhaHeader {
    /// Header-size byte.
    pub header_size: u8,
    /// Checksum byte as stored.
    pub checksum: u8,
    /// Whether the stored checksum matches the header bytes.
    pub checksum_valid: bool,
    /// Compression method.
    pub method: LhaMethod,
    /// Compressed size.
    pub compressed_size: u32,
    /// Original (uncompressed) size.
    pub original_size: u32,
    /// Packed modification time.
    pub timestamp: DosDateTime,
    /// Attribute byte.
    pub attributes: u8,
    /// Header level.
    pub level: HeaderLevel,
    /// Decoded, cleaned filename.
    pub filename: String,
    /// CRC-16 of the original data.
    pub crc16: u16,
    /// OS identifier (level >= 1).
    pub os_id: Option<u8>,
    /// Offset of the header in the archive.
    pub offset: usize,
    /// Offset of the payload in the archive.
    pub data_offset: usize,
}

impl LhaHeader {
    /// Parse the header starting at `offset`.
    pub fn parse(data: &[u8], offset: usize, options: &ReaderOptions) -> HeaderOutcome {
        match Self::parse_fields(data, offset, options) {
            Ok(header) => HeaderOutcome::Parsed(header),
            Err(reason) => HeaderOutcome::End(reason),
        }
    }

    fn parse_fields(
        data: &[u8],
        offset: usize,
        options: &ReaderOptions,
    ) -> std::result::Result<Self, StopReason> {
        let mut cursor = ByteCursor::new(data, offset);
        if cursor.remaining() == 0 {
            return Err(StopReason::Exhausted);
        }

        let header_size = cursor.read_u8()?;
        if header_size == 0 {
            return Err(StopReason::EndMarker);
        }
        if header_size > options.max_header_size {
            return Err(StopReason::InvalidHeaderSize(header_size));
        }

        let checksum = cursor.read_u8()?;

        let tag: [u8; 5] = cursor.read_array()?;
        let method = LhaMethod::from_id(&tag).ok_or(StopReason::UnknownMethod(tag))?;

        let compressed_size = cursor.read_u32_le()?;
        let original_size = cursor.read_u32_le()?;
        if compressed_size as usize > cursor.remaining() {
            return Err(StopReason::CompressedSizeOutOfBounds {
                declared: compressed_size,
                remaining: cursor.remaining(),
            });
        }
        if original_size as u64 > options.max_original_size {
            return Err(StopReason::OriginalSizeTooLarge {
                declared: original_size,
                limit: options.max_original_size,
            });
        }

        let time = cursor.read_u16_le()?;
        let date = cursor.read_u16_le()?;
        let attributes = cursor.read_u8()?;
        let level_byte = cursor.read_u8()?;
        let level =
            HeaderLevel::from_u8(level_byte).ok_or(StopReason::UnsupportedLevel(level_byte))?;

        let name_len = cursor.read_u8()? as usize;
        let name_bytes = cursor.read_bytes(name_len)?;
        let crc16 = cursor.read_u16_le()?;

        let os_id = match level {
            HeaderLevel::Level0 => None,
            HeaderLevel::Level1 | HeaderLevel::Level2 => Some(cursor.read_u8()?),
        };

        let mut ext_name = None;
        let mut ext_dir = None;
        match level {
            HeaderLevel::Level0 => {
                // Extended area covered by the header-size byte
                let header_end = offset + 2 + header_size as usize;
                if header_end > cursor.position() {
                    let extra = header_end - cursor.position();
                    log::debug!("skipping {} bytes of level-0 extended area", extra);
                    cursor.skip(extra)?;
                }
            }
            HeaderLevel::Level1 => loop {
                let size = cursor.read_u16_le()?;
                if size == 0 {
                    break;
                }
                if size < 2 {
                    return Err(StopReason::MalformedExtension(size));
                }
                let block = cursor.read_bytes(size as usize - 2)?;
                match block.split_first() {
                    Some((&EXT_FILENAME, name)) => {
                        ext_name = Some(strip_control(&decode_filename(name)))
                    }
                    Some((&EXT_DIRECTORY, dir)) => ext_dir = Some(decode_directory(dir)),
                    Some((kind, _)) => {
                        log::debug!("skipping extension 0x{:02x} ({} bytes)", kind, size)
                    }
                    None => {}
                }
            },
            HeaderLevel::Level2 => {
                let total = cursor.read_u16_le()?;
                if total > header_size as u16 {
                    let extra = (total - header_size as u16) as usize;
                    log::debug!("skipping {} bytes of level-2 header", extra);
                    cursor.skip(extra)?;
                }
            }
        }

        let filename = match (ext_dir, ext_name) {
            (None, None) => read_filename(name_bytes),
            (dir, name) => {
                let base = name.unwrap_or_else(|| read_filename(name_bytes));
                match dir.filter(|d| !d.is_empty()) {
                    Some(dir) if dir.ends_with('/') => with_placeholder(format!("{}{}", dir, base)),
                    Some(dir) => with_placeholder(format!("{}/{}", dir, base)),
                    None => with_placeholder(base),
                }
            }
        };

        let header_end = offset + 2 + header_size as usize;
        let checksum_valid = header_end <= data.len()
            && header_checksum(data, offset + 2, header_size as usize) == checksum;

        Ok(Self {
            header_size,
            checksum,
            checksum_valid,
            method,
            compressed_size,
            original_size,
            timestamp: DosDateTime::new(time, date),
            attributes,
            level,
            filename,
            crc16,
            os_id,
            offset,
            data_offset: cursor.position(),
        })
    }

    /// Serialize the header.
    ///
    /// `header_size` and `checksum` are computed from the other fields;
    /// the stored values are ignored. Level 1 headers are written without
    /// extension blocks.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let name = self.filename.as_bytes();
        if name.len() > u8::MAX as usize {
            return Err(LhaError::invalid_header(format!(
                "Filename too long: {} bytes",
                name.len()
            )));
        }

        let mut header = Vec::with_capacity(2 + self.level.header_size_without_name() + name.len());

        // Size and checksum, filled in below
        header.push(0u8);
        header.push(0u8);

        header.extend_from_slice(&self.method.id());
        header.extend_from_slice(&self.compressed_size.to_le_bytes());
        header.extend_from_slice(&self.original_size.to_le_bytes());
        header.extend_from_slice(&self.timestamp.time.to_le_bytes());
        header.extend_from_slice(&self.timestamp.date.to_le_bytes());
        header.push(self.attributes);
        header.push(self.level.as_u8());
        header.push(name.len() as u8);
        header.extend_from_slice(name);
        header.extend_from_slice(&self.crc16.to_le_bytes());

        let mut total_size_at = None;
        match self.level {
            HeaderLevel::Level0 => {}
            HeaderLevel::Level1 => {
                header.push(self.os_id.unwrap_or(b'U'));
                // No extension blocks
                header.extend_from_slice(&0u16.to_le_bytes());
            }
            HeaderLevel::Level2 => {
                header.push(self.os_id.unwrap_or(b'U'));
                total_size_at = Some(header.len());
                header.extend_from_slice(&0u16.to_le_bytes());
            }
        }

        let header_size = header.len() - 2;
        let header_size = u8::try_from(header_size).map_err(|_| {
            LhaError::invalid_header(format!("Header too large: {} bytes", header_size))
        })?;
        header[0] = header_size;

        if let Some(at) = total_size_at {
            header[at..at + 2].copy_from_slice(&(header_size as u16).to_le_bytes());
        }

        header[1] = header_checksum(&header, 2, header_size as usize);

        Ok(header)
    }
}
