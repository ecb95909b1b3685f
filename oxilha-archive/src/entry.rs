//! Decoded archive entries and writer inputs.

use crate::header::{HeaderLevel, LhaHeader};
use crate::time::dos_epoch;
use chrono::NaiveDateTime;
use oxilha_core::Crc16;
use oxilha_core::error::{LhaError, Result};
use oxilha_lzss::LhaMethod;

/// Directory attribute bit.
pub const ATTR_DIRECTORY: u8 = 0x10;

/// A decoded entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArchiveEntry {
    /// Cleaned filename; never empty.
    pub filename: String,
    /// Size before compression.
    pub original_size: u64,
    /// Size of the payload in the archive.
    pub compressed_size: u64,
    /// Modification time.
    pub timestamp: NaiveDateTime,
    /// CRC-16 as declared in the header.
    pub crc: u16,
    /// Compression method.
    pub method: LhaMethod,
    /// OS identifier (level >= 1).
    pub os: Option<u8>,
    /// Attribute byte.
    pub attributes: u8,
    /// Header level.
    pub level: HeaderLevel,
    /// Whether the header checksum matched.
    pub header_checksum_ok: bool,
    /// Decoded payload; empty for directories.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub data: Vec<u8>,
}

impl ArchiveEntry {
    /// Build an entry from a parsed header and its decoded payload.
    pub fn from_header(header: &LhaHeader, data: Vec<u8>) -> Self {
        let timestamp = header.timestamp.to_datetime().unwrap_or_else(|| {
            log::debug!(
                "{}: invalid packed date 0x{:04x}/0x{:04x}, using 1980-01-01",
                header.filename,
                header.timestamp.date,
                header.timestamp.time
            );
            dos_epoch()
        });

        Self {
            filename: header.filename.clone(),
            original_size: header.original_size as u64,
            compressed_size: header.compressed_size as u64,
            timestamp,
            crc: header.crc16,
            method: header.method,
            os: header.os_id,
            attributes: header.attributes,
            level: header.level,
            header_checksum_ok: header.checksum_valid,
            data,
        }
    }

    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.method.is_directory()
            || self.attributes & ATTR_DIRECTORY != 0
            || self.filename.ends_with('/')
    }

    /// CRC-16 of the decoded payload.
    pub fn computed_crc(&self) -> u16 {
        Crc16::compute(&self.data)
    }

    /// Check the decoded payload against the declared CRC.
    pub fn verify_crc(&self) -> Result<()> {
        let computed = self.computed_crc();
        if computed != self.crc {
            return Err(LhaError::crc_mismatch(self.crc, computed));
        }
        Ok(())
    }
}

/// A file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LhaFileInput {
    /// Name stored in the header.
    pub filename: String,
    /// Raw contents.
    pub data: Vec<u8>,
    /// Modification time; the current local time when `None`.
    pub timestamp: Option<NaiveDateTime>,
}

impl LhaFileInput {
    /// Create an input without a timestamp.
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
            timestamp: None,
        }
    }

    /// Set the modification time.
    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
