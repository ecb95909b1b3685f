//! Reader and writer configuration.

use crate::header::HeaderLevel;

/// Largest accepted header-size byte.
pub const DEFAULT_MAX_HEADER_SIZE: u8 = 128;
/// Largest accepted original size (100 MiB).
pub const DEFAULT_MAX_ORIGINAL_SIZE: u64 = 100 * 1024 * 1024;

/// Limits applied while parsing headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Header-size bytes above this value stop reading.
    pub max_header_size: u8,
    /// Declared original sizes above this value stop reading before any
    /// output buffer is allocated.
    pub max_original_size: u64,
}

impl ReaderOptions {
    /// Standard limits.
    ///
    /// - header size at most 128
    /// - original size at most 100 MiB
    pub const DEFAULT: Self = Self {
        max_header_size: DEFAULT_MAX_HEADER_SIZE,
        max_original_size: DEFAULT_MAX_ORIGINAL_SIZE,
    };

    /// Create options with the standard limits.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the header-size limit.
    pub fn with_max_header_size(mut self, max_header_size: u8) -> Self {
        self.max_header_size = max_header_size;
        self
    }

    /// Set the original-size limit.
    pub fn with_max_original_size(mut self, max_original_size: u64) -> Self {
        self.max_original_size = max_original_size;
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Header layout choices for the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Header level written for every entry.
    pub level: HeaderLevel,
    /// OS identifier written for level 1 and 2 headers.
    pub os_id: u8,
    /// Attribute byte written for file entries.
    pub attributes: u8,
    /// Header-size ceiling the written headers must respect.
    pub max_header_size: u8,
}

impl WriterOptions {
    /// Level 0 headers, `'U'` OS id, archive attribute (0x20).
    pub const DEFAULT: Self = Self {
        level: HeaderLevel::Level0,
        os_id: b'U',
        attributes: 0x20,
        max_header_size: DEFAULT_MAX_HEADER_SIZE,
    };

    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Set the header level.
    pub fn with_level(mut self, level: HeaderLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the OS identifier.
    pub fn with_os_id(mut self, os_id: u8) -> Self {
        self.os_id = os_id;
        self
    }

    /// Set the attribute byte for files.
    pub fn with_attributes(mut self, attributes: u8) -> Self {
        self.attributes = attributes;
        self
    }

    /// Longest filename, in bytes, that keeps a header within
    /// `max_header_size`.
    pub fn max_filename_len(&self) -> usize {
        (self.max_header_size as usize)
            .saturating_sub(self.level.header_size_without_name())
            .min(u8::MAX as usize)
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
