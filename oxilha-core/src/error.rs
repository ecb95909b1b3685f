//! Error types for OxiLHA operations.
//!
//! Archive *content* problems (truncation, malformed headers) are not errors:
//! the reader reports them as a stop reason and keeps what it recovered.
//! This type covers the remaining failures: the writer's sink, filename
//! encoding, and explicit CRC verification.

use std::io;
use thiserror::Error;

/// The main error type for OxiLHA operations.
#[derive(Debug, Error)]
pub enum LhaError {
    /// I/O error from the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A header could not be produced in a wire-compatible form.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// CRC-16 mismatch between the header and the decoded payload.
    #[error("CRC mismatch: expected {expected:#06x}, computed {computed:#06x}")]
    CrcMismatch {
        /// CRC declared in the archive header.
        expected: u16,
        /// CRC computed over the decoded data.
        computed: u16,
    },

    /// Filename could not be encoded for the archive.
    #[error("Encoding error: {message}")]
    EncodingError {
        /// Description of the encoding error.
        message: String,
    },
}

/// Result type alias for OxiLHA operations.
pub type Result<T> = std::result::Result<T, LhaError>;

impl LhaError {
    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create a CRC mismatch error.
    pub fn crc_mismatch(expected: u16, computed: u16) -> Self {
        Self::CrcMismatch { expected, computed }
    }

    /// Create an encoding error.
    pub fn encoding_error(message: impl Into<String>) -> Self {
        Self::EncodingError {
            message: message.into(),
        }
    }
}
