//! # OxiLHA Core
//!
//! Core components for the OxiLHA archive codec.
//!
//! - [`bitstream`]: LSB-first bit reader over an in-memory buffer
//! - [`ringbuffer`]: Fixed-capacity sliding dictionary for LZSS decoding
//! - [`crc`]: CRC-16 and the additive header checksum
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Container                                           │
//! │     LHA header levels 0-2, reader, writer               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     store, 4KB bit-flag LZSS, 8KB flag-byte LZSS        │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader, RingBuffer, CRC                          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilha_core::bitstream::BitReader;
//! use oxilha_core::crc::Crc16;
//!
//! let data = [0xAB, 0xCD];
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(12), Some(0xDAB));
//!
//! assert_eq!(Crc16::compute(b"123456789"), 0x31C3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod crc;
pub mod error;
pub mod ringbuffer;

// Re-exports for convenience
pub use bitstream::BitReader;
pub use crc::{Crc16, header_checksum};
pub use error::{LhaError, Result};
pub use ringbuffer::RingBuffer;
