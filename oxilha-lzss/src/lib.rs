//! # OxiLHA LZSS
//!
//! Decompression engine for LHA entry payloads.
//!
//! - **lh0**: Stored (no compression)
//! - **lh1**: 4KB window, bit-flag LZSS
//! - **lh4-lh7**: 8KB window, flag-byte LZSS
//! - **lhd**: Directory (no payload)
//!
//! Other LHA-family tags are passed through untouched.
//!
//! The `lh4`-`lh7` routine decodes a fixed flag-byte token layout only. The
//! adaptive Huffman stage of the full format is not implemented.
//!
//! ## Example
//!
//! ```rust
//! use oxilha_lzss::{LhaMethod, decode_lha};
//!
//! let payload = [0x07, b'a', b'b', b'c', 0x03, 0x03];
//! let data = decode_lha(&payload, LhaMethod::Lh5, 9);
//! assert_eq!(data, b"abcabcabc");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod flagbyte;
pub mod lzss;
pub mod methods;

// Re-exports
pub use decode::decode_lha;
pub use flagbyte::FlagByteDecoder;
pub use lzss::{LzssDecoder, LzssToken};
pub use methods::LhaMethod;
