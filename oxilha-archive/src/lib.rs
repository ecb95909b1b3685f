//! # OxiLHA Archive
//!
//! Reading and writing of LHA/LZH archives.
//!
//! - **Reading**: header levels 0, 1, and 2; store, 4KB bit-flag LZSS and
//!   8KB flag-byte LZSS payloads; directory entries. Damaged archives yield
//!   every entry before the first unreadable header.
//! - **Writing**: stored entries and directories, header level 0, 1, or 2.
//!
//! ## Example
//!
//! ```rust
//! use oxilha_archive::{LhaFileInput, create, extract_all};
//!
//! let archive = create(&[
//!     LhaFileInput::new("hello.txt", b"Hello, World!".as_slice()),
//!     LhaFileInput::new("empty.bin", Vec::new()),
//! ])
//! .unwrap();
//!
//! let entries = extract_all(&archive);
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].filename, "hello.txt");
//! assert_eq!(entries[0].data, b"Hello, World!");
//! assert!(entries[0].verify_crc().is_ok());
//! ```
//!
//! ## Partial recovery
//!
//! ```rust
//! use oxilha_archive::{LhaFileInput, LhaReader, StopReason, create};
//!
//! let mut archive = create(&[LhaFileInput::new("a.txt", b"abc".as_slice())]).unwrap();
//! // Replace the end marker with a header cut short
//! archive.pop();
//! archive.extend_from_slice(&[27, 0, b'-', b'l', b'h']);
//!
//! let mut reader = LhaReader::new(&archive);
//! assert_eq!(reader.by_ref().count(), 1);
//! assert!(matches!(reader.stop_reason(), Some(StopReason::Truncated { .. })));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod cursor;
pub mod entry;
pub mod filename;
pub mod header;
pub mod options;
pub mod reader;
pub mod time;
pub mod writer;

// Re-exports
pub use entry::{ArchiveEntry, LhaFileInput};
pub use header::{HeaderLevel, HeaderOutcome, LhaHeader, StopReason};
pub use options::{ReaderOptions, WriterOptions};
pub use oxilha_core::{LhaError, Result};
pub use oxilha_lzss::LhaMethod;
pub use reader::{LhaReader, extract_all, extract_all_with_options};
pub use time::DosDateTime;
pub use writer::{LhaWriter, create, create_with_options};
