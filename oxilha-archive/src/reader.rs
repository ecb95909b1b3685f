//! Archive reader.
//!
//! Reading never fails: every header that parses is decoded and yielded, and
//! the first position that does not hold a complete header ends the archive.
//! The reason is kept in [`LhaReader::stop_reason`].

use crate::entry::ArchiveEntry;
use crate::header::{HeaderOutcome, LhaHeader, StopReason};
use crate::options::ReaderOptions;
use oxilha_lzss::decode_lha;

/// Sequential reader over an in-memory archive.
#[derive(Debug, Clone)]
pub struct LhaReader<'a> {
    data: &'a [u8],
    position: usize,
    options: ReaderOptions,
    stop: Option<StopReason>,
    entries_read: usize,
}

impl<'a> LhaReader<'a> {
    /// Create a reader with default limits.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, ReaderOptions::DEFAULT)
    }

    /// Create a reader with custom limits.
    pub fn with_options(data: &'a [u8], options: ReaderOptions) -> Self {
        Self {
            data,
            position: 0,
            options,
            stop: None,
            entries_read: 0,
        }
    }

    /// Read the next entry, or `None` once reading has stopped.
    pub fn next_entry(&mut self) -> Option<ArchiveEntry> {
        if self.stop.is_some() {
            return None;
        }

        match self.read_entry() {
            Ok(entry) => {
                self.entries_read += 1;
                Some(entry)
            }
            Err(reason) => {
                if reason.is_clean() {
                    log::debug!(
                        "archive ended ({}) after {} entries",
                        reason,
                        self.entries_read
                    );
                } else {
                    log::debug!(
                        "stopped reading at offset {} ({}) after {} entries",
                        self.position,
                        reason,
                        self.entries_read
                    );
                }
                self.stop = Some(reason);
                None
            }
        }
    }

    fn read_entry(&mut self) -> Result<ArchiveEntry, StopReason> {
        if self.position >= self.data.len() {
            return Err(StopReason::Exhausted);
        }

        let header = match LhaHeader::parse(self.data, self.position, &self.options) {
            HeaderOutcome::Parsed(header) => header,
            HeaderOutcome::End(reason) => return Err(reason),
        };

        if !header.checksum_valid {
            log::warn!(
                "{}: header checksum mismatch at offset {}",
                header.filename,
                header.offset
            );
        }

        let available = self.data.len().saturating_sub(header.data_offset);
        let compressed_size = header.compressed_size as usize;
        if compressed_size > available {
            log::warn!(
                "{}: payload truncated ({} of {} bytes)",
                header.filename,
                available,
                compressed_size
            );
            return Err(StopReason::Truncated {
                needed: compressed_size,
                available,
            });
        }

        let end = header.data_offset + compressed_size;
        let payload = &self.data[header.data_offset..end];
        let data = decode_lha(payload, header.method, header.original_size as usize);

        self.position = end;
        Ok(ArchiveEntry::from_header(&header, data))
    }

    /// Why reading stopped, once it has.
    pub fn stop_reason(&self) -> Option<&StopReason> {
        self.stop.as_ref()
    }

    /// Offset of the next header.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of entries yielded so far.
    pub fn entries_read(&self) -> usize {
        self.entries_read
    }
}

impl Iterator for LhaReader<'_> {
    type Item = ArchiveEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry()
    }
}

impl std::iter::FusedIterator for LhaReader<'_> {}

/// Decode every entry up to the end marker or the first unreadable header.
pub fn extract_all(data: &[u8]) -> Vec<ArchiveEntry> {
    extract_all_with_options(data, ReaderOptions::DEFAULT)
}

/// [`extract_all`] with custom limits.
pub fn extract_all_with_options(data: &[u8], options: ReaderOptions) -> Vec<ArchiveEntry> {
    LhaReader::with_options(data, options).collect()
}
