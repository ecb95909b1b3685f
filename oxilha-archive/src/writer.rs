//! Archive writer.
//!
//! Entries are stored (`-lh0-`); directories use `-lhd-` with no payload.
//! The archive is closed by a single zero byte.

use crate::entry::{ATTR_DIRECTORY, LhaFileInput};
use crate::filename::truncate_utf8;
use crate::header::{HeaderLevel, LhaHeader};
use crate::options::WriterOptions;
use crate::time::DosDateTime;
use chrono::NaiveDateTime;
use oxilha_core::Crc16;
use oxilha_core::error::{LhaError, Result};
use oxilha_lzss::LhaMethod;
use std::io::Write;

/// LHA archive writer.
#[derive(Debug)]
pub struct LhaWriter<W: Write> {
    writer: W,
    options: WriterOptions,
    finished: bool,
}

impl<W: Write> LhaWriter<W> {
    /// Create a writer with default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, WriterOptions::DEFAULT)
    }

    /// Create a writer with custom options.
    pub fn with_options(writer: W, options: WriterOptions) -> Self {
        Self {
            writer,
            options,
            finished: false,
        }
    }

    /// Options in use.
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Add a stored file.
    pub fn add_file(&mut self, input: &LhaFileInput) -> Result<()> {
        self.check_open()?;

        let size = u32::try_from(input.data.len()).map_err(|_| {
            LhaError::invalid_header(format!(
                "{}: {} bytes does not fit a 32-bit size field",
                input.filename,
                input.data.len()
            ))
        })?;

        let filename = self.fit_filename(&input.filename, false)?;
        let header = self.header(
            filename,
            LhaMethod::Lh0,
            size,
            Crc16::compute(&input.data),
            self.options.attributes,
            input.timestamp,
        );

        self.writer.write_all(&header.to_bytes()?)?;
        self.writer.write_all(&input.data)?;
        Ok(())
    }

    /// Add a directory entry.
    ///
    /// A trailing `/` is appended when missing.
    pub fn add_directory(&mut self, name: &str, timestamp: Option<NaiveDateTime>) -> Result<()> {
        self.check_open()?;

        let filename = self.fit_filename(name, true)?;
        let header = self.header(filename, LhaMethod::Lhd, 0, 0, ATTR_DIRECTORY, timestamp);

        self.writer.write_all(&header.to_bytes()?)?;
        Ok(())
    }

    /// Write the end marker and flush. Further calls do nothing.
    pub fn finish(&mut self) -> Result<()> {
        if !self.finished {
            self.writer.write_all(&[0u8])?;
            self.writer.flush()?;
            self.finished = true;
        }
        Ok(())
    }

    /// Finish the archive and return the inner writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.finish()?;
        Ok(self.writer)
    }

    fn check_open(&self) -> Result<()> {
        if self.finished {
            return Err(LhaError::invalid_header("archive already finished"));
        }
        Ok(())
    }

    fn header(
        &self,
        filename: String,
        method: LhaMethod,
        size: u32,
        crc16: u16,
        attributes: u8,
        timestamp: Option<NaiveDateTime>,
    ) -> LhaHeader {
        let timestamp = timestamp.unwrap_or_else(|| chrono::Local::now().naive_local());
        let level = self.options.level;

        LhaHeader {
            header_size: 0,
            checksum: 0,
            checksum_valid: true,
            method,
            compressed_size: size,
            original_size: size,
            timestamp: DosDateTime::from_datetime(&timestamp),
            attributes,
            level,
            filename,
            crc16,
            os_id: (level != HeaderLevel::Level0).then_some(self.options.os_id),
            offset: 0,
            data_offset: 0,
        }
    }

    /// Validate a name and shorten it to what fits the header.
    fn fit_filename(&self, name: &str, directory: bool) -> Result<String> {
        if name.is_empty() {
            return Err(LhaError::encoding_error("empty filename"));
        }
        // Stripped on read
        if name.chars().any(char::is_control) {
            return Err(LhaError::encoding_error(format!(
                "filename {:?} contains control characters",
                name
            )));
        }

        let suffix = if directory && !name.ends_with('/') {
            "/"
        } else {
            ""
        };
        let max_len = self.options.max_filename_len();
        if name.len() + suffix.len() <= max_len {
            return Ok(format!("{}{}", name, suffix));
        }

        // Keep the directory slash when shortening
        let base = if directory {
            name.trim_end_matches('/')
        } else {
            name
        };
        let reserve = usize::from(directory);
        let short = truncate_utf8(base, max_len.saturating_sub(reserve));
        if short.is_empty() {
            return Err(LhaError::encoding_error(format!(
                "no room for filename {:?} in a {}-byte header",
                name, self.options.max_header_size
            )));
        }

        let fitted = if directory {
            format!("{}/", short)
        } else {
            short.to_string()
        };
        log::warn!(
            "filename {:?} shortened to {:?} ({} bytes max)",
            name,
            fitted,
            max_len
        );
        Ok(fitted)
    }
}

/// Build a stored archive from `inputs`.
pub fn create(inputs: &[LhaFileInput]) -> Result<Vec<u8>> {
    create_with_options(inputs, WriterOptions::DEFAULT)
}

/// [`create`] with custom header options.
pub fn create_with_options(inputs: &[LhaFileInput], options: WriterOptions) -> Result<Vec<u8>> {
    let capacity = inputs
        .iter()
        .map(|input| input.data.len() + input.filename.len() + 32)
        .sum::<usize>()
        + 1;
    let mut writer = LhaWriter::with_options(Vec::with_capacity(capacity), options);
    for input in inputs {
        writer.add_file(input)?;
    }
    writer.into_inner()
}
