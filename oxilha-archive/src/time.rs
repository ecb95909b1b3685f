//! Packed date/time fields.
//!
//! LHA headers store the modification time as two 16-bit words:
//!
//! ```text
//! time: hour (5) | minute (6) | second / 2 (5)
//! date: year - 1980 (7) | month (4) | day (5)
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// First representable year.
pub const MIN_YEAR: i32 = 1980;
/// Last representable year.
pub const MAX_YEAR: i32 = 2107;

/// A packed time/date pair as stored in a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DosDateTime {
    /// Packed time word.
    pub time: u16,
    /// Packed date word.
    pub date: u16,
}

impl DosDateTime {
    /// Wrap raw words.
    pub fn new(time: u16, date: u16) -> Self {
        Self { time, date }
    }

    /// Year field.
    pub fn year(&self) -> i32 {
        MIN_YEAR + (self.date >> 9) as i32
    }

    /// Month field (1-12 in a well-formed value).
    pub fn month(&self) -> u32 {
        ((self.date >> 5) & 0x0F) as u32
    }

    /// Day field.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F) as u32
    }

    /// Hour field.
    pub fn hour(&self) -> u32 {
        (self.time >> 11) as u32
    }

    /// Minute field.
    pub fn minute(&self) -> u32 {
        ((self.time >> 5) & 0x3F) as u32
    }

    /// Second field (always even).
    pub fn second(&self) -> u32 {
        (self.time & 0x1F) as u32 * 2
    }

    /// Convert to a calendar timestamp.
    ///
    /// Returns `None` when a field is out of range (month 0, hour 25, ...).
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())?.and_hms_opt(
            self.hour(),
            self.minute(),
            self.second(),
        )
    }

    /// Pack a calendar timestamp.
    ///
    /// The year is clamped to 1980..=2107 and seconds are rounded down to an
    /// even value.
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        let year = datetime.year().clamp(MIN_YEAR, MAX_YEAR);
        let date = (((year - MIN_YEAR) as u16) << 9)
            | ((datetime.month() as u16) << 5)
            | datetime.day() as u16;
        let time = ((datetime.hour() as u16) << 11)
            | ((datetime.minute() as u16) << 5)
            | (datetime.second() / 2) as u16;
        Self { time, date }
    }
}

/// 1980-01-01 00:00:00, the smallest packed timestamp.
pub fn dos_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(MIN_YEAR, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
