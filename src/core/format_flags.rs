//! Header format flags

use super::category::{parse_names, write_names};
use super::error::{LoggerError, Result};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Independent switches controlling the header written before each line.
    ///
    /// Any combination is valid. With no flag set the line is the bare payload.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u8 {
        /// `YYYY/MM/DD `
        const DATE = 1 << 0;
        /// `HH:MM:SS `
        const TIME = 1 << 1;
        /// `HH:MM:SS.ffffff `, implies the time fields
        const MICROSECONDS = 1 << 2;
        /// Render date and time in UTC instead of local time
        const UTC = 1 << 3;
        /// Append the logger prefix after the timestamp
        const PREFIX = 1 << 4;
    }
}

const NAMED: [(&str, u64); 5] = [
    ("DATE", FormatFlags::DATE.bits() as u64),
    ("TIME", FormatFlags::TIME.bits() as u64),
    ("MICROSECONDS", FormatFlags::MICROSECONDS.bits() as u64),
    ("UTC", FormatFlags::UTC.bits() as u64),
    ("PREFIX", FormatFlags::PREFIX.bits() as u64),
];

impl FormatFlags {
    /// Payload only, no header.
    pub const NONE: Self = Self::empty();

    /// Every known flag.
    pub const ALL: Self = Self::all();

    /// Flags of a freshly constructed logger.
    pub const DEFAULT: Self = Self::TIME.union(Self::PREFIX);

    /// Whether any timestamp field is rendered.
    #[inline]
    #[must_use]
    pub const fn has_timestamp(self) -> bool {
        self.intersects(Self::DATE.union(Self::TIME).union(Self::MICROSECONDS))
    }

    fn lookup(name: &str) -> Option<u64> {
        match name {
            "ALL" => Some(FormatFlags::ALL.bits() as u64),
            "NONE" => Some(0),
            "MICRO" | "MICROS" => Some(FormatFlags::MICROSECONDS.bits() as u64),
            _ => NAMED.iter().find(|(n, _)| *n == name).map(|(_, bits)| *bits),
        }
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        FormatFlags::DEFAULT
    }
}

impl fmt::Display for FormatFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        write_names(f, self.bits() as u64, &NAMED)
    }
}

impl FromStr for FormatFlags {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = parse_names(s, "FormatFlags", FormatFlags::lookup)?;
        let bits = u8::try_from(bits)
            .map_err(|_| LoggerError::config("FormatFlags", format!("value out of range: {:#x}", bits)))?;
        Ok(FormatFlags::from_bits_retain(bits))
    }
}

impl Serialize for FormatFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FormatFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
