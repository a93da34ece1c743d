//! Category bitmask definitions
//!
//! A category is a plain 64-bit mask. The low bits carry predefined meanings
//! (severity levels first, then structural areas); every other bit is free for
//! callers. A log call passes its category mask and the logger emits it only
//! when the mask shares at least one bit with the logger's filter.

use super::error::{LoggerError, Result};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Category mask of a log call, or the filter of a logger.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_category_logger::Category;
    ///
    /// let filter = Category::INFO | Category::IO;
    /// assert!(filter.should_emit(Category::INFO | Category::NET));
    /// assert!(!filter.should_emit(Category::NET));
    /// assert!(!Category::ALL.should_emit(Category::NONE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Category: u64 {
        const DEBUG = 1 << 0;
        const INFO = 1 << 1;
        const WARN = 1 << 2;
        const ERROR = 1 << 3;
        const FATAL = 1 << 4;
        const SYSTEM = 1 << 5;
        const IO = 1 << 6;
        const NET = 1 << 7;
        const SERVICE = 1 << 8;
        /// Outgoing service request
        const REQUEST = 1 << 9;
        /// Request received and answered
        const RESPONSE = 1 << 10;
        const TIMED = 1 << 11;
        const API = 1 << 12;
        const BACKEND = 1 << 13;
        const FRONTEND = 1 << 14;
        /// Used by the package-level print functions
        const GLOBAL = 1 << 15;
        const ALL = !0;
    }
}

/// Predefined single-bit categories, in bit order.
const NAMED: [(&str, Category); 16] = [
    ("DEBUG", Category::DEBUG),
    ("INFO", Category::INFO),
    ("WARN", Category::WARN),
    ("ERROR", Category::ERROR),
    ("FATAL", Category::FATAL),
    ("SYSTEM", Category::SYSTEM),
    ("IO", Category::IO),
    ("NET", Category::NET),
    ("SERVICE", Category::SERVICE),
    ("REQUEST", Category::REQUEST),
    ("RESPONSE", Category::RESPONSE),
    ("TIMED", Category::TIMED),
    ("API", Category::API),
    ("BACKEND", Category::BACKEND),
    ("FRONTEND", Category::FRONTEND),
    ("GLOBAL", Category::GLOBAL),
];

impl Category {
    /// Matches nothing. As a call category it is never emitted; as a filter it
    /// suppresses everything.
    pub const NONE: Self = Self::empty();

    /// First bit that carries no predefined meaning.
    pub const FIRST_CUSTOM_BIT: u32 = 16;

    /// Single-bit caller-defined category.
    ///
    /// # Panics
    ///
    /// Panics if `bit` is not below 64.
    #[must_use]
    pub const fn custom(bit: u32) -> Self {
        assert!(bit < u64::BITS, "category bit out of range");
        Self::from_bits_retain(1 << bit)
    }

    /// Whether a call with `category` passes this filter.
    #[inline]
    #[must_use]
    pub const fn should_emit(self, category: Category) -> bool {
        self.bits() & category.bits() != 0
    }

    fn lookup(name: &str) -> Option<u64> {
        let category = match name {
            "ALL" => Category::ALL,
            "NONE" => Category::NONE,
            "WARNING" => Category::WARN,
            "REQ" => Category::REQUEST,
            "RES" => Category::RESPONSE,
            "BACK" => Category::BACKEND,
            "FRONT" => Category::FRONTEND,
            _ => NAMED.iter().find(|(n, _)| *n == name)?.1,
        };
        Some(category.bits())
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::ALL
    }
}

/// Writes `|`-joined names for the bits of `bits` found in `names`, followed by
/// any leftover bits in hex.
pub(crate) fn write_names(f: &mut fmt::Formatter<'_>, bits: u64, names: &[(&str, u64)]) -> fmt::Result {
    let mut remaining = bits;
    let mut first = true;
    for &(name, flag) in names {
        if remaining & flag == 0 {
            continue;
        }
        if !first {
            f.write_str("|")?;
        }
        f.write_str(name)?;
        remaining &= !flag;
        first = false;
    }
    if remaining != 0 {
        if !first {
            f.write_str("|")?;
        }
        write!(f, "{:#x}", remaining)?;
    }
    Ok(())
}

/// Parses `|` or `,` separated names or hex values into a bit mask.
pub(crate) fn parse_names(
    input: &str,
    component: &str,
    lookup: impl Fn(&str) -> Option<u64>,
) -> Result<u64> {
    let mut bits = 0u64;
    let mut seen = false;

    for token in input.split(|c| c == '|' || c == ',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        seen = true;

        let value = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
            Some(hex) => u64::from_str_radix(hex, 16).map_err(|e| {
                LoggerError::config(component, format!("invalid hex value '{}': {}", token, e))
            })?,
            None => lookup(&token.to_ascii_uppercase()).ok_or_else(|| {
                LoggerError::config(component, format!("unknown name '{}'", token))
            })?,
        };
        bits |= value;
    }

    if !seen {
        return Err(LoggerError::config(component, "empty value"));
    }
    Ok(bits)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Category::ALL {
            return f.write_str("ALL");
        }
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let names = NAMED.map(|(name, category)| (name, category.bits()));
        write_names(f, self.bits(), &names)
    }
}

impl FromStr for Category {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        parse_names(s, "Category", Category::lookup).map(Category::from_bits_retain)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
