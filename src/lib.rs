//! # Rust Category Logger
//!
//! A small, allocation-conscious logger built around one synchronized output
//! path.
//!
//! ## Features
//!
//! - **Category Filtering**: 64-bit category masks tested against a filter with a single AND
//! - **Compact Headers**: Optional date, time, microseconds, UTC and prefix, rendered without allocation
//! - **Replaceable Sinks**: Any `std::io::Write + Send`, swapped at runtime
//! - **Output Override**: Intercept string messages before formatting
//! - **Thread Safe**: Concurrent lines never interleave
//!
//! ```
//! use rust_category_logger::prelude::*;
//! use rust_category_logger::sinks::SharedBuffer;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::builder()
//!     .filter(Category::INFO | Category::NET)
//!     .format(FormatFlags::NONE)
//!     .output(buffer.clone())
//!     .build();
//!
//! logger.print(Category::INFO | Category::NET, "connected");
//! logger.print(Category::IO, "suppressed");
//! assert_eq!(buffer.contents(), "connected\n");
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Category, FormatFlags, LogWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, OverrideFn, PrefixedLogWriter, Result,
    };
    pub use crate::global::default_logger;
    pub use crate::sinks::{Discard, FileSink, SharedBuffer};
}

pub use crate::core::{
    Category, FormatFlags, LogWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, OverrideFn, PrefixedLogWriter, Result,
};
pub use global::default_logger;
