//! Logging macros for ergonomic log message formatting.
//!
//! The arguments are captured with `format_args!` and only rendered when the
//! category passes the logger's filter.
//!
//! # Examples
//!
//! ```
//! use rust_category_logger::prelude::*;
//! use rust_category_logger::{info, log};
//!
//! let logger = Logger::new();
//!
//! // Leveled
//! info!(logger, "Server started");
//!
//! // Any category mask
//! let port = 8080;
//! log!(logger, Category::NET | Category::SERVICE, "listening on port {}", port);
//! ```

/// Log under an explicit category mask.
///
/// # Examples
///
/// ```
/// # use rust_category_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_category_logger::log;
/// log!(logger, Category::IO, "Simple message");
/// log!(logger, Category::NET | Category::ERROR, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $logger.print_fmt($category, ::std::format_args!($($arg)+))
    };
}

/// Log under [`Category::DEBUG`](crate::Category::DEBUG).
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::DEBUG, $($arg)+)
    };
}

/// Log under [`Category::INFO`](crate::Category::INFO).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::INFO, $($arg)+)
    };
}

/// Log under [`Category::WARN`](crate::Category::WARN).
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::WARN, $($arg)+)
    };
}

/// Log under [`Category::ERROR`](crate::Category::ERROR).
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Category::ERROR, $($arg)+)
    };
}

/// Log, flush, and exit the process with status 1.
///
/// ```no_run
/// # use rust_category_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_category_logger::fatal;
/// fatal!(logger, Category::SYSTEM, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $logger.fatal_fmt($category, ::std::format_args!($($arg)+))
    };
}

/// Log, then panic with the rendered message.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $category:expr, $($arg:tt)+) => {
        $logger.panic_fmt($category, ::std::format_args!($($arg)+))
    };
}
