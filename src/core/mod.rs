//! Core logger types

pub mod category;
pub mod config;
pub mod error;
pub mod format_flags;
pub mod header;
pub mod logger;
pub mod metrics;
pub mod writer;

pub use category::Category;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use format_flags::FormatFlags;
pub use header::{append_padded, format_header};
pub use logger::{Logger, LoggerBuilder, OverrideFn};
pub use metrics::LoggerMetrics;
pub use writer::{LogWriter, PrefixedLogWriter};
