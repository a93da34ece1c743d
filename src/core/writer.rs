//! Writer adapters
//!
//! Expose a logger as a plain `std::io::Write` so code that only knows how to
//! write bytes can log through it. Each write becomes one log line under a
//! fixed category, always formatted and sent to the sink; an output override
//! installed on the logger does not apply here.

use super::category::Category;
use super::logger::Logger;
use std::fmt;
use std::io::{self, Write};

/// Forwards every write to [`Logger::output_bytes`] unchanged.
#[derive(Debug, Clone, Copy)]
pub struct LogWriter<'a> {
    logger: &'a Logger,
    category: Category,
}

impl<'a> LogWriter<'a> {
    pub fn new(logger: &'a Logger, category: Category) -> Self {
        Self { logger, category }
    }
}

impl Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logger.output_bytes(self.category, buf)?;
        Ok(buf.len())
    }

    /// One call, one line.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write(buf).map(|_| ())
    }

    /// Renders the arguments first so a single `write!` yields a single line.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match args.as_str() {
            Some(s) => self.write_all(s.as_bytes()),
            None => self.write_all(args.to_string().as_bytes()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.logger.flush()?;
        Ok(())
    }
}

/// Prepends a fixed byte prefix to every write before forwarding it to
/// [`Logger::output_bytes`].
///
/// `write` reports `payload.len() + prefix.len()` bytes consumed, counting the
/// prefix as if the caller had written it. That is more than `std::io::Write`
/// allows, so `write_all` and `write_fmt` are overridden to make exactly one
/// `write` per call; generic helpers that loop on the returned count (such as
/// `io::copy`) must not be pointed at this writer.
#[derive(Debug)]
pub struct PrefixedLogWriter<'a> {
    logger: &'a Logger,
    category: Category,
    prefix: Vec<u8>,
    scratch: Vec<u8>,
}

impl<'a> PrefixedLogWriter<'a> {
    pub fn new(logger: &'a Logger, category: Category, prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            logger,
            category,
            prefix: prefix.into(),
            scratch: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }
}

impl Write for PrefixedLogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.scratch.clear();
        self.scratch.extend_from_slice(&self.prefix);
        self.scratch.extend_from_slice(buf);
        self.logger.output_bytes(self.category, &self.scratch)?;
        Ok(buf.len() + self.prefix.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write(buf).map(|_| ())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match args.as_str() {
            Some(s) => self.write_all(s.as_bytes()),
            None => self.write_all(args.to_string().as_bytes()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.logger.flush()?;
        Ok(())
    }
}

impl Logger {
    /// A writer logging under `category`, prefixed with `prefix` unless it is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_category_logger::{Category, FormatFlags, Logger};
    /// use rust_category_logger::sinks::SharedBuffer;
    /// use std::io::Write;
    ///
    /// let buffer = SharedBuffer::new();
    /// let logger = Logger::builder().format(FormatFlags::NONE).output(buffer.clone()).build();
    ///
    /// let mut io_log = logger.new_writer(Category::IO, "[IO] ");
    /// writeln!(io_log, "disk {} ready", 0).unwrap();
    /// assert_eq!(buffer.contents(), "[IO] disk 0 ready\n");
    /// ```
    pub fn new_writer(&self, category: Category, prefix: &str) -> Box<dyn Write + Send + '_> {
        if prefix.is_empty() {
            Box::new(LogWriter::new(self, category))
        } else {
            Box::new(PrefixedLogWriter::new(self, category, prefix))
        }
    }
}
