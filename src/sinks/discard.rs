//! Sink that drops everything

use std::io::{self, Write};

/// Accepts every write, stores nothing.
///
/// # Example
///
/// ```
/// use rust_category_logger::{Category, Logger};
/// use rust_category_logger::sinks::Discard;
///
/// let logger = Logger::builder().output(Discard).build();
/// logger.output(Category::INFO, "gone").unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Write for Discard {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    #[inline]
    fn write_all(&mut self, _buf: &[u8]) -> io::Result<()> {
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
