//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable in-memory sink. Every clone appends to the same buffer, so one
/// clone can be handed to a logger while another inspects what was written.
///
/// # Example
///
/// ```
/// use rust_category_logger::{Category, FormatFlags, Logger};
/// use rust_category_logger::sinks::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder()
///     .format(FormatFlags::NONE)
///     .output(buffer.clone())
///     .build();
///
/// logger.output(Category::INFO, "ready").unwrap();
/// assert_eq!(buffer.contents(), "ready\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    /// Written lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Take the contents and leave the buffer empty
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.inner.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();

        writer.write_all(b"one\ntwo\n").unwrap();
        assert_eq!(buffer.contents(), "one\ntwo\n");
        assert_eq!(buffer.lines(), vec!["one", "two"]);
        assert_eq!(buffer.len(), 8);
    }

    #[test]
    fn test_take_and_clear() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();

        writer.write_all(b"first\n").unwrap();
        assert_eq!(buffer.take(), "first\n");
        assert!(buffer.is_empty());

        writer.write_all(b"second\n").unwrap();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.bytes(), Vec::<u8>::new());
    }
}
