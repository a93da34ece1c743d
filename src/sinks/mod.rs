//! Provided sinks
//!
//! Any `std::io::Write + Send` value can receive log lines. These cover the
//! cases the standard library does not: discarding output, capturing it in
//! memory, and appending to a file by path.

pub mod discard;
pub mod file;
pub mod memory;

pub use discard::Discard;
pub use file::FileSink;
pub use memory::SharedBuffer;
