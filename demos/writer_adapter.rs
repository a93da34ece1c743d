//! Writer adapter example
//!
//! Hands the logger to code that only knows `std::io::Write`, and logs to a
//! file sink.
//!
//! Run with: cargo run --example writer_adapter

use rust_category_logger::prelude::*;
use std::io::Write;

fn emit_report(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "processed {} records", 1024)?;
    writeln!(out, "skipped {} records", 3)
}

fn main() -> Result<()> {
    println!("=== Rust Category Logger - Writer Adapter Example ===\n");

    let logger = Logger::builder().format(FormatFlags::TIME).build();

    let mut io_log = logger.new_writer(Category::IO, "[IO] ");
    emit_report(&mut io_log)?;

    let path = std::env::temp_dir().join("rust_category_logger_demo.log");
    logger.set_output(FileSink::new(&path)?);
    let mut err_log = logger.new_writer(Category::ERROR, "[ERROR] ");
    emit_report(&mut err_log)?;
    logger.flush()?;

    println!("\nAppended two lines to {}", path.display());
    println!("Lines written: {}", logger.metrics().emitted());

    Ok(())
}
