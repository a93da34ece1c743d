//! Basic logger usage example
//!
//! Demonstrates category filtering, header formats and the output override.
//!
//! Run with: cargo run --example basic_usage

use rust_category_logger::prelude::*;
use rust_category_logger::{global, info, log};

fn main() -> Result<()> {
    println!("=== Rust Category Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .format(FormatFlags::DATE | FormatFlags::TIME | FormatFlags::PREFIX)
        .prefix("demo: ")
        .build();

    println!("1. Logging under different categories:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    log!(logger, Category::NET | Category::WARN, "peer {} is slow", "10.0.0.7");
    logger.output(Category::IO, "returned errors are available via output()")?;

    println!("\n2. Restricting the filter to ERROR and NET:");
    logger.set_filter(&[Category::ERROR, Category::NET]);
    logger.info("Info message (hidden)");
    log!(logger, Category::NET, "Net message (visible)");
    logger.error("Error message (visible)");

    println!("\n3. Microsecond UTC timestamps:");
    logger.set_filter(&[Category::ALL]);
    logger.set_format(&[FormatFlags::MICROSECONDS, FormatFlags::UTC, FormatFlags::PREFIX]);
    info!(logger, "precise to the microsecond");

    println!("\n4. Overriding output for string messages:");
    logger.set_override(|category, message| {
        println!("   override got [{}] {}", category, message);
        Ok(())
    });
    logger.warn("sent to the override");
    logger.clear_override();

    println!("\n5. The process-wide logger:");
    global::set_prefix("global: ");
    global::print("printed under Category::GLOBAL");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
