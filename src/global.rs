//! Process-wide default logger
//!
//! The default instance is created on first use, before any of the functions
//! below can touch it, and lives for the rest of the process. It starts with
//! the same settings as [`Logger::new`]: stderr, `TIME | PREFIX`, empty
//! prefix, every category enabled. The print functions here log under
//! [`Category::GLOBAL`].

use crate::core::{Category, FormatFlags, Logger, Result};
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
pub fn default_logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

pub fn set_output<W: Write + Send + 'static>(out: W) {
    default_logger().set_output(out);
}

pub fn set_prefix(prefix: impl Into<String>) {
    default_logger().set_prefix(prefix);
}

/// See [`Logger::set_format`]; an empty slice clears the header.
pub fn set_format(flags: &[FormatFlags]) {
    default_logger().set_format(flags);
}

/// See [`Logger::set_filter`]; an empty slice suppresses everything.
pub fn set_filter(categories: &[Category]) {
    default_logger().set_filter(categories);
}

pub fn set_override<F>(f: F)
where
    F: Fn(Category, &str) -> Result<()> + Send + Sync + 'static,
{
    default_logger().set_override(f);
}

pub fn clear_override() {
    default_logger().clear_override();
}

pub fn print(message: &str) {
    default_logger().print(Category::GLOBAL, message);
}

pub fn print_fmt(args: fmt::Arguments<'_>) {
    default_logger().print_fmt(Category::GLOBAL, args);
}

pub fn debug(message: &str) {
    default_logger().debug(message);
}

pub fn info(message: &str) {
    default_logger().info(message);
}

pub fn warn(message: &str) {
    default_logger().warn(message);
}

pub fn error(message: &str) {
    default_logger().error(message);
}

pub fn fatal(message: &str) -> ! {
    default_logger().fatal(Category::GLOBAL, message)
}

pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatal_fmt(Category::GLOBAL, args)
}

pub fn panic(message: &str) -> ! {
    default_logger().panic(Category::GLOBAL, message)
}

pub fn panic_fmt(args: fmt::Arguments<'_>) -> ! {
    default_logger().panic_fmt(Category::GLOBAL, args)
}

pub fn printer(category: Category) -> impl Fn(&str) + 'static {
    default_logger().printer(category)
}

pub fn printer_fmt(category: Category) -> impl Fn(fmt::Arguments<'_>) + 'static {
    default_logger().printer_fmt(category)
}

pub fn new_writer(category: Category, prefix: &str) -> Box<dyn Write + Send + 'static> {
    default_logger().new_writer(category, prefix)
}
