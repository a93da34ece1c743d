//! Main logger implementation
//!
//! Every output call funnels into one synchronized path: test the category
//! filter, optionally hand the message to an override, otherwise render
//! header + payload + newline into a reused buffer and write it to the sink
//! in a single call, all under one lock.

use super::{
    category::Category,
    config::LoggerConfig,
    error::{LoggerError, Result},
    format_flags::FormatFlags,
    header::format_header,
    metrics::LoggerMetrics,
};
use crate::sinks::Discard;
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Replaces formatting and the sink for string messages.
///
/// Receives the category and the raw message, before any header is applied.
pub type OverrideFn = Arc<dyn Fn(Category, &str) -> Result<()> + Send + Sync>;

struct LoggerState {
    format: FormatFlags,
    prefix: String,
    out: Box<dyn Write + Send>,
    override_fn: Option<OverrideFn>,
    buf: Vec<u8>,
}

pub struct Logger {
    /// Written only while `state` is locked; loaded without the lock by the
    /// filter pre-check.
    filter: AtomicU64,
    state: Mutex<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing to stderr with `TIME | PREFIX`, an empty prefix and a
    /// filter matching every category.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            Category::ALL,
            FormatFlags::DEFAULT,
            String::new(),
            Box::new(io::stderr()),
            None,
        )
    }

    fn with_parts(
        filter: Category,
        format: FormatFlags,
        prefix: String,
        out: Box<dyn Write + Send>,
        override_fn: Option<OverrideFn>,
    ) -> Self {
        Self {
            filter: AtomicU64::new(filter.bits()),
            state: Mutex::new(LoggerState {
                format,
                prefix,
                out,
                override_fn,
                buf: Vec::with_capacity(256),
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Whether a call with `category` would pass the current filter.
    #[inline]
    pub fn should_emit(&self, category: Category) -> bool {
        Category::from_bits_retain(self.filter.load(Ordering::Relaxed)).should_emit(category)
    }

    /// Emit `message` under `category`.
    ///
    /// Filtered-out calls return `Ok(())` without taking the lock. With an
    /// override installed the override receives the raw message and its result
    /// is returned; nothing is formatted or written. Otherwise the header,
    /// message and (if missing) a trailing newline are written to the sink in
    /// one call.
    ///
    /// # Errors
    ///
    /// Returns the sink's write error, or whatever the override returns.
    pub fn output(&self, category: Category, message: &str) -> Result<()> {
        if !self.should_emit(category) {
            return Ok(());
        }

        let mut state = self.state.lock();
        if let Some(override_fn) = state.override_fn.clone() {
            // released first so the override may log through this logger
            drop(state);
            self.metrics.record_overridden();
            return override_fn(category, message);
        }
        self.write_line(&mut state, message.as_bytes())
    }

    /// Emit `payload` under `category`, always formatted and written to the
    /// sink. An installed override is never consulted on this path, which is
    /// what the writer adapters rely on.
    ///
    /// # Errors
    ///
    /// Returns the sink's write error.
    pub fn output_bytes(&self, category: Category, payload: &[u8]) -> Result<()> {
        if !self.should_emit(category) {
            return Ok(());
        }

        let mut state = self.state.lock();
        self.write_line(&mut state, payload)
    }

    fn write_line(&self, state: &mut LoggerState, payload: &[u8]) -> Result<()> {
        // taken under the lock so sink order matches timestamp order
        let now = Local::now();
        let LoggerState {
            format,
            prefix,
            out,
            buf,
            ..
        } = state;

        buf.clear();
        format_header(buf, &now, *format, prefix.as_str());
        buf.extend_from_slice(payload);
        if payload.last() != Some(&b'\n') {
            buf.push(b'\n');
        }

        self.metrics.record_emitted();
        out.write_all(buf).map_err(|e| {
            self.metrics.record_write_error();
            LoggerError::Io(e)
        })
    }

    /// Set the header format.
    ///
    /// The flags are OR-ed together. An empty slice selects
    /// [`FormatFlags::NONE`] (bare payload); it does not keep the previous
    /// format.
    pub fn set_format(&self, flags: &[FormatFlags]) {
        let format = match flags {
            [] => FormatFlags::NONE,
            [single] => *single,
            many => many.iter().fold(FormatFlags::NONE, |acc, flag| acc | *flag),
        };
        self.state.lock().format = format;
    }

    /// Set the category filter.
    ///
    /// The categories are OR-ed together. An empty slice selects
    /// [`Category::NONE`], which suppresses every call; it does not keep the
    /// previous filter.
    pub fn set_filter(&self, categories: &[Category]) {
        let filter = match categories {
            [] => Category::NONE,
            [single] => *single,
            many => many.iter().fold(Category::NONE, |acc, category| acc | *category),
        };
        let _state = self.state.lock();
        self.filter.store(filter.bits(), Ordering::Relaxed);
    }

    /// Current header format.
    pub fn format(&self) -> FormatFlags {
        self.state.lock().format
    }

    /// Current category filter.
    pub fn filter(&self) -> Category {
        let _state = self.state.lock();
        Category::from_bits_retain(self.filter.load(Ordering::Relaxed))
    }

    /// Set the prefix written when [`FormatFlags::PREFIX`] is active. It is
    /// written verbatim, so include any trailing separator.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state.lock().prefix = prefix.into();
    }

    /// Current prefix.
    pub fn prefix(&self) -> String {
        self.state.lock().prefix.clone()
    }

    /// Send future lines to `out`.
    pub fn set_output<W: Write + Send + 'static>(&self, out: W) {
        self.replace_output(out);
    }

    /// Send future lines to `out` and hand back the previous sink.
    ///
    /// There is no getter for the sink itself: a boxed writer cannot be shared
    /// while the logger keeps writing to it. Swap it out here to inspect or
    /// reuse it, then reinstall it with [`Logger::set_output`].
    pub fn replace_output<W: Write + Send + 'static>(&self, out: W) -> Box<dyn Write + Send> {
        std::mem::replace(&mut self.state.lock().out, Box::new(out))
    }

    /// Detach the current sink, replacing it with [`Discard`].
    ///
    /// A logger always has a sink; this is the only way to have none.
    pub fn discard_output(&self) {
        self.set_output(Discard);
    }

    /// Route string messages that pass the filter to `f` instead of the sink.
    ///
    /// Byte payloads from [`Logger::output_bytes`] and the writer adapters are
    /// unaffected and keep going to the sink.
    pub fn set_override<F>(&self, f: F)
    where
        F: Fn(Category, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.set_override_fn(Some(Arc::new(f)));
    }

    /// Install or, with `None`, remove the override.
    pub fn set_override_fn(&self, override_fn: Option<OverrideFn>) {
        self.state.lock().override_fn = override_fn;
    }

    /// Remove the override, restoring the formatting path.
    pub fn clear_override(&self) {
        self.set_override_fn(None);
    }

    /// Whether an output override is installed.
    pub fn has_override(&self) -> bool {
        self.state.lock().override_fn.is_some()
    }

    /// Flush the sink.
    ///
    /// # Errors
    ///
    /// Returns the sink's flush error.
    pub fn flush(&self) -> Result<()> {
        self.state.lock().out.flush()?;
        Ok(())
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

// Convenience calls. Errors cannot be returned from these, so they are
// reported on stderr the same way the logger reports its own failures.
impl Logger {
    fn report(result: Result<()>) {
        if let Err(e) = result {
            eprintln!("[LOGGER ERROR] Failed to emit log line: {}", e);
        }
    }

    #[inline]
    pub fn print(&self, category: Category, message: &str) {
        Self::report(self.output(category, message));
    }

    /// Print pre-formatted arguments. The filter is tested before anything is
    /// formatted, so suppressed calls cost no allocation.
    pub fn print_fmt(&self, category: Category, args: fmt::Arguments<'_>) {
        if !self.should_emit(category) {
            return;
        }
        match args.as_str() {
            Some(message) => self.print(category, message),
            None => self.print(category, &args.to_string()),
        }
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.print(Category::DEBUG, message);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.print(Category::INFO, message);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.print(Category::WARN, message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.print(Category::ERROR, message);
    }

    /// Log `message`, flush, and exit the process with status 1.
    pub fn fatal(&self, category: Category, message: &str) -> ! {
        self.print(category, message);
        Self::report(self.flush());
        std::process::exit(1)
    }

    pub fn fatal_fmt(&self, category: Category, args: fmt::Arguments<'_>) -> ! {
        self.fatal(category, &args.to_string())
    }

    /// Log `message`, then panic with it as the payload.
    pub fn panic(&self, category: Category, message: &str) -> ! {
        self.print(category, message);
        panic!("{}", message)
    }

    pub fn panic_fmt(&self, category: Category, args: fmt::Arguments<'_>) -> ! {
        self.panic(category, &args.to_string())
    }

    /// A print function bound to `category`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_category_logger::{Category, Logger};
    ///
    /// let logger = Logger::new();
    /// let net = logger.printer(Category::NET);
    /// net("connection accepted");
    /// ```
    pub fn printer(&self, category: Category) -> impl Fn(&str) + '_ {
        move |message: &str| self.print(category, message)
    }

    /// Like [`Logger::printer`], taking `format_args!` output.
    pub fn printer_fmt(&self, category: Category) -> impl Fn(fmt::Arguments<'_>) + '_ {
        move |args: fmt::Arguments<'_>| self.print_fmt(category, args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Logger")
            .field("filter", &Category::from_bits_retain(self.filter.load(Ordering::Relaxed)))
            .field("format", &state.format)
            .field("prefix", &state.prefix)
            .field("has_override", &state.override_fn.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_category_logger::prelude::*;
/// use rust_category_logger::sinks::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let logger = Logger::builder()
///     .filter(Category::INFO | Category::NET)
///     .format(FormatFlags::PREFIX)
///     .prefix("api: ")
///     .output(buffer.clone())
///     .build();
///
/// logger.info("listening");
/// logger.debug("hidden");
/// assert_eq!(buffer.contents(), "api: listening\n");
/// ```
pub struct LoggerBuilder {
    filter: Category,
    format: FormatFlags,
    prefix: String,
    output: Option<Box<dyn Write + Send>>,
    override_fn: Option<OverrideFn>,
}

impl LoggerBuilder {
    /// Create a new builder with the same defaults as [`Logger::new`]
    pub fn new() -> Self {
        Self {
            filter: Category::ALL,
            format: FormatFlags::DEFAULT,
            prefix: String::new(),
            output: None,
            override_fn: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, filter: Category) -> Self {
        self.filter = filter;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: FormatFlags) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the sink. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, out: W) -> Self {
        self.output = Some(Box::new(out));
        self
    }

    /// Install an output override, see [`Logger::set_override`].
    #[must_use = "builder methods return a new value"]
    pub fn override_with<F>(mut self, f: F) -> Self
    where
        F: Fn(Category, &str) -> Result<()> + Send + Sync + 'static,
    {
        self.override_fn = Some(Arc::new(f));
        self
    }

    /// Take filter, format and prefix from a loaded configuration.
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.filter = config.filter;
        self.format = config.format;
        self.prefix = config.prefix;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let out = self.output.unwrap_or_else(|| Box::new(io::stderr()));
        Logger::with_parts(self.filter, self.format, self.prefix, out, self.override_fn)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
