//! Stress tests for the synchronized output path
//!
//! These tests verify:
//! - Concurrent callers never interleave bytes within a line
//! - Every call that passes the filter produces exactly one line
//! - Mutators racing with output calls leave the logger consistent

use rust_category_logger::prelude::*;
use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const CALLS_PER_THREAD: usize = 500;

fn shared_logger(format: FormatFlags) -> (Arc<Logger>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = Logger::builder()
        .format(format)
        .prefix("stress: ")
        .output(buffer.clone())
        .build();
    (Arc::new(logger), buffer)
}

#[test]
fn test_concurrent_lines_are_intact() {
    let (logger, buffer) = shared_logger(FormatFlags::NONE);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..CALLS_PER_THREAD {
                    logger.print(Category::INFO, &format!("thread {} message {} end", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let content = buffer.contents();
    assert!(content.ends_with('\n'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * CALLS_PER_THREAD);

    let unique: HashSet<&str> = lines.iter().copied().collect();
    assert_eq!(unique.len(), lines.len(), "duplicate or merged lines found");
    for line in &lines {
        assert!(line.starts_with("thread ") && line.ends_with(" end"), "corrupted line: {:?}", line);
    }
    assert_eq!(logger.metrics().emitted(), (THREADS * CALLS_PER_THREAD) as u64);
}

#[test]
fn test_concurrent_headers_are_intact() {
    let flags = FormatFlags::DATE | FormatFlags::MICROSECONDS | FormatFlags::PREFIX;
    let (logger, buffer) = shared_logger(flags);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..CALLS_PER_THREAD {
                    logger.output(Category::NET, &format!("{}-{}", t, i)).expect("write failed");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * CALLS_PER_THREAD);
    for line in &lines {
        // "YYYY/MM/DD HH:MM:SS.ffffff stress: t-i"
        let (header, payload) = line.split_at(27);
        assert_eq!(header.len(), 27);
        assert!(payload.starts_with("stress: "), "corrupted line: {:?}", line);
        let id = &payload["stress: ".len()..];
        assert!(id.split('-').all(|n| n.parse::<usize>().is_ok()), "corrupted line: {:?}", line);
    }
}

#[test]
fn test_only_matching_calls_are_counted() {
    let (logger, buffer) = shared_logger(FormatFlags::NONE);
    logger.set_filter(&[Category::ERROR]);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..CALLS_PER_THREAD {
                    let category = if i % 2 == 0 { Category::ERROR } else { Category::DEBUG };
                    logger.print(category, &format!("{} {}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    assert_eq!(buffer.lines().len(), THREADS * CALLS_PER_THREAD / 2);
}

#[test]
fn test_writers_from_many_threads() {
    let (logger, buffer) = shared_logger(FormatFlags::NONE);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let logger = &logger;
            scope.spawn(move || {
                let mut writer = logger.new_writer(Category::IO, "[IO] ");
                for i in 0..CALLS_PER_THREAD {
                    writeln!(writer, "{} {}", t, i).expect("write failed");
                }
            });
        }
    });

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * CALLS_PER_THREAD);
    assert!(lines.iter().all(|line| line.starts_with("[IO] ")));
}

#[test]
fn test_mutators_race_with_output() {
    let (logger, buffer) = shared_logger(FormatFlags::NONE);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..CALLS_PER_THREAD {
                    logger.print(Category::INFO, &format!("{} {}", t, i));
                }
            });
        }

        let logger = &logger;
        scope.spawn(move || {
            for i in 0..CALLS_PER_THREAD {
                if i % 2 == 0 {
                    logger.set_format(&[FormatFlags::PREFIX]);
                    logger.set_prefix("a: ");
                } else {
                    logger.set_format(&[]);
                    logger.set_prefix("b: ");
                }
            }
        });
    });

    let lines = buffer.lines();
    assert_eq!(lines.len(), THREADS * CALLS_PER_THREAD);
    for line in &lines {
        let body = line
            .strip_prefix("a: ")
            .or_else(|| line.strip_prefix("b: "))
            .unwrap_or(line);
        let mut parts = body.split(' ');
        assert!(parts.next().and_then(|n| n.parse::<usize>().ok()).is_some(), "corrupted line: {:?}", line);
        assert!(parts.next().and_then(|n| n.parse::<usize>().ok()).is_some(), "corrupted line: {:?}", line);
        assert!(parts.next().is_none(), "corrupted line: {:?}", line);
    }
}
