//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Concurrent calls on one logger produce complete, non-interleaved lines
//! - Per-thread ordering is preserved in the file
//! - Independent loggers run side by side without sharing state

use colored::Color;
use leveled_logger::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const MESSAGES_PER_THREAD: usize = 200;

/// Many threads hammering one logger must yield exactly one well-formed line
/// per call.
#[test]
fn test_concurrent_lines_are_complete() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let logger = Arc::new(
        Logger::builder()
            .console(false, Color::White)
            .file(true, &log_file)
            .source_name("stress")
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..MESSAGES_PER_THREAD {
                    logger
                        .warning(format!("thread={} seq={}", thread_id, i))
                        .expect("write failed");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    assert!(content.ends_with("\r\n"));
    let lines: Vec<&str> = content.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), THREADS * MESSAGES_PER_THREAD);

    // Every line is intact and each thread's sequence numbers appear in order
    let mut last_seq: HashMap<usize, usize> = HashMap::new();
    for line in &lines {
        assert!(line.starts_with('['), "Malformed line: {}", line);
        let body = line
            .split_once("][stress] WARNING: ")
            .map(|(_, body)| body)
            .unwrap_or_else(|| panic!("Malformed line: {}", line));

        let (thread_part, seq_part) = body.split_once(' ').expect("two fields");
        let thread_id: usize = thread_part["thread=".len()..].parse().expect("thread id");
        let seq: usize = seq_part["seq=".len()..].parse().expect("sequence");

        if let Some(previous) = last_seq.insert(thread_id, seq) {
            assert!(seq > previous, "thread {} went {} -> {}", thread_id, previous, seq);
        }
    }
    assert_eq!(last_seq.len(), THREADS);
    assert_eq!(logger.metrics().emitted(), (THREADS * MESSAGES_PER_THREAD) as u64);
}

/// Separate loggers keep their own configuration while running concurrently.
#[test]
fn test_independent_loggers_concurrently() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let path = temp_dir.path().join(format!("worker-{}.log", worker));
            thread::spawn(move || {
                let min = if worker % 2 == 0 {
                    Severity::Debug
                } else {
                    Severity::Error
                };
                let logger = Logger::builder()
                    .min_severity(min)
                    .console(false, Color::White)
                    .file(true, &path)
                    .source_name(format!("worker-{}", worker))
                    .build();

                for i in 0..100 {
                    logger.info(format!("message {}", i)).expect("write failed");
                }
                (worker, path)
            })
        })
        .collect();

    for handle in handles {
        let (worker, path) = handle.join().expect("Thread panicked");
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        let count = content.matches("\r\n").count();

        if worker % 2 == 0 {
            assert_eq!(count, 100);
            assert!(content.contains(&format!("[worker-{}] INFO", worker)));
        } else {
            assert_eq!(count, 0, "worker {} should have filtered INFO", worker);
        }
    }
}
