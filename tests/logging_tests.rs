//! Logging Tests for the Cache Engine
//!
//! Installs a tracing subscriber with a capture writer and checks that
//! cache operations emit the expected debug events.

use std::io;
use std::sync::{Arc, Mutex};

use bounded_cache::BoundedCache;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

// == Capture Writer ==

/// Collects formatted log output into a shared buffer.
#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// == Debug Event Tests ==

#[test]
fn test_cache_operations_emit_debug_events() {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("bounded_cache=debug"))
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let cache = BoundedCache::new(1);
        cache.put("berlin".to_string(), 1);
        cache.put("paris".to_string(), 2); // evicts "berlin"
        cache.remove("paris");
    });

    let output = writer.contents();
    assert!(output.contains("cache put"), "missing put event in: {output}");
    assert!(
        output.contains("cache eviction"),
        "missing eviction event in: {output}"
    );
    assert!(
        output.contains("cache remove"),
        "missing remove event in: {output}"
    );

    // The victim key is recorded on the eviction event
    let eviction_line = output
        .lines()
        .find(|line| line.contains("cache eviction"))
        .expect("eviction line present");
    assert!(eviction_line.contains("berlin"), "victim key missing: {eviction_line}");
}

#[test]
fn test_misses_and_hits_emit_nothing() {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("bounded_cache=debug"))
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let cache = BoundedCache::new(10);
        cache.put("berlin".to_string(), 1);
        cache.get("berlin");
        cache.get("missing");
    });

    let output = writer.contents();
    // Reads are the hot path and stay silent
    assert_eq!(
        output.lines().count(),
        1,
        "only the put should log: {output}"
    );
}
