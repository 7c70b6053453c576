//! Tracing and logging setup shared by binaries and test harnesses.
//!
//! Library crates only emit `tracing` events; installing a subscriber is
//! left to whoever owns the process.

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
