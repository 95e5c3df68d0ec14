//! Tracing/logging setup shared by FinGuard hosts.
//!
//! The policy engine itself only emits `tracing` events; a host (or an
//! integration test) calls [`init`] once to get them onto stdout.

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
