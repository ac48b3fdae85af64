//! Process-wide logging setup.

/// Tracing configuration (filters, output).
pub mod tracing;

/// Initialize tracing with the default filter (`warn`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}
