//! Process-wide logging setup.

/// Tracing subscriber configuration.
pub mod tracing;

/// Initialize tracing with the default filter (`info`).
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    tracing::init_with_default("info");
}
