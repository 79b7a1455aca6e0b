//! Process-wide tracing/logging setup.

pub mod tracing;

pub use crate::tracing::LogFormat;

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing with `format` and [`DEFAULT_FILTER`].
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init_with(format: LogFormat) {
    tracing::init(format, DEFAULT_FILTER);
}
