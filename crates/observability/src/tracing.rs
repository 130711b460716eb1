//! Tracing/logging initialization.
//!
//! Logs are JSON lines on stderr so they never interleave with what an
//! interactive session prints on stdout.

use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to `default_directive`.
pub fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init_with_default(default_directive: &str) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        ::tracing::debug!(default_directive, "tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_a_no_op() {
        let _ = init_with_default("warn");
        assert!(!init_with_default("warn"));
    }
}
