use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive for a `-v` count when `RUST_LOG` is not set.
pub fn default_directive(verbose_count: u8) -> &'static str {
    match verbose_count {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber, writing to stderr so reports on stdout
/// stay machine-readable.
pub fn setup_logging(verbose_count: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose_count)));

    // A subscriber may already be set (e.g. by an embedding program).
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(7), "trace");
    }
}
