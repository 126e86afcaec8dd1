//! Diagnostics for the `flights` binary.
//!
//! Events are written to stderr so that stdout holds nothing but the flight
//! table or the empty-list message.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much the binary reports about loading and saving the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: errors only.
    Quiet,
    /// No flag: warnings, such as an ignored config file.
    #[default]
    Normal,
    /// `-v`: which data file is used and how many flights were read or written.
    Verbose,
    /// `-vv`: everything.
    Trace,
}

impl Verbosity {
    /// Most detailed level shown for the `flights` target.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Install the stderr subscriber for the given verbosity.
///
/// `RUST_LOG`, when set, replaces the verbosity-derived filter. Calling this
/// again after a subscriber is installed has no effect.
///
/// ```no_run
/// use flights::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flights={}", verbosity.level())));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Route warnings raised inside unit tests to the test harness output.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("flights=warn")
        .with_test_writer()
        .try_init();
}
