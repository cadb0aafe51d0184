#![deny(missing_docs)]
//! Shared logging utilities for the pagecheck workspace.
//!
//! Every crate logs through the `pagecheck_*` macros so the facade can be
//! swapped in one place. The binary owns logger setup; tests use
//! [`initialize_for_tests`].

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! pagecheck_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: "pagecheck", $($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! pagecheck_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: "pagecheck", $($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! pagecheck_info {
    ($($arg:tt)*) => {{
        log::info!(target: "pagecheck", $($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! pagecheck_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: "pagecheck", $($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! pagecheck_error {
    ($($arg:tt)*) => {{
        log::error!(target: "pagecheck", $($arg)*);
    }};
}

/// Initializes a terminal logger for unit and integration tests.
///
/// Safe to call from many tests: a second initialization is ignored.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
