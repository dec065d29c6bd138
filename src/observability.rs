//! This module provides observability and diagnostics capabilities for the
//! decode pipeline.
//!
//! A format with this many optional layers (compression, encryption,
//! checksumming, float splitting) benefits from visibility into which path a
//! given container actually took. The `log_metric!` macro is the primary tool
//! for structured decision records; ordinary progress logging goes through the
//! `log` crate and is enabled with [`enable_verbose_logging`].
//!
//! `log_metric!` is a zero-cost abstraction: the `#[cfg(debug_assertions)]`
//! attribute ensures that the macro and all calls to it are completely
//! compiled out of release builds.

use std::sync::Once;

use log::LevelFilter;

/// Logs a structured key-value metric string to stdout, only in debug builds.
///
/// # Example
/// ```
/// use plait_core::log_metric;
/// let frames = 2;
/// log_metric!("event"="analyze_streams", "outcome"="Float2", "frames"=&frames);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            let output = format!("PLAIT_METRIC: {{ {} }}", parts.join(", "));
            println!("{}", output);
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Turns on `log`-based diagnostics for the decode pipeline.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn enable_verbose_logging() {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let _ = builder.try_init();
    });
}
