//! Logging setup and timing helpers.

use std::time::Instant;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a formatted tracing subscriber driven by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

/// Installs a JSON-formatted tracing subscriber driven by `RUST_LOG`.
pub fn init_json_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt().json().with_env_filter(filter).try_init();
}

/// Measures one named step of a run.
///
/// [`finish`](Self::finish) logs the duration at `debug` under the step name.
#[derive(Debug)]
pub struct SpanTimer {
    name: &'static str,
    started: Instant,
}

impl SpanTimer {
    /// Starts timing `name`.
    #[must_use]
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            started: Instant::now(),
        }
    }

    /// Stops the timer and returns the duration in milliseconds.
    pub fn finish(self) -> f64 {
        let duration_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        debug!(span = self.name, duration_ms, "Span finished");
        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        init_json_logging();
    }

    #[test]
    fn test_span_timer() {
        let timer = SpanTimer::start("mel.assemble");
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(timer.finish() >= 5.0);
    }
}
