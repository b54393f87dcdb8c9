//! Opt-in JSON trace log, available with the `trace` feature.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Write `akshar-trace.jsonl` under `log_dir`. Only the first call installs
/// the subscriber; `RUST_LOG` overrides the default `akshar_engine=debug` filter.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, "akshar-trace.jsonl");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // the host tokenizer process owns the subscriber until exit
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("akshar_engine=debug"));

        // a host that already installed a global subscriber keeps it
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
