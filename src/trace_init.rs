#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "kana_engine=debug,kana_core=debug,kana_session=debug";

/// Install a JSON-lines subscriber writing to `log_dir/kana-trace.jsonl`.
/// Only the first call has any effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "kana-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // hosts keep the engine for the life of the process

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
