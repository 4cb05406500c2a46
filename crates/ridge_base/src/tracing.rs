use crate::error::{RidgeError, RidgeResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/* 📖 # Why does log output go to stderr?

Standard output carries the program's actual output, and callers compare it byte for
byte. Log lines on stdout would corrupt it, so the fmt layer writes to stderr.

The EnvFilter is attached to the fmt layer only. The ErrorLayer still sees every span,
so errors carry a full span trace even when the log level hides those spans.
*/

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber has already been set.
pub fn init_tracing() -> RidgeResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| {
            Box::new(RidgeError::message(format!(
                "Failed to install tracing subscriber: {}",
                e
            )))
        })
}
