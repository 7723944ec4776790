//! Tracing subscriber bootstrap

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global tracing subscriber once; later calls are no-ops.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Installation is
/// best-effort so embedding applications and test harnesses that already
/// set a subscriber keep theirs.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
