use log::{debug, error, info, warn};
use std::sync::Once;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use crate::shared::errors::AppError;

static INIT: Once = Once::new();

const DEFAULT_DIRECTIVES: &str =
    "info,prateleira=debug,prateleira_lib=debug,reqwest=warn,hyper=warn";

/// Initialize the logging system
/// This should be called once at application startup
///
/// `RUST_LOG` overrides the default directives. Records emitted through the
/// `log` facade are forwarded into the same subscriber.
pub fn init_logger() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let initialized = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok();

        if initialized {
            info!("Logging system initialized");
        }
    });
}

/// Log lines for catalog store traffic
pub struct LogContext;

impl LogContext {
    pub fn upstream_call(store: &str, endpoint: &str, status: &str, duration_ms: u64) {
        info!("UPSTREAM: {} {} {} in {}ms", store, endpoint, status, duration_ms);
    }
}

/// Log trail of a single lookup, from classification to ranked response
pub struct LookupTrace {
    query: String,
    kind: &'static str,
    started: Instant,
}

impl LookupTrace {
    pub fn start(query: &str, kind: &'static str) -> Self {
        debug!("LOOKUP: Starting '{}' ({})", query, kind);
        Self {
            query: query.to_string(),
            kind,
            started: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn candidates(&self, store: &str, count: usize) {
        debug!(
            "LOOKUP: {} returned {} candidates for '{}' after {}ms",
            store,
            count,
            self.query,
            self.elapsed_ms()
        );
    }

    /// Store failures are the catalog's problem unless the error says otherwise
    pub fn store_failed(&self, store: &str, error: &AppError) {
        if error.is_upstream() {
            warn!("LOOKUP: {} failed for '{}': {}", store, self.query, error);
        } else {
            error!("LOOKUP: {} failed for '{}': {}", store, self.query, error);
        }
    }

    /// Returns the total duration in milliseconds
    pub fn finish(self, results: usize) -> u64 {
        let duration = self.elapsed_ms();
        info!(
            "LOOKUP: '{}' ({}) returned {} items in {}ms",
            self.query, self.kind, results, duration
        );
        duration
    }
}
