use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Filter applied when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info,partfinder=debug,reqwest=warn,hyper=warn";

/// Install the env_logger backend once per process.
///
/// `RUST_LOG` overrides the default filter. Repeated calls, or a logger
/// installed by the host application, are left alone.
pub fn init_logger() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
        let installed = env_logger::Builder::from_env(env)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init()
            .is_ok();

        if installed {
            info!("Logging initialized ({})", DEFAULT_FILTER);
        }
    });
}

/// Structured log lines shared by the catalog client and the orchestrator
pub struct LogContext;

impl LogContext {
    /// Outbound catalog request; `duration_ms` is set once it completes
    pub fn api_call(endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!("Catalog: {} {} in {}ms", endpoint, status, duration),
            None => debug!("Catalog: {} {}", status, endpoint),
        }
    }

    /// Search lifecycle; `results` is set once the attempt settles
    pub fn search_operation(query: &str, origin: Option<&str>, results: Option<usize>) {
        let origin = origin.unwrap_or("unknown input");
        match results {
            Some(count) => info!("Search: '{}' via {} found {} parts", query, origin, count),
            None => debug!("Search: '{}' via {} pending", query, origin),
        }
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }
}
