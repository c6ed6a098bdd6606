//! Tracing setup for the provider process.
//!
//! The plugin host owns stdout, so everything goes to stderr. The level
//! comes from an explicit [`LogConfig`], usually derived from the host's
//! `TF_LOG` value; `RUST_LOG` still wins when set.

use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::for_level("warn")
    }
}

impl LogConfig {
    /// Provider crates at `level`, everything else at `warn`.
    pub fn for_level(level: &str) -> Self {
        Self {
            filter: format!(
                "warn,site24x7_api={level},site24x7_config={level},site24x7_provider={level}"
            ),
            json: false,
        }
    }

    /// Map a `TF_LOG` value onto provider logging.
    ///
    /// `TRACE`, `DEBUG`, `INFO`, `WARN` and `ERROR` select that level;
    /// `JSON` selects trace-level JSON output. Anything else, including
    /// an unset variable, keeps the quiet default.
    pub fn from_tf_log(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim) else {
            return Self::default();
        };
        match value.to_ascii_uppercase().as_str() {
            "TRACE" => Self::for_level("trace"),
            "DEBUG" => Self::for_level("debug"),
            "INFO" => Self::for_level("info"),
            "WARN" => Self::for_level("warn"),
            "ERROR" => Self::for_level("error"),
            "JSON" => Self {
                json: true,
                ..Self::for_level("trace")
            },
            _ => Self::default(),
        }
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if installed.is_err() {
        debug!("tracing subscriber already installed");
    }
}
