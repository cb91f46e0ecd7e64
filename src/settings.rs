//! Executor configuration and logging setup.

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "ACTIONS_LOG_LEVEL";

/// Environment variable that, when `true`, skips registering bundled actions.
pub const DISABLE_BUNDLED_ENV: &str = "ACTIONS_DISABLE_BUNDLED";

/// Log level for the executor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level (default)
    #[default]
    Error,
}

impl LogLevel {
    /// Convert to tracing level filter
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }

    /// Parses a level name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// Options for building an [`ActionExecutor`](crate::executor::ActionExecutor).
#[derive(Clone, Debug)]
pub struct ExecutorOptions {
    /// Log level used by [`init_logging`]. Defaults to Error.
    pub log_level: LogLevel,
    /// Register the bundled actions on construction.
    pub include_bundled_actions: bool,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            include_bundled_actions: true,
        }
    }
}

impl ExecutorOptions {
    /// Reads options from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads options through `lookup`. Unset or unrecognised values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let log_level = lookup(LOG_LEVEL_ENV)
            .and_then(|v| LogLevel::from_name(&v))
            .unwrap_or(defaults.log_level);
        let disable_bundled = lookup(DISABLE_BUNDLED_ENV)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            log_level,
            include_bundled_actions: !disable_bundled,
        }
    }
}

/// Installs a global fmt subscriber at `level`.
///
/// `RUST_LOG` takes precedence when set. Calling this more than once is a
/// no-op.
#[cfg(feature = "logging")]
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level.to_tracing_level()).into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
