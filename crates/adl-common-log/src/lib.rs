//! Logging setup for ADL binaries.
//!
//! Logs go to stderr so that stdout stays free for command output. An
//! optional log file receives the same events without ANSI colors.
//!
//! Environment variables read by [`LogConfig::from_env`]:
//!
//! - `ADL_LOG_LEVEL` (falls back to `RUST_LOG`): `trace` .. `error`
//! - `ADL_LOG_FORMAT`: `pretty`, `compact` or `json`
//! - `ADL_LOG_FILE`: path of an additional log file
//! - `ADL_LOG_SOURCE`: `true`/`1` to include file and line

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub file_path: Option<PathBuf>,
    /// Include file and line of the call site.
    pub source_location: bool,
    /// Colorize stderr output.
    pub ansi: bool,
    /// `level` was chosen explicitly (`ADL_LOG_LEVEL` or a CLI flag), so
    /// `RUST_LOG` directives are not consulted.
    pub level_pinned: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Level for `-v` repetitions and `-q`. `-q` wins.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Error;
        }
        match verbose {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            file_path: None,
            source_location: false,
            ansi: true,
            level_pinned: false,
        }
    }
}

impl LogConfig {
    /// Configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("ADL_LOG_LEVEL").and_then(|l| LogLevel::parse(&l)) {
            config.level = level;
            config.level_pinned = true;
        } else if let Some(level) = lookup("RUST_LOG").and_then(|l| LogLevel::parse(&l)) {
            config.level = level;
        }

        if let Some(format) = lookup("ADL_LOG_FORMAT").and_then(|f| LogFormat::parse(&f)) {
            config.format = format;
        }

        config.file_path = lookup("ADL_LOG_FILE")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        if let Some(source) = lookup("ADL_LOG_SOURCE") {
            config.source_location = source.eq_ignore_ascii_case("true") || source == "1";
        }

        config
    }

    /// Pin the level, overriding any `RUST_LOG` directives.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.level_pinned = true;
        self
    }

    /// Filter directives for this configuration given the `RUST_LOG` value.
    ///
    /// Unpinned configurations pass `RUST_LOG` through so that per-target
    /// directives such as `adl_generator=debug` keep working.
    pub fn directives(&self, rust_log: Option<&str>) -> String {
        match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
            Some(directives) if !self.level_pinned => directives.to_string(),
            _ => self.level.as_str().to_string(),
        }
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` is honored only when the level is not pinned; see
/// [`LogConfig::directives`]. Unparseable directives fall back to
/// `config.level`.
pub fn init(config: LogConfig) -> Result<(), LogError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(config.directives(rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let file_layer = match &config.file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(fmt_layer(
                config.format,
                Mutex::new(file),
                false,
                config.source_location,
            ))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(
            config.format,
            io::stderr,
            config.ansi,
            config.source_location,
        ))
        .with(file_layer)
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))
}

fn fmt_layer<S, W>(
    format: LogFormat,
    writer: W,
    ansi: bool,
    source_location: bool,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_file(source_location)
        .with_line_number(source_location);

    match format {
        LogFormat::Pretty => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to initialize logging: {0}")]
    Init(String),

    #[error("failed to open log file: {0}")]
    File(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("Warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("invalid"), None);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::WARN);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
    }

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(LogLevel::from_verbosity(0, false), LogLevel::Warn);
        assert_eq!(LogLevel::from_verbosity(1, false), LogLevel::Info);
        assert_eq!(LogLevel::from_verbosity(2, false), LogLevel::Debug);
        assert_eq!(LogLevel::from_verbosity(5, false), LogLevel::Trace);
        assert_eq!(LogLevel::from_verbosity(3, true), LogLevel::Error);
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
        assert!(!config.source_location);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = LogConfig::from_lookup(lookup(&[
            ("ADL_LOG_LEVEL", "debug"),
            ("ADL_LOG_FORMAT", "json"),
            ("ADL_LOG_FILE", "/tmp/adl.log"),
            ("ADL_LOG_SOURCE", "1"),
        ]));

        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/adl.log")));
        assert!(config.source_location);
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = LogConfig::from_lookup(lookup(&[("RUST_LOG", "trace")]));
        assert_eq!(config.level, LogLevel::Trace);
        assert!(!config.level_pinned);

        let config = LogConfig::from_lookup(lookup(&[("ADL_LOG_LEVEL", "error"), ("RUST_LOG", "trace")]));
        assert_eq!(config.level, LogLevel::Error);
        assert!(config.level_pinned);
    }

    #[test]
    fn test_rust_log_directives_pass_through_when_unpinned() {
        let config = LogConfig::default();
        assert_eq!(config.directives(Some("adl_generator=debug")), "adl_generator=debug");
        assert_eq!(config.directives(Some("  ")), "warn");
        assert_eq!(config.directives(None), "warn");
    }

    #[test]
    fn test_pinned_level_overrides_rust_log() {
        let config = LogConfig::from_lookup(lookup(&[("RUST_LOG", "debug")]))
            .with_level(LogLevel::from_verbosity(0, true));

        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.directives(Some("debug")), "error");

        let config = LogConfig::from_lookup(lookup(&[("ADL_LOG_LEVEL", "info")]));
        assert_eq!(config.directives(Some("trace")), "info");
    }

    #[test]
    fn test_unknown_values_keep_defaults() {
        let config = LogConfig::from_lookup(lookup(&[
            ("ADL_LOG_LEVEL", "loud"),
            ("ADL_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config, LogConfig::default());
    }
}
