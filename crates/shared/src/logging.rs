//! Logging infrastructure for the list tools.
//!
//! Structured `tracing` output to the console and to daily-rotated files,
//! with per-crate levels that `RUST_LOG` can override.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::{Layered, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::Config;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log directory path
    pub log_dir: String,
    /// Component name (used for log file naming)
    pub component: String,
    /// Default log level
    pub default_level: Level,
    /// Enable console output
    pub console: bool,
    /// Enable file output
    pub file: bool,
    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "data/logs".to_string(),
            component: "mal-list".to_string(),
            default_level: Level::INFO,
            console: true,
            file: true,
            json_format: false,
        }
    }
}

impl LogConfig {
    /// Build a logging configuration for `component` from the loaded settings
    ///
    /// `verbose` forces DEBUG regardless of the configured level.
    pub fn from_config(config: &Config, component: &str, verbose: bool) -> Result<Self> {
        let default_level = if verbose {
            Level::DEBUG
        } else {
            config.log_level()?
        };

        Ok(Self {
            log_dir: config.log_dir().to_string_lossy().to_string(),
            component: component.to_string(),
            default_level,
            console: config.logging.console,
            file: config.logging.file,
            json_format: config.logging.json_format,
        })
    }
}

/// Default filter: the binary's own target plus the library crates
fn filter_directives(component: &str, level: Level) -> String {
    // Binary targets use underscores even when the package name has dashes
    let target = component.replace('-', "_");
    let mut directives = vec![format!("{}={}", target, level)];
    for krate in ["shared", "mal_list"] {
        if krate != target {
            directives.push(format!("{}={}", krate, level));
        }
    }
    directives.join(",")
}

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Subscriber the output layers sit on: the registry behind the env filter
type Filtered = Layered<EnvFilter, Registry>;

/// Human-readable console output
fn console_layer<S>() -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stdout)
        .boxed()
}

/// Daily-rotated file output named after the component, JSON when requested
fn file_layer<S>(log_dir: &Path, config: &LogConfig) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let appender = tracing_appender::rolling::daily(log_dir, &config.component);

    if config.json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(appender)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(appender)
            .boxed()
    }
}

/// Install the global subscriber described by `config`
///
/// Creates the log directory even when file output is off, so later runs
/// can switch it on without setup. `RUST_LOG` replaces the per-crate
/// defaults entirely. Fails if a global subscriber is already installed.
pub fn init(config: LogConfig) -> Result<()> {
    let log_dir = Path::new(&config.log_dir);
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", config.log_dir))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(filter_directives(&config.component, config.default_level))
    });

    let layers: Vec<BoxedLayer<Filtered>> = [
        config.console.then(console_layer),
        config.file.then(|| file_layer(log_dir, &config)),
    ]
    .into_iter()
    .flatten()
    .collect();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        component = %config.component,
        log_dir = %config.log_dir,
        console = config.console,
        file = config.file,
        "Logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config() {
        let config = LogConfig::default();
        assert_eq!(config.component, "mal-list");
        assert_eq!(config.default_level, Level::INFO);
        assert!(config.console);
        assert!(config.file);
    }

    #[test]
    fn test_from_config_verbose_overrides_level() -> Result<()> {
        let mut config = Config::default();
        config.logging.default_level = "warn".to_string();
        config.logging.json_format = true;

        let quiet = LogConfig::from_config(&config, "mal-list", false)?;
        assert_eq!(quiet.default_level, Level::WARN);
        assert!(quiet.json_format);
        assert!(quiet.log_dir.ends_with("logs"));

        let verbose = LogConfig::from_config(&config, "mal-list", true)?;
        assert_eq!(verbose.default_level, Level::DEBUG);

        Ok(())
    }

    #[test]
    fn test_init_file_only() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let log_dir = temp_dir.path().join("logs");

        init(LogConfig {
            log_dir: log_dir.to_string_lossy().to_string(),
            component: "list-report".to_string(),
            console: false,
            file: true,
            ..Default::default()
        })?;
        tracing::info!("written to the rotated file");

        assert!(log_dir.is_dir());
        let files = std::fs::read_dir(&log_dir)?.count();
        assert_eq!(files, 1);

        // Only one global subscriber per process
        assert!(init(LogConfig {
            log_dir: log_dir.to_string_lossy().to_string(),
            console: false,
            file: false,
            ..Default::default()
        })
        .is_err());

        Ok(())
    }

    #[test]
    fn test_filter_directives() {
        let directives = filter_directives("mal-list", Level::DEBUG);
        assert_eq!(directives, "mal_list=DEBUG,shared=DEBUG");
        assert_eq!(
            filter_directives("list-report", Level::INFO),
            "list_report=INFO,shared=INFO,mal_list=INFO"
        );
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
