//! Logging initialization.
//!
//! TUI mode: logs to the configured file, or to `stepform.log` in the temp
//! dir when none is set. stderr shares the tty with the form.
//! CLI mode: logs to the configured file, or to stderr.
//! `RUST_LOG` takes precedence over the config.

use crate::config::LoggingConfig;
use crate::error::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct LoggingHandle {
    /// Flushes buffered file logs when dropped.
    pub _guard: Option<WorkerGuard>,

    pub log_file_path: Option<PathBuf>,
}

pub fn filter_directive(config: &LoggingConfig, debug_override: bool) -> String {
    if debug_override {
        "debug".to_string()
    } else {
        config.level.clone()
    }
}

const DEFAULT_LOG_FILE: &str = "stepform.log";

/// File to log to, or `None` for stderr.
pub fn log_destination(config: &LoggingConfig, is_tui_mode: bool) -> Option<PathBuf> {
    match &config.file {
        Some(path) => Some(path.clone()),
        None if is_tui_mode => Some(std::env::temp_dir().join(DEFAULT_LOG_FILE)),
        None => None,
    }
}

pub fn init_logging(
    config: &LoggingConfig,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let level = filter_directive(config, debug_override);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    match log_destination(config, is_tui_mode) {
        Some(path) => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)?;
            let file_name = path
                .file_name()
                .map(|name| name.to_os_string())
                .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

            let file_appender = tracing_appender::rolling::never(&dir, &file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(non_blocking),
                )
                .try_init();

            Ok(LoggingHandle {
                _guard: Some(guard),
                log_file_path: Some(dir.join(file_name)),
            })
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init();

            Ok(LoggingHandle {
                _guard: None,
                log_file_path: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_directive, log_destination};
    use crate::config::LoggingConfig;
    use std::path::PathBuf;

    #[test]
    fn debug_flag_overrides_level() {
        let config = LoggingConfig::default();
        assert_eq!(filter_directive(&config, false), "warn");
        assert_eq!(filter_directive(&config, true), "debug");
    }

    #[test]
    fn configured_level_is_used() {
        let config = LoggingConfig {
            level: "stepform=trace".to_string(),
            file: None,
        };
        assert_eq!(filter_directive(&config, false), "stepform=trace");
    }

    #[test]
    fn tui_mode_never_logs_to_stderr() {
        let config = LoggingConfig::default();
        let path = log_destination(&config, true).expect("tui mode logs to a file");
        assert_eq!(path, std::env::temp_dir().join("stepform.log"));
        assert_eq!(log_destination(&config, false), None);
    }

    #[test]
    fn configured_file_wins_in_both_modes() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            file: Some(PathBuf::from("/var/log/stepform/run.log")),
        };
        assert_eq!(log_destination(&config, true), config.file);
        assert_eq!(log_destination(&config, false), config.file);
    }
}
