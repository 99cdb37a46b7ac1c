//! Logging Infrastructure
//!
//! Console logging always, JSON-formatted in production; daily rotating
//! file logs when a log directory is configured. `RUST_LOG` overrides the
//! configured level.

use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `log_dir` - Optional directory for file logging (e.g., Some("./work_dir/logs"))
/// * `json_console` - Emit console lines as JSON (production)
pub fn init_logger_with_file(
    level: &str,
    log_dir: Option<&str>,
    json_console: bool,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_console {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed()
    };

    let registry = tracing_subscriber::registry().with(console_layer);

    match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;

            let app_log = RollingFileAppender::new(Rotation::DAILY, log_dir, "worksphere");
            let file_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(EnvFilter::new(level));

            registry.with(file_layer).try_init()?;
        }
        None => registry.try_init()?,
    }

    Ok(())
}
