//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger, writing to daily files under `log_dir` when it
/// exists and to stderr otherwise
pub fn init_logger(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        if Path::new(dir).is_dir() {
            let file_appender = tracing_appender::rolling::daily(dir, "foodflow");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("log dir {} does not exist, logging to stderr", dir);
    }

    subscriber.with_writer(std::io::stderr).init();
}
