use std::fs::File;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file.
pub const LOG_ENV: &str = "BMI_CALC_LOG";

/// Sets up file logging when `BMI_CALC_LOG` is set.
///
/// The terminal belongs to the form, so nothing is ever written to stdout.
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let Ok(log_path) = std::env::var(LOG_ENV) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to create log file {}: {}", log_path, e);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
