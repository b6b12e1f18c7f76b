//! Logging setup for the dinap CLI
//!
//! Diagnostics go to stderr via env_logger (`RUST_LOG` controls the
//! level, default info). When the config names a log directory, output
//! is redirected to a dated file under it instead:
//! `<log_dir>/<YYYYMMDD>/dinap_<HHMMSS>.log`.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(dir) = log_dir {
        let now = Local::now();
        let date_dir = dir.join(now.format("%Y%m%d").to_string());
        fs::create_dir_all(&date_dir).with_context(|| {
            format!("Failed to create log directory at {}", date_dir.display())
        })?;

        let log_path = date_dir.join(format!("dinap_{}.log", now.format("%H%M%S")));
        let file = fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file at {}", log_path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
