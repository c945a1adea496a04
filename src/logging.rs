//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while it runs, so events go to a log file.
//! `SAGE_LOG` takes any `EnvFilter` directive and wins over the configured
//! level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

/// Environment variable holding a filter directive, e.g. `sage=debug`.
pub const LOG_ENV: &str = "SAGE_LOG";

/// Install the global subscriber writing to `file`, or to the default log file
/// when `file` is `None`. Returns the path being written.
pub fn initialize(level: &str, file: Option<&Path>) -> Result<PathBuf> {
	let path = match file {
		Some(path) => path.to_path_buf(),
		None => app_dirs::default_log_file()?,
	};
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let writer = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let directive = std::env::var(LOG_ENV).ok();
	fmt()
		.with_env_filter(build_filter(directive.as_deref(), level))
		.with_writer(Mutex::new(writer))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

/// Prefer a parseable environment directive, then `level`, then `info`.
fn build_filter(directive: Option<&str>, level: &str) -> EnvFilter {
	directive
		.filter(|value| !value.trim().is_empty())
		.and_then(|value| EnvFilter::try_new(value).ok())
		.or_else(|| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}
