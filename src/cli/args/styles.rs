use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use sage::app_dirs;

/// Produce the full version banner including the config, data and cache
/// directories.
pub(super) fn long_version() -> &'static str {
	Box::leak(version_details().into_boxed_str())
}

pub(super) fn version_details() -> String {
	let mut details = format!("sage {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {}", describe_dir(app_dirs::get_config_dir()));
	let _ = writeln!(details, "data directory: {}", describe_dir(app_dirs::get_data_dir()));
	let _ = writeln!(details, "cache directory: {}", describe_dir(app_dirs::get_cache_dir()));
	details
}

fn describe_dir(dir: anyhow::Result<PathBuf>) -> String {
	match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Magenta.on_default())
}
