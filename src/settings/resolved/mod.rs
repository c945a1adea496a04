use std::path::PathBuf;
use std::time::Duration;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Level used when neither `SAGE_LOG` nor any configuration layer sets one.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub endpoint: String,
	pub timeout: Duration,
	pub debounce: Duration,
	pub initial_query: String,
	pub title: String,
	pub prompt: String,
	pub theme: Option<String>,
	pub log_level: String,
	/// Explicit log file; `None` means `<cache dir>/sage.log`.
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(crate) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		endpoint: "https://api.adviceslip.com/advice/search".into(),
		timeout: Duration::from_secs(10),
		debounce: Duration::from_millis(500),
		initial_query: String::new(),
		title: "Get wise with advice".into(),
		prompt: "What do you want advice about?".into(),
		theme: None,
		log_level: DEFAULT_LOG_LEVEL.into(),
		log_file: None,
	}
}
