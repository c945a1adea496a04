use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use tracing::level_filters::LevelFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest debounce window accepted; anything above feels like a hang.
pub(super) const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	validate_endpoint(&config.endpoint, sources)?;

	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"api.timeout_secs",
			config.timeout.as_secs().to_string(),
			sources.source_for_timeout(),
			"must be at least 1",
		));
	}

	if config.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			config.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			format!("must not exceed {}", MAX_DEBOUNCE.as_millis()),
		));
	}

	if let Some(theme) = &config.theme
		&& sage_tui::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("expected one of: {}", sage_tui::names().join(", ")),
		));
	}

	if LevelFilter::from_str(&config.log_level).is_err() {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		));
	}

	Ok(())
}

fn validate_endpoint(endpoint: &str, sources: &ConfigSources) -> Result<(), ConfigError> {
	let invalid = |reason: &str| {
		ConfigError::invalid(
			"api.endpoint",
			endpoint,
			sources.source_for_endpoint(),
			reason,
		)
	};

	let url = Url::parse(endpoint).map_err(|err| invalid(&format!("not an absolute URL ({err})")))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid("scheme must be http or https"));
	}
	if url.host_str().is_none_or(str::is_empty) {
		return Err(invalid("missing host"));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::{SettingSource, sample_config};
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&sample_config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout: Duration::ZERO,
			..sample_config()
		};
		let sources = ConfigSources {
			timeout: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_long_debounce() {
		let config = ResolvedConfig {
			debounce: Duration::from_millis(10_001),
			..sample_config()
		};
		let sources = ConfigSources {
			debounce: Some(SettingSource::Environment("SAGE__SEARCH__DEBOUNCE_MS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.debounce_ms");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn debounce_at_the_limit_is_accepted() {
		let config = ResolvedConfig {
			debounce: MAX_DEBOUNCE,
			..sample_config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_relative_and_non_http_endpoints() {
		for endpoint in ["advice/search", "ftp://example.com/search", "file:///tmp/advice"] {
			let config = ResolvedConfig {
				endpoint: endpoint.into(),
				..sample_config()
			};
			let err = validate(&config, &ConfigSources::default()).unwrap_err();
			assert_eq!(err.key, "api.endpoint", "{endpoint}");
			assert_eq!(err.origin, SettingSource::ConfigKey("api.endpoint"));
		}
	}

	#[test]
	fn validation_rejects_unknown_theme_and_level() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..sample_config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.reason.contains("slate"));

		let config = ResolvedConfig {
			log_level: "loud".into(),
			..sample_config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
	}
}
