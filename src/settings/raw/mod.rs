use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use sage::{DEFAULT_DEBOUNCE, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use sage_tui::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, DEFAULT_LOG_LEVEL, ResolvedConfig, SettingSource};

mod lookup;
mod ui;

use lookup::{ApiSection, SearchSection};
use ui::{LoggingSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.api.endpoint.is_some(),
				"SAGE__API__ENDPOINT",
				"--endpoint",
				"api.endpoint",
			),
			timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.api.timeout_secs.is_some(),
				"SAGE__API__TIMEOUT_SECS",
				"--timeout",
				"api.timeout_secs",
			),
			debounce: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"SAGE__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"SAGE__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"SAGE__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let labels = UiLabels::default();
		let config = ResolvedConfig {
			endpoint: self
				.api
				.endpoint
				.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
			timeout: self
				.api
				.timeout_secs
				.map_or(DEFAULT_TIMEOUT, Duration::from_secs),
			debounce: self
				.search
				.debounce_ms
				.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
			initial_query: self.search.initial_query.unwrap_or_default(),
			title: self.ui.title.unwrap_or(labels.title),
			prompt: self.ui.prompt.unwrap_or(labels.prompt),
			theme: self.ui.theme,
			log_level: self
				.logging
				.level
				.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			log_file: self.logging.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
