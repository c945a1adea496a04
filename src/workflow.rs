use anyhow::{Context, Result};
use sage::{AdviceOutcome, AdviceUi};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive advice search.
pub(crate) struct AdviceWorkflow {
	advice_ui: AdviceUi,
}

impl AdviceWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let advice_ui = AdviceUiFactory::build(config)?;
		Ok(Self { advice_ui })
	}

	pub(crate) fn run(self) -> Result<AdviceOutcome> {
		self.advice_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `AdviceUi`.
struct AdviceUiFactory {
	advice_ui: AdviceUi,
}

impl AdviceUiFactory {
	fn build(config: ResolvedConfig) -> Result<AdviceUi> {
		let ResolvedConfig {
			endpoint,
			timeout,
			debounce,
			initial_query,
			title,
			prompt,
			theme,
			..
		} = config;

		info!(%endpoint, ?timeout, ?debounce, "configuring advice search");
		let advice_ui = AdviceUi::http(endpoint.clone(), timeout)
			.with_context(|| format!("failed to prepare advice source for {endpoint}"))?;

		let builder = Self { advice_ui }
			.with_debounce(debounce)
			.with_initial_query(initial_query)
			.with_labels(title, prompt)
			.with_theme(theme);

		Ok(builder.finish())
	}

	fn with_debounce(mut self, debounce: std::time::Duration) -> Self {
		self.advice_ui = self.advice_ui.with_debounce(debounce);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.advice_ui = self.advice_ui.with_initial_query(query);
		self
	}

	fn with_labels(mut self, title: String, prompt: String) -> Self {
		self.advice_ui = self.advice_ui.with_title(title).with_prompt(prompt);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.advice_ui = self.advice_ui.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> AdviceUi {
		self.advice_ui
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn workflow_builds_from_resolved_config() {
		let config = ResolvedConfig {
			endpoint: "http://127.0.0.1:1/advice/search".into(),
			timeout: std::time::Duration::from_secs(1),
			debounce: std::time::Duration::from_millis(100),
			initial_query: String::new(),
			title: "Title".into(),
			prompt: "Prompt".into(),
			theme: Some("solarized".into()),
			log_level: "info".into(),
			log_file: None,
		};

		assert!(AdviceWorkflow::from_config(config).is_ok());
	}
}
