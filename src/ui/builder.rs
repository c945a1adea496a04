use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sage_advice::AdviceOutcome;
use sage_tui::{Theme, UiLabels};

use super::App;
use crate::systems::lookup::{AdviceSource, ControllerOptions, HttpAdviceSource};

/// A small builder for configuring and running the advice search UI.
pub struct AdviceUi {
	source: Arc<dyn AdviceSource>,
	options: ControllerOptions,
	labels: UiLabels,
	theme: Option<Theme>,
}

impl AdviceUi {
	/// Search `source` with default labels, theme and debounce.
	pub fn new(source: Arc<dyn AdviceSource>) -> Self {
		Self {
			source,
			options: ControllerOptions::default(),
			labels: UiLabels::default(),
			theme: None,
		}
	}

	/// Search the HTTP endpoint at `endpoint`.
	pub fn http(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
		let source = HttpAdviceSource::new(endpoint, timeout)?;
		Ok(Self::new(Arc::new(source)))
	}

	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.options.debounce = debounce;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.options.initial_query = query.into();
		self
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.labels = self.labels.with_title(title);
		self
	}

	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.labels = self.labels.with_prompt(prompt);
		self
	}

	/// Unknown names leave the current theme in place.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = sage_tui::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Build the [`App`] without entering the terminal.
	pub fn into_app(self) -> App<'static> {
		let mut app = App::new(self.source, self.options);
		app.set_labels(self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app
	}

	/// Run the interactive UI with the configured options.
	pub fn run(self) -> Result<AdviceOutcome> {
		self.into_app().run()
	}
}

#[cfg(test)]
mod tests {
	use sage_advice::{Advice, LookupError};

	use super::*;

	fn builder() -> AdviceUi {
		AdviceUi::new(Arc::new(|_: &str| -> Result<Vec<Advice>, LookupError> {
			Ok(Vec::new())
		}))
	}

	#[test]
	fn builder_applies_labels_and_theme() {
		let light = sage_tui::by_name("light").unwrap();
		let app = builder()
			.with_title("Ask away")
			.with_prompt("Topic")
			.with_theme_name("light")
			.into_app();

		assert_eq!(app.labels.title, "Ask away");
		assert_eq!(app.labels.prompt, "Topic");
		assert_eq!(app.style.theme, light);
	}

	#[test]
	fn unknown_theme_name_keeps_default() {
		let app = builder().with_theme_name("neon").into_app();
		assert_eq!(app.style.theme, sage_tui::default_theme());
	}

	#[test]
	fn initial_query_seeds_input_and_lookup() {
		let app = builder()
			.with_debounce(Duration::from_millis(10))
			.with_initial_query("cats")
			.into_app();

		assert_eq!(app.query_input.text(), "cats");
		assert_eq!(app.status().query(), "cats");
		assert!(app.controller.has_dispatched());
	}

	#[test]
	fn http_builder_accepts_endpoint() {
		assert!(AdviceUi::http("http://127.0.0.1:1/advice/search", Duration::from_secs(1)).is_ok());
	}
}
