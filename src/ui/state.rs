use std::sync::Arc;

use ratatui::widgets::ListState;
use sage_advice::{Advice, SearchStatus};
use sage_tui::{QueryInput, StyleConfig, Theme, UiLabels};
use throbber_widgets_tui::ThrobberState;

use crate::systems::lookup::{AdviceSource, ControllerOptions, QueryController};

/// State shared across the terminal UI: the query input, the controller
/// driving lookups, and what the renderer needs to draw them.
pub struct App<'a> {
	pub(crate) controller: QueryController,
	pub query_input: QueryInput<'a>,
	pub list_state: ListState,
	pub(crate) labels: UiLabels,
	pub(crate) style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
}

impl<'a> App<'a> {
	pub fn new(source: Arc<dyn AdviceSource>, options: ControllerOptions) -> Self {
		let query_input = QueryInput::new(options.initial_query.clone());
		let controller = QueryController::new(source, options);
		let mut app = Self {
			controller,
			query_input,
			list_state: ListState::default(),
			labels: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
		};
		app.apply_input_style();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
		self.apply_input_style();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
		self.apply_input_style();
	}

	#[must_use]
	pub fn status(&self) -> &SearchStatus {
		self.controller.status()
	}

	/// Advance debouncing and apply settled lookups, keeping the highlight in
	/// range of the current results.
	pub(crate) fn tick(&mut self) -> bool {
		let changed = self.controller.tick();
		if changed {
			self.sync_selection();
		}
		changed
	}

	pub(crate) fn sync_selection(&mut self) {
		let len = self.controller.status().data().len();
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
			Some(_) => {}
			None => self.list_state.select(Some(0)),
		}
	}

	pub(crate) fn current_selection(&self) -> Option<Advice> {
		let selected = self.list_state.selected()?;
		self.controller.status().data().get(selected).cloned()
	}

	fn apply_input_style(&mut self) {
		let theme = self.style.theme;
		self.query_input.set_style(theme.input_style());
		self.query_input.set_placeholder(self.labels.placeholder.clone(), theme.muted_style());
	}
}
