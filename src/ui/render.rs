use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use sage_tui::components::{
	LoadingState, PromptContext, ResultsContext, render_header, render_prompt, render_results,
};

use super::App;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(area);

		let theme = self.style.theme;
		render_header(frame, layout[0], &self.labels.title, &theme);

		let status = self.controller.status();
		let prompt = PromptContext {
			input: &self.query_input,
			label: &self.labels.prompt,
			area: layout[1],
			theme: &theme,
		};
		let loading = LoadingState {
			loading: status.is_loading(),
			label: &self.labels.loading_label,
			throbber_state: &self.throbber_state,
		};
		render_prompt(frame, prompt, loading);

		let results = ResultsContext {
			status,
			empty_hint: &self.labels.empty_hint,
			theme: &theme,
		};
		render_results(frame, layout[3], results, &mut self.list_state);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::thread;
	use std::time::{Duration, Instant};

	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use sage_advice::{Advice, LookupError, classify_response};
	use sage_tui::UiLabels;

	use super::*;
	use crate::systems::lookup::{AdviceSource, ControllerOptions};

	fn app(source: Arc<dyn AdviceSource>, initial_query: &str) -> App<'static> {
		App::new(
			source,
			ControllerOptions {
				debounce: Duration::ZERO,
				initial_query: initial_query.to_string(),
			},
		)
	}

	fn render(app: &mut App<'_>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
		terminal.draw(|frame| app.draw(frame)).unwrap();
		terminal.backend().to_string()
	}

	fn settle(app: &mut App<'_>) {
		let deadline = Instant::now() + Duration::from_secs(2);
		while app.status().is_loading() {
			assert!(Instant::now() < deadline, "lookup never settled");
			app.tick();
			thread::sleep(Duration::from_millis(5));
		}
	}

	#[test]
	fn idle_screen_shows_heading_prompt_and_hint() {
		let source = Arc::new(|_: &str| -> Result<Vec<Advice>, LookupError> { Ok(Vec::new()) });
		let mut app = app(source, "");

		let view = render(&mut app);
		insta::assert_snapshot!("idle_screen", view);
	}

	#[test]
	fn outstanding_lookup_shows_the_throbber() {
		let source = Arc::new(|_: &str| -> Result<Vec<Advice>, LookupError> { Ok(Vec::new()) });
		let mut app = app(source, "love");
		assert!(app.status().is_loading());

		let view = render(&mut app);
		insta::assert_snapshot!("loading_screen", view);
	}

	#[test]
	fn settled_lookup_lists_advice_in_response_order() {
		let source = Arc::new(|_: &str| -> Result<Vec<Advice>, LookupError> {
			classify_response(
				200,
				r#"{"slips":[{"id":1,"advice":"Be kind"},{"id":2,"advice":"Drink water"}]}"#,
			)
		});
		let mut app = app(source, "love");
		settle(&mut app);

		let view = render(&mut app);
		let first = view.find("Be kind").expect("first advice rendered");
		let second = view.find("Drink water").expect("second advice rendered");
		assert!(first < second);
		insta::assert_snapshot!("success_screen", view);
	}

	#[test]
	fn failed_lookup_shows_error_text() {
		let source = Arc::new(|_: &str| -> Result<Vec<Advice>, LookupError> {
			classify_response(200, r#"{"message":{"text":"No advice found"}}"#)
		});
		let mut app = app(source, "xyz");
		settle(&mut app);

		let view = render(&mut app);
		insta::assert_snapshot!("failed_screen", view);
	}

	#[test]
	fn empty_success_says_nothing_matched() {
		let source = Arc::new(|_: &str| -> Result<Vec<Advice>, LookupError> { Ok(Vec::new()) });
		let mut app = app(source, "zzz");
		settle(&mut app);

		let view = render(&mut app);
		insta::assert_snapshot!("empty_success_screen", view);
	}

	#[test]
	fn custom_labels_replace_defaults() {
		let source = Arc::new(|_: &str| -> Result<Vec<Advice>, LookupError> { Ok(Vec::new()) });
		let mut app = app(source, "");
		app.set_labels(UiLabels {
			placeholder: "anything at all".to_string(),
			..UiLabels::default().with_title("Ask away").with_prompt("Topic")
		});

		let view = render(&mut app);
		assert!(view.contains("Ask away"));
		assert!(view.contains("Topic > anything at all"));
		assert!(!view.contains("Get wise with advice"));
		assert!(!view.contains("type a topic"));
	}
}
