use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sage_advice::AdviceOutcome;
use tracing::debug;

use super::App;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<AdviceOutcome>> {
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Ok(Some(self.outcome(false)));
			}
			KeyCode::Enter => return Ok(Some(self.outcome(true))),
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				if self.query_input.input(key) {
					let query = self.query_input.text().to_string();
					debug!(%query, "query edited");
					self.controller.submit_query(query);
				}
			}
		}
		Ok(None)
	}

	fn outcome(&self, accepted: bool) -> AdviceOutcome {
		AdviceOutcome {
			accepted,
			query: self.query_input.text().to_string(),
			selection: if accepted {
				self.current_selection()
			} else {
				None
			},
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.list_state.selected() {
			let len = self.controller.status().data().len();
			if selected + 1 < len {
				self.list_state.select(Some(selected + 1));
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::thread;
	use std::time::{Duration, Instant};

	use sage_advice::{Advice, LookupError, LookupPhase};

	use super::*;
	use crate::systems::lookup::ControllerOptions;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn app_with_results() -> App<'static> {
		let source = Arc::new(|query: &str| -> Result<Vec<Advice>, LookupError> {
			Ok(vec![
				Advice::new(1, format!("first about {query}")),
				Advice::new(2, format!("second about {query}")),
			])
		});
		App::new(
			source,
			ControllerOptions {
				debounce: Duration::ZERO,
				initial_query: String::new(),
			},
		)
	}

	fn settle(app: &mut App<'_>) {
		let deadline = Instant::now() + Duration::from_secs(2);
		while app.status().is_loading() || app.status().phase() == LookupPhase::Idle {
			assert!(Instant::now() < deadline, "lookup never settled");
			app.tick();
			thread::sleep(Duration::from_millis(5));
		}
	}

	#[test]
	fn typing_updates_the_query_immediately() {
		let mut app = app_with_results();
		for ch in "tea".chars() {
			assert!(app.handle_key(press(KeyCode::Char(ch))).unwrap().is_none());
		}

		assert_eq!(app.query_input.text(), "tea");
		assert_eq!(app.status().query(), "tea");
	}

	#[test]
	fn enter_accepts_highlighted_advice() {
		let mut app = app_with_results();
		app.handle_key(press(KeyCode::Char('x'))).unwrap();
		settle(&mut app);

		assert_eq!(app.list_state.selected(), Some(0));
		app.handle_key(press(KeyCode::Down)).unwrap();
		app.handle_key(press(KeyCode::Down)).unwrap();
		assert_eq!(app.list_state.selected(), Some(1));

		let outcome = app.handle_key(press(KeyCode::Enter)).unwrap().unwrap();
		assert!(outcome.accepted);
		assert_eq!(outcome.query, "x");
		assert_eq!(outcome.selection, Some(Advice::new(2, "second about x")));
	}

	#[test]
	fn escape_leaves_without_selection() {
		let mut app = app_with_results();
		app.handle_key(press(KeyCode::Char('x'))).unwrap();
		settle(&mut app);

		let outcome = app.handle_key(press(KeyCode::Esc)).unwrap().unwrap();
		assert!(!outcome.accepted);
		assert_eq!(outcome.selection, None);
	}

	#[test]
	fn ctrl_c_cancels() {
		let mut app = app_with_results();
		let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
		let outcome = app.handle_key(key).unwrap().unwrap();
		assert!(!outcome.accepted);
		assert_eq!(app.query_input.text(), "");
	}

	#[test]
	fn up_stops_at_the_first_row() {
		let mut app = app_with_results();
		app.handle_key(press(KeyCode::Char('x'))).unwrap();
		settle(&mut app);

		app.handle_key(press(KeyCode::Up)).unwrap();
		assert_eq!(app.list_state.selected(), Some(0));
	}
}
