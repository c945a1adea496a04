use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use sage_advice::AdviceOutcome;
use tracing::info;

use super::App;
use crate::systems::lookup::{AdviceSource, ControllerOptions};

/// Construct an [`App`] for `source` and run it to completion.
pub fn run(source: Arc<dyn AdviceSource>, options: ControllerOptions) -> Result<AdviceOutcome> {
	let mut app = App::new(source, options);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<AdviceOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = terminal.clear() {
			ratatui::restore();
			return Err(err.into());
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<AdviceOutcome> = 'event_loop: loop {
			self.tick();
			if self.controller.status().is_loading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			match self.process_events(&mut pending_events) {
				Ok(Some(outcome)) => break 'event_loop Ok(outcome),
				Ok(None) => {}
				Err(err) => break 'event_loop Err(err),
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		self.controller.dispose();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			info!(accepted = outcome.accepted, query = %outcome.query, "session finished");
		}
		result
	}

	/// Feed queued key presses to the app until one of them ends the session.
	/// Events after that key stay queued.
	fn process_events(&mut self, pending: &mut VecDeque<Event>) -> Result<Option<AdviceOutcome>> {
		while let Some(event) = pending.pop_front() {
			if let Event::Key(key) = event
				&& key.kind == KeyEventKind::Press
				&& let Some(outcome) = self.handle_key(key)?
			{
				return Ok(Some(outcome));
			}
		}
		Ok(None)
	}
}
