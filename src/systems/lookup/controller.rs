use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use sage_advice::{LookupEvent, SearchStatus};
use tracing::{debug, info, trace, warn};

use super::client::AdviceSource;
use super::commands::LookupResult;
use super::debounce::Debouncer;
use super::runtime::LookupRuntime;
use super::worker;

/// Quiet period after the last keystroke before a lookup is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct ControllerOptions {
	pub debounce: Duration,
	/// Query shown on start; a non-empty one is looked up immediately.
	pub initial_query: String,
}

impl Default for ControllerOptions {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			initial_query: String::new(),
		}
	}
}

/// Owns the [`SearchStatus`] and drives it from input changes and settled
/// lookups.
///
/// Everything runs on the caller's thread except the lookups themselves:
/// [`submit_query`](Self::submit_query) records input, and
/// [`tick`](Self::tick) fires the debounced lookup and applies results. Only
/// the most recently dispatched lookup may change the status.
pub struct QueryController {
	status: SearchStatus,
	debounce: Debouncer<String>,
	lookups: LookupRuntime,
	effective_query: Option<String>,
	disposed: bool,
}

impl QueryController {
	pub fn new(source: Arc<dyn AdviceSource>, options: ControllerOptions) -> Self {
		let ControllerOptions {
			debounce,
			initial_query,
		} = options;
		let (tx, rx, latest_query_id) = worker::spawn(source);
		let mut controller = Self {
			status: SearchStatus::new(initial_query.clone()),
			debounce: Debouncer::new(debounce),
			lookups: LookupRuntime::new(tx, rx, latest_query_id),
			effective_query: None,
			disposed: false,
		};
		if !initial_query.is_empty() {
			controller.dispatch(initial_query);
		}
		controller
	}

	#[must_use]
	pub fn status(&self) -> &SearchStatus {
		&self.status
	}

	#[must_use]
	pub fn snapshot(&self) -> SearchStatus {
		self.status.clone()
	}

	/// Record new input text. The displayed query changes at once; the
	/// lookup waits for the debounce window.
	pub fn submit_query(&mut self, text: impl Into<String>) {
		self.submit_query_at(text, Instant::now());
	}

	pub fn submit_query_at(&mut self, text: impl Into<String>, now: Instant) {
		if self.disposed {
			return;
		}
		let text = text.into();
		self.status.apply(LookupEvent::QueryEdited(text.clone()));
		self.debounce.push(text, now);
	}

	/// Fire a due lookup and apply any settled results. Returns `true` when
	/// the status changed.
	pub fn tick(&mut self) -> bool {
		self.tick_at(Instant::now())
	}

	pub fn tick_at(&mut self, now: Instant) -> bool {
		if self.disposed {
			return false;
		}
		let mut changed = false;
		if let Some(query) = self.debounce.poll(now) {
			changed |= self.effective_query_changed(query);
		}
		changed |= self.pump_results();
		changed
	}

	/// When the pending debounced lookup will fire, if one is pending.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debounce.deadline()
	}

	#[cfg(test)]
	pub(crate) fn has_dispatched(&self) -> bool {
		self.lookups.has_issued_query()
	}

	#[cfg(test)]
	pub(crate) fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Cancel the pending debounce and every in-flight lookup. The status is
	/// frozen afterwards.
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.debounce.cancel();
		if self.lookups.is_in_flight() {
			self.status.apply(LookupEvent::Cancelled);
		}
		self.lookups.abandon();
		self.lookups.shutdown();
		self.disposed = true;
		debug!("query controller disposed");
	}

	fn effective_query_changed(&mut self, query: String) -> bool {
		if self.effective_query.as_deref() == Some(query.as_str()) {
			trace!(%query, "debounced query unchanged");
			return false;
		}
		self.dispatch(query);
		true
	}

	fn dispatch(&mut self, query: String) {
		if self.lookups.is_in_flight() {
			debug!("abandoning superseded lookup");
			self.status.apply(LookupEvent::Cancelled);
		}
		self.effective_query = Some(query.clone());
		let generation = self.lookups.issue(query.clone());
		self.status.apply(LookupEvent::Dispatched { generation });
		info!(generation, %query, "dispatched advice lookup");
	}

	fn pump_results(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.lookups.try_recv() {
				Ok(result) => changed |= self.handle_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
		changed
	}

	fn handle_result(&mut self, result: LookupResult) -> bool {
		let LookupResult { id, query, outcome } = result;
		if !self.lookups.matches_latest(id) {
			debug!(id, %query, "ignoring stale lookup result");
			return false;
		}
		self.lookups.record_completion();

		match &outcome {
			Ok(advice) => info!(generation = id, count = advice.len(), "lookup succeeded"),
			Err(err) if err.is_cancelled() => debug!(generation = id, "lookup cancelled"),
			Err(err) => warn!(generation = id, kind = err.kind(), error = %err, "lookup failed"),
		}

		self.status.apply(LookupEvent::Settled {
			generation: id,
			outcome,
		})
	}
}

impl Drop for QueryController {
	fn drop(&mut self) {
		self.dispose();
	}
}
