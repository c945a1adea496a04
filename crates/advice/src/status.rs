//! Lookup lifecycle expressed as pure transitions over [`SearchStatus`].
//!
//! The status is versioned by lookup generation: every dispatch stamps the
//! generation it is waiting on and a settle event carrying any other
//! generation is dropped. This keeps the "one result per query change" rule
//! checkable without a network or a UI.

use crate::error::LookupError;
use crate::types::Advice;

/// Where the current lookup slot stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPhase {
	#[default]
	Idle,
	Loading,
	Success,
	Failed,
}

/// Inputs that can move a [`SearchStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
	/// The raw input changed; only the displayed query moves.
	QueryEdited(String),
	/// A lookup tagged `generation` was issued.
	Dispatched { generation: u64 },
	/// The lookup tagged `generation` finished.
	Settled {
		generation: u64,
		outcome: Result<Vec<Advice>, LookupError>,
	},
	/// The awaited lookup was abandoned without a result.
	Cancelled,
}

/// Snapshot of what the presentation layer shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatus {
	query: String,
	data: Vec<Advice>,
	loading: bool,
	error: String,
	phase: LookupPhase,
	generation: u64,
}

impl SearchStatus {
	#[must_use]
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn data(&self) -> &[Advice] {
		&self.data
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn error(&self) -> &str {
		&self.error
	}

	#[must_use]
	pub fn phase(&self) -> LookupPhase {
		self.phase
	}

	/// Generation of the most recently dispatched lookup, `0` before any.
	#[must_use]
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Apply `event` in place. Returns `false` when the event was stale or had
	/// no effect.
	pub fn apply(&mut self, event: LookupEvent) -> bool {
		match event {
			LookupEvent::QueryEdited(query) => {
				if self.query == query {
					return false;
				}
				self.query = query;
				true
			}
			LookupEvent::Dispatched { generation } => {
				if generation <= self.generation {
					return false;
				}
				self.generation = generation;
				self.phase = LookupPhase::Loading;
				self.loading = true;
				self.error.clear();
				self.data.clear();
				true
			}
			LookupEvent::Settled {
				generation,
				outcome,
			} => {
				if self.phase != LookupPhase::Loading || generation != self.generation {
					return false;
				}
				self.settle(outcome);
				true
			}
			LookupEvent::Cancelled => {
				if self.phase != LookupPhase::Loading {
					return false;
				}
				self.reset_idle();
				true
			}
		}
	}

	fn settle(&mut self, outcome: Result<Vec<Advice>, LookupError>) {
		match outcome {
			Ok(data) => {
				self.phase = LookupPhase::Success;
				self.loading = false;
				self.error.clear();
				self.data = data;
			}
			Err(LookupError::Cancelled) => self.reset_idle(),
			Err(err) => {
				self.phase = LookupPhase::Failed;
				self.loading = false;
				self.data.clear();
				self.error = err.to_string();
			}
		}
	}

	fn reset_idle(&mut self) {
		self.phase = LookupPhase::Idle;
		self.loading = false;
		self.data.clear();
		self.error.clear();
	}
}

/// Functional form of [`SearchStatus::apply`].
#[must_use]
pub fn transition(mut status: SearchStatus, event: LookupEvent) -> SearchStatus {
	status.apply(event);
	status
}
