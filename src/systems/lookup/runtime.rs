use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::commands::{LookupCommand, LookupResult};

/// Controller-side handle on the dispatcher: hands out query ids and decides
/// which results are still wanted.
pub(crate) struct LookupRuntime {
	tx: Sender<LookupCommand>,
	rx: Receiver<LookupResult>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl LookupRuntime {
	pub(crate) fn new(
		tx: Sender<LookupCommand>,
		rx: Receiver<LookupResult>,
		latest_query_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	/// Send a lookup for `query` and return the id it was tagged with.
	pub(crate) fn issue(&mut self, query: String) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.current_query_id = Some(id);
		self.in_flight = true;
		self.latest_query_id.store(id, Ordering::Release);
		let _ = self.tx.send(LookupCommand::Query { id, query });
		id
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub(crate) fn record_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	#[cfg(test)]
	pub(crate) fn has_issued_query(&self) -> bool {
		self.next_query_id > 0
	}

	pub(crate) fn try_recv(&mut self) -> Result<LookupResult, TryRecvError> {
		self.rx.try_recv()
	}

	/// Invalidate every outstanding lookup. Ids start at 1, so resetting the
	/// shared counter to 0 silences all of them.
	pub(crate) fn abandon(&mut self) {
		self.current_query_id = None;
		self.in_flight = false;
		self.latest_query_id.store(0, Ordering::Release);
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(LookupCommand::Shutdown);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;

	fn runtime() -> (LookupRuntime, Receiver<LookupCommand>, Arc<AtomicU64>) {
		let (command_tx, command_rx) = mpsc::channel();
		let (_result_tx, result_rx) = mpsc::channel();
		let latest = Arc::new(AtomicU64::new(0));
		let runtime = LookupRuntime::new(command_tx, result_rx, Arc::clone(&latest));
		(runtime, command_rx, latest)
	}

	#[test]
	fn issue_tags_queries_with_increasing_ids() {
		let (mut runtime, commands, latest) = runtime();
		assert!(!runtime.has_issued_query());

		assert_eq!(runtime.issue("a".into()), 1);
		assert_eq!(runtime.issue("ab".into()), 2);

		assert_eq!(latest.load(Ordering::Acquire), 2);
		assert!(runtime.matches_latest(2));
		assert!(!runtime.matches_latest(1));
		assert!(runtime.is_in_flight());
		assert!(matches!(
			commands.try_recv().unwrap(),
			LookupCommand::Query { id: 1, .. }
		));
	}

	#[test]
	fn abandon_silences_everything() {
		let (mut runtime, _commands, latest) = runtime();
		runtime.issue("a".into());
		runtime.abandon();

		assert_eq!(latest.load(Ordering::Acquire), 0);
		assert!(!runtime.matches_latest(1));
		assert!(!runtime.is_in_flight());
	}
}
