use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use super::client::AdviceSource;
use super::commands::{LookupCommand, LookupResult};

/// Launches the lookup dispatcher thread and returns its communication channels.
///
/// The returned counter holds the id of the only lookup allowed to report;
/// the controller stores into it before sending each query.
pub(crate) fn spawn(
	source: Arc<dyn AdviceSource>,
) -> (Sender<LookupCommand>, Receiver<LookupResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || dispatch_loop(source, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn dispatch_loop(
	source: Arc<dyn AdviceSource>,
	command_rx: Receiver<LookupCommand>,
	result_tx: Sender<LookupResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			LookupCommand::Query { id, query } => {
				run_lookup(
					Arc::clone(&source),
					id,
					query,
					result_tx.clone(),
					Arc::clone(&latest_query_id),
				);
			}
			LookupCommand::Shutdown => break,
		}
	}
	debug!("lookup dispatcher stopped");
}

// Each lookup gets its own thread so a slow, superseded request never delays
// the one that replaced it.
fn run_lookup(
	source: Arc<dyn AdviceSource>,
	id: u64,
	query: String,
	result_tx: Sender<LookupResult>,
	latest_query_id: Arc<AtomicU64>,
) {
	thread::spawn(move || {
		if !is_current(&latest_query_id, id) {
			debug!(id, "lookup superseded before it started");
			return;
		}

		let outcome = source.search(&query);

		if !is_current(&latest_query_id, id) {
			debug!(id, %query, "discarding stale lookup result");
			return;
		}
		let _ = result_tx.send(LookupResult { id, query, outcome });
	});
}

fn is_current(latest_query_id: &AtomicU64, id: u64) -> bool {
	latest_query_id.load(Ordering::Acquire) == id
}
