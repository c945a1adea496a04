use sage_advice::{Advice, LookupError};

/// Commands understood by the background lookup dispatcher.
#[derive(Debug)]
pub(crate) enum LookupCommand {
	/// Search for advice matching `query`.
	Query {
		/// Generation that lets the controller correlate the answer with its query.
		id: u64,
		/// Text embedded in the request path.
		query: String,
	},
	/// Stop the dispatcher thread.
	Shutdown,
}

/// Settled lookup emitted back to the controller.
#[derive(Debug)]
pub(crate) struct LookupResult {
	/// Identifier matching the [`LookupCommand::Query`] that produced the result.
	pub(crate) id: u64,
	pub(crate) query: String,
	pub(crate) outcome: Result<Vec<Advice>, LookupError>,
}
