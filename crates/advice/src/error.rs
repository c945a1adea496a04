use thiserror::Error;

/// Ways a single lookup can end without producing advice.
///
/// The `Display` text of every variant except [`LookupError::Cancelled`] is the
/// exact message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
	/// The endpoint answered with HTTP 404, which it does for an empty query.
	#[error("Please enter a search term")]
	NotFound,

	/// The endpoint answered with a `message` payload instead of results.
	#[error("{0}")]
	Api(String),

	/// The request failed in transit or the body could not be parsed.
	#[error("{0}")]
	Transport(String),

	/// The body parsed but carried neither results nor a readable message.
	#[error("Unknown error")]
	Unrecognized,

	/// A newer query superseded the lookup before it settled.
	///
	/// The bundled HTTP source never returns this; it is reserved for sources
	/// that abort a request mid-flight. Settling with it returns the status to
	/// idle without recording an error.
	#[error("lookup superseded by a newer query")]
	Cancelled,
}

impl LookupError {
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}

	/// Message to surface in the UI, or `None` when the error must stay silent.
	#[must_use]
	pub fn user_message(&self) -> Option<String> {
		match self {
			Self::Cancelled => None,
			other => Some(other.to_string()),
		}
	}

	/// Short label used in log events.
	#[must_use]
	pub fn kind(&self) -> &'static str {
		match self {
			Self::NotFound => "not_found",
			Self::Api(_) => "api",
			Self::Transport(_) => "transport",
			Self::Unrecognized => "unrecognized",
			Self::Cancelled => "cancelled",
		}
	}
}
