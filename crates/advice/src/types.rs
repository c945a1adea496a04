use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single advice slip.
///
/// The public API sends numeric ids, but string ids are accepted as well so a
/// mirror with a slightly different encoding does not break parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdviceId {
	Number(u64),
	Text(String),
}

impl fmt::Display for AdviceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(id) => write!(f, "{id}"),
			Self::Text(id) => f.write_str(id),
		}
	}
}

impl From<u64> for AdviceId {
	fn from(value: u64) -> Self {
		Self::Number(value)
	}
}

impl From<&str> for AdviceId {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

/// A single piece of advice returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
	pub id: AdviceId,
	pub advice: String,
}

impl Advice {
	#[must_use]
	pub fn new(id: impl Into<AdviceId>, advice: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			advice: advice.into(),
		}
	}
}

/// Result of an interactive session once the user leaves the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceOutcome {
	/// Whether the user confirmed a selection rather than backing out.
	pub accepted: bool,
	/// Query text at the moment the session ended.
	pub query: String,
	/// Highlighted advice, if any, when the session was accepted.
	pub selection: Option<Advice>,
}
