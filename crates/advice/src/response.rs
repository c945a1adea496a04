//! Classification of raw advice-search responses.

use serde::Deserialize;
use serde_json::Value;

use crate::error::LookupError;
use crate::types::Advice;

/// Status the endpoint uses when no search term was supplied.
pub const NOT_FOUND_STATUS: u16 = 404;

#[derive(Debug, Deserialize)]
struct SearchPayload {
	#[serde(default)]
	slips: Option<Vec<Advice>>,
	#[serde(default)]
	message: Option<Value>,
}

/// Turn an HTTP status and body into the lookup result.
///
/// A 404 wins over the body. Otherwise a `message` payload takes precedence
/// over `slips`, and a body with neither is [`LookupError::Unrecognized`].
pub fn classify_response(status: u16, body: &str) -> Result<Vec<Advice>, LookupError> {
	if status == NOT_FOUND_STATUS {
		return Err(LookupError::NotFound);
	}

	let payload: SearchPayload =
		serde_json::from_str(body).map_err(|err| LookupError::Transport(err.to_string()))?;

	if let Some(message) = payload.message {
		return match message_text(&message) {
			Some(text) => Err(LookupError::Api(text)),
			None => Err(LookupError::Unrecognized),
		};
	}

	payload.slips.ok_or(LookupError::Unrecognized)
}

fn message_text(message: &Value) -> Option<String> {
	message
		.get("text")
		.and_then(Value::as_str)
		.filter(|text| !text.is_empty())
		.map(str::to_owned)
}
