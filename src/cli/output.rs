use anyhow::Result;
use sage::AdviceOutcome;
use serde_json::json;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &AdviceOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(advice) => println!("{}", advice.advice),
		None => println!("No selection"),
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &AdviceOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(advice) => json!({
			"id": advice.id,
			"advice": advice.advice,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &AdviceOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
