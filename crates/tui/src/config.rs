/// Human-readable text rendered around the query input and results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Heading drawn on the first row.
	pub title: String,
	/// Label placed in front of the query input.
	pub prompt: String,
	/// Greyed-out text inside the empty query input.
	pub placeholder: String,
	/// Text shown in the results area before anything has been found.
	pub empty_hint: String,
	/// Label drawn next to the throbber while a lookup is outstanding.
	pub loading_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Get wise with advice".to_string(),
			prompt: "What do you want advice about?".to_string(),
			placeholder: "type a topic, e.g. love".to_string(),
			empty_hint: "Start typing to look for advice.".to_string(),
			loading_label: "Looking for advice".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = prompt.into();
		self
	}
}
