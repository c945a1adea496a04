mod builtins;
mod types;

pub use builtins::{builtin_themes, default_theme};
pub use types::{Theme, ThemeDefinition};

/// Look up a built-in theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim();
	builtin_themes()
		.iter()
		.find(|definition| definition.matches(wanted))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes, default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes()
		.iter()
		.map(|definition| definition.name)
		.collect()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
