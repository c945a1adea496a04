//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the terminal UI. [`StyleConfig`]
//! is the umbrella handed to rendering code so further knobs can sit next to
//! the theme without widening every signature.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
