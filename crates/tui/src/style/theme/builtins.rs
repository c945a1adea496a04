use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	input: Style::new().fg(Color::Rgb(226, 232, 240)),
	muted: Style::new().fg(Color::DarkGray),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
};

const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Blue),
	input: Style::new().fg(Color::Black),
	muted: Style::new().fg(Color::Gray),
	error: Style::new().fg(Color::Red),
	row_highlight: Style::new()
		.bg(Color::Rgb(226, 232, 240))
		.fg(Color::Rgb(15, 23, 42)),
};

const SOLARIZED: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	input: Style::new().fg(Color::Rgb(131, 148, 150)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
	row_highlight: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
};

const BUILTINS: [ThemeDefinition; 3] = [
	ThemeDefinition::new("slate", SLATE),
	ThemeDefinition::new("light", LIGHT).with_aliases(&["day"]),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];

/// Built-in themes bundled with the application, default first.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	&BUILTINS
}

/// Get the default built-in theme.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}
