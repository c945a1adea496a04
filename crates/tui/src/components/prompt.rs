use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub label: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Loading indicator drawn at the right edge of the prompt row.
pub struct LoadingState<'a> {
	pub loading: bool,
	pub label: &'a str,
	pub throbber_state: &'a ThrobberState,
}

/// Render the label, the query input and, while a lookup is outstanding, the
/// throbber.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>, loading: LoadingState<'_>) {
	let PromptContext {
		input,
		label,
		area,
		theme,
	} = prompt;

	let label_width = prompt_width(label);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(layout_constraints(label_width))
		.split(area);

	let input_area = if label_width == 0 {
		horizontal[0]
	} else {
		let widget = Paragraph::new(format!("{label} > ")).style(theme.prompt_style());
		frame.render_widget(widget, horizontal[0]);
		horizontal[1]
	};

	input.render(frame, input_area);
	if loading.loading {
		render_loading(frame, input_area, &loading, theme);
	}
}

fn prompt_width(label: &str) -> u16 {
	if label.is_empty() {
		0
	} else {
		u16::try_from(label.width() + 3).unwrap_or(u16::MAX)
	}
}

fn layout_constraints(label_width: u16) -> Vec<Constraint> {
	if label_width == 0 {
		vec![Constraint::Min(1)]
	} else {
		vec![Constraint::Length(label_width), Constraint::Min(1)]
	}
}

fn render_loading(frame: &mut Frame, area: Rect, loading: &LoadingState<'_>, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted = theme.muted_style();
	let spinner = Throbber::default().style(muted).throbber_style(muted);
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(loading.throbber_state));
	if !loading.label.is_empty() {
		line.spans.push(Span::styled(loading.label.to_string(), muted));
	}

	let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Keep two columns between the typed text and the indicator.
	let row = area.top();
	let last_char_x = (area.left()..area.right()).rev().find(|&x| {
		buffer
			.cell((x, row))
			.is_some_and(|cell| !cell.symbol().trim().is_empty())
	});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
