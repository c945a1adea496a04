use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph, Wrap};
use sage_advice::{LookupPhase, SearchStatus};
use unicode_width::UnicodeWidthStr;

use super::wrap::wrap_words;
use crate::style::Theme;

/// Shown when a lookup succeeded with an empty result list.
pub const NO_MATCHES_MESSAGE: &str = "No advice matched that search.";

const HIGHLIGHT_SYMBOL: &str = "» ";

/// Argument bundle for rendering the results area.
pub struct ResultsContext<'a> {
	pub status: &'a SearchStatus,
	pub empty_hint: &'a str,
	pub theme: &'a Theme,
}

/// Render the error message, the advice list, or a hint, depending on the
/// lookup status.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	context: ResultsContext<'_>,
	list_state: &mut ListState,
) {
	let ResultsContext {
		status,
		empty_hint,
		theme,
	} = context;

	if area.width == 0 || area.height == 0 {
		return;
	}

	if !status.error().is_empty() {
		let message = Paragraph::new(status.error().to_string())
			.style(theme.error_style())
			.wrap(Wrap { trim: true });
		frame.render_widget(message, area);
		return;
	}

	if status.data().is_empty() {
		let text = match status.phase() {
			LookupPhase::Loading => return,
			LookupPhase::Success => NO_MATCHES_MESSAGE,
			LookupPhase::Idle | LookupPhase::Failed => empty_hint,
		};
		let hint = Paragraph::new(text.to_string())
			.alignment(Alignment::Center)
			.style(theme.muted_style());
		frame.render_widget(hint, area);
		return;
	}

	let text_width = usize::from(area.width).saturating_sub(HIGHLIGHT_SYMBOL.width());
	let items: Vec<ListItem> = status
		.data()
		.iter()
		.map(|slip| {
			let lines: Vec<Line> = wrap_words(&slip.advice, text_width)
				.into_iter()
				.map(Line::from)
				.collect();
			ListItem::new(Text::from(lines)).style(theme.input_style())
		})
		.collect();

	let list = List::new(items)
		.highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, area, list_state);
}
