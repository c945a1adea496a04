use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Draw the centred heading row.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
	if area.height == 0 || title.is_empty() {
		return;
	}
	let heading = Paragraph::new(title.to_string())
		.alignment(Alignment::Center)
		.style(theme.title_style());
	frame.render_widget(heading, area);
}
