//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, valid: bool, racks: usize) {
    let theme = ColorTheme::default();
    let status = if valid {
        Span::styled(format!(" | {racks} racks"), theme.success_style())
    } else {
        Span::styled(" | waiting for input", theme.muted_style())
    };

    let text = vec![Line::from(vec![
        Span::styled("Rack Layout Calculator", theme.header_style()),
        status,
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" rackcalc ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
