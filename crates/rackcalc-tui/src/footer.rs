//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts and the latest status.
pub fn render_footer(frame: &mut Frame, area: Rect, show_distribution: bool, status: Option<&str>) {
    let toggle = if show_distribution { ": hide list | " } else { ": show list | " };
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": next field | "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(toggle),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(": reset | "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
        Span::raw(": scroll | "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(": quit"),
    ];
    if let Some(status) = status {
        spans.push(Span::styled(
            format!("  {status}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
