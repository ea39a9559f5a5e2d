//! Results panel: figures, capacity warning, rack summary, suggestion.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use rackcalc_cli::presenter::{report_lines, ReportLine};
use rackcalc_core::{RackInputs, RackLayout};

use crate::styles::ColorTheme;

/// Styled lines for the results panel, built from the CLI report.
#[must_use]
pub fn result_lines(inputs: &RackInputs, layout: &RackLayout) -> Vec<Line<'static>> {
    let theme = ColorTheme::default();

    report_lines(inputs, layout, false)
        .into_iter()
        // The panel title already names the first section.
        .skip(1)
        .map(|line| match line {
            ReportLine::Header(text) => {
                Line::from(Span::styled(format!("{text}:"), theme.header_style()))
            }
            ReportLine::Text(text) => match text.rsplit_once(": ") {
                Some((label, value)) if !value.ends_with('.') => Line::from(vec![
                    Span::styled(format!("{label}: "), theme.text_style()),
                    Span::styled(value.to_string(), theme.value_style()),
                ]),
                _ => Line::from(Span::styled(text, theme.text_style())),
            },
            ReportLine::Warning(text) => {
                Line::from(Span::styled(format!("! {text}"), theme.error_style()))
            }
        })
        .collect()
}

/// Render the results panel.
pub fn render_results(frame: &mut Frame, area: Rect, inputs: &RackInputs, layout: &RackLayout) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Rack Layout ")
        .title_style(theme.header_style());

    let paragraph = Paragraph::new(result_lines(inputs, layout))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
