//! Input form panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use rackcalc_core::{InputField, RawInputs};

use crate::styles::ColorTheme;

/// Longest text a single field accepts.
pub const MAX_FIELD_LEN: usize = 16;

/// Label column width, so values line up.
const LABEL_WIDTH: usize = 15;

/// Rows the form needs including its border.
#[allow(clippy::cast_possible_truncation)]
pub const FORM_HEIGHT: u16 = InputField::ALL.len() as u16 + 2;

/// Render the four input fields, highlighting the focused one.
pub fn render_form(frame: &mut Frame, area: Rect, raw: &RawInputs, focused: InputField) {
    let theme = ColorTheme::default();

    let lines: Vec<Line> = InputField::ALL
        .iter()
        .map(|&field| {
            let value = raw.get(field);
            let label = format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH);
            if field == focused {
                Line::from(vec![
                    Span::styled(format!("> {label}"), theme.focus_style()),
                    Span::styled(format!("{value}_"), theme.focus_style()),
                ])
            } else {
                Line::from(vec![
                    Span::styled(format!("  {label}"), theme.text_style()),
                    Span::styled(value.to_string(), theme.text_style()),
                ])
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Inputs ")
        .title_style(theme.header_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
