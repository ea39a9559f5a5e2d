//! Scrollable per-rack distribution list.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use rackcalc_core::RackLayout;

use crate::styles::ColorTheme;

/// Scroll state for the distribution list.
#[derive(Debug, Clone, Default)]
pub struct DistributionScroll {
    /// Index of the first visible rack.
    pub offset: usize,
}

impl DistributionScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(total: usize) -> usize {
        total.saturating_sub(1)
    }

    /// Keep the offset inside a list of `total` racks.
    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(Self::max_offset(total));
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total: usize) {
        self.offset = (self.offset + 1).min(Self::max_offset(total));
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total: usize) {
        self.offset = self
            .offset
            .saturating_add(page_size)
            .min(Self::max_offset(total));
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.offset = Self::max_offset(total);
    }
}

/// Render the per-rack list starting at the scroll offset.
pub fn render_distribution(frame: &mut Frame, area: Rect, layout: &RackLayout, offset: usize) {
    let theme = ColorTheme::default();
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = layout
        .racks()
        .skip(offset)
        .take(visible)
        .map(|(rack, count)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("Rack {rack}: "), theme.text_style()),
                Span::styled(count.to_string(), theme.value_style()),
                Span::styled(" servers", theme.text_style()),
            ]))
        })
        .collect();

    let title = if layout.distribution.is_empty() {
        " Server Distribution ".to_string()
    } else {
        format!(
            " Server Distribution [{}/{}] ",
            (offset + 1).min(layout.distribution.len()),
            layout.distribution.len()
        )
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(theme.header_style()),
    );
    frame.render_widget(list, area);
}
