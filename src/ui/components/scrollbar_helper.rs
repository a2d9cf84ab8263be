//! Scrollbar helper for panes with scrollable content.
//!
//! Works in rows: the pane reports its content height, viewport height and
//! scroll offset, and the helper decides whether a scrollbar column is
//! needed and draws it.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Sync the scrollbar with the pane's geometry.
    pub fn update_state(&mut self, content_height: usize, offset: usize, viewport_height: usize) {
        // The thumb reaches the end once the last page is in view
        let scrollable = content_height.saturating_sub(viewport_height);
        self.state = self
            .state
            .content_length(scrollable + 1)
            .position(offset.min(scrollable))
            .viewport_content_length(viewport_height);
    }

    pub fn needs_scrollbar(content_height: usize, viewport_height: usize) -> bool {
        content_height > viewport_height
    }

    /// Split `rect` into the content area and, if the content overflows, a
    /// one-column scrollbar area on the right.
    pub fn calculate_areas(rect: Rect, content_height: usize) -> (Rect, Option<Rect>) {
        if !Self::needs_scrollbar(content_height, rect.height as usize) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            width: 1,
            ..rect
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
