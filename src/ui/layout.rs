//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Search bar height, borders included
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into search bar, body and status line.
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    /// Split the body into the order list and the details pane.
    #[must_use]
    pub fn body_layout(area: Rect) -> [Rect; 2] {
        let list_width = std::cmp::max(area.width / 5 * 2, 30).min(area.width); // 40% of width, min 30
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(list_width), Constraint::Min(0)])
            .split(area);
        [chunks[0], chunks[1]]
    }
}
