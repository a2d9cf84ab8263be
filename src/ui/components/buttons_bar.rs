//! Footer bar with left buttons, an info slot and right buttons.
//!
//! Draws a separator line above itself while the pane it belongs to still
//! has content below the fold. Once the owner reports `no_scroll`, the
//! separator is dropped.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct ButtonsBar {
    pub left: Vec<String>,
    pub info: String,
    pub right: Vec<String>,
    pub no_scroll: bool,
}

impl ButtonsBar {
    pub fn new(no_scroll: bool) -> Self {
        Self {
            no_scroll,
            ..Self::default()
        }
    }

    pub fn left(mut self, label: impl Into<String>) -> Self {
        self.left.push(label.into());
        self
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    pub fn right(mut self, label: impl Into<String>) -> Self {
        self.right.push(label.into());
        self
    }

    /// Rows needed: one for the buttons plus the separator line.
    pub const HEIGHT: u16 = 2;

    fn buttons(labels: &[String], style: Style) -> Line<'static> {
        let spans: Vec<Span> = labels
            .iter()
            .flat_map(|label| [Span::styled(format!("[ {label} ]"), style), Span::raw(" ")])
            .collect();
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = if self.no_scroll {
            Block::default().borders(Borders::NONE)
        } else {
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
        };
        let inner = if self.no_scroll {
            // Keep the buttons on the same row either way
            Rect {
                y: area.y + 1,
                height: area.height.saturating_sub(1),
                ..area
            }
        } else {
            block.inner(area)
        };
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Fill(1), Constraint::Fill(1)])
            .split(inner);

        f.render_widget(Paragraph::new(Self::buttons(&self.left, Style::default())), chunks[0]);
        f.render_widget(
            Paragraph::new(Span::styled(self.info.clone(), Style::default().add_modifier(Modifier::BOLD)))
                .alignment(ratatui::layout::Alignment::Right),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(Self::buttons(
                &self.right,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ))
            .alignment(ratatui::layout::Alignment::Right),
            chunks[2],
        );
    }
}
