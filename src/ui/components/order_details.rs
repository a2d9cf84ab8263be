//! Order details pane
//!
//! Scrollable summary of one order with a buttons bar underneath. The bar's
//! separator shadow follows the pane's [`ScrollBoundaryMonitor`].
//!
//! In review mode the pane hides the history and the comment field, and the
//! footer offers Back / Place order instead of Cancel / Edit order.

use crate::constants::{COMMENT_MAX_CHARS, COMMENT_PLACEHOLDER, ORDER_DETAILS_TAG};
use crate::orders::{format_price, Order};
use crate::ui::components::buttons_bar::ButtonsBar;
use crate::ui::components::order_status_badge::{status_badge, status_badge_small};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component, ScrollBoundaryMonitor, ScrollGeometry, ScrollRegion, ScrollShadowHost};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MOUSE_SCROLL_ROWS: i32 = 3;
const COMMENT_FIELD_HEIGHT: u16 = 3;

/// Scroll position of the details body, in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailsViewport {
    pub offset: u16,
    pub height: u16,
    pub content_height: u16,
}

impl DetailsViewport {
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = i32::from(self.offset) + delta;
        self.offset = target.clamp(0, i32::from(self.max_offset())) as u16;
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }
}

impl ScrollRegion for DetailsViewport {
    fn geometry(&self) -> ScrollGeometry {
        // Like a browser, the scroll height never drops below the viewport
        ScrollGeometry::new(
            i64::from(self.offset),
            i64::from(self.height),
            i64::from(self.content_height.max(self.height)),
        )
    }
}

pub struct OrderDetails {
    order: Option<Order>,
    lines: Vec<Line<'static>>,
    viewport: Option<DetailsViewport>,
    monitor: ScrollBoundaryMonitor,
    scrollbar: ScrollbarHelper,
    first_rendered: bool,
    focused: bool,
    review: bool,
    comment: String,
    editing_comment: bool,
}

impl Default for OrderDetails {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDetails {
    pub fn new() -> Self {
        Self {
            order: None,
            lines: Vec::new(),
            viewport: None,
            monitor: ScrollBoundaryMonitor::new(),
            scrollbar: ScrollbarHelper::new(),
            first_rendered: false,
            focused: false,
            review: false,
            comment: String::new(),
            editing_comment: false,
        }
    }

    /// Show `order`. A different order starts from the top, out of review
    /// mode, with an empty comment; a newer copy of the same order keeps
    /// the scroll position.
    pub fn show(&mut self, order: Option<Order>) {
        if self.order == order {
            return;
        }
        let same_order = self.order.as_ref().map(|o| o.id) == order.as_ref().map(|o| o.id);
        log::debug!("<{}> showing order {:?}", ORDER_DETAILS_TAG, order.as_ref().map(|o| o.id));
        self.order = order;
        if !same_order {
            self.review = false;
            self.comment.clear();
            self.editing_comment = false;
        }
        self.rebuild(!same_order);
    }

    /// Switch review mode, scrolling back to the top.
    pub fn set_review(&mut self, review: bool) {
        if self.review == review || (review && self.order.is_none()) {
            return;
        }
        log::debug!("<{}> review: {}", ORDER_DETAILS_TAG, review);
        self.review = review;
        self.editing_comment = false;
        self.rebuild(true);
    }

    pub fn is_review(&self) -> bool {
        self.review
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_editing_comment(&self) -> bool {
        self.editing_comment
    }

    /// Key hints for the status line.
    pub fn hints(&self) -> &'static str {
        if self.editing_comment {
            "Enter: send comment • Esc: stop editing"
        } else if self.review {
            "b/Esc: back • p: place order • ↑/↓: scroll"
        } else {
            "e: edit order • c: add comment • Esc: cancel • ↑/↓: scroll"
        }
    }

    fn rebuild(&mut self, reset_offset: bool) {
        let review = self.review;
        self.lines = self
            .order
            .as_ref()
            .map(|order| build_lines(order, review))
            .unwrap_or_default();
        let content_height = self.content_height();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.content_height = content_height;
            if reset_offset {
                viewport.offset = 0;
            }
            viewport.offset = viewport.offset.min(viewport.max_offset());
        }
        self.content_scroll();
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn viewport(&self) -> Option<&DetailsViewport> {
        self.viewport.as_ref()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.scroll_by(delta);
        }
        self.content_scroll();
    }

    fn scroll_to(&mut self, offset: u16) {
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.scroll_to(offset);
        }
        self.content_scroll();
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_to(u16::MAX);
    }

    fn shows_comment_field(&self) -> bool {
        self.order.is_some() && !self.review
    }

    fn page(&self) -> i32 {
        self.viewport.map_or(1, |viewport| i32::from(viewport.height.max(1)))
    }

    fn content_height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Record the body size from the latest layout pass.
    pub fn layout(&mut self, body_height: u16) {
        let content_height = self.content_height();
        let viewport = self.viewport.get_or_insert_with(DetailsViewport::default);
        viewport.height = body_height;
        viewport.content_height = content_height;
        viewport.offset = viewport.offset.min(viewport.max_offset());

        if self.first_rendered {
            self.content_scroll();
        } else {
            self.first_rendered = true;
            self.first_updated();
        }
    }
}

impl ScrollShadowHost for OrderDetails {
    type Region = DetailsViewport;

    fn scroll_region(&self) -> Option<&DetailsViewport> {
        self.viewport.as_ref()
    }

    fn scroll_monitor(&self) -> &ScrollBoundaryMonitor {
        &self.monitor
    }

    fn scroll_monitor_mut(&mut self) -> &mut ScrollBoundaryMonitor {
        &mut self.monitor
    }
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(format!("{text:<10}"), Style::default().fg(Color::DarkGray))
}

fn bold(text: String) -> Span<'static> {
    Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
}

fn build_lines(order: &Order, review: bool) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![status_badge(order.state), Span::styled(format!("  Order #{}", order.id), dim)]),
        Line::default(),
        Line::from(vec![
            label("Due"),
            bold(order.due_date.format("%a %d %b").to_string()),
            Span::raw("  "),
            bold(order.due_time.format("%H:%M").to_string()),
            Span::styled(format!("  {}", order.pickup_location), dim),
        ]),
        Line::from(vec![label("Customer"), bold(order.customer.full_name.clone())]),
        Line::from(vec![label("Phone"), bold(order.customer.phone_number.clone())]),
    ];
    if let Some(details) = &order.customer.details {
        lines.push(Line::from(vec![label("Details"), Span::raw(details.clone())]));
    }

    lines.push(Line::default());
    lines.push(Line::from(bold("Products".to_string())));
    for item in &order.items {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<24}", item.product)),
            Span::raw(format!("{:>3} ", item.quantity)),
            Span::styled("× ", dim),
            Span::raw(format_price(u64::from(item.price_cents))),
        ]));
        if let Some(comment) = &item.comment {
            lines.push(Line::from(Span::styled(format!("    {comment}"), dim)));
        }
    }

    if !review && !order.history.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(bold("History".to_string())));
        for event in &order.history {
            let mut header = vec![
                Span::styled(format!("  {}", event.created_by), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}  ", event.timestamp.format("%d %b %H:%M")), dim),
            ];
            if let Some(state) = event.new_state {
                header.push(status_badge_small(state));
            }
            lines.push(Line::from(header));
            lines.push(Line::from(Span::raw(format!("    {}", event.message))));
        }
    }

    lines
}

impl OrderDetails {
    fn handle_comment_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.comment.chars().count() < COMMENT_MAX_CHARS {
                    self.comment.push(c);
                }
                Action::Render
            }
            KeyCode::Backspace => {
                self.comment.pop();
                Action::Render
            }
            KeyCode::Enter => {
                self.editing_comment = false;
                let comment = std::mem::take(&mut self.comment);
                match &self.order {
                    Some(order) if !comment.trim().is_empty() => Action::AddComment(order.id, comment),
                    _ => Action::Render,
                }
            }
            KeyCode::Esc => {
                self.editing_comment = false;
                Action::Render
            }
            KeyCode::Tab => {
                self.editing_comment = false;
                Action::FocusNext
            }
            _ => Action::None,
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('b') | KeyCode::Esc => {
                self.set_review(false);
                Some(Action::Render)
            }
            KeyCode::Char('p') => {
                let id = self.order.as_ref().map(|order| order.id)?;
                self.set_review(false);
                Some(Action::PlaceOrder(id))
            }
            _ => None,
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('e') if self.order.is_some() => {
                self.set_review(true);
                Some(Action::Render)
            }
            KeyCode::Char('c') if self.order.is_some() => {
                self.editing_comment = true;
                Some(Action::Render)
            }
            KeyCode::Char('e') | KeyCode::Char('c') => Some(Action::None),
            KeyCode::Esc => Some(Action::FocusPrevious),
            _ => None,
        }
    }
}

impl Component for OrderDetails {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing_comment {
            return self.handle_comment_key(key);
        }
        let mode_action = if self.review {
            self.handle_review_key(key)
        } else {
            self.handle_browse_key(key)
        };
        if let Some(action) = mode_action {
            return action;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(self.page()),
            KeyCode::PageUp => self.scroll_by(-self.page()),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to(0),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_end(),
            KeyCode::Tab => return Action::FocusNext,
            KeyCode::BackTab => return Action::FocusPrevious,
            KeyCode::Char('q') => return Action::Quit,
            _ => return Action::None,
        }
        Action::Render
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(MOUSE_SCROLL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_by(-MOUSE_SCROLL_ROWS),
            _ => return Action::None,
        }
        Action::Render
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let title = match &self.order {
            Some(order) => format!("Order #{}", order.id),
            None => "Order details".to_string(),
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style).title(title);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let show_comment = self.shows_comment_field();
        let mut constraints = vec![Constraint::Min(1)];
        if show_comment {
            constraints.push(Constraint::Length(COMMENT_FIELD_HEIGHT));
        }
        constraints.push(Constraint::Length(ButtonsBar::HEIGHT));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);
        let body = chunks[0];
        let footer = chunks[chunks.len() - 1];

        self.layout(body.height);
        let viewport = self.viewport.unwrap_or_default();

        if self.order.is_none() {
            let empty = Paragraph::new("Select an order to see its details.").style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, body);
        } else {
            let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(body, self.lines.len());
            let paragraph = Paragraph::new(self.lines.clone()).scroll((viewport.offset, 0));
            f.render_widget(paragraph, content_area);

            self.scrollbar.update_state(
                self.lines.len(),
                usize::from(viewport.offset),
                usize::from(viewport.height),
            );
            self.scrollbar.render(f, scrollbar_area);
        }

        if show_comment {
            self.render_comment_field(f, chunks[1]);
        }

        let total = self.order.as_ref().map(Order::total_cents).unwrap_or_default();
        let (left, right) = if self.review {
            ("Back", "Place order")
        } else {
            ("Cancel", "Edit order")
        };
        ButtonsBar::new(self.no_scroll())
            .left(left)
            .info(format!("Total {}", format_price(total)))
            .right(right)
            .render(f, footer);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
        self.editing_comment = false;
    }
}

impl OrderDetails {
    fn render_comment_field(&self, f: &mut Frame, area: Rect) {
        let border_style = if self.editing_comment {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_bottom(Line::from("Enter: send").right_aligned());
        let text = if self.comment.is_empty() && !self.editing_comment {
            Line::from(Span::styled(COMMENT_PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else {
            Line::from(self.comment.as_str())
        };
        f.render_widget(Paragraph::new(text).block(block), area);

        if self.editing_comment {
            let width = u16::try_from(self.comment.chars().count()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(width);
            let max_x = area.right().saturating_sub(2);
            f.set_cursor_position(Position::new(x.min(max_x), area.y.saturating_add(1)));
        }
    }
}
