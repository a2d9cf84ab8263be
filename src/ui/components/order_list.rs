//! Order list component

use crate::orders::Order;
use crate::ui::components::order_status_badge::status_badge;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct OrderList {
    orders: Vec<Order>,
    list_state: ListState,
    focused: bool,
}

impl Default for OrderList {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderList {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            list_state: ListState::default(),
            focused: false,
        }
    }

    /// Replace the visible orders, keeping the selected order if it is
    /// still listed.
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        let selected_id = self.selected().map(|order| order.id);
        self.orders = orders;

        let index = selected_id
            .and_then(|id| self.orders.iter().position(|order| order.id == id))
            .or(if self.orders.is_empty() { None } else { Some(0) });
        self.list_state.select(index);
    }

    /// Select order `id` if it is listed. Returns whether it was found.
    pub fn select_order(&mut self, id: u32) -> bool {
        match self.orders.iter().position(|order| order.id == id) {
            Some(index) => {
                self.list_state.select(Some(index));
                true
            }
            None => false,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn selected(&self) -> Option<&Order> {
        self.list_state.selected().and_then(|index| self.orders.get(index))
    }

    fn select_next(&mut self) -> Action {
        if self.orders.is_empty() {
            return Action::None;
        }
        let next = match self.list_state.selected() {
            Some(index) if index + 1 < self.orders.len() => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.select_index(next)
    }

    fn select_previous(&mut self) -> Action {
        if self.orders.is_empty() {
            return Action::None;
        }
        let previous = self.list_state.selected().map_or(0, |index| index.saturating_sub(1));
        self.select_index(previous)
    }

    fn select_index(&mut self, index: usize) -> Action {
        self.list_state.select(Some(index));
        match self.orders.get(index) {
            Some(order) => Action::ShowOrder(order.id),
            None => Action::None,
        }
    }

    fn create_item(order: &Order) -> ListItem<'static> {
        let line = Line::from(vec![
            Span::styled(format!("#{} ", order.id), Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{} {} ", order.due_date.format("%a %d %b"), order.due_time.format("%H:%M"))),
            Span::styled(order.customer.full_name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            status_badge(order.state),
        ]);
        ListItem::new(line)
    }
}

impl Component for OrderList {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.select_index(0),
            KeyCode::End | KeyCode::Char('G') => {
                let last = self.orders.len().saturating_sub(1);
                self.select_index(last)
            }
            KeyCode::Char('n') => Action::NewOrder,
            KeyCode::Enter | KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Orders ({})", self.orders.len()))
            .title_alignment(Alignment::Center);

        if self.orders.is_empty() {
            let empty = List::new(vec![ListItem::new("No orders match the search.")]).block(block);
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self.orders.iter().map(Self::create_item).collect();
        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
