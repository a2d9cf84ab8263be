//! Storefront view: search bar, order list and order details.
//!
//! The view is the ancestor listener for the search bar: it drains the
//! notification channel once per update cycle and refilters the order list
//! from the latest field value and checkbox state.

use crate::config::Config;
use crate::constants::{
    EVENT_CHECKBOX_CHECKED_CHANGED, EVENT_FIELD_VALUE_CHANGED, EVENT_SEARCH_BLUR, EVENT_SEARCH_FOCUS, STATUS_HINTS,
};
use crate::orders::{Order, OrderBook, OrdersError};
use crate::ui::components::{OrderDetails, OrderList, SearchBar};
use crate::ui::core::{Action, Clock, Component, FocusArea, Notification, NotificationSink, SystemClock};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use chrono::NaiveDateTime;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::Instant;

pub struct App<C: Clock = SystemClock> {
    search_bar: SearchBar<C>,
    order_list: OrderList,
    details: OrderDetails,
    orders: OrderBook,
    notifications: mpsc::UnboundedReceiver<Notification>,
    focus: FocusArea,
    query: String,
    show_past: bool,
    searching: bool,
    status_message: Option<String>,
    details_area: Rect,
    should_quit: bool,
}

impl App<SystemClock> {
    pub fn new(config: &Config, orders: OrderBook) -> Self {
        Self::with_clock(config, orders, SystemClock)
    }
}

impl<C: Clock> App<C> {
    pub fn with_clock(config: &Config, orders: OrderBook, clock: C) -> Self {
        let (sink, notifications) = NotificationSink::channel();
        let mut app = Self {
            search_bar: SearchBar::with_clock(config.search.clone(), sink, clock),
            order_list: OrderList::new(),
            details: OrderDetails::new(),
            orders,
            notifications,
            focus: FocusArea::Orders,
            query: String::new(),
            show_past: false,
            searching: false,
            status_message: None,
            details_area: Rect::default(),
            should_quit: false,
        };
        app.refilter();
        app.order_list.on_focus();
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        self.status_message = None;

        let action = match self.focus {
            FocusArea::Search => self.search_bar.handle_key_events(key),
            FocusArea::Orders => self.order_list.handle_key_events(key),
            FocusArea::Details => self.details.handle_key_events(key),
        };
        self.handle_action(action);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::ScrollDown | MouseEventKind::ScrollUp) {
            return;
        }
        if self.details_area.contains(Position::new(mouse.column, mouse.row)) {
            let action = self.details.handle_mouse_events(mouse);
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrevious => self.set_focus(self.focus.previous()),
            Action::ShowOrder(id) => self.details.show(self.orders.get(id).cloned()),
            Action::NewOrder => self.new_order(),
            Action::PlaceOrder(id) => {
                let result = self
                    .orders
                    .place(id, now())
                    .map(last_history_message);
                self.after_edit(id, result);
            }
            Action::AddComment(id, comment) => {
                let result = self.orders.add_comment(id, &comment, now()).map(|_| None);
                if self.after_edit(id, result) {
                    self.details.scroll_to_end();
                }
            }
            Action::Quit => self.should_quit = true,
            Action::Render | Action::None => {}
        }
    }

    /// Start a draft order, clear the search so it is listed, and open it
    /// for review.
    fn new_order(&mut self) {
        let id = self.orders.create_draft(now());
        self.search_bar.clear();
        self.query.clear();
        self.show_past = false;
        self.refilter();
        if self.order_list.select_order(id) {
            self.details.show(self.order_list.selected().cloned());
            self.details.set_review(true);
            self.set_focus(FocusArea::Details);
        }
        self.status_message = Some(format!("Order #{id} created"));
    }

    /// Refresh the views after an order was changed. Returns whether the
    /// change was applied.
    fn after_edit(&mut self, id: u32, result: Result<Option<String>, OrdersError>) -> bool {
        match result {
            Ok(message) => {
                self.refilter();
                if let Some(message) = message {
                    self.status_message = Some(format!("Order #{id}: {message}"));
                }
                true
            }
            Err(err) => {
                log::warn!("storefront: editing order #{id} failed: {err}");
                self.status_message = Some(err.to_string());
                false
            }
        }
    }

    pub fn set_focus(&mut self, area: FocusArea) {
        if area == self.focus {
            return;
        }
        match self.focus {
            FocusArea::Search => self.search_bar.on_blur(),
            FocusArea::Orders => self.order_list.on_blur(),
            FocusArea::Details => self.details.on_blur(),
        }
        self.focus = area;
        match area {
            FocusArea::Search => self.search_bar.on_focus(),
            FocusArea::Orders => self.order_list.on_focus(),
            FocusArea::Details => self.details.on_focus(),
        }
    }

    /// Close the current update cycle: let the search bar raise its
    /// notifications, then react to everything that arrived.
    pub fn end_cycle(&mut self) {
        self.search_bar.updated();
        self.process_notifications();
    }

    fn process_notifications(&mut self) {
        let mut filters_changed = false;
        while let Ok(notification) = self.notifications.try_recv() {
            filters_changed |= self.on_notification(&notification);
        }
        if filters_changed {
            self.refilter();
        }
    }

    /// Returns whether the order filter changed.
    fn on_notification(&mut self, notification: &Notification) -> bool {
        match notification.name {
            EVENT_FIELD_VALUE_CHANGED => {
                self.query = notification.value().and_then(Value::as_str).unwrap_or_default().to_string();
                true
            }
            EVENT_CHECKBOX_CHECKED_CHANGED => {
                self.show_past = notification.value().and_then(Value::as_bool).unwrap_or_default();
                true
            }
            EVENT_SEARCH_FOCUS => {
                self.searching = true;
                false
            }
            EVENT_SEARCH_BLUR => {
                self.searching = false;
                false
            }
            other => {
                log::debug!("storefront: ignoring notification {other}");
                false
            }
        }
    }

    fn refilter(&mut self) {
        let filtered = self
            .orders
            .filter(&self.query, self.show_past)
            .into_iter()
            .cloned()
            .collect();
        self.order_list.set_orders(filtered);
        self.details.show(self.order_list.selected().cloned());
        log::debug!(
            "storefront: {} orders for query {:?} (past: {})",
            self.order_list.orders().len(),
            self.query,
            self.show_past
        );
    }

    /// Apply due deferred work. Returns whether anything visible changed.
    pub fn tick(&mut self) -> bool {
        self.search_bar.tick()
    }

    /// The next instant deferred work becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search_bar.deadline()
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let [search_area, body_area, status_area] = LayoutManager::main_layout(area);
        let [list_area, details_area] = LayoutManager::body_layout(body_area);
        self.details_area = details_area;

        self.search_bar.render(f, search_area);
        self.order_list.render(f, list_area);
        self.details.render(f, details_area);

        let (status_text, color) = match &self.status_message {
            Some(message) => (message.clone(), Color::Yellow),
            None if self.searching => ("Type to filter • Tab: past orders checkbox • Esc: clear".to_string(), Color::Gray),
            None if self.focus == FocusArea::Details => (self.details.hints().to_string(), Color::Gray),
            None => (STATUS_HINTS.to_string(), Color::Gray),
        };
        let status = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color));
        f.render_widget(status, status_area);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> FocusArea {
        self.focus
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn show_past(&self) -> bool {
        self.show_past
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn search_bar(&self) -> &SearchBar<C> {
        &self.search_bar
    }

    pub fn order_list(&self) -> &OrderList {
        &self.order_list
    }

    pub fn details(&self) -> &OrderDetails {
        &self.details
    }
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn last_history_message(order: &Order) -> Option<String> {
    order.history.last().map(|event| event.message.clone())
}
