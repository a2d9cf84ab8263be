//! Order model and the bundled sample order book.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::{COMMENT_MAX_CHARS, DRAFT_CUSTOMER_NAME, DRAFT_PICKUP_LOCATION, HISTORY_AUTHOR};

const BUNDLED_ORDERS: &str = include_str!("../data/orders.json");

#[derive(Debug, thiserror::Error)]
pub enum OrdersError {
    #[error("failed to parse order data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate order number #{0}")]
    DuplicateId(u32),
    #[error("no order #{0}")]
    UnknownId(u32),
    #[error("comment is empty")]
    EmptyComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    New,
    Confirmed,
    Ready,
    Delivered,
    Problem,
    Cancelled,
}

impl OrderState {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderState::New => "new",
            OrderState::Confirmed => "confirmed",
            OrderState::Ready => "ready",
            OrderState::Delivered => "delivered",
            OrderState::Problem => "problem",
            OrderState::Cancelled => "cancelled",
        }
    }

    /// Delivered and cancelled orders only show with "past orders" on.
    pub fn is_past(self) -> bool {
        matches!(self, OrderState::Delivered | OrderState::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: String,
    pub quantity: u32,
    /// Unit price in cents
    pub price_cents: u32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl OrderItem {
    pub fn total_cents(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.price_cents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub created_by: String,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub new_state: Option<OrderState>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub state: OrderState,
    pub due_date: NaiveDate,
    pub due_time: NaiveTime,
    pub pickup_location: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
}

impl Order {
    pub fn total_cents(&self) -> u64 {
        self.items.iter().map(OrderItem::total_cents).sum()
    }

    /// Case-insensitive match on customer, order number, pickup location
    /// and status. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let query = query.trim_start_matches('#');
        self.customer.full_name.to_lowercase().contains(query)
            || self.id.to_string().contains(query)
            || self.pickup_location.to_lowercase().contains(query)
            || self.state.as_str().contains(query)
    }
}

/// Format cents as `$12.50`.
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Result<Self, OrdersError> {
        let mut seen = HashSet::new();
        for order in &orders {
            if !seen.insert(order.id) {
                return Err(OrdersError::DuplicateId(order.id));
            }
        }
        let mut book = Self { orders };
        book.sort();
        Ok(book)
    }

    fn sort(&mut self) {
        self.orders
            .sort_by_key(|order| (order.due_date, order.due_time, order.id));
    }

    pub fn from_json(json: &str) -> Result<Self, OrdersError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The sample orders shipped with the binary.
    pub fn bundled() -> Result<Self, OrdersError> {
        Self::from_json(BUNDLED_ORDERS)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut Order, OrdersError> {
        self.orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrdersError::UnknownId(id))
    }

    /// Start an empty order due the day after `at`, at noon. Returns its number.
    pub fn create_draft(&mut self, at: NaiveDateTime) -> u32 {
        let id = self.orders.iter().map(|order| order.id).max().map_or(1, |max| max + 1);
        let due_date = at.date().succ_opt().unwrap_or(at.date());
        let due_time = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default();

        self.orders.push(Order {
            id,
            state: OrderState::New,
            due_date,
            due_time,
            pickup_location: DRAFT_PICKUP_LOCATION.to_string(),
            customer: Customer {
                full_name: DRAFT_CUSTOMER_NAME.to_string(),
                phone_number: String::new(),
                details: None,
            },
            items: Vec::new(),
            history: vec![HistoryEvent {
                created_by: HISTORY_AUTHOR.to_string(),
                timestamp: at,
                new_state: Some(OrderState::New),
                message: "Order created".to_string(),
            }],
        });
        self.sort();
        log::info!("orders: created draft #{id}");
        id
    }

    /// Save a reviewed order. New orders become confirmed; others only get
    /// an "updated" entry in their history.
    pub fn place(&mut self, id: u32, at: NaiveDateTime) -> Result<&Order, OrdersError> {
        let order = self.get_mut(id)?;
        let new_state = (order.state == OrderState::New).then_some(OrderState::Confirmed);
        if let Some(state) = new_state {
            order.state = state;
        }
        let message = if new_state.is_some() { "Order placed" } else { "Order updated" };
        order.history.push(HistoryEvent {
            created_by: HISTORY_AUTHOR.to_string(),
            timestamp: at,
            new_state,
            message: message.to_string(),
        });
        log::info!("orders: #{id} {message}");
        Ok(&*order)
    }

    /// Append a comment to the order's history, trimmed and capped at
    /// [`COMMENT_MAX_CHARS`].
    pub fn add_comment(&mut self, id: u32, message: &str, at: NaiveDateTime) -> Result<&Order, OrdersError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(OrdersError::EmptyComment);
        }
        let order = self.get_mut(id)?;
        order.history.push(HistoryEvent {
            created_by: HISTORY_AUTHOR.to_string(),
            timestamp: at,
            new_state: None,
            message: message.chars().take(COMMENT_MAX_CHARS).collect(),
        });
        log::debug!("orders: comment on #{id}");
        Ok(&*order)
    }

    /// Orders matching `query`, past orders included only when asked.
    pub fn filter(&self, query: &str, show_past: bool) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| show_past || !order.state.is_past())
            .filter(|order| order.matches(query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
