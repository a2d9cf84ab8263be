//! Reusable UI components

pub mod buttons_bar;
pub mod order_status_badge;
pub mod scrollbar_helper;

// Component architecture
pub mod order_details;
pub mod order_list;
pub mod search_bar;

// Component exports
pub use buttons_bar::ButtonsBar;
pub use order_details::{DetailsViewport, OrderDetails};
pub use order_list::OrderList;
pub use search_bar::SearchBar;
