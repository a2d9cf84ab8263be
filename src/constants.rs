//! Constants used throughout the application
//!
//! This module centralizes notification names, UI text, and timing values
//! to improve maintainability and consistency.

use tokio::time::Duration;

// Component tags
pub const SEARCH_BAR_TAG: &str = "search-bar";
pub const ORDER_DETAILS_TAG: &str = "order-details";

// Search bar notifications
pub const EVENT_FIELD_VALUE_CHANGED: &str = "field-value-changed";
pub const EVENT_CHECKBOX_CHECKED_CHANGED: &str = "checkbox-checked-changed";
pub const EVENT_SEARCH_FOCUS: &str = "search-focus";
pub const EVENT_SEARCH_BLUR: &str = "search-blur";

// Tracked property names
pub const PROP_FIELD_VALUE: &str = "fieldValue";
pub const PROP_CHECKBOX_CHECKED: &str = "checkboxChecked";

// Search bar defaults
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search";
pub const DEFAULT_CHECKBOX_TEXT: &str = "Show past orders";
pub const DEFAULT_BUTTON_TEXT: &str = "New order";
pub const DEFAULT_CLEAR_TEXT: &str = "Clear search";

/// Delay applied before the search bar re-derives its extra-filter state.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(1);

// Event loop timing
/// Default tick interval in milliseconds
pub const DEFAULT_TICK_RATE_MS: u64 = 16;
/// Minimum tick interval in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 1;
/// Maximum tick interval in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;

// Order editing
pub const HISTORY_AUTHOR: &str = "Front desk";
pub const DRAFT_CUSTOMER_NAME: &str = "New customer";
pub const DRAFT_PICKUP_LOCATION: &str = "Store";
pub const COMMENT_MAX_CHARS: usize = 255;
pub const COMMENT_PLACEHOLDER: &str = "Add comment";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_HINTS: &str = "Tab: focus • ↑/↓: select • n: new order • Esc: clear • Ctrl-C: quit";
