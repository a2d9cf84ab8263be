//! Core UI functionality for Orderdesk.
//!
//! This module contains the building blocks every component sits on: the
//! event loop plumbing, the component trait, and the small reactive layer
//! shared by the search bar and the scrollable detail panes.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`clock`] - Time sources for deferred work
//! - [`component`] - Base component trait and rendering abstractions
//! - [`debounce`] - Single-slot time-coalescing scheduler
//! - [`event_handler`] - Terminal event polling and ticks
//! - [`filter_visibility`] - Debounced "extra filters active" state
//! - [`notify`] - Bubbling change notifications and focus signals
//! - [`scroll_monitor`] - "Nothing left to scroll" tracking
//!
//! # Architecture
//!
//! 1. **Events** arrive from the terminal through the [`EventHandler`]
//! 2. **Components** turn them into property writes and [`Action`]s
//! 3. **Schedulers** coalesce bursts of writes into one derived change
//! 4. **Notifications** are raised once the update cycle settles and are
//!    consumed by the enclosing view

pub mod actions;
pub mod clock;
pub mod component;
pub mod debounce;
pub mod event_handler;
pub mod filter_visibility;
pub mod notify;
pub mod scroll_monitor;

pub use actions::{Action, FocusArea};
pub use clock::{Clock, ManualClock, SystemClock};
pub use component::Component;
pub use debounce::Debouncer;
pub use event_handler::{EventHandler, EventType};
pub use filter_visibility::{FilterInputs, FilterState, FilterVisibility};
pub use notify::{ChangeNotifier, ChangedProperties, ElementId, FocusSignals, Notification, NotificationSink, NotifyingProperty};
pub use scroll_monitor::{ScrollBoundaryMonitor, ScrollGeometry, ScrollRegion, ScrollShadowHost};
