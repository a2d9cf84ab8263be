//! Orderdesk - A terminal storefront for customer orders
//!
//! This library provides the storefront view of an order-management UI:
//! a search bar that filters the order list, and a scrollable order
//! details pane. Underneath sits a small reactive core that debounces the
//! search bar's derived state, tracks whether a pane is fully scrolled, and
//! raises change notifications for enclosing views.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`orders`] - Order model and bundled sample data
//! * [`ui`] - Terminal user interface components and the reactive core

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// File logging setup
pub mod logger;

/// Order model and sample order book
pub mod orders;

/// Terminal user interface components and rendering
pub mod ui;
