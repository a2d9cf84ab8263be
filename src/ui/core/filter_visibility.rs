//! Debounced "extra filters active" state for the search bar.
//!
//! The visible state follows `text non-empty || checkbox checked || focused`,
//! but only after a short debounce. The scheduled job carries no values: when
//! it fires it re-reads the inputs as they are at that moment, so a burst of
//! edits settles on the latest inputs and flips the visible state at most once.

use super::clock::{Clock, SystemClock};
use super::debounce::Debouncer;
use crate::constants::FILTER_DEBOUNCE;

/// Inputs owned by the hosting search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub text_value: String,
    pub checkbox_checked: bool,
    pub is_focused: bool,
}

impl FilterInputs {
    /// The instantaneous, undebounced condition.
    pub fn condition(&self) -> bool {
        !self.text_value.is_empty() || self.checkbox_checked || self.is_focused
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Idle,
    Active,
}

impl From<bool> for FilterState {
    fn from(active: bool) -> Self {
        if active {
            FilterState::Active
        } else {
            FilterState::Idle
        }
    }
}

/// Marker job: "recompute from whatever the inputs are now".
#[derive(Debug, Clone, Copy)]
struct Reevaluate;

pub struct FilterVisibility<C: Clock = SystemClock> {
    inputs: FilterInputs,
    state: FilterState,
    debouncer: Debouncer<Reevaluate, C>,
}

impl FilterVisibility<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FilterVisibility<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FilterVisibility<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            inputs: FilterInputs::default(),
            state: FilterState::Idle,
            debouncer: Debouncer::with_clock(clock),
        }
    }

    pub fn set_text_value(&mut self, text: &str) {
        if self.inputs.text_value != text {
            self.inputs.text_value = text.to_string();
            self.input_changed();
        }
    }

    pub fn set_checkbox_checked(&mut self, checked: bool) {
        if self.inputs.checkbox_checked != checked {
            self.inputs.checkbox_checked = checked;
            self.input_changed();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.inputs.is_focused != focused {
            self.inputs.is_focused = focused;
            self.input_changed();
        }
    }

    fn input_changed(&mut self) {
        self.debouncer.schedule(FILTER_DEBOUNCE, Reevaluate);
    }

    /// Apply a due re-evaluation.
    ///
    /// Returns the new visible value only if it changed.
    pub fn tick(&mut self) -> Option<bool> {
        self.debouncer.poll()?;
        let next = FilterState::from(self.inputs.condition());
        if next == self.state {
            return None;
        }
        log::debug!("filter visibility: {:?} -> {:?}", self.state, next);
        self.state = next;
        Some(self.is_active())
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == FilterState::Active
    }

    pub fn inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn deadline(&self) -> Option<tokio::time::Instant> {
        self.debouncer.deadline()
    }
}
