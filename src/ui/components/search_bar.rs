//! Search bar component
//!
//! A text field with an optional "past orders" checkbox, a clear button and
//! an action button. While the bar has text, a checked box, or focus, it is
//! in "extra filters" mode: the clear button and checkbox show and the action
//! button hides. That mode is debounced so moving focus between the field
//! and the checkbox, or typing and erasing quickly, does not flicker.
//!
//! Raises `field-value-changed` / `checkbox-checked-changed` once per update
//! cycle, and `search-focus` / `search-blur` for the text field only.

use crate::config::SearchConfig;
use crate::constants::{
    EVENT_CHECKBOX_CHECKED_CHANGED, EVENT_FIELD_VALUE_CHANGED, EVENT_SEARCH_BLUR, EVENT_SEARCH_FOCUS,
    PROP_CHECKBOX_CHECKED, PROP_FIELD_VALUE, SEARCH_BAR_TAG,
};
use crate::ui::core::{
    Action, ChangeNotifier, ChangedProperties, Clock, Component, ElementId, FilterVisibility, FocusSignals,
    NotificationSink, NotifyingProperty, SystemClock,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;

/// The primary input.
pub const FIELD: ElementId = ElementId("field");
/// Auxiliary control sharing the bar's focus state.
pub const CHECKBOX: ElementId = ElementId("checkbox");

pub const NOTIFYING_PROPERTIES: &[NotifyingProperty] = &[
    NotifyingProperty {
        property: PROP_FIELD_VALUE,
        event_name: EVENT_FIELD_VALUE_CHANGED,
    },
    NotifyingProperty {
        property: PROP_CHECKBOX_CHECKED,
        event_name: EVENT_CHECKBOX_CHECKED_CHANGED,
    },
];

pub struct SearchBar<C: Clock = SystemClock> {
    labels: SearchConfig,
    field_value: String,
    checkbox_checked: bool,
    focused_element: Option<ElementId>,
    visibility: FilterVisibility<C>,
    changed: ChangedProperties,
    notifier: ChangeNotifier,
    focus_signals: FocusSignals,
}

impl SearchBar<SystemClock> {
    pub fn new(labels: SearchConfig, sink: NotificationSink) -> Self {
        Self::with_clock(labels, sink, SystemClock)
    }
}

impl<C: Clock> SearchBar<C> {
    pub fn with_clock(labels: SearchConfig, sink: NotificationSink, clock: C) -> Self {
        Self {
            labels,
            field_value: String::new(),
            checkbox_checked: false,
            focused_element: None,
            visibility: FilterVisibility::with_clock(clock),
            changed: ChangedProperties::new(),
            notifier: ChangeNotifier::new(SEARCH_BAR_TAG, NOTIFYING_PROPERTIES, sink.clone()),
            focus_signals: FocusSignals::new(SEARCH_BAR_TAG, FIELD, EVENT_SEARCH_FOCUS, EVENT_SEARCH_BLUR, sink),
        }
    }

    pub fn set_field_value(&mut self, value: &str) {
        if self
            .changed
            .assign(PROP_FIELD_VALUE, &mut self.field_value, value.to_string())
        {
            self.visibility.set_text_value(value);
        }
    }

    pub fn set_checkbox_checked(&mut self, checked: bool) {
        if self
            .changed
            .assign(PROP_CHECKBOX_CHECKED, &mut self.checkbox_checked, checked)
        {
            self.visibility.set_checkbox_checked(checked);
        }
    }

    /// Move focus to `element`, blurring whichever element had it.
    pub fn focus(&mut self, element: ElementId) {
        if self.focused_element == Some(element) {
            return;
        }
        if let Some(previous) = self.focused_element {
            self.blur(previous);
        }
        self.focus_signals.focus(element);
        self.focused_element = Some(element);
        self.visibility.set_focused(true);
    }

    pub fn blur(&mut self, element: ElementId) {
        if self.focused_element != Some(element) {
            return;
        }
        self.focus_signals.blur(element);
        self.focused_element = None;
        self.visibility.set_focused(false);
    }

    /// Reset the text and the checkbox.
    pub fn clear(&mut self) {
        self.set_field_value("");
        self.set_checkbox_checked(false);
    }

    /// End of an update cycle: raise notifications for what changed.
    pub fn updated(&mut self) -> usize {
        let field_value = &self.field_value;
        let checkbox_checked = self.checkbox_checked;
        self.notifier
            .notify_changes(&mut self.changed, |property| match property {
                PROP_FIELD_VALUE => Some(Value::from(field_value.as_str())),
                PROP_CHECKBOX_CHECKED => Some(Value::from(checkbox_checked)),
                _ => None,
            })
    }

    /// Apply a due visibility re-evaluation. Returns whether it changed.
    pub fn tick(&mut self) -> bool {
        self.visibility.tick().is_some()
    }

    pub fn deadline(&self) -> Option<tokio::time::Instant> {
        self.visibility.deadline()
    }

    pub fn field_value(&self) -> &str {
        &self.field_value
    }

    pub fn checkbox_checked(&self) -> bool {
        self.checkbox_checked
    }

    pub fn focused_element(&self) -> Option<ElementId> {
        self.focused_element
    }

    /// The shared focus flag, set by the field and the checkbox alike.
    pub fn is_focused(&self) -> bool {
        self.visibility.inputs().is_focused
    }

    pub fn show_extra_filters(&self) -> bool {
        self.visibility.is_active()
    }

    pub fn checkbox_visible(&self) -> bool {
        self.labels.show_checkbox && self.show_extra_filters()
    }

    pub fn labels(&self) -> &SearchConfig {
        &self.labels
    }

    fn handle_field_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = self.field_value.clone();
                value.push(c);
                self.set_field_value(&value);
                Action::None
            }
            KeyCode::Backspace => {
                let mut value = self.field_value.clone();
                value.pop();
                self.set_field_value(&value);
                Action::None
            }
            KeyCode::Esc => {
                self.clear();
                Action::None
            }
            KeyCode::Tab if self.checkbox_visible() => {
                self.focus(CHECKBOX);
                Action::None
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            _ => Action::None,
        }
    }

    fn handle_checkbox_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.set_checkbox_checked(!self.checkbox_checked);
                Action::None
            }
            KeyCode::Esc => {
                self.clear();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus(FIELD);
                Action::None
            }
            KeyCode::Tab | KeyCode::Down => Action::FocusNext,
            _ => Action::None,
        }
    }

    fn element_style(&self, element: ElementId) -> Style {
        if self.focused_element == Some(element) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

impl<C: Clock> Component for SearchBar<C> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.focused_element {
            Some(FIELD) => self.handle_field_key(key),
            Some(CHECKBOX) => self.handle_checkbox_key(key),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let checkbox_label = format!("[{}] {}", if self.checkbox_checked { "x" } else { " " }, self.labels.checkbox_text);
        let button_label = if self.show_extra_filters() {
            format!(" {} ", self.labels.clear_text)
        } else {
            format!(" + {} ", self.labels.button_text)
        };

        let mut constraints = vec![Constraint::Min(10)];
        if self.checkbox_visible() {
            constraints.push(Constraint::Length(text_width(&checkbox_label).saturating_add(2)));
        }
        constraints.push(Constraint::Length(text_width(&button_label).saturating_add(2)));

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rect);

        // Text field
        let field_block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.element_style(FIELD));
        let field_text = if self.field_value.is_empty() && self.focused_element != Some(FIELD) {
            Line::from(vec![
                Span::raw("🔍 "),
                Span::styled(self.labels.placeholder.as_str(), Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![Span::raw("🔍 "), Span::raw(self.field_value.as_str())])
        };
        f.render_widget(Paragraph::new(field_text).block(field_block), chunks[0]);

        if self.focused_element == Some(FIELD) {
            // Icon is two columns wide plus a space
            let x = chunks[0]
                .x
                .saturating_add(1 + 3)
                .saturating_add(text_width(&self.field_value));
            let max_x = chunks[0].right().saturating_sub(2);
            f.set_cursor_position(Position::new(x.min(max_x), chunks[0].y + 1));
        }

        // Checkbox, only while filtering
        if self.checkbox_visible() {
            let checkbox = Paragraph::new(checkbox_label)
                .style(self.element_style(CHECKBOX))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(checkbox, chunks[1]);
        }

        // Clear button replaces the action button while filtering
        let button_style = if self.show_extra_filters() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Span::styled(button_label, button_style)).block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[chunks.len() - 1]);
    }

    fn on_focus(&mut self) {
        self.focus(FIELD);
    }

    fn on_blur(&mut self) {
        if let Some(element) = self.focused_element {
            self.blur(element);
        }
    }
}
