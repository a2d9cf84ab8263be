use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use orderdesk::config::SearchConfig;
use orderdesk::constants::FILTER_DEBOUNCE;
use orderdesk::ui::components::search_bar::{CHECKBOX, FIELD};
use orderdesk::ui::components::SearchBar;
use orderdesk::ui::core::{Action, Component, ManualClock, Notification, NotificationSink};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

fn search_bar() -> (ManualClock, SearchBar<ManualClock>, UnboundedReceiver<Notification>) {
    let clock = ManualClock::new();
    let (sink, rx) = NotificationSink::channel();
    let bar = SearchBar::with_clock(SearchConfig::default(), sink, clock.clone());
    (clock, bar, rx)
}

fn names(rx: &mut UnboundedReceiver<Notification>) -> Vec<&'static str> {
    let mut out = Vec::new();
    while let Ok(notification) = rx.try_recv() {
        out.push(notification.name);
    }
    out
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn settle(clock: &ManualClock, bar: &mut SearchBar<ManualClock>) -> bool {
    clock.advance(FILTER_DEBOUNCE);
    bar.tick()
}

#[test]
fn test_field_focus_raises_search_signals() {
    let (_clock, mut bar, mut rx) = search_bar();

    bar.on_focus();
    assert_eq!(bar.focused_element(), Some(FIELD));
    bar.on_blur();
    assert_eq!(bar.focused_element(), None);

    assert_eq!(names(&mut rx), vec!["search-focus", "search-blur"]);
}

#[test]
fn test_checkbox_focus_is_shared_but_silent() {
    let (_clock, mut bar, mut rx) = search_bar();

    bar.focus(CHECKBOX);
    assert!(bar.is_focused());
    bar.blur(CHECKBOX);
    assert!(!bar.is_focused());

    assert!(names(&mut rx).is_empty());
}

#[test]
fn test_typing_raises_one_notification_per_cycle() {
    let (_clock, mut bar, mut rx) = search_bar();
    bar.on_focus();
    names(&mut rx);

    for c in "ada".chars() {
        bar.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(bar.field_value(), "ada");
    assert_eq!(bar.updated(), 1);

    let notification = rx.try_recv().expect("field-value-changed");
    assert_eq!(notification.name, "field-value-changed");
    assert_eq!(notification.source, "search-bar");
    assert_eq!(notification.value(), Some(&serde_json::json!("ada")));

    // Nothing new in the next cycle
    assert_eq!(bar.updated(), 0);
}

#[test]
fn test_type_and_erase_in_one_cycle_reports_empty_value() {
    let (_clock, mut bar, mut rx) = search_bar();

    bar.set_field_value("x");
    bar.set_field_value("");
    assert_eq!(bar.updated(), 1);

    let notification = rx.try_recv().expect("field-value-changed");
    assert_eq!(notification.name, "field-value-changed");
    assert_eq!(notification.value(), Some(&serde_json::json!("")));
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_extra_filters_follow_focus_after_debounce() {
    let (clock, mut bar, _rx) = search_bar();

    bar.on_focus();
    assert!(!bar.show_extra_filters(), "not before the debounce elapses");
    assert!(bar.deadline().is_some());

    assert!(settle(&clock, &mut bar));
    assert!(bar.show_extra_filters());
    assert!(bar.checkbox_visible());

    bar.on_blur();
    assert!(settle(&clock, &mut bar));
    assert!(!bar.show_extra_filters());
}

#[test]
fn test_moving_focus_to_checkbox_does_not_flicker() {
    let (clock, mut bar, mut rx) = search_bar();
    bar.on_focus();
    settle(&clock, &mut bar);
    names(&mut rx);

    assert_eq!(bar.handle_key_events(key(KeyCode::Tab)), Action::None);
    assert_eq!(bar.focused_element(), Some(CHECKBOX));
    assert_eq!(names(&mut rx), vec!["search-blur"]);

    assert!(!settle(&clock, &mut bar), "state stays active");
    assert!(bar.show_extra_filters());
}

#[test]
fn test_checked_box_keeps_filters_visible_without_focus() {
    let (clock, mut bar, mut rx) = search_bar();
    bar.focus(CHECKBOX);
    settle(&clock, &mut bar);

    bar.handle_key_events(key(KeyCode::Char(' ')));
    assert!(bar.checkbox_checked());
    bar.on_blur();
    settle(&clock, &mut bar);
    assert!(bar.show_extra_filters());

    assert_eq!(bar.updated(), 1);
    assert_eq!(names(&mut rx), vec!["checkbox-checked-changed"]);
}

#[test]
fn test_escape_clears_field_and_checkbox() {
    let (_clock, mut bar, mut rx) = search_bar();
    bar.on_focus();
    bar.set_field_value("bruno");
    bar.set_checkbox_checked(true);
    bar.updated();
    names(&mut rx);

    bar.handle_key_events(key(KeyCode::Esc));
    assert_eq!(bar.field_value(), "");
    assert!(!bar.checkbox_checked());
    assert_eq!(bar.updated(), 2);
    assert_eq!(names(&mut rx), vec!["field-value-changed", "checkbox-checked-changed"]);
}

#[test]
fn test_tab_leaves_bar_when_checkbox_hidden() {
    let (_clock, mut bar, _rx) = search_bar();
    bar.on_focus();

    // Still idle, so the checkbox is not offered yet
    assert_eq!(bar.handle_key_events(key(KeyCode::Tab)), Action::FocusNext);
}

#[test]
fn test_render_swaps_action_button_for_clear() {
    let (clock, mut bar, _rx) = search_bar();
    let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            bar.render(f, area);
        })
        .unwrap();
    let idle = format!("{:?}", terminal.backend().buffer());
    assert!(idle.contains("New order"));
    assert!(!idle.contains("Clear search"));

    bar.on_focus();
    settle(&clock, &mut bar);
    terminal
        .draw(|f| {
            let area = f.area();
            bar.render(f, area);
        })
        .unwrap();
    let active = format!("{:?}", terminal.backend().buffer());
    assert!(active.contains("Clear search"));
    assert!(active.contains("Show past orders"));
    assert!(!active.contains("New order"));
}

#[test]
fn test_render_keeps_cursor_inside_field_for_long_values() {
    let (_clock, mut bar, _rx) = search_bar();
    bar.on_focus();
    bar.set_field_value(&"x".repeat(70_000));
    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            bar.render(f, area);
        })
        .unwrap();

    let cursor = terminal.get_cursor_position().unwrap();
    assert!(cursor.x < 40);
    assert_eq!(cursor.y, 1);
}
