use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use orderdesk::config::Config;
use orderdesk::constants::FILTER_DEBOUNCE;
use orderdesk::orders::{OrderBook, OrderState};
use orderdesk::ui::core::{FocusArea, ManualClock};
use orderdesk::ui::App;
use ratatui::{backend::TestBackend, Terminal};

fn app() -> (ManualClock, App<ManualClock>) {
    let clock = ManualClock::new();
    let app = App::with_clock(&Config::default(), OrderBook::bundled().unwrap(), clock.clone());
    (clock, app)
}

fn press(app: &mut App<ManualClock>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    app.end_cycle();
}

fn listed(app: &App<ManualClock>) -> Vec<u32> {
    app.order_list().orders().iter().map(|order| order.id).collect()
}

#[test]
fn test_starts_with_current_orders() {
    let (_clock, app) = app();

    assert_eq!(app.focus(), FocusArea::Orders);
    assert_eq!(listed(&app), vec![1023, 1021, 1022, 1024]);
    assert_eq!(app.details().order().map(|o| o.id), Some(1023));
    assert!(!app.is_searching());
}

#[test]
fn test_typing_filters_orders() {
    let (_clock, mut app) = app();
    app.set_focus(FocusArea::Search);
    app.end_cycle();
    assert!(app.is_searching());

    for c in "bru".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    // Nothing reaches the list until the cycle settles
    assert_eq!(listed(&app).len(), 4);

    app.end_cycle();
    assert_eq!(app.query(), "bru");
    assert_eq!(listed(&app), vec![1022]);
    assert_eq!(app.details().order().map(|o| o.id), Some(1022));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.query(), "");
    assert_eq!(listed(&app).len(), 4);
}

#[test]
fn test_past_orders_checkbox() {
    let (clock, mut app) = app();
    app.set_focus(FocusArea::Search);
    app.end_cycle();

    clock.advance(FILTER_DEBOUNCE);
    assert!(app.tick());
    assert!(app.search_bar().checkbox_visible());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));

    assert!(app.show_past());
    assert_eq!(listed(&app), vec![1018, 1019, 1023, 1021, 1022, 1024]);
    // Focus stayed in the bar, but the field itself was blurred
    assert_eq!(app.focus(), FocusArea::Search);
    assert!(!app.is_searching());
}

#[test]
fn test_debounce_deadline_is_exposed() {
    let (clock, mut app) = app();
    assert!(app.next_deadline().is_none());

    app.set_focus(FocusArea::Search);
    assert!(app.next_deadline().is_some());
    assert!(!app.tick(), "not due yet");

    clock.advance(FILTER_DEBOUNCE);
    assert!(app.tick());
    assert!(app.next_deadline().is_none());
}

#[test]
fn test_tab_cycles_focus() {
    let (_clock, mut app) = app();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FocusArea::Details);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FocusArea::Search);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), FocusArea::Orders);
    assert!(!app.is_searching());
}

#[test]
fn test_edit_then_place_confirms_new_order() {
    let (_clock, mut app) = app();
    press(&mut app, KeyCode::Down);
    assert_eq!(app.details().order().map(|o| o.id), Some(1021));
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('e'));
    assert!(app.details().is_review());
    press(&mut app, KeyCode::Char('p'));

    let order = app.details().order().unwrap();
    assert_eq!(order.state, OrderState::Confirmed);
    let last = order.history.last().unwrap();
    assert_eq!(last.message, "Order placed");
    assert_eq!(last.new_state, Some(OrderState::Confirmed));
    assert!(!app.details().is_review());
    assert_eq!(app.status_message(), Some("Order #1021: Order placed"));

    // The list holds the updated copy too
    let listed = app.order_list().orders().iter().find(|o| o.id == 1021).unwrap();
    assert_eq!(listed.state, OrderState::Confirmed);
}

#[test]
fn test_back_leaves_order_untouched() {
    let (_clock, mut app) = app();
    press(&mut app, KeyCode::Tab);
    let before = app.details().order().cloned();

    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('b'));

    assert!(!app.details().is_review());
    assert_eq!(app.details().order().cloned(), before);
    assert_eq!(app.focus(), FocusArea::Details);
}

#[test]
fn test_comment_appends_to_history() {
    let (_clock, mut app) = app();
    press(&mut app, KeyCode::Tab);
    let history_len = app.details().order().map_or(0, |o| o.history.len());

    press(&mut app, KeyCode::Char('c'));
    for c in "Call on arrival".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    let order = app.details().order().unwrap();
    assert_eq!(order.id, 1023);
    assert_eq!(order.history.len(), history_len + 1);
    let last = order.history.last().unwrap();
    assert_eq!(last.message, "Call on arrival");
    assert_eq!(last.created_by, "Front desk");
    assert_eq!(last.new_state, None);
    assert!(!app.details().is_editing_comment());
}

#[test]
fn test_new_order_opens_draft_for_review() {
    let (_clock, mut app) = app();
    app.set_focus(FocusArea::Search);
    for c in "bru".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
    app.end_cycle();
    app.set_focus(FocusArea::Orders);
    app.end_cycle();
    assert_eq!(listed(&app), vec![1022]);

    press(&mut app, KeyCode::Char('n'));

    assert_eq!(app.query(), "");
    assert_eq!(app.search_bar().field_value(), "");
    assert_eq!(listed(&app).len(), 5);
    assert_eq!(app.order_list().selected().map(|o| o.id), Some(1025));
    assert_eq!(app.details().order().map(|o| o.state), Some(OrderState::New));
    assert!(app.details().is_review());
    assert_eq!(app.focus(), FocusArea::Details);
    assert_eq!(app.status_message(), Some("Order #1025 created"));
}

#[test]
fn test_quit_keys() {
    let (_clock, mut app) = app();
    app.set_focus(FocusArea::Search);
    app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(!app.should_quit(), "typing q in the search field");

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_render_storefront() {
    let (_clock, mut app) = app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let screen = format!("{:?}", terminal.backend().buffer());
    assert!(screen.contains("Orders (4)"));
    assert!(screen.contains("Carla Nunes"));
    assert!(screen.contains("New order"));
}
