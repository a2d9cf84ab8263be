use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use orderdesk::orders::{Order, OrderBook};
use orderdesk::ui::components::{DetailsViewport, OrderDetails};
use orderdesk::ui::core::{Action, Component, ScrollRegion, ScrollShadowHost};
use ratatui::{backend::TestBackend, Terminal};

fn order(id: u32) -> Order {
    OrderBook::bundled().unwrap().get(id).cloned().unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_viewport_geometry_never_shorter_than_viewport() {
    let viewport = DetailsViewport {
        offset: 0,
        height: 10,
        content_height: 4,
    };
    let geometry = viewport.geometry();
    assert_eq!(geometry.scroll_height, 10);
    assert!(geometry.is_at_boundary());

    let mut viewport = DetailsViewport {
        offset: 0,
        height: 10,
        content_height: 25,
    };
    assert_eq!(viewport.max_offset(), 15);
    viewport.scroll_by(100);
    assert_eq!(viewport.offset, 15);
    viewport.scroll_by(-20);
    assert_eq!(viewport.offset, 0);
}

#[test]
fn test_no_region_before_first_layout() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));

    assert!(details.viewport().is_none());
    assert!(!details.no_scroll());
}

#[test]
fn test_short_order_needs_no_scrolling() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1021)));
    details.layout(100);

    assert!(details.scroll_monitor().is_attached());
    assert!(details.no_scroll());
}

#[test]
fn test_long_order_reaches_boundary_at_the_end() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));
    details.layout(5);
    assert!(!details.no_scroll());

    details.handle_key_events(key(KeyCode::End));
    assert!(details.no_scroll());

    details.handle_key_events(key(KeyCode::Up));
    assert!(!details.no_scroll());

    details.handle_key_events(key(KeyCode::Char('j')));
    assert!(details.no_scroll());

    details.handle_key_events(key(KeyCode::Home));
    assert_eq!(details.viewport().map(|v| v.offset), Some(0));
    assert!(!details.no_scroll());
}

#[test]
fn test_showing_another_order_starts_from_the_top() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));
    details.layout(5);
    details.scroll_by(3);

    details.show(Some(order(1021)));
    assert_eq!(details.viewport().map(|v| v.offset), Some(0));

    details.layout(100);
    assert!(details.no_scroll());
}

#[test]
fn test_growing_viewport_reaches_boundary() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));
    details.layout(5);
    assert!(!details.no_scroll());

    details.layout(200);
    assert!(details.no_scroll());
}

#[test]
fn test_mouse_wheel_scrolls() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));
    details.layout(5);

    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(details.handle_mouse_events(wheel), Action::Render);
    assert_eq!(details.viewport().map(|v| v.offset), Some(3));
}

#[test]
fn test_edit_enters_review_and_back_leaves() {
    let mut details = OrderDetails::new();
    assert_eq!(details.handle_key_events(key(KeyCode::Char('e'))), Action::None);
    assert!(!details.is_review(), "nothing to review without an order");

    details.show(Some(order(1022)));
    details.layout(5);
    let browsing_height = details.viewport().map(|v| v.content_height);
    details.scroll_by(2);

    assert_eq!(details.handle_key_events(key(KeyCode::Char('e'))), Action::Render);
    assert!(details.is_review());
    assert_eq!(details.viewport().map(|v| v.offset), Some(0));
    let review_height = details.viewport().map(|v| v.content_height);
    assert!(review_height < browsing_height, "history is hidden while reviewing");

    assert_eq!(details.handle_key_events(key(KeyCode::Char('b'))), Action::Render);
    assert!(!details.is_review());

    details.handle_key_events(key(KeyCode::Char('e')));
    assert_eq!(details.handle_key_events(key(KeyCode::Esc)), Action::Render);
    assert!(!details.is_review());
    assert_eq!(details.handle_key_events(key(KeyCode::Esc)), Action::FocusPrevious);
}

#[test]
fn test_place_order_leaves_review() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1021)));
    assert_eq!(details.handle_key_events(key(KeyCode::Char('p'))), Action::None);

    details.set_review(true);
    assert_eq!(details.handle_key_events(key(KeyCode::Char('p'))), Action::PlaceOrder(1021));
    assert!(!details.is_review());
}

#[test]
fn test_other_order_resets_review() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1021)));
    details.set_review(true);

    // A newer copy of the same order keeps the mode
    let mut updated = order(1021);
    updated.customer.phone_number = "+351 900 000 000".to_string();
    details.show(Some(updated));
    assert!(details.is_review());

    details.show(Some(order(1022)));
    assert!(!details.is_review());
}

#[test]
fn test_comment_field_sends_on_enter() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));

    assert_eq!(details.handle_key_events(key(KeyCode::Char('c'))), Action::Render);
    assert!(details.is_editing_comment());
    for c in "quiet please".chars() {
        details.handle_key_events(key(KeyCode::Char(c)));
    }
    assert_eq!(details.comment(), "quiet please", "q is typed, not quit");

    assert_eq!(
        details.handle_key_events(key(KeyCode::Enter)),
        Action::AddComment(1022, "quiet please".to_string())
    );
    assert!(!details.is_editing_comment());
    assert_eq!(details.comment(), "");
}

#[test]
fn test_comment_field_escape_keeps_draft() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));

    details.handle_key_events(key(KeyCode::Char('c')));
    details.handle_key_events(key(KeyCode::Char('h')));
    details.handle_key_events(key(KeyCode::Char('i')));
    details.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(details.handle_key_events(key(KeyCode::Esc)), Action::Render);
    assert!(!details.is_editing_comment());
    assert_eq!(details.comment(), "h");

    // Blank comments are never sent
    details.handle_key_events(key(KeyCode::Char('c')));
    details.handle_key_events(key(KeyCode::Backspace));
    details.handle_key_events(key(KeyCode::Char(' ')));
    assert_eq!(details.handle_key_events(key(KeyCode::Enter)), Action::Render);
}

#[test]
fn test_comment_is_capped() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));
    details.handle_key_events(key(KeyCode::Char('c')));
    for _ in 0..300 {
        details.handle_key_events(key(KeyCode::Char('x')));
    }
    assert_eq!(details.comment().chars().count(), 255);
}

#[test]
fn test_render_review_footer() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1022)));
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    let mut draw = |details: &mut OrderDetails| {
        terminal
            .draw(|f| {
                let area = f.area();
                details.render(f, area);
            })
            .unwrap();
        format!("{:?}", terminal.backend().buffer())
    };

    let browsing = draw(&mut details);
    assert!(browsing.contains("Edit order"));
    assert!(browsing.contains("Add comment"));
    assert!(browsing.contains("History"));

    details.set_review(true);
    let review = draw(&mut details);
    assert!(review.contains("[ Back ]"));
    assert!(review.contains("Place order"));
    assert!(!review.contains("Edit order"));
    assert!(!review.contains("Add comment"));
    assert!(!review.contains("History"));
}

#[test]
fn test_render_attaches_monitor_and_draws_footer() {
    let mut details = OrderDetails::new();
    details.show(Some(order(1021)));
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

    terminal
        .draw(|f| {
            let area = f.area();
            details.render(f, area);
        })
        .unwrap();

    assert!(details.scroll_monitor().is_attached());
    assert!(details.no_scroll());
    let screen = format!("{:?}", terminal.backend().buffer());
    assert!(screen.contains("Ada Moreira"));
    assert!(screen.contains("Total $40.50"));
    assert!(screen.contains("Edit order"));
}
