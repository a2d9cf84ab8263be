use orderdesk::ui::core::EventHandler;
use tokio::time::{Duration, Instant};

#[test]
fn test_wait_defaults_to_tick_rate() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(50));
    assert_eq!(handler.wait_for(None, Instant::now()), Duration::from_millis(50));
}

#[test]
fn test_wait_shortened_by_pending_deadline() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(50));
    let now = Instant::now();

    assert_eq!(
        handler.wait_for(Some(now + Duration::from_millis(1)), now),
        Duration::from_millis(1)
    );
    // A far deadline never stretches the tick
    assert_eq!(
        handler.wait_for(Some(now + Duration::from_secs(5)), now),
        Duration::from_millis(50)
    );
    // An overdue deadline wakes up immediately
    assert_eq!(handler.wait_for(Some(now), now + Duration::from_millis(3)), Duration::ZERO);
}

#[test]
fn test_default_tick_rate() {
    let handler = EventHandler::new();
    assert_eq!(handler.tick_rate(), Duration::from_millis(16));
}
