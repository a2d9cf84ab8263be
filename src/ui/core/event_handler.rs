use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

use crate::constants::DEFAULT_TICK_RATE_MS;

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(DEFAULT_TICK_RATE_MS))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for the next terminal event, or tick.
    ///
    /// A tick comes after the tick interval, or earlier when `deadline`
    /// (the next pending debounce job) is sooner.
    pub async fn next_event(&mut self, deadline: Option<Instant>) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) => EventType::Mouse(mouse),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        tokio::time::sleep(self.wait_for(deadline, Instant::now())).await;
        Ok(EventType::Tick)
    }

    /// How long to sleep before the next tick.
    pub fn wait_for(&self, deadline: Option<Instant>, now: Instant) -> Duration {
        match deadline {
            Some(deadline) => deadline.saturating_duration_since(now).min(self.tick_rate),
            None => self.tick_rate,
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
