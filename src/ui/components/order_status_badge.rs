use crate::orders::OrderState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

#[derive(Debug, Clone, Copy)]
/// Badge styles for order states
pub enum BadgeStyle {
    Primary,
    Success,
    Warning,
    Danger,
    Secondary,
}

impl BadgeStyle {
    fn to_style(self) -> Style {
        let style = match self {
            BadgeStyle::Primary => Style::default().bg(Color::Blue).fg(Color::White),
            BadgeStyle::Success => Style::default().bg(Color::Green).fg(Color::Black),
            BadgeStyle::Warning => Style::default().bg(Color::Yellow).fg(Color::Black),
            BadgeStyle::Danger => Style::default().bg(Color::Red).fg(Color::White),
            BadgeStyle::Secondary => Style::default().bg(Color::DarkGray).fg(Color::White),
        };
        style.add_modifier(Modifier::BOLD)
    }

    pub fn for_state(state: OrderState) -> Self {
        match state {
            OrderState::New => BadgeStyle::Primary,
            OrderState::Confirmed => BadgeStyle::Warning,
            OrderState::Ready => BadgeStyle::Success,
            OrderState::Problem => BadgeStyle::Danger,
            OrderState::Delivered | OrderState::Cancelled => BadgeStyle::Secondary,
        }
    }
}

/// Status badge, e.g. ` ready `. Delivered orders show a check mark.
#[must_use]
pub fn status_badge(state: OrderState) -> Span<'static> {
    let text = match state {
        OrderState::Delivered => " ✓ ".to_string(),
        other => format!(" {} ", other.as_str()),
    };
    Span::styled(text, BadgeStyle::for_state(state).to_style())
}

/// Compact variant used inline in history lines.
#[must_use]
pub fn status_badge_small(state: OrderState) -> Span<'static> {
    Span::styled(state.as_str().to_string(), BadgeStyle::for_state(state).to_style())
}
