use orderdesk::ui::components::ButtonsBar;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

fn draw(bar: &ButtonsBar) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, ButtonsBar::HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            bar.render(f, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

#[test]
fn test_separator_shows_while_content_is_below_the_fold() {
    let bar = ButtonsBar::new(false).left("Cancel").info("Total $1.00").right("Edit order");
    let buffer = draw(&bar);

    assert!(row(&buffer, 0).chars().all(|c| c == '─'));
    let buttons = row(&buffer, 1);
    assert!(buttons.contains("[ Cancel ]"));
    assert!(buttons.contains("Total $1.00"));
    assert!(buttons.contains("[ Edit order ]"));
}

#[test]
fn test_separator_drops_once_scrolled_to_the_end() {
    let bar = ButtonsBar::new(true).left("Cancel").right("Edit order");
    let buffer = draw(&bar);

    assert!(row(&buffer, 0).trim().is_empty());
    assert!(row(&buffer, 1).contains("[ Cancel ]"));
}
