use pomodoro_core::TimerView;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use ratatui::Frame;

use super::shell::{ShellStyle, ShellWidget, SHELL_WIDTH};

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the shell centered on the full terminal.
pub fn render(frame: &mut Frame, view: &TimerView, style: &ShellStyle) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(
        ShellWidget::new(view, style),
        centered(area, SHELL_WIDTH, style.height()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomodoro_core::TimerState;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn centers_inside_area() {
        let r = centered(Rect::new(0, 0, 100, 40), 44, 14);
        assert_eq!(r, Rect::new(28, 13, 44, 14));
    }

    #[test]
    fn shrinks_to_small_terminals() {
        let r = centered(Rect::new(0, 0, 30, 10), 44, 14);
        assert_eq!(r, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn mounts_shell_on_full_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let view = TimerView::from_state(&TimerState::default());
        terminal
            .draw(|frame| render(frame, &view, &ShellStyle::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top_left = centered(buffer.area, SHELL_WIDTH, ShellStyle::default().height());
        assert_eq!(buffer[(top_left.x, top_left.y)].symbol(), "┌");
        let screen: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("25:00"));
    }
}
