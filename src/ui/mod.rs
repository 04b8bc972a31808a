//! UI rendering module

mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Status};
use layout::{content_layout, main_layout};
use widgets::{ControlPanel, Ring, Spinner};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header, content, status, footer) = main_layout(frame.area());

    draw_header(frame, header, app);

    let (ring_area, controls_area) = content_layout(content);
    let indicator = &app.indicator;
    let ring = Ring::new(
        indicator.element(),
        indicator.fill_arc(),
        indicator.background_arc(),
    )
    .spin(app.spin_angle)
    .title(" Progress ");
    frame.render_widget(ring, ring_area);

    let controls = ControlPanel::new(indicator, &app.input, app.animate_locked).title(" Controls ");
    frame.render_widget(controls, controls_area);

    draw_status(frame, status, app.status.as_ref());
    draw_footer(frame, footer);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(Span::styled(
        " PROGRESS RING ",
        theme::title(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border()),
    );
    frame.render_widget(header, area);

    if app.indicator.is_animated() && area.width > 4 && area.height > 2 {
        let spinner_area = Rect::new(area.x + 2, area.y + 1, 1, 1);
        frame.render_widget(Spinner::new(app.spin_angle), spinner_area);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: Option<&Status>) {
    let line = match status {
        Some(Status::Info(message)) => Line::from(Span::styled(message.as_str(), theme::success())),
        Some(Status::Error(message)) => Line::from(Span::styled(message.as_str(), theme::error())),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("[", theme::dim()),
        Span::styled("0-9 Enter", theme::key_hint()),
        Span::styled("] Value  [", theme::dim()),
        Span::styled("↑↓", theme::key_hint()),
        Span::styled("] Step  [", theme::dim()),
        Span::styled("+-", theme::key_hint()),
        Span::styled("] Radius  [", theme::dim()),
        Span::styled("[]", theme::key_hint()),
        Span::styled("] Thickness  [", theme::dim()),
        Span::styled("a", theme::key_hint()),
        Span::styled("] Animate  [", theme::dim()),
        Span::styled("h", theme::key_hint()),
        Span::styled("] Hide  [", theme::dim()),
        Span::styled("s", theme::key_hint()),
        Span::styled("] Save  [", theme::dim()),
        Span::styled("q", theme::key_hint()),
        Span::styled("] Quit", theme::dim()),
    ]);

    let footer = Paragraph::new(hints).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_ring::config::DemoConfig;
    use progress_ring::ProgressOptions;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_draw_full_screen() {
        let mut app = App::with_options(ProgressOptions::default(), DemoConfig::default()).unwrap();
        app.indicator.animate();
        app.set_error("value must be between 0 and 100, got 150");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(screen.contains("PROGRESS RING"));
        assert!(screen.contains("[x] Animate"));
        assert!(screen.contains("got 150"));
    }
}
