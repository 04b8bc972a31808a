//! Control panel: value field, toggles and geometry readout

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use progress_ring::ProgressIndicator;

use crate::ui::theme;

pub struct ControlPanel<'a> {
    indicator: &'a ProgressIndicator,
    input: &'a str,
    animate_locked: bool,
    title: Option<&'a str>,
}

impl<'a> ControlPanel<'a> {
    pub fn new(indicator: &'a ProgressIndicator, input: &'a str, animate_locked: bool) -> Self {
        Self {
            indicator,
            input,
            animate_locked,
            title: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

fn checkbox(label: &str, checked: bool, disabled: bool) -> Line<'static> {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if disabled { theme::dim() } else { theme::text() };
    Line::from(vec![
        Span::styled(mark, if checked { theme::success() } else { style }),
        Span::styled(label.to_string(), style),
    ])
}

fn readout(label: &str, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<15}", label), theme::dim()),
        Span::styled(format!("{:.2}", value), theme::text()),
    ])
}

impl Widget for ControlPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let indicator = self.indicator;

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:<15}", "Value (%)"), theme::dim()),
                Span::styled(format!("{}_", self.input), theme::selected()),
            ]),
            Line::from(""),
            checkbox("Animate", indicator.is_animated(), self.animate_locked),
            checkbox("Hide", indicator.is_hidden(), false),
            Line::from(""),
            readout("Radius", indicator.radius()),
            readout("Thickness", indicator.thickness()),
            readout("Total length", indicator.total_length()),
            readout("Loaded length", indicator.loaded_length()),
        ];

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border());

        if let Some(title) = self.title {
            block = block.title(Span::styled(title, theme::title()));
        }

        Paragraph::new(lines)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progress_ring::{svg, ProgressOptions};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_panel_shows_state() {
        let mut indicator =
            ProgressIndicator::new(svg::progress_circle(), ProgressOptions::default()).unwrap();
        indicator.animate();

        let area = Rect::new(0, 0, 40, 11);
        let mut buf = Buffer::empty(area);
        ControlPanel::new(&indicator, "75", false).render(area, &mut buf);

        assert!(row(&buf, 1).contains("75_"));
        assert!(row(&buf, 3).contains("[x] Animate"));
        assert!(row(&buf, 4).contains("[ ] Hide"));
        assert!(row(&buf, 6).contains("45.00"));
        assert!(row(&buf, 8).contains("282.74"));
        assert!(row(&buf, 9).contains("69.74"));
    }
}
