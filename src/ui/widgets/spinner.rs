//! Rotation indicator for the animated state

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::ui::theme;

/// Braille frames, one per 36 degrees of rotation
const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct Spinner {
    angle: f64,
    style: Style,
}

impl Spinner {
    /// Frame for a rotation in degrees
    pub fn new(angle: f64) -> Self {
        Self {
            angle,
            style: theme::info(),
        }
    }

    pub fn char(&self) -> char {
        let per_frame = 360.0 / SPINNER_CHARS.len() as f64;
        let frame = (self.angle.rem_euclid(360.0) / per_frame) as usize;
        SPINNER_CHARS[frame % SPINNER_CHARS.len()]
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 1 || area.height < 1 {
            return;
        }
        buf.set_string(area.x, area.y, self.char().to_string(), self.style);
    }
}
