//! Keyboard input handlers for the demo host

use crossterm::event::KeyCode;

use super::{App, MAX_INPUT_LENGTH};

impl App {
    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') | KeyCode::Char('A') => self.toggle_animation(),
            KeyCode::Char('h') | KeyCode::Char('H') => self.toggle_hidden(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.save_markup(),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                if self.input.len() < MAX_INPUT_LENGTH {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.commit_input(),
            KeyCode::Up => self.step_value(self.demo.value_step),
            KeyCode::Down => self.step_value(-self.demo.value_step),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let radius = self.indicator.radius() + self.demo.radius_step;
                self.apply_radius(radius);
            }
            KeyCode::Char('-') => {
                let radius = self.indicator.radius() - self.demo.radius_step;
                self.apply_radius(radius);
            }
            KeyCode::Char(']') => {
                let thickness = self.indicator.thickness() + self.demo.thickness_step;
                self.apply_thickness(thickness);
            }
            KeyCode::Char('[') => {
                let thickness = self.indicator.thickness() - self.demo.thickness_step;
                self.apply_thickness(thickness);
            }
            _ => {}
        }
    }

    fn toggle_animation(&mut self) {
        // Disabled while hidden
        if self.animate_locked {
            return;
        }
        if self.indicator.is_animated() {
            self.indicator.cancel_animation();
        } else {
            self.indicator.animate();
        }
        self.status = None;
    }

    fn toggle_hidden(&mut self) {
        if self.indicator.is_hidden() {
            self.indicator.show();
            self.animate_locked = false;
        } else {
            // A hidden ring never spins
            self.indicator.cancel_animation();
            self.animate_locked = true;
            self.indicator.hide();
        }
        self.status = None;
    }

    fn commit_input(&mut self) {
        let parsed = match self.input.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                let message = format!("'{}' is not a number", self.input);
                self.set_error(message);
                return;
            }
        };

        match self.indicator.set_value(parsed) {
            Ok(()) => {
                self.sync_input();
                self.status = None;
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn step_value(&mut self, delta: f64) {
        let value = (self.indicator.value() + delta).clamp(0.0, 100.0);
        match self.indicator.set_value(value) {
            Ok(()) => self.sync_input(),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn apply_radius(&mut self, radius: f64) {
        match self.indicator.set_radius(radius) {
            Ok(()) => self.status = None,
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn apply_thickness(&mut self, thickness: f64) {
        match self.indicator.set_thickness(thickness) {
            Ok(()) => self.status = None,
            Err(e) => self.set_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Status};
    use crossterm::event::KeyCode;
    use progress_ring::config::DemoConfig;
    use progress_ring::constants::{ANIMATED_CLASS, HIDDEN_CLASS};
    use progress_ring::ProgressOptions;

    fn app() -> App {
        App::with_options(ProgressOptions::default(), DemoConfig::default()).unwrap()
    }

    fn type_value(app: &mut App, text: &str) {
        for _ in 0..app.input.len() {
            app.handle_key(KeyCode::Backspace);
        }
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn test_hide_cancels_and_locks_animation() {
        let mut app = app();
        app.handle_key(KeyCode::Char('a'));
        assert!(app.indicator.is_animated());

        app.handle_key(KeyCode::Char('h'));
        assert!(app.indicator.is_hidden());
        assert!(!app.indicator.is_animated());
        assert!(app.container().has_class(HIDDEN_CLASS));
        assert!(!app.container().has_class(ANIMATED_CLASS));

        // Locked while hidden
        app.handle_key(KeyCode::Char('a'));
        assert!(!app.indicator.is_animated());

        app.handle_key(KeyCode::Char('h'));
        assert!(!app.indicator.is_hidden());
        app.handle_key(KeyCode::Char('a'));
        assert!(app.indicator.is_animated());
    }

    #[test]
    fn test_value_input_commits() {
        let mut app = app();
        type_value(&mut app, "30");
        assert_eq!(app.indicator.value(), 30.0);
        assert_eq!(app.input, "30");
        assert!(app.status.is_none());
    }

    #[test]
    fn test_out_of_range_input_reports_error() {
        let mut app = app();
        type_value(&mut app, "150");
        assert_eq!(app.indicator.value(), 75.0);
        assert!(matches!(app.status, Some(Status::Error(ref m)) if m.contains("between 0 and 100")));
    }

    #[test]
    fn test_unparsable_input_reports_error() {
        let mut app = app();
        type_value(&mut app, "1.2.3");
        assert_eq!(app.indicator.value(), 75.0);
        assert!(matches!(app.status, Some(Status::Error(_))));
    }

    #[test]
    fn test_arrow_keys_step_and_clamp() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.indicator.value(), 80.0);
        assert_eq!(app.input, "80");

        for _ in 0..10 {
            app.handle_key(KeyCode::Up);
        }
        assert_eq!(app.indicator.value(), 100.0);
        assert_eq!(app.indicator.loaded_length(), 0.0);
    }

    #[test]
    fn test_radius_cannot_shrink_to_zero() {
        let mut app = app();
        for _ in 0..8 {
            app.handle_key(KeyCode::Char('-'));
        }
        assert_eq!(app.indicator.radius(), 5.0);

        app.handle_key(KeyCode::Char('-'));
        assert_eq!(app.indicator.radius(), 5.0);
        assert!(matches!(app.status, Some(Status::Error(_))));

        app.handle_key(KeyCode::Char('+'));
        assert_eq!(app.indicator.radius(), 10.0);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_thickness_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.indicator.thickness(), 11.0);
        assert_eq!(app.container().attribute("width").as_deref(), Some("101"));

        for _ in 0..11 {
            app.handle_key(KeyCode::Char('['));
        }
        assert_eq!(app.indicator.thickness(), 0.0);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.indicator.thickness(), 0.0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
