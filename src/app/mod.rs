//! Demo host state
//!
//! Plays the role of the page embedding the progress ring:
//! - `mod.rs` - host state, animation tick and saving markup
//! - `handlers.rs` - keyboard input handlers

mod handlers;

use anyhow::Result;
use std::time::{Duration, Instant};

use progress_ring::config::{DemoConfig, Settings};
use progress_ring::constants::ANIMATED_CLASS;
use progress_ring::{svg, Element, ProgressIndicator, ProgressOptions};

/// Maximum length of the value input field
pub const MAX_INPUT_LENGTH: usize = 8;

/// Message shown under the controls
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    pub indicator: ProgressIndicator,
    pub demo: DemoConfig,
    /// Contents of the value input field
    pub input: String,
    pub status: Option<Status>,
    /// Animate toggle is disabled while the ring is hidden
    pub animate_locked: bool,
    /// Current rotation applied by the animation, in degrees
    pub spin_angle: f64,
    pub last_tick: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self> {
        let options = settings.indicator_options()?;
        Self::with_options(options, settings.demo.clone())
    }

    pub fn with_options(options: ProgressOptions, demo: DemoConfig) -> Result<Self> {
        let container = svg::progress_circle();
        let indicator = ProgressIndicator::new(container, options)?;
        let animate_locked = indicator.is_hidden();

        Ok(Self {
            input: format_value(indicator.value()),
            indicator,
            demo,
            status: None,
            animate_locked,
            spin_angle: 0.0,
            last_tick: Instant::now(),
            should_quit: false,
        })
    }

    pub fn container(&self) -> &Element {
        self.indicator.element()
    }

    /// Advance the rotation while the container carries the animated marker
    pub fn tick(&mut self) {
        if self.last_tick.elapsed() < Duration::from_millis(self.demo.tick_ms) {
            return;
        }
        self.last_tick = Instant::now();

        if self.container().has_class(ANIMATED_CLASS) {
            self.spin_angle = (self.spin_angle + self.demo.spin_step_degrees).rem_euclid(360.0);
        }
    }

    /// Write the current markup to the configured output path
    pub fn save_markup(&mut self) {
        let path = self.demo.output.clone();
        let markup = svg::to_markup(self.container());
        match std::fs::write(&path, markup) {
            Ok(()) => {
                tracing::info!("Saved markup to {}", path.display());
                self.set_info(format!("Saved {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Failed to save markup to {}: {}", path.display(), e);
                self.set_error(format!("Failed to save {}: {}", path.display(), e));
            }
        }
    }

    pub(crate) fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(Status::Info(message.into()));
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.status = Some(Status::Error(message));
    }

    /// Mirror the indicator value back into the input field
    pub(crate) fn sync_input(&mut self) {
        self.input = format_value(self.indicator.value());
    }
}

/// Value as shown in the input field
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
