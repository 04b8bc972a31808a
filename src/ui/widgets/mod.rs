//! Reusable UI widgets

mod controls;
mod ring;
mod spinner;

pub use controls::ControlPanel;
pub use ring::Ring;
pub use spinner::Spinner;
