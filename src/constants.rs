//! Component-wide constants

/// Default progress value (percent)
pub const DEFAULT_VALUE: f64 = 75.0;

/// Default circle radius when neither options nor the fill arc provide one
pub const DEFAULT_RADIUS: f64 = 45.0;

/// Default stroke thickness
pub const DEFAULT_THICKNESS: f64 = 10.0;

/// Lowest accepted progress value
pub const MIN_VALUE: f64 = 0.0;

/// Highest accepted progress value
pub const MAX_VALUE: f64 = 100.0;

/// Identifier looked up for the fill arc when none is configured
pub const DEFAULT_FILL_ID: &str = "progress-percent";

/// Identifier looked up for the background arc when none is configured
pub const DEFAULT_BACKGROUND_ID: &str = "progress-bg";

/// Identifier of the scaffold container
pub const DEFAULT_CONTAINER_ID: &str = "progress-circle";

/// Marker class applied to a hidden container
pub const HIDDEN_CLASS: &str = "hidden";

/// Marker class applied to an animated container
pub const ANIMATED_CLASS: &str = "animated";
