//! Circular progress indicator
//!
//! Drives two concentric arcs inside a container node: a static background
//! ring and a fill ring whose dash offset shows the current percentage.
//!
//! Geometry pushed onto the nodes:
//! - both arcs: `stroke-width` = thickness, `r` = radius,
//!   `cx` = `cy` = radius + thickness / 2
//! - container: `width` = `height` = 2 * radius + thickness
//! - fill arc: `stroke-dasharray` = total length,
//!   `stroke-dashoffset` = loaded length
//!
//! Construction validates every input and resolves both arcs before any
//! node is touched, so a failed construction leaves the tree unchanged.

use std::f64::consts::PI;

use crate::constants::{
    ANIMATED_CLASS, DEFAULT_BACKGROUND_ID, DEFAULT_FILL_ID, DEFAULT_RADIUS, DEFAULT_THICKNESS,
    DEFAULT_VALUE, HIDDEN_CLASS, MAX_VALUE, MIN_VALUE,
};
use crate::dom::Element;
use crate::error::{ArcRole, ProgressError, Result};
use crate::options::{ArcRef, ProgressOptions};

#[derive(Debug)]
pub struct ProgressIndicator {
    container: Element,
    fill_arc: Element,
    background_arc: Element,
    radius: f64,
    thickness: f64,
    value: f64,
    total_length: f64,
    loaded_length: f64,
    animated: bool,
    hidden: bool,
}

impl ProgressIndicator {
    /// Attach an indicator to `container`
    pub fn new(container: Element, options: ProgressOptions) -> Result<Self> {
        check_container(&container)?;

        let value = options.value.map(check_value).transpose()?;
        let radius = options.radius.map(check_radius).transpose()?;
        let thickness = options.thickness.map(check_thickness).transpose()?;

        if options.hidden && options.animated {
            return Err(ProgressError::ConflictingState);
        }

        let fill_arc = resolve_arc(
            &container,
            options.circle_percent.as_ref(),
            DEFAULT_FILL_ID,
            ArcRole::Fill,
        )?;
        let background_arc = resolve_arc(
            &container,
            options.circle_background.as_ref(),
            DEFAULT_BACKGROUND_ID,
            ArcRole::Background,
        )?;

        let radius = radius
            .or_else(|| radius_from_attribute(&fill_arc))
            .unwrap_or(DEFAULT_RADIUS);

        // Everything validated; from here on only side effects
        let mut indicator = Self {
            container,
            fill_arc,
            background_arc,
            radius,
            thickness: thickness.unwrap_or(DEFAULT_THICKNESS),
            value: value.unwrap_or(DEFAULT_VALUE),
            total_length: 0.0,
            loaded_length: 0.0,
            animated: false,
            hidden: false,
        };

        indicator.apply_thickness();
        indicator.resize();

        if options.hidden {
            indicator.hide();
        }
        if options.animated && !indicator.hidden {
            indicator.animate();
        }

        tracing::debug!(
            radius = indicator.radius,
            thickness = indicator.thickness,
            value = indicator.value,
            "Progress indicator attached"
        );

        Ok(indicator)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the progress percentage, rejecting anything outside [0, 100]
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        self.value = check_value(value)?;
        self.render_value();
        tracing::debug!(value, loaded = self.loaded_length, "Progress value changed");
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = check_radius(radius)?;
        self.resize();
        tracing::debug!(radius, total = self.total_length, "Progress radius changed");
        Ok(())
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        self.thickness = check_thickness(thickness)?;
        self.apply_thickness();
        self.resize();
        tracing::debug!(thickness, "Progress thickness changed");
        Ok(())
    }

    /// Circumference at the current radius
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Unfilled part of the circumference, as written to the dash offset
    pub fn loaded_length(&self) -> f64 {
        self.loaded_length
    }

    pub fn element(&self) -> &Element {
        &self.container
    }

    /// Alias of [`ProgressIndicator::element`]
    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Move the indicator onto another container
    ///
    /// The new container receives the current size and state markers.
    pub fn set_element(&mut self, container: Element) -> Result<()> {
        check_container(&container)?;
        self.container = container;
        self.resize_container();
        self.sync_markers();
        Ok(())
    }

    pub fn fill_arc(&self) -> &Element {
        &self.fill_arc
    }

    pub fn background_arc(&self) -> &Element {
        &self.background_arc
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Start the rotation animation
    pub fn animate(&mut self) {
        if self.animated {
            return;
        }
        self.animated = true;
        self.container.add_class(ANIMATED_CLASS);
        tracing::debug!("Progress animation started");
    }

    /// Stop the rotation animation
    pub fn cancel_animation(&mut self) {
        if !self.animated {
            return;
        }
        self.animated = false;
        self.container.remove_class(ANIMATED_CLASS);
        tracing::debug!("Progress animation cancelled");
    }

    pub fn hide(&mut self) {
        if self.hidden {
            return;
        }
        self.hidden = true;
        self.container.add_class(HIDDEN_CLASS);
        tracing::debug!("Progress hidden");
    }

    pub fn show(&mut self) {
        if !self.hidden {
            return;
        }
        self.hidden = false;
        self.container.remove_class(HIDDEN_CLASS);
        tracing::debug!("Progress shown");
    }

    fn apply_thickness(&self) {
        let width = format_number(self.thickness);
        self.fill_arc.set_attribute("stroke-width", width.clone());
        self.background_arc.set_attribute("stroke-width", width);
    }

    /// Recompute the circumference and push geometry onto every node
    fn resize(&mut self) {
        self.total_length = 2.0 * PI * self.radius;

        let r = format_number(self.radius);
        let center = format_number(self.radius + self.thickness / 2.0);
        for arc in [&self.fill_arc, &self.background_arc] {
            arc.set_attribute("r", r.clone());
            arc.set_attribute("cx", center.clone());
            arc.set_attribute("cy", center.clone());
        }

        self.resize_container();
        self.render_value();
    }

    fn resize_container(&self) {
        let size = format_number(self.radius * 2.0 + self.thickness);
        self.container.set_attribute("width", size.clone());
        self.container.set_attribute("height", size);
    }

    fn render_value(&mut self) {
        self.loaded_length = loaded_length(self.total_length, self.value);
        self.fill_arc.set_style(
            "stroke-dashoffset",
            format!("{}px", format_number(self.loaded_length)),
        );
        self.fill_arc.set_style(
            "stroke-dasharray",
            format!("{}px", format_number(self.total_length)),
        );
    }

    fn sync_markers(&self) {
        if self.hidden {
            self.container.add_class(HIDDEN_CLASS);
        } else {
            self.container.remove_class(HIDDEN_CLASS);
        }
        if self.animated {
            self.container.add_class(ANIMATED_CLASS);
        } else {
            self.container.remove_class(ANIMATED_CLASS);
        }
    }
}

/// Dash offset leaving `value` percent of `total` drawn
///
/// The filled part is rounded up to a whole unit; the result never goes
/// below zero.
pub fn loaded_length(total: f64, value: f64) -> f64 {
    (total - (total * value / 100.0).ceil()).max(0.0)
}

/// Shortest decimal form, e.g. `50` rather than `50.0`
fn format_number(n: f64) -> String {
    format!("{}", n)
}

fn check_container(container: &Element) -> Result<()> {
    let kind = container.kind();
    if kind.is_graphical() {
        Ok(())
    } else {
        Err(ProgressError::InvalidElement {
            expected: "a graphical element",
            found: kind.to_string(),
        })
    }
}

fn check_value(value: f64) -> Result<f64> {
    if value.is_finite() && (MIN_VALUE..=MAX_VALUE).contains(&value) {
        Ok(value)
    } else {
        Err(ProgressError::Range {
            param: "value",
            value,
            constraint: "between 0 and 100",
        })
    }
}

fn check_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(ProgressError::Range {
            param: "radius",
            value: radius,
            constraint: "greater than 0",
        })
    }
}

fn check_thickness(thickness: f64) -> Result<f64> {
    if thickness.is_finite() && thickness >= 0.0 {
        Ok(thickness)
    } else {
        Err(ProgressError::Range {
            param: "thickness",
            value: thickness,
            constraint: "0 or greater",
        })
    }
}

fn resolve_arc(
    container: &Element,
    arc: Option<&ArcRef>,
    default_id: &str,
    role: ArcRole,
) -> Result<Element> {
    let element = match arc {
        Some(ArcRef::Element(element)) => element.clone(),
        Some(ArcRef::Id(id)) => container
            .find_by_id(id)
            .or_else(|| container.find_by_id(default_id))
            .ok_or_else(|| ProgressError::ElementResolution {
                arc: role,
                lookup: format!("#{}, #{}", id, default_id),
            })?,
        None => container
            .find_by_id(default_id)
            .ok_or_else(|| ProgressError::ElementResolution {
                arc: role,
                lookup: format!("#{}", default_id),
            })?,
    };

    let kind = element.kind();
    if !kind.is_circle() {
        return Err(ProgressError::InvalidElement {
            expected: "a <circle> element",
            found: kind.to_string(),
        });
    }
    Ok(element)
}

/// Radius already declared on the fill arc, if usable
fn radius_from_attribute(arc: &Element) -> Option<f64> {
    arc.attribute("r")
        .and_then(|r| r.trim().parse::<f64>().ok())
        .filter(|r| r.is_finite() && *r > 0.0)
}
