//! Construction-time configuration for the progress indicator
//!
//! Options can be built in code or read from loosely typed sources (JSON
//! values, TOML tables). For the loose sources a missing key or `null`
//! means "use the default", while a present key of the wrong type is
//! rejected with an error naming the parameter. Zero is a present value.

use serde_json::{Map, Value};

use crate::dom::Element;
use crate::error::{ProgressError, Result};

/// How an arc is located
#[derive(Debug, Clone, PartialEq)]
pub enum ArcRef {
    /// Direct reference to a node
    Element(Element),
    /// Identifier looked up inside the container
    Id(String),
}

impl From<Element> for ArcRef {
    fn from(element: Element) -> Self {
        ArcRef::Element(element)
    }
}

impl From<&str> for ArcRef {
    fn from(id: &str) -> Self {
        ArcRef::Id(id.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressOptions {
    pub value: Option<f64>,
    pub radius: Option<f64>,
    pub thickness: Option<f64>,
    pub animated: bool,
    pub hidden: bool,
    pub circle_percent: Option<ArcRef>,
    pub circle_background: Option<ArcRef>,
}

impl ProgressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn circle_percent(mut self, arc: impl Into<ArcRef>) -> Self {
        self.circle_percent = Some(arc.into());
        self
    }

    pub fn circle_background(mut self, arc: impl Into<ArcRef>) -> Self {
        self.circle_background = Some(arc.into());
        self
    }

    /// Read options from a JSON object
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or(ProgressError::Validation {
            param: "options",
            expected: "an object",
        })?;
        Self::from_map(map)
    }

    /// Read options from a TOML table (e.g. the `[indicator]` settings section)
    pub fn from_toml(table: &toml::Table) -> Result<Self> {
        // A TOML table always serializes to a JSON object
        let value = serde_json::to_value(table).map_err(|_| ProgressError::Validation {
            param: "options",
            expected: "a table",
        })?;
        Self::from_json(&value)
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self> {
        for key in map.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                tracing::debug!("Ignoring unknown progress option: {}", key);
            }
        }

        Ok(Self {
            value: number_option(map, "value")?,
            radius: number_option(map, "radius")?,
            thickness: number_option(map, "thickness")?,
            animated: bool_option(map, "animated")?.unwrap_or(false),
            hidden: bool_option(map, "hidden")?.unwrap_or(false),
            circle_percent: id_option(map, "circlePercent")?,
            circle_background: id_option(map, "circleBackground")?,
        })
    }
}

const KNOWN_KEYS: &[&str] = &[
    "value",
    "radius",
    "thickness",
    "animated",
    "hidden",
    "circlePercent",
    "circleBackground",
];

/// Present-and-not-null lookup
fn present<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

fn number_option(map: &Map<String, Value>, key: &'static str) -> Result<Option<f64>> {
    match present(map, key) {
        None => Ok(None),
        Some(v) => v.as_f64().map(Some).ok_or(ProgressError::Validation {
            param: key,
            expected: "a number",
        }),
    }
}

fn bool_option(map: &Map<String, Value>, key: &'static str) -> Result<Option<bool>> {
    match present(map, key) {
        None => Ok(None),
        Some(v) => v.as_bool().map(Some).ok_or(ProgressError::Validation {
            param: key,
            expected: "a boolean",
        }),
    }
}

fn id_option(map: &Map<String, Value>, key: &'static str) -> Result<Option<ArcRef>> {
    let Some(v) = present(map, key) else {
        return Ok(None);
    };
    match v.as_str() {
        Some(id) if !id.trim().is_empty() => Ok(Some(ArcRef::Id(id.to_string()))),
        _ => Err(ProgressError::Validation {
            param: key,
            expected: "a non-empty element identifier",
        }),
    }
}
