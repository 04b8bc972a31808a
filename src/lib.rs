//! progress-ring - circular progress indicator
//! Copyright Cybex B.V.
//!
//! A progress ring made of two concentric arcs inside a container node.
//! The host supplies the nodes; [`ProgressIndicator`] derives the geometry,
//! validates every assignment and writes the result back as attributes,
//! styles and marker classes.

pub mod config;
pub mod constants;
pub mod dom;
pub mod error;
pub mod indicator;
pub mod options;
pub mod paths;
pub mod svg;

pub use dom::{Element, NodeKind};
pub use error::{ArcRole, ProgressError};
pub use indicator::ProgressIndicator;
pub use options::{ArcRef, ProgressOptions};
