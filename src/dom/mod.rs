//! Retained graphical node tree
//!
//! Stands in for the host document: the host creates and attaches nodes,
//! the progress component only reads and writes their attributes, styles
//! and marker classes.

mod element;

pub use element::Element;

use std::fmt;

/// Kind of graphical node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Svg,
    Circle,
    Group,
    Text,
    /// Any non-graphical element, identified by its tag name
    Other(String),
}

impl NodeKind {
    /// Element tag name as written in markup
    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Svg => "svg",
            NodeKind::Circle => "circle",
            NodeKind::Group => "g",
            NodeKind::Text => "text",
            NodeKind::Other(tag) => tag,
        }
    }

    /// Whether the node belongs to the vector-graphics namespace
    pub fn is_graphical(&self) -> bool {
        !matches!(self, NodeKind::Other(_))
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, NodeKind::Circle)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphical_kinds() {
        assert!(NodeKind::Svg.is_graphical());
        assert!(NodeKind::Circle.is_graphical());
        assert!(NodeKind::Group.is_graphical());
        assert!(!NodeKind::Other("div".to_string()).is_graphical());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Group.to_string(), "<g>");
        assert_eq!(NodeKind::Other("div".to_string()).to_string(), "<div>");
    }
}
