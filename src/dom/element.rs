//! Shared element handle

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::NodeKind;

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    classes: Vec<String>,
    children: Vec<Element>,
}

/// Handle to a node in the graphical tree
///
/// Cloning yields another handle to the same node, so the host and the
/// component can both hold a reference. Equality is identity.
#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl Element {
    pub fn new(kind: NodeKind) -> Self {
        Self(Rc::new(RefCell::new(Node {
            kind,
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        })))
    }

    /// Create a node carrying an `id` attribute
    pub fn with_id(kind: NodeKind, id: &str) -> Self {
        let element = Self::new(kind);
        element.set_attribute("id", id);
        element
    }

    pub fn kind(&self) -> NodeKind {
        self.0.borrow().kind.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    /// All attributes in name order
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0
            .borrow()
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn set_style(&self, property: &str, value: impl Into<String>) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.into());
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    /// All inline style properties in name order
    pub fn styles(&self) -> Vec<(String, String)> {
        self.0
            .borrow()
            .styles
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Add a class; adding one already present is a no-op
    pub fn add_class(&self, name: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == name) {
            node.classes.push(name.to_string());
        }
    }

    pub fn remove_class(&self, name: &str) {
        self.0.borrow_mut().classes.retain(|c| c != name);
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == name)
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn append_child(&self, child: Element) {
        self.0.borrow_mut().children.push(child);
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    /// Depth-first search of descendants for a node with the given `id`
    ///
    /// The node itself is not considered.
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        for child in self.0.borrow().children.iter() {
            if child.id().as_deref() == Some(id) {
                return Some(child.clone());
            }
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("Element")
            .field("kind", &node.kind)
            .field("id", &node.attributes.get("id"))
            .field("children", &node.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (Element, Element, Element) {
        let root = Element::with_id(NodeKind::Svg, "root");
        let group = Element::with_id(NodeKind::Group, "group");
        let leaf = Element::with_id(NodeKind::Circle, "leaf");
        group.append_child(leaf.clone());
        root.append_child(group.clone());
        (root, group, leaf)
    }

    #[test]
    fn test_clones_share_node() {
        let element = Element::new(NodeKind::Circle);
        let other = element.clone();
        other.set_attribute("r", "45");
        assert_eq!(element.attribute("r").as_deref(), Some("45"));
        assert_eq!(element, other);
        assert_ne!(element, Element::new(NodeKind::Circle));
    }

    #[test]
    fn test_classes_are_unique() {
        let element = Element::new(NodeKind::Svg);
        element.add_class("hidden");
        element.add_class("hidden");
        assert_eq!(element.classes(), vec!["hidden".to_string()]);

        element.remove_class("hidden");
        assert!(!element.has_class("hidden"));
        // Removing an absent class is harmless
        element.remove_class("hidden");
        assert!(element.classes().is_empty());
    }

    #[test]
    fn test_find_by_id_searches_descendants() {
        let (root, group, leaf) = tree();
        assert_eq!(root.find_by_id("leaf"), Some(leaf));
        assert_eq!(root.find_by_id("group"), Some(group.clone()));
        assert_eq!(root.find_by_id("missing"), None);
        // Self is excluded
        assert_eq!(root.find_by_id("root"), None);
        // Search is scoped to the subtree
        assert_eq!(group.find_by_id("group"), None);
    }

    #[test]
    fn test_attributes_and_styles_are_ordered() {
        let element = Element::new(NodeKind::Circle);
        element.set_attribute("r", "1");
        element.set_attribute("cx", "2");
        element.set_style("stroke-dashoffset", "3px");
        element.set_style("stroke-dasharray", "4px");

        let names: Vec<String> = element.attributes().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["cx", "r"]);
        let styles: Vec<String> = element.styles().into_iter().map(|(k, _)| k).collect();
        assert_eq!(styles, vec!["stroke-dasharray", "stroke-dashoffset"]);

        element.remove_attribute("r");
        assert!(element.attribute("r").is_none());
    }
}
