//! SVG markup for the node tree
//!
//! `progress_circle` builds the scaffold a host page would contain;
//! `to_markup` serializes any tree so it can be saved or embedded.

use crate::constants::{DEFAULT_BACKGROUND_ID, DEFAULT_CONTAINER_ID, DEFAULT_FILL_ID, DEFAULT_RADIUS};
use crate::dom::{Element, NodeKind};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Container with a background arc and a fill arc using the default identifiers
///
/// The fill arc is rotated so the stroke starts at twelve o'clock.
pub fn progress_circle() -> Element {
    let container = Element::with_id(NodeKind::Svg, DEFAULT_CONTAINER_ID);
    container.add_class("progress");

    let background = Element::with_id(NodeKind::Circle, DEFAULT_BACKGROUND_ID);
    background.set_attribute("fill", "none");
    background.set_attribute("stroke", "#2d2d2d");
    background.set_attribute("r", DEFAULT_RADIUS.to_string());

    let fill = Element::with_id(NodeKind::Circle, DEFAULT_FILL_ID);
    fill.set_attribute("fill", "none");
    fill.set_attribute("stroke", "#00bcd4");
    fill.set_attribute("stroke-linecap", "round");
    fill.set_attribute("r", DEFAULT_RADIUS.to_string());
    fill.set_attribute("transform-origin", "center");
    fill.set_attribute("transform", "rotate(-90)");

    container.append_child(background);
    container.append_child(fill);
    container
}

/// Serialize a node tree to SVG text
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root, 0, true);
    out
}

fn write_element(out: &mut String, element: &Element, depth: usize, is_root: bool) {
    let kind = element.kind();
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(kind.tag());

    if is_root && kind == NodeKind::Svg && element.attribute("xmlns").is_none() {
        push_attribute(out, "xmlns", SVG_NAMESPACE);
    }
    for (name, value) in element.attributes() {
        push_attribute(out, &name, &value);
    }

    let classes = element.classes();
    if !classes.is_empty() {
        push_attribute(out, "class", &classes.join(" "));
    }

    let styles = element.styles();
    if !styles.is_empty() {
        let style = styles
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ");
        push_attribute(out, "style", &style);
    }

    let children = element.children();
    if children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    out.push_str(">\n");
    for child in &children {
        write_element(out, child, depth + 1, false);
    }
    out.push_str(&indent);
    out.push_str("</");
    out.push_str(kind.tag());
    out.push_str(">\n");
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
