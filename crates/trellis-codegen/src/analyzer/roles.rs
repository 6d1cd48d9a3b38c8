//! Semantic role classification for design nodes.
//!
//! Names in a design document are free text, so classification is a
//! keyword heuristic over the raw node name (case-insensitive substring
//! match) combined with the node tag. Each predicate is independent; the
//! tagged [`NodeRole`] applies a fixed priority when several fire.

use trellis_core::{DesignNode, NodeType};

const BUTTON_KEYWORDS: &[&str] = &["button", "btn"];
const CONTAINER_KEYWORDS: &[&str] = &["container", "wrapper", "layout", "section"];
const INPUT_KEYWORDS: &[&str] = &["input", "field", "textbox"];
const IMAGE_KEYWORDS: &[&str] = &["image", "img", "photo", "picture"];

fn name_contains_any(name: &str, keywords: &[&str]) -> bool {
    let lower = name.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Whether the node name suggests an interactive button.
pub fn is_button_like(node: &DesignNode) -> bool {
    name_contains_any(&node.name, BUTTON_KEYWORDS)
}

/// Whether the node is a named layout container with children.
pub fn is_container_like(node: &DesignNode) -> bool {
    !node.children.is_empty() && name_contains_any(&node.name, CONTAINER_KEYWORDS)
}

/// Whether the node name suggests a form input.
pub fn is_input_like(node: &DesignNode) -> bool {
    name_contains_any(&node.name, INPUT_KEYWORDS)
}

/// Whether the node is an image, by tag or by name.
pub fn is_image_like(node: &DesignNode) -> bool {
    node.node_type == NodeType::Image || name_contains_any(&node.name, IMAGE_KEYWORDS)
}

/// Whether the node name declares a variant axis.
pub fn is_variant_like(node: &DesignNode) -> bool {
    node.name.to_lowercase().contains("variant")
}

/// Heading level inferred from a font size.
pub fn heading_level(font_size: f64) -> u8 {
    if font_size >= 32.0 {
        1
    } else if font_size >= 24.0 {
        2
    } else if font_size >= 20.0 {
        3
    } else if font_size >= 18.0 {
        4
    } else if font_size >= 16.0 {
        5
    } else {
        6
    }
}

/// Primary semantic role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Button,
    Input,
    Image,
    Container,
    Plain,
}

impl NodeRole {
    /// Classify a node. When several heuristics fire, the priority is
    /// Button > Input > Image > Container > Plain.
    pub fn of(node: &DesignNode) -> Self {
        if is_button_like(node) {
            Self::Button
        } else if is_input_like(node) {
            Self::Input
        } else if is_image_like(node) {
            Self::Image
        } else if is_container_like(node) {
            Self::Container
        } else {
            Self::Plain
        }
    }

    /// Whether this role represents interactive content.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Button | Self::Input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> DesignNode {
        DesignNode::new("1:1", name, NodeType::Frame)
    }

    #[test]
    fn button_matching_is_case_insensitive_substring() {
        assert!(is_button_like(&named("Submit Button")));
        assert!(is_button_like(&named("primary-BTN")));
        assert!(!is_button_like(&named("banner")));
    }

    #[test]
    fn container_requires_children() {
        assert!(!is_container_like(&named("Card Container")));
        let with_child = named("Card Container").with_child(named("inner"));
        assert!(is_container_like(&with_child));
        let plain = named("Card").with_child(named("inner"));
        assert!(!is_container_like(&plain));
    }

    #[test]
    fn image_matches_by_tag_or_name() {
        assert!(is_image_like(&DesignNode::new("1", "x", NodeType::Image)));
        assert!(is_image_like(&named("Hero Photo")));
        assert!(!is_image_like(&named("Hero")));
    }

    #[test]
    fn role_priority_prefers_button() {
        let node = named("Image Button").with_child(named("inner"));
        assert_eq!(NodeRole::of(&node), NodeRole::Button);
        assert_eq!(NodeRole::of(&named("Email Field")), NodeRole::Input);
        assert_eq!(NodeRole::of(&named("Card")), NodeRole::Plain);
        assert!(NodeRole::Button.is_interactive());
        assert!(!NodeRole::Container.is_interactive());
    }

    #[test]
    fn heading_levels_follow_font_size() {
        assert_eq!(heading_level(32.0), 1);
        assert_eq!(heading_level(24.0), 2);
        assert_eq!(heading_level(20.0), 3);
        assert_eq!(heading_level(18.0), 4);
        assert_eq!(heading_level(16.0), 5);
        assert_eq!(heading_level(15.9), 6);
    }
}
