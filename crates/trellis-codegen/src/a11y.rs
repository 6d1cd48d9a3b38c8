//! Accessibility enhancement of translated markup.
//!
//! Four ordered passes over the markup tree, each gated on a classification
//! re-derived from the originating node. Every pass runs on every call;
//! more than one may fire for the same node (an image-like button gets both
//! treatments).

use trellis_core::{dom_id, DesignNode, NodeType};

use crate::analyzer::{heading_level, is_button_like, is_image_like, is_input_like};
use crate::markup::{AttrValue, Element, MarkupNode};

/// Filler words stripped from the edges of a name when deriving alt text.
const IMAGE_FILLERS: &[&str] = &["image", "img", "picture", "photo", "icon", "graphic"];

/// Filler words stripped from the edges of a name when deriving a label.
const INPUT_FILLERS: &[&str] = &["input", "field", "text", "textbox", "box"];

/// Apply the accessibility passes to a translated fragment.
pub fn enhance(fragment: MarkupNode, node: &DesignNode) -> MarkupNode {
    let fragment = promote_heading(fragment, node);
    let fragment = label_image(fragment, node);
    let fragment = button_semantics(fragment, node);
    label_input(fragment, node)
}

/// Pass 1: retag the outermost generic wrapper of a large-type text node
/// as a heading at the inferred level.
fn promote_heading(mut fragment: MarkupNode, node: &DesignNode) -> MarkupNode {
    if node.node_type != NodeType::Text {
        return fragment;
    }
    let Some(font_size) = node.font_size().filter(|s| *s >= 16.0) else {
        return fragment;
    };
    if let Some(root) = fragment.as_element_mut() {
        if matches!(root.tag.as_str(), "div" | "p" | "span") {
            root.tag = format!("h{}", heading_level(font_size));
        }
    }
    fragment
}

/// Pass 2: give image-like nodes a readable label, either as `alt` on a
/// dedicated image element or as a role/label pair on the fallback div
/// standing in for a background image.
fn label_image(mut fragment: MarkupNode, node: &DesignNode) -> MarkupNode {
    if !is_image_like(node) {
        return fragment;
    }
    let alt = strip_edge_words(&node.name, IMAGE_FILLERS)
        .unwrap_or_else(|| "Image".to_string());

    if let Some(img) = fragment.find_tag_mut("img") {
        if !img.has_attr("alt") {
            img.set_attr("alt", AttrValue::Str(alt));
        }
    } else if let Some(root) = fragment.as_element_mut() {
        root.set_attr("role", AttrValue::Str("img".to_string()));
        root.set_attr("aria-label", AttrValue::Str(alt));
    }
    fragment
}

/// Pass 3: make button-like nodes without a real `<button>` operable:
/// interactive role, keyboard focus, Enter activation.
fn button_semantics(mut fragment: MarkupNode, node: &DesignNode) -> MarkupNode {
    if !is_button_like(node) || fragment.contains_tag("button") {
        return fragment;
    }
    if let Some(root) = fragment.as_element_mut() {
        root.set_attr("role", AttrValue::Str("button".to_string()));
        root.set_attr("tabIndex", AttrValue::Expr("0".to_string()));
        root.set_attr(
            "onKeyDown",
            AttrValue::Expr("(e) => e.key === 'Enter' && onClick?.()".to_string()),
        );
    }
    fragment
}

/// Pass 4: associate input-like nodes with a label. An existing `<input>`
/// gains a stable id and a wrapping label; without one, the generic
/// wrapper itself is converted into the input.
fn label_input(fragment: MarkupNode, node: &DesignNode) -> MarkupNode {
    if !is_input_like(node) {
        return fragment;
    }
    let id = dom_id(&node.id);
    let text = strip_edge_words(&node.name, INPUT_FILLERS)
        .unwrap_or_else(|| "Input".to_string());

    if fragment.contains_tag("input") {
        let mut done = false;
        return wrap_first_input(fragment, &id, &text, &mut done);
    }

    match fragment {
        MarkupNode::Element(mut el) => {
            el.tag = "input".to_string();
            el.children.clear();
            el.self_closing = true;
            el.set_attr("id", AttrValue::Str(id.clone()));
            MarkupNode::Element(label_around(el, &id, &text))
        }
        other => other,
    }
}

fn wrap_first_input(node: MarkupNode, id: &str, text: &str, done: &mut bool) -> MarkupNode {
    if *done {
        return node;
    }
    match node {
        MarkupNode::Element(mut el) if el.tag == "input" => {
            *done = true;
            el.set_attr("id", AttrValue::Str(id.to_string()));
            MarkupNode::Element(label_around(el, id, text))
        }
        MarkupNode::Element(mut el) => {
            el.children = el
                .children
                .into_iter()
                .map(|child| wrap_first_input(child, id, text, done))
                .collect();
            MarkupNode::Element(el)
        }
        other => other,
    }
}

fn label_around(input: Element, id: &str, text: &str) -> Element {
    Element::new("label")
        .with_attr("htmlFor", id)
        .with_child(MarkupNode::Text(text.to_string()))
        .with_child(MarkupNode::Element(input))
}

fn strip_edge_words(name: &str, fillers: &[&str]) -> Option<String> {
    let words: Vec<&str> = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let is_filler = |word: &str| fillers.contains(&word.to_lowercase().as_str());

    let mut start = 0;
    let mut end = words.len();
    while start < end && is_filler(words[start]) {
        start += 1;
    }
    while end > start && is_filler(words[end - 1]) {
        end -= 1;
    }
    if start == end {
        None
    } else {
        Some(words[start..end].join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::translate;
    use trellis_core::TypeStyle;

    fn text_node(font_size: f64) -> DesignNode {
        DesignNode::new("1:1", "Title", NodeType::Text)
            .with_characters("Hello")
            .with_style(TypeStyle {
                font_size: Some(font_size),
                ..TypeStyle::default()
            })
    }

    #[test]
    fn promotes_generic_wrapper_to_heading() {
        let wrapper = MarkupNode::Element(
            Element::new("div").with_child(MarkupNode::Text("Hello".to_string())),
        );
        let enhanced = enhance(wrapper, &text_node(32.0));
        assert_eq!(enhanced.render(), "<h1>Hello</h1>");
    }

    #[test]
    fn heading_level_tracks_font_size() {
        let fragment = translate(&text_node(20.0)).fragment;
        let enhanced = enhance(fragment, &text_node(20.0));
        assert!(enhanced.render().starts_with("<h3"));
    }

    #[test]
    fn small_text_is_left_alone() {
        let node = text_node(14.0);
        let fragment = translate(&node).fragment;
        let enhanced = enhance(fragment.clone(), &node);
        assert_eq!(enhanced, fragment);
    }

    #[test]
    fn image_element_gains_stripped_alt() {
        let node = DesignNode::new("1", "Hero Image Photo", NodeType::Image);
        let enhanced = enhance(translate(&node).fragment, &node);
        assert_eq!(enhanced.render(), "<img src={src} alt=\"Hero\" />");
    }

    #[test]
    fn filler_only_image_name_defaults_to_image() {
        let node = DesignNode::new("1", "image", NodeType::Image);
        let enhanced = enhance(translate(&node).fragment, &node);
        assert!(enhanced.render().contains("alt=\"Image\""));
    }

    #[test]
    fn image_named_div_becomes_background_proxy() {
        let node = DesignNode::new("1", "Profile Picture", NodeType::Frame);
        let enhanced = enhance(translate(&node).fragment, &node);
        let rendered = enhanced.render();
        assert!(rendered.contains("role=\"img\""));
        assert!(rendered.contains("aria-label=\"Profile\""));
    }

    #[test]
    fn button_like_frame_without_button_gains_semantics() {
        let wrapper = MarkupNode::Element(Element::new("div").with_attr("className", "card"));
        let node = DesignNode::new("1", "Submit Button", NodeType::Rectangle);
        let rendered = enhance(wrapper, &node).render();
        assert!(rendered.contains("className=\"card\""));
        assert!(rendered.contains("role=\"button\""));
        assert!(rendered.contains("tabIndex={0}"));
        assert!(rendered.contains("onKeyDown={(e) => e.key === 'Enter' && onClick?.()}"));
    }

    #[test]
    fn real_button_element_is_not_decorated() {
        let node = DesignNode::new("1", "Submit Button", NodeType::Frame);
        let rendered = enhance(translate(&node).fragment, &node).render();
        assert!(rendered.starts_with("<button"));
        assert!(!rendered.contains("role=\"button\""));
    }

    #[test]
    fn input_like_wrapper_is_converted_and_labeled() {
        let node = DesignNode::new("12:34", "Email Input", NodeType::Frame);
        let rendered = enhance(translate(&node).fragment, &node).render();
        assert_eq!(
            rendered,
            "<label htmlFor=\"12-34\">\n  Email\n  <input id=\"12-34\" />\n</label>"
        );
    }

    #[test]
    fn existing_input_is_wrapped_in_place() {
        let fragment = MarkupNode::Element(
            Element::new("div").with_child(MarkupNode::Element(
                Element::new("input").with_attr("type", "text").self_closing(),
            )),
        );
        let node = DesignNode::new("9:9", "Name Field", NodeType::Frame);
        let rendered = enhance(fragment, &node).render();
        assert!(rendered.contains("<label htmlFor=\"9-9\">"));
        assert!(rendered.contains("<input type=\"text\" id=\"9-9\" />"));
    }

    #[test]
    fn image_like_button_gets_both_treatments() {
        let node = DesignNode::new("1", "Image Button", NodeType::Rectangle);
        let rendered = enhance(translate(&node).fragment, &node).render();
        // The image pass labels the proxy, then the button pass takes the
        // interactive role for the same wrapper.
        assert!(rendered.contains("aria-label=\"Button\""));
        assert!(rendered.contains("role=\"button\""));
        assert!(rendered.contains("tabIndex={0}"));
    }
}
