//! Recursive design-tree to markup translation.
//!
//! Children are fully translated before the parent assembles its own
//! fragment; child order is preserved. Dispatch is a closed switch on the
//! node tag with a default arm, and every branch is total: malformed or
//! absent attributes degrade to no-ops.

use trellis_core::{slug, DesignNode, NodeType};

use crate::analyzer::{extract_props, is_button_like, ts_string, PropDecl};
use crate::markup::{Element, MarkupNode};
use crate::style::map_styles;

/// Result of translating one node.
///
/// `props` keeps first-seen order: the node's own inferred properties come
/// before its children's, and children contribute in document order.
/// De-duplication happens at assembly, not here.
#[derive(Debug, Clone)]
pub struct Translation {
    pub fragment: MarkupNode,
    pub imports: Vec<String>,
    pub props: Vec<PropDecl>,
}

/// Translate a design node into a markup fragment plus its aggregated
/// imports and property declarations.
pub fn translate(node: &DesignNode) -> Translation {
    match node.node_type {
        NodeType::Text => translate_text(node),
        NodeType::Rectangle
        | NodeType::Ellipse
        | NodeType::Polygon
        | NodeType::Star
        | NodeType::Vector
        | NodeType::Line => translate_shape(node),
        NodeType::Component | NodeType::Instance | NodeType::Frame | NodeType::Group => {
            translate_container(node)
        }
        NodeType::Image => translate_image(node),
        NodeType::Other => translate_unknown(node),
    }
}

fn class_attr(el: Element, classes: &[String]) -> Element {
    if classes.is_empty() {
        el
    } else {
        el.with_attr("className", classes.join(" "))
    }
}

fn translate_text(node: &DesignNode) -> Translation {
    let props = extract_props(node);
    let el = class_attr(Element::new("p"), &map_styles(node));

    // Bound to the first extracted property when the node carries content,
    // otherwise a literal placeholder.
    let content = match node.characters.as_deref().filter(|c| !c.is_empty()) {
        Some(_) => MarkupNode::Expr(props[0].name.clone()),
        None => MarkupNode::Text("text".to_string()),
    };

    Translation {
        fragment: MarkupNode::Element(el.with_child(content)),
        imports: Vec::new(),
        props,
    }
}

fn translate_shape(node: &DesignNode) -> Translation {
    let props = extract_props(node);
    let mut classes = map_styles(node);
    classes.push(match slug(&node.name) {
        Some(name) => format!("{}-{}", node.node_type.slug(), name),
        None => node.node_type.slug().to_string(),
    });

    Translation {
        fragment: MarkupNode::Element(class_attr(Element::new("div"), &classes)),
        imports: Vec::new(),
        props,
    }
}

fn translate_container(node: &DesignNode) -> Translation {
    let own_props = extract_props(node);
    let wants_children_slot = own_props.iter().any(|p| p.name == "children");

    let mut imports = Vec::new();
    let mut props = own_props;
    let mut child_fragments = Vec::with_capacity(node.children.len());
    for child in &node.children {
        let translated = translate(child);
        child_fragments.push(translated.fragment);
        imports.extend(translated.imports);
        props.extend(translated.props);
    }

    let classes = map_styles(node);
    let fragment = if is_button_like(node) {
        let mut el = class_attr(Element::new("button"), &classes)
            .with_expr_attr("onClick", "onClick");
        el.children = child_fragments;
        MarkupNode::Element(el)
    } else {
        let mut el = class_attr(Element::new("div"), &classes);
        // Either a child-content slot or the literal subtree, never both.
        el.children = if wants_children_slot {
            vec![MarkupNode::Expr("children".to_string())]
        } else {
            child_fragments
        };
        MarkupNode::Element(el)
    };

    Translation {
        fragment,
        imports,
        props,
    }
}

fn translate_image(node: &DesignNode) -> Translation {
    let file = slug(&node.name).unwrap_or_else(|| "image".to_string());
    let mut props = vec![PropDecl::string(
        "src",
        Some(ts_string(&format!("/assets/{file}.png"))),
    )];
    props.extend(extract_props(node));

    let el = class_attr(
        Element::new("img").with_expr_attr("src", "src"),
        &map_styles(node),
    )
    .self_closing();

    Translation {
        fragment: MarkupNode::Element(el),
        imports: Vec::new(),
        props,
    }
}

fn translate_unknown(node: &DesignNode) -> Translation {
    let el = match slug(&node.name) {
        Some(name) => Element::new("div").with_attr("className", name),
        None => Element::new("div"),
    };
    Translation {
        fragment: MarkupNode::Element(el),
        imports: Vec::new(),
        props: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{Paint, Rgba, TypeStyle};

    #[test]
    fn text_node_binds_first_prop() {
        let node = DesignNode::new("1", "Hero Title", NodeType::Text)
            .with_characters("Welcome")
            .with_style(TypeStyle {
                font_size: Some(14.0),
                ..TypeStyle::default()
            });

        let result = translate(&node);
        assert_eq!(
            result.fragment.render(),
            "<p className=\"text-sm\">{heroTitle}</p>"
        );
        assert_eq!(result.props[0].name, "heroTitle");
    }

    #[test]
    fn shape_carries_type_and_name_class() {
        let node = DesignNode::new("1", "Hero Banner", NodeType::Rectangle)
            .with_fills(vec![Paint::solid(Rgba::BLACK)]);
        let result = translate(&node);
        assert_eq!(
            result.fragment.render(),
            "<div className=\"text-black rectangle-hero-banner\"></div>"
        );
    }

    #[test]
    fn container_with_children_keyword_emits_slot_not_subtree() {
        let child = DesignNode::new("2", "Label", NodeType::Text).with_characters("hi");
        let container = DesignNode::new("1", "Card Container", NodeType::Frame).with_child(child);

        let result = translate(&container);
        let rendered = result.fragment.render();
        assert_eq!(rendered, "<div>{children}</div>");
        assert!(!rendered.contains("<p"));
        // Child props are still aggregated even though its markup is replaced.
        assert!(result.props.iter().any(|p| p.name == "label"));
    }

    #[test]
    fn plain_container_inlines_subtree() {
        let child = DesignNode::new("2", "Label", NodeType::Text).with_characters("hi");
        let card = DesignNode::new("1", "Card", NodeType::Frame).with_child(child);

        let rendered = translate(&card).fragment.render();
        assert_eq!(rendered, "<div>\n  <p>{label}</p>\n</div>");
    }

    #[test]
    fn button_container_binds_on_click_and_inlines_children() {
        let child = DesignNode::new("2", "Label", NodeType::Text).with_characters("Go");
        let node = DesignNode::new("1", "Submit Button", NodeType::Frame).with_child(child);

        let result = translate(&node);
        let rendered = result.fragment.render();
        assert!(rendered.starts_with("<button onClick={onClick}>"));
        assert!(rendered.contains("{label}"));
        assert!(result.props.iter().any(|p| p.name == "onClick"));
    }

    #[test]
    fn own_props_precede_child_props() {
        let child = DesignNode::new("2", "Caption", NodeType::Text).with_characters("hi");
        let node = DesignNode::new("1", "Submit Button", NodeType::Frame).with_child(child);

        let result = translate(&node);
        let names: Vec<_> = result.props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["onClick", "className", "caption", "className"]);
    }

    #[test]
    fn image_node_declares_source_prop() {
        let node = DesignNode::new("1", "Hero Image", NodeType::Image);
        let result = translate(&node);
        assert_eq!(result.fragment.render(), "<img src={src} />");
        assert_eq!(result.props[0].name, "src");
        assert_eq!(
            result.props[0].default.as_deref(),
            Some("'/assets/hero-image.png'")
        );
    }

    #[test]
    fn unknown_type_emits_bare_tagged_div() {
        let mut node = DesignNode::new("1", "Mystery Widget", NodeType::Other);
        node.children.push(DesignNode::new("2", "x", NodeType::Text));

        let result = translate(&node);
        assert_eq!(
            result.fragment.render(),
            "<div className=\"mystery-widget\"></div>"
        );
        assert!(result.props.is_empty());
        assert!(result.imports.is_empty());
    }
}
