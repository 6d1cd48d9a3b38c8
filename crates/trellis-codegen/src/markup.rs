//! Intermediate markup representation.
//!
//! The translator builds this attribute/child tree and the accessibility
//! rewriter edits it in place; serialization to JSX text happens once, at
//! assembly time. Attribute order is emission order and is preserved by
//! the serializer.

/// An attribute value: a quoted string or a `{…}` expression splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    Expr(String),
}

/// A single attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

/// An element in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<Attr>,
    pub children: Vec<MarkupNode>,
    pub self_closing: bool,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Add a string attribute (builder form).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, AttrValue::Str(value.into()));
        self
    }

    /// Add an expression attribute (builder form).
    pub fn with_expr_attr(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.set_attr(name, AttrValue::Expr(expr.into()));
        self
    }

    /// Append a child (builder form).
    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// Mark the element self-closing (builder form).
    pub fn self_closing(mut self) -> Self {
        self.self_closing = true;
        self
    }

    /// Get an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|a| a.name == name).map(|a| &a.value)
    }

    /// Whether an attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set an attribute, replacing an existing one of the same name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: AttrValue) {
        let name = name.into();
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attrs.push(Attr { name, value }),
        }
    }
}

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element(Element),
    Text(String),
    Expr(String),
}

impl MarkupNode {
    /// View as an element, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Mutable view as an element, if it is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Whether any element with the given tag occurs in this subtree.
    pub fn contains_tag(&self, tag: &str) -> bool {
        match self {
            Self::Element(el) => {
                el.tag == tag || el.children.iter().any(|c| c.contains_tag(tag))
            }
            _ => false,
        }
    }

    /// Depth-first search for the first element with the given tag.
    pub fn find_tag_mut(&mut self, tag: &str) -> Option<&mut Element> {
        match self {
            Self::Element(el) => {
                if el.tag == tag {
                    return Some(el);
                }
                el.children.iter_mut().find_map(|c| c.find_tag_mut(tag))
            }
            _ => None,
        }
    }

    /// Serialize to JSX text with two-space indentation, starting at depth 0.
    pub fn render(&self) -> String {
        self.render_indented(0)
    }

    /// Serialize to JSX text starting at the given indentation depth.
    pub fn render_indented(&self, depth: usize) -> String {
        let pad = "  ".repeat(depth);
        match self {
            Self::Text(text) => format!("{pad}{text}"),
            Self::Expr(expr) => format!("{pad}{{{expr}}}"),
            Self::Element(el) => render_element(el, depth),
        }
    }

    fn inline(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Expr(expr) => Some(format!("{{{expr}}}")),
            Self::Element(_) => None,
        }
    }
}

fn render_element(el: &Element, depth: usize) -> String {
    let pad = "  ".repeat(depth);
    let mut open = format!("{pad}<{}", el.tag);
    for attr in &el.attrs {
        open.push(' ');
        match &attr.value {
            AttrValue::Str(s) => {
                open.push_str(&format!("{}=\"{}\"", attr.name, escape_attr(s)));
            }
            AttrValue::Expr(e) => {
                open.push_str(&format!("{}={{{}}}", attr.name, e));
            }
        }
    }

    if el.children.is_empty() {
        if el.self_closing {
            return format!("{open} />");
        }
        return format!("{open}></{}>", el.tag);
    }

    // A lone text or expression child stays on one line.
    if el.children.len() == 1 {
        if let Some(inline) = el.children[0].inline() {
            return format!("{open}>{inline}</{}>", el.tag);
        }
    }

    let mut lines = vec![format!("{open}>")];
    for child in &el.children {
        lines.push(child.render_indented(depth + 1));
    }
    lines.push(format!("{pad}</{}>", el.tag));
    lines.join("\n")
}

fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}
