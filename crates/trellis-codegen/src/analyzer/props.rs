//! Property inference for generated components.

use trellis_core::{identifier, DesignNode, NodeType};

use super::roles::{is_button_like, is_container_like, is_variant_like};

/// Literals of the fixed variant axis.
const VARIANT_LITERALS: &[&str] = &["primary", "secondary", "outline", "ghost"];

/// Semantic type of an inferred property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropType {
    /// A plain string.
    String,
    /// A zero-argument callback.
    Callback,
    /// A union of string literals.
    Enum(Vec<String>),
    /// Renderable child content.
    Node,
}

impl PropType {
    /// TypeScript rendering of this type.
    pub fn ts(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Callback => "() => void".to_string(),
            Self::Enum(literals) => literals
                .iter()
                .map(|l| format!("'{l}'"))
                .collect::<Vec<_>>()
                .join(" | "),
            Self::Node => "React.ReactNode".to_string(),
        }
    }

    /// Whether the type itself denotes optional content.
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node)
    }
}

/// A named, typed input slot inferred for a generated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropDecl {
    pub name: String,
    pub ty: PropType,
    pub default: Option<String>,
    pub description: Option<String>,
}

impl PropDecl {
    /// A string property.
    pub fn string(name: impl Into<String>, default: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty: PropType::String,
            default,
            description: None,
        }
    }

    /// A zero-argument callback property.
    pub fn callback(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: PropType::Callback,
            default: None,
            description: None,
        }
    }

    /// Attach a description (builder form).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the interface entry should be optional.
    pub fn is_optional(&self) -> bool {
        self.default.is_some() || self.ty.is_node()
    }
}

/// Escape a string into a single-quoted TypeScript literal.
pub fn ts_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Infer the property declarations for one node.
///
/// Rules fire independently, in a fixed order, against the raw node name;
/// de-duplication by name happens later, at assembly. The final rule always
/// adds a `className` override slot.
pub fn extract_props(node: &DesignNode) -> Vec<PropDecl> {
    let mut props = Vec::new();

    if node.node_type == NodeType::Text {
        if let Some(characters) = node.characters.as_deref().filter(|c| !c.is_empty()) {
            let name = identifier(&node.name).unwrap_or_else(|| "text".to_string());
            props.push(
                PropDecl::string(name, Some(ts_string(characters)))
                    .with_description(format!("Text content of the \"{}\" layer", node.name)),
            );
        }
    }

    if is_variant_like(node) {
        props.push(PropDecl {
            name: "variant".to_string(),
            ty: PropType::Enum(VARIANT_LITERALS.iter().map(|l| l.to_string()).collect()),
            default: Some("'primary'".to_string()),
            description: None,
        });
    }

    if is_button_like(node) {
        props.push(PropDecl::callback("onClick"));
    }

    if is_container_like(node) {
        props.push(PropDecl {
            name: "children".to_string(),
            ty: PropType::Node,
            default: None,
            description: None,
        });
    }

    props.push(PropDecl::string("className", Some("''".to_string())));
    props
}
