//! Design-tree to React component code generation.
//!
//! This crate turns a fetched design tree into component source text in
//! four stages: utility-class style mapping, heuristic node classification
//! and prop inference, recursive markup translation, and ordered
//! accessibility passes over the intermediate markup tree. The assembler
//! wraps the result into a full component definition and the library
//! builder maps a batch of named nodes.
//!
//! # Example
//!
//! ```
//! use trellis_codegen::generate_component;
//! use trellis_core::{DesignNode, NodeType};
//!
//! let node = DesignNode::new("1:2", "Hero Title", NodeType::Text)
//!     .with_characters("Welcome");
//! let component = generate_component("Hero Title", &node);
//! assert_eq!(component.name, "HeroTitle");
//! assert!(component.source.contains("export function HeroTitle"));
//! ```

pub mod a11y;
pub mod analyzer;
pub mod assemble;
pub mod error;
pub mod markup;
pub mod style;
pub mod translate;

pub use a11y::enhance;
pub use analyzer::{extract_props, NodeRole, PropDecl, PropType};
pub use assemble::{
    assemble, build_library, format_source, generate_component, GeneratedComponent,
};
pub use error::{CodegenError, Result};
pub use markup::{Attr, AttrValue, Element, MarkupNode};
pub use style::map_styles;
pub use translate::{translate, Translation};
