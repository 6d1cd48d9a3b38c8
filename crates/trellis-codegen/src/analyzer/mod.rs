//! Heuristic node analysis for code generation.

mod props;
mod roles;

pub use props::{extract_props, ts_string, PropDecl, PropType};
pub use roles::{
    heading_level, is_button_like, is_container_like, is_image_like, is_input_like,
    is_variant_like, NodeRole,
};
