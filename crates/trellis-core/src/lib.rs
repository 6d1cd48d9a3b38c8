//! Core types and utilities for the Trellis code generator.
//!
//! This crate provides the foundational types used across the other trellis
//! crates:
//! - The design-tree node model as fetched from a remote design document
//! - Value types (colors, paints, typography, effects)
//! - Name-sanitizing helpers for deriving identifiers from free-text labels

pub mod name;
pub mod node;

pub use name::*;
pub use node::*;
