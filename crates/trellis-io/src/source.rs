//! The design-source contract.
//!
//! The pipeline never talks to the network itself; it consumes this trait.
//! A real client lives in the embedding application. [`StaticSource`]
//! serves pre-decoded documents for tests and offline use.

use indexmap::IndexMap;
use trellis_core::DesignNode;

use crate::api::{FileResponse, NodeWrapper, NodesResponse};
use crate::error::{FetchError, Result};

/// A provider of design trees.
///
/// Errors are surfaced with context and are not retried by callers in this
/// workspace; retry policy belongs to the implementation.
pub trait DesignSource {
    /// Fetch a whole design file.
    fn fetch_file(&self, file_key: &str) -> Result<FileResponse>;

    /// Fetch specific nodes of a file. Every requested id gets an entry in
    /// the response; ids unknown to the source map to `None`.
    fn fetch_nodes(&self, file_key: &str, ids: &[&str]) -> Result<NodesResponse>;

    /// Fetch a single node, failing explicitly when it is absent.
    fn fetch_node(&self, file_key: &str, id: &str) -> Result<DesignNode> {
        let response = self.fetch_nodes(file_key, &[id])?;
        response
            .nodes
            .get(id)
            .cloned()
            .flatten()
            .map(|wrapper| wrapper.document)
            .ok_or_else(|| FetchError::MissingNode { id: id.to_string() })
    }
}

/// An in-memory design source seeded from decoded payloads.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    files: IndexMap<String, FileResponse>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding one file decoded from JSON text.
    pub fn from_json(file_key: impl Into<String>, json: &str) -> Result<Self> {
        let mut source = Self::new();
        source.insert(file_key, crate::api::decode_file(json)?);
        Ok(source)
    }

    /// Register a file under a key.
    pub fn insert(&mut self, file_key: impl Into<String>, file: FileResponse) {
        self.files.insert(file_key.into(), file);
    }
}

impl DesignSource for StaticSource {
    fn fetch_file(&self, file_key: &str) -> Result<FileResponse> {
        self.files.get(file_key).cloned().ok_or_else(|| {
            FetchError::upstream(format!("fetching file {file_key}"), "unknown file key")
        })
    }

    fn fetch_nodes(&self, file_key: &str, ids: &[&str]) -> Result<NodesResponse> {
        let file = self.fetch_file(file_key)?;
        let mut nodes = IndexMap::new();
        for id in ids {
            let found = find_node(&file.document, id).cloned();
            nodes.insert(
                id.to_string(),
                found.map(|document| NodeWrapper { document }),
            );
        }
        Ok(NodesResponse { nodes })
    }
}

fn find_node<'a>(node: &'a DesignNode, id: &str) -> Option<&'a DesignNode> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_node(child, id))
}
