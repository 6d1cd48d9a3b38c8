//! Serde mirrors of the remote design-API payloads.
//!
//! Only the fields the pipeline consumes are modeled; everything else in
//! the payload is ignored. Node entries in a nodes response may be `null`
//! when the remote source does not know the id, which decodes to `None`.

use indexmap::IndexMap;
use serde::Deserialize;
use trellis_core::DesignNode;

use crate::error::Result;

/// Response to a whole-file fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    #[serde(default)]
    pub name: String,
    pub document: DesignNode,
}

/// One entry of a nodes response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeWrapper {
    pub document: DesignNode,
}

/// Response to a fetch of specific node ids.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodesResponse {
    #[serde(default)]
    pub nodes: IndexMap<String, Option<NodeWrapper>>,
}

/// Decode a whole-file payload.
pub fn decode_file(json: &str) -> Result<FileResponse> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a nodes payload.
pub fn decode_nodes(json: &str) -> Result<NodesResponse> {
    Ok(serde_json::from_str(json)?)
}
