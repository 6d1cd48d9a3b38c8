//! Batch generation workflows.
//!
//! A batch fetches once, then runs each node through the pipeline
//! independently: a missing node is recorded and skipped, never fatal for
//! the rest of the batch. The manifest reports discovered versus generated
//! counts so callers can see the difference.

use trellis_codegen::generate_component;
use trellis_core::{DesignNode, NodeType};

use crate::error::Result;
use crate::sink::ComponentSink;
use crate::source::DesignSource;

/// Summary of one batch generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationManifest {
    /// The design file the batch ran against.
    pub file_key: String,
    /// How many components the fetch surfaced.
    pub discovered: usize,
    /// Names of the components actually generated, in generation order.
    pub generated: Vec<String>,
    /// Requested node ids absent from the fetch result.
    pub missing: Vec<String>,
}

impl GenerationManifest {
    /// Whether every discovered component was generated.
    pub fn is_complete(&self) -> bool {
        self.generated.len() == self.discovered
    }
}

/// Generate components for explicitly named nodes.
pub fn generate_named_components(
    source: &impl DesignSource,
    file_key: &str,
    ids: &[&str],
    sink: &mut impl ComponentSink,
) -> Result<GenerationManifest> {
    let response = source.fetch_nodes(file_key, ids)?;

    let mut manifest = GenerationManifest {
        file_key: file_key.to_string(),
        discovered: ids.len(),
        ..GenerationManifest::default()
    };

    for id in ids {
        match response.nodes.get(*id).and_then(|entry| entry.as_ref()) {
            Some(wrapper) => {
                let node = &wrapper.document;
                let component = generate_component(&node.name, node);
                sink.write(&component.name, &component.source)?;
                manifest.generated.push(component.name);
            }
            None => {
                tracing::warn!(id = %id, file_key = %file_key, "requested node missing from fetch result");
                manifest.missing.push(id.to_string());
            }
        }
    }

    tracing::info!(
        file_key = %file_key,
        discovered = manifest.discovered,
        generated = manifest.generated.len(),
        "batch generation finished"
    );
    Ok(manifest)
}

/// Generate components for every component node of a design file.
///
/// Falls back to the document root when the file declares no component
/// nodes, so an unstructured file still yields one component.
pub fn generate_file_components(
    source: &impl DesignSource,
    file_key: &str,
    sink: &mut impl ComponentSink,
) -> Result<GenerationManifest> {
    let file = source.fetch_file(file_key)?;

    let mut components: Vec<DesignNode> = Vec::new();
    file.document.walk(&mut |node| {
        if node.node_type == NodeType::Component {
            components.push(node.clone());
        }
    });
    if components.is_empty() {
        components.push(file.document.clone());
    }

    let mut manifest = GenerationManifest {
        file_key: file_key.to_string(),
        discovered: components.len(),
        ..GenerationManifest::default()
    };

    for node in &components {
        let component = generate_component(&node.name, node);
        sink.write(&component.name, &component.source)?;
        manifest.generated.push(component.name);
    }

    tracing::info!(
        file_key = %file_key,
        discovered = manifest.discovered,
        generated = manifest.generated.len(),
        "file generation finished"
    );
    Ok(manifest)
}
