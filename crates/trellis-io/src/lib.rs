//! trellis-io: boundary contracts for the Trellis code generator.
//!
//! The transformation pipeline in `trellis-codegen` is pure; everything
//! that touches the outside world goes through this crate:
//!
//! - [`DesignSource`]: where design trees come from, with serde mirrors
//!   of the remote payloads and an in-memory [`StaticSource`]
//! - [`ComponentSink`]: where generated source goes, one file per
//!   component
//! - the batch workflows, which tie a fetch to the pipeline and report a
//!   [`GenerationManifest`] of discovered versus generated components
//!
//! # Quick start
//!
//! ```
//! use trellis_io::{generate_file_components, MemorySink, StaticSource};
//!
//! let source = StaticSource::from_json("FILE", r#"{
//!     "name": "Kit",
//!     "document": { "id": "0:0", "name": "Landing Page", "type": "FRAME" }
//! }"#)?;
//!
//! let mut sink = MemorySink::new();
//! let manifest = generate_file_components(&source, "FILE", &mut sink)?;
//! assert_eq!(manifest.generated, ["LandingPage"]);
//! # Ok::<(), trellis_io::FetchError>(())
//! ```

pub mod api;
pub mod batch;
pub mod error;
pub mod sink;
pub mod source;

pub use api::{decode_file, decode_nodes, FileResponse, NodeWrapper, NodesResponse};
pub use batch::{generate_file_components, generate_named_components, GenerationManifest};
pub use error::{FetchError, Result};
pub use sink::{ComponentSink, DirectorySink, MemorySink};
pub use source::{DesignSource, StaticSource};
