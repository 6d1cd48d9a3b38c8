//! The output-sink contract.
//!
//! Generated components are persisted one source file per component. The
//! sink owns directory creation and charset; the pipeline has no
//! filesystem concerns of its own.

use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::error::Result;

/// A consumer of generated component source.
pub trait ComponentSink {
    /// Persist one component under its sanitized name.
    fn write(&mut self, name: &str, source: &str) -> Result<()>;
}

/// Collects components in memory, mostly for tests and previewing.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub components: IndexMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComponentSink for MemorySink {
    fn write(&mut self, name: &str, source: &str) -> Result<()> {
        self.components.insert(name.to_string(), source.to_string());
        Ok(())
    }
}

/// Writes one `{Name}.tsx` file per component under a root directory,
/// creating the directory on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ComponentSink for DirectorySink {
    fn write(&mut self, name: &str, source: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join(format!("{name}.tsx"));
        fs::write(&path, source)?;
        tracing::debug!(path = %path.display(), "wrote component source");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sink_creates_root_and_writes_tsx() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("generated");
        let mut sink = DirectorySink::new(&root);

        sink.write("HeroTitle", "export function HeroTitle() {}\n")
            .unwrap();

        let written = fs::read_to_string(root.join("HeroTitle.tsx")).unwrap();
        assert!(written.contains("HeroTitle"));
    }

    #[test]
    fn memory_sink_keeps_insertion_order() {
        let mut sink = MemorySink::new();
        sink.write("B", "b").unwrap();
        sink.write("A", "a").unwrap();
        let names: Vec<_> = sink.components.keys().cloned().collect();
        assert_eq!(names, ["B", "A"]);
    }
}
