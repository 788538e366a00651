// Filesystem artifact store
use crate::application::artifact_store::ArtifactStore;
use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    dir: PathBuf,
}

impl FileArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactStore for FileArtifactStore {
    fn put(&self, name: &str, contents: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory {}", self.dir.display()))?;

        let path = self.dir.join(name);
        std::fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}
