// Output seam for generated artifacts

pub trait ArtifactStore: Send + Sync {
    /// Store `contents` under `name`, replacing any previous artifact of that name
    fn put(&self, name: &str, contents: &str) -> anyhow::Result<()>;
}
