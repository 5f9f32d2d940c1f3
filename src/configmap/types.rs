#![allow(dead_code)]

/// One saved revision of a ConfigMap payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMapVersion {
    pub id: u32,
    pub timestamp: String,
    pub editor: String,
    pub changes: String,
    pub data: String,
}

/// A named JSON blob with an edit history. Mocked — not a real cluster
/// resource; the payload is plain text validated on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMap {
    pub id: u32,
    pub name: String,
    pub deployment: String,
    pub namespace: String,
    pub last_modified: String,
    pub size: String,
    pub data: String,
    /// Newest first.
    pub versions: Vec<ConfigMapVersion>,
}

impl ConfigMap {
    pub fn version(&self, version_id: u32) -> Option<&ConfigMapVersion> {
        self.versions.iter().find(|version| version.id == version_id)
    }
}

/// Render a payload size the way the catalog listing shows it.
pub(super) fn human_size(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
