use serde::Deserialize;

/// Containers never shown even when the index lists them
pub const HIDDEN_CONTAINERS: &[&str] = &["treasure_chest"];

/// Kind of file an index entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "chest")]
    Container,
    #[serde(rename = "chest_addon")]
    Addon,
    #[serde(other)]
    Other,
}

/// One entry of the published `index.json`. Entries are displayed in index order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// File name relative to the index directory
    pub file: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Container an addon attaches to
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default = "default_show")]
    pub show: bool,
}

fn default_show() -> bool {
    true
}

impl IndexEntry {
    /// Whether this entry is a container that should be loaded and displayed
    pub fn is_visible_container(&self) -> bool {
        self.kind == EntryKind::Container
            && self.show
            && !HIDDEN_CONTAINERS.contains(&self.id.as_str())
    }
}
