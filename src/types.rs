use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the server a backup belongs to.
///
/// The panel addresses servers by their uuid or by its short form, so this
/// stays an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Values of the "create backup" form.
///
/// Both fields may be empty: an empty name lets the server generate one, an
/// empty ignore list makes it fall back to the `.pteroignore` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackupFormValues {
    pub name: String,
    /// Newline-delimited ignore patterns.
    pub ignored: String,
}

/// Body of the create request. Sent verbatim, no trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBackupRequest {
    pub name: String,
    pub ignored: String,
}

impl From<&BackupFormValues> for CreateBackupRequest {
    fn from(values: &BackupFormValues) -> Self {
        Self { name: values.name.clone(), ignored: values.ignored.clone() }
    }
}

/// A backup as returned by the panel.
///
/// The creation flow only passes it through; the fields are used by the
/// backup list and the checksum action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupRecord {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub ignored_files: Vec<String>,
    pub sha256_hash: Option<String>,
    #[serde(default)]
    pub bytes: u64,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl BackupRecord {
    /// A backup is finished once the panel reports a completion time.
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Single resource envelope: `{"object": "backup", "attributes": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEnvelope<T> {
    pub object: String,
    pub attributes: T,
}

/// List envelope: `{"object": "list", "data": [<resource>...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub object: String,
    #[serde(default = "Vec::new")]
    pub data: Vec<ResourceEnvelope<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.into_iter().map(|r| r.attributes).collect()
    }
}
