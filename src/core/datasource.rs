//! Data Source Catalog
//!
//! External collection endpoints (threat-intel APIs, social profiles,
//! file imports) used to build target rosters. Sync is a local state
//! change only; no network call is ever made.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

// ============================================================================
// Data Source Category
// ============================================================================

/// Where the data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSourceCategory {
    ThreatIntelligence,
    SocialMedia,
    FileImport,
    CustomApi,
}

impl DataSourceCategory {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::ThreatIntelligence => "Threat Intelligence",
            Self::SocialMedia => "Social Media",
            Self::FileImport => "File Import",
            Self::CustomApi => "Custom API",
        }
    }
}

impl std::fmt::Display for DataSourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Sync Status
// ============================================================================

/// Synchronization state of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Connected and collecting
    Active,
    /// Configured but not collecting
    #[default]
    Inactive,
    /// Last sync failed
    Error,
    /// One-shot import finished
    Completed,
}

impl SyncStatus {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Error => "Error",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Data Source
// ============================================================================

/// A cataloged collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    /// Unique identifier
    pub id: String,
    /// Source name
    pub name: String,
    /// Source category
    pub category: DataSourceCategory,
    /// Current sync state
    pub sync_status: SyncStatus,
    /// What the source provides
    pub description: String,
    /// Opaque credential (API key, token); masked in display output
    pub credential: String,
    /// When the source last synced
    pub last_sync: Option<DateTime<Utc>>,
    /// Records collected so far
    pub records_collected: u64,
    /// Source-specific configuration
    pub config: serde_json::Map<String, serde_json::Value>,
    /// When this entry was created
    pub created_at: DateTime<Utc>,
}

impl DataSource {
    /// Create a new inactive entry
    pub fn new(name: &str, category: DataSourceCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            category,
            sync_status: SyncStatus::Inactive,
            description: String::new(),
            credential: String::new(),
            last_sync: None,
            records_collected: 0,
            config: serde_json::Map::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Builder: set credential
    pub fn with_credential(mut self, credential: &str) -> Self {
        self.credential = credential.to_string();
        self
    }

    /// Builder: set a config entry
    pub fn with_config(mut self, key: &str, value: serde_json::Value) -> Self {
        self.config.insert(key.to_string(), value);
        self
    }

    /// Credential with everything past the first three characters
    /// replaced by stars, for card and log rendering.
    pub fn masked_credential(&self) -> String {
        if self.credential.is_empty() {
            return "N/A".to_string();
        }
        let prefix: String = self.credential.chars().take(3).collect();
        format!("{prefix}{}", "*".repeat(15))
    }
}

// ============================================================================
// Data Source Draft
// ============================================================================

/// User input for cataloging a data source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceDraft {
    /// Source name (required)
    pub name: String,
    /// Source category (required)
    pub category: Option<DataSourceCategory>,
    /// Description
    pub description: String,
    /// Opaque credential
    pub credential: String,
    /// Source-specific configuration
    pub config: serde_json::Map<String, serde_json::Value>,
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur in data source store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("data source not found: {0}")]
    NotFound(String),
}

/// Result type for data source store operations
pub type DataSourceResult<T> = Result<T, DataSourceError>;

// ============================================================================
// Data Source Store
// ============================================================================

/// In-memory data source catalog, in creation order
#[derive(Debug, Default)]
pub struct DataSourceStore {
    sources: IndexMap<String, DataSource>,
}

impl DataSourceStore {
    pub fn new() -> Self {
        Self {
            sources: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Catalog a source from user input. Name and category are
    /// required; the entry starts inactive with nothing collected.
    pub fn create(&mut self, draft: DataSourceDraft) -> DataSourceResult<&DataSource> {
        let mut missing = Vec::new();
        if draft.name.trim().is_empty() {
            missing.push("name");
        }
        if draft.category.is_none() {
            missing.push("category");
        }
        if !missing.is_empty() {
            return Err(DataSourceError::MissingFields(missing));
        }
        let category = draft.category.unwrap_or(DataSourceCategory::CustomApi);

        let mut source = DataSource::new(&draft.name, category)
            .with_description(&draft.description)
            .with_credential(&draft.credential);
        source.config = draft.config;

        let id = source.id.clone();
        info!(source = %source.name, "data source cataloged");
        self.sources.insert(id.clone(), source);
        Ok(&self.sources[&id])
    }

    /// Insert a fully-formed entry (fixtures and imports)
    pub fn insert(&mut self, source: DataSource) -> &DataSource {
        let id = source.id.clone();
        self.sources.insert(id.clone(), source);
        &self.sources[&id]
    }

    /// Manually sync a source. A local no-op beyond marking the source
    /// active and stamping the sync time.
    pub fn sync(&mut self, id: &str) -> DataSourceResult<&DataSource> {
        let source = self
            .sources
            .get_mut(id)
            .ok_or_else(|| DataSourceError::NotFound(id.to_string()))?;
        source.sync_status = SyncStatus::Active;
        source.last_sync = Some(Utc::now());
        info!(source = %source.name, "data source synced");
        Ok(&self.sources[id])
    }

    /// Remove an entry. Idempotent when the id is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        self.sources.shift_remove(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&DataSource> {
        self.sources.get(id)
    }

    /// Ordered snapshot of the catalog
    pub fn list(&self) -> Vec<DataSource> {
        self.sources.values().cloned().collect()
    }

    /// Case-insensitive substring search over name and description,
    /// combined with an exact category filter. Preserves order.
    pub fn search(
        &self,
        text: Option<&str>,
        category: Option<DataSourceCategory>,
    ) -> Vec<DataSource> {
        let needle = text.map(str::to_lowercase);
        self.sources
            .values()
            .filter(|s| category.map_or(true, |c| s.category == c))
            .filter(|s| {
                needle.as_deref().map_or(true, |n| {
                    s.name.to_lowercase().contains(n)
                        || s.description.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
