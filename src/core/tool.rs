//! Attack Tool Catalog
//!
//! The inventory of tooling available to build campaigns: template
//! generators, call bots, cloned sites, and similar. Purely descriptive;
//! nothing here executes anything.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

// ============================================================================
// Tool Category
// ============================================================================

/// What kind of attack the tool supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    Email,
    Call,
    Website,
    Malware,
}

impl ToolCategory {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Email => "Email",
            Self::Call => "Call",
            Self::Website => "Website",
            Self::Malware => "Malware",
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Tool Status
// ============================================================================

/// Lifecycle status of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    /// Ready for use in campaigns
    Active,
    /// Being configured
    #[default]
    Draft,
    /// Retired or disabled
    Inactive,
}

impl ToolStatus {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Attack Tool
// ============================================================================

/// A catalog entry for a simulated-attack tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackTool {
    /// Unique identifier
    pub id: String,
    /// Tool name
    pub name: String,
    /// Attack category
    pub category: ToolCategory,
    /// Current status
    pub status: ToolStatus,
    /// What the tool does
    pub description: String,
    /// Capability list (ordered)
    pub features: Vec<String>,
    /// When a campaign last used this tool
    pub last_used: Option<DateTime<Utc>>,
    /// How many times the tool has been used
    pub usage_count: u32,
    /// When this entry was created
    pub created_at: DateTime<Utc>,
}

impl AttackTool {
    /// Create a new draft entry
    pub fn new(name: &str, category: ToolCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            category,
            status: ToolStatus::Draft,
            description: String::new(),
            features: Vec::new(),
            last_used: None,
            usage_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Builder: set features
    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Builder: set status
    pub fn with_status(mut self, status: ToolStatus) -> Self {
        self.status = status;
        self
    }
}

// ============================================================================
// Tool Draft
// ============================================================================

/// User input for cataloging a tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDraft {
    /// Tool name (required)
    pub name: String,
    /// Attack category (required)
    pub category: Option<ToolCategory>,
    /// Description
    pub description: String,
    /// Capability list
    pub features: Vec<String>,
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur in tool store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("tool not found: {0}")]
    NotFound(String),
}

/// Result type for tool store operations
pub type ToolResult<T> = Result<T, ToolError>;

// ============================================================================
// Tool Store
// ============================================================================

/// In-memory tool catalog, in creation order
#[derive(Debug, Default)]
pub struct ToolStore {
    tools: IndexMap<String, AttackTool>,
}

impl ToolStore {
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Catalog a tool from user input. Name and category are required;
    /// the entry starts as a draft with no usage history.
    pub fn create(&mut self, draft: ToolDraft) -> ToolResult<&AttackTool> {
        let mut missing = Vec::new();
        if draft.name.trim().is_empty() {
            missing.push("name");
        }
        if draft.category.is_none() {
            missing.push("category");
        }
        if !missing.is_empty() {
            return Err(ToolError::MissingFields(missing));
        }
        let category = draft.category.unwrap_or(ToolCategory::Email);

        let tool = AttackTool::new(&draft.name, category)
            .with_description(&draft.description)
            .with_features(draft.features);

        let id = tool.id.clone();
        info!(tool = %tool.name, "attack tool cataloged");
        self.tools.insert(id.clone(), tool);
        Ok(&self.tools[&id])
    }

    /// Insert a fully-formed entry (fixtures and imports)
    pub fn insert(&mut self, tool: AttackTool) -> &AttackTool {
        let id = tool.id.clone();
        self.tools.insert(id.clone(), tool);
        &self.tools[&id]
    }

    /// Record one use of the tool: bumps the counter and stamps the
    /// last-used time.
    pub fn record_usage(&mut self, id: &str) -> ToolResult<&AttackTool> {
        let tool = self
            .tools
            .get_mut(id)
            .ok_or_else(|| ToolError::NotFound(id.to_string()))?;
        tool.usage_count += 1;
        tool.last_used = Some(Utc::now());
        Ok(&self.tools[id])
    }

    /// Remove an entry. Idempotent when the id is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        self.tools.shift_remove(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&AttackTool> {
        self.tools.get(id)
    }

    /// Ordered snapshot of the catalog
    pub fn list(&self) -> Vec<AttackTool> {
        self.tools.values().cloned().collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
