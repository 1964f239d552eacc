//! Scenario Template Management
//!
//! Reusable attack scripts (email, SMS, or voice call) referenced by
//! campaigns. Templates start as drafts, are explicitly activated, and
//! carry the list of credential fields the simulated attack tries to
//! harvest.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::campaign::AttackType;

// ============================================================================
// Harvest Fields
// ============================================================================

/// A credential or identity field a scenario tries to collect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarvestField {
    Username,
    Password,
    Otp,
    Phone,
    CardNumber,
    Cvv,
    BirthDate,
}

impl HarvestField {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Otp => "OTP code",
            Self::Phone => "Phone number",
            Self::CardNumber => "Card number",
            Self::Cvv => "CVV code",
            Self::BirthDate => "Birth date",
        }
    }
}

impl std::fmt::Display for HarvestField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Scenario Status
// ============================================================================

/// Lifecycle status of a scenario template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Being authored, not yet usable in campaigns
    #[default]
    Draft,
    /// Published and selectable
    Active,
}

impl ScenarioStatus {
    /// Check if the template can be activated
    pub fn can_activate(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
        }
    }
}

impl std::fmt::Display for ScenarioStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Scenario Content
// ============================================================================

/// Channel-specific payload of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScenarioContent {
    /// Phishing email with subject and body
    Email { subject: String, body: String },
    /// Smishing text message
    Sms { message: String },
    /// Vishing call script
    Call { script: String },
}

impl ScenarioContent {
    /// The attack type this content belongs to
    pub fn attack_type(&self) -> AttackType {
        match self {
            Self::Email { .. } => AttackType::Email,
            Self::Sms { .. } => AttackType::Sms,
            Self::Call { .. } => AttackType::Call,
        }
    }
}

// ============================================================================
// Scenario Template
// ============================================================================

/// A reusable attack script definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTemplate {
    /// Unique identifier
    pub id: String,
    /// Template name
    pub name: String,
    /// What the scenario simulates and why
    pub description: String,
    /// Delivery channel
    pub attack_type: AttackType,
    /// Current status
    pub status: ScenarioStatus,
    /// Fields the simulated attack tries to harvest (ordered)
    pub harvest_targets: Vec<HarvestField>,
    /// Channel-specific payload, when authored
    pub content: Option<ScenarioContent>,
    /// When this template was created
    pub created_at: DateTime<Utc>,
    /// When a campaign last ran this template
    pub last_used: Option<DateTime<Utc>>,
}

impl ScenarioTemplate {
    /// Create a new draft template
    pub fn new(name: &str, attack_type: AttackType) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: String::new(),
            attack_type,
            status: ScenarioStatus::Draft,
            harvest_targets: Vec::new(),
            content: None,
            created_at: Utc::now(),
            last_used: None,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Builder: set harvest targets
    pub fn with_harvest_targets(mut self, targets: Vec<HarvestField>) -> Self {
        self.harvest_targets = targets;
        self
    }

    /// Builder: set channel content
    pub fn with_content(mut self, content: ScenarioContent) -> Self {
        self.content = Some(content);
        self
    }
}

// ============================================================================
// Scenario Draft
// ============================================================================

/// User input for creating a scenario template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDraft {
    /// Template name (required)
    pub name: String,
    /// Description
    pub description: String,
    /// Delivery channel (required)
    pub attack_type: Option<AttackType>,
    /// Fields to harvest
    pub harvest_targets: Vec<HarvestField>,
    /// Channel-specific payload; must match the attack type when present
    pub content: Option<ScenarioContent>,
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur in scenario store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("content is for {found}, scenario is {expected}")]
    ContentMismatch {
        expected: AttackType,
        found: AttackType,
    },

    #[error("scenario is already active: {0}")]
    AlreadyActive(String),

    #[error("scenario not found: {0}")]
    NotFound(String),
}

/// Result type for scenario store operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;

// ============================================================================
// Scenario Store
// ============================================================================

/// In-memory store of scenario templates, in creation order
#[derive(Debug, Default)]
pub struct ScenarioStore {
    scenarios: IndexMap<String, ScenarioTemplate>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self {
            scenarios: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Create a template from user input. Name and attack type are
    /// required; content, when present, must match the attack type.
    pub fn create(&mut self, draft: ScenarioDraft) -> ScenarioResult<&ScenarioTemplate> {
        let mut missing = Vec::new();
        if draft.name.trim().is_empty() {
            missing.push("name");
        }
        if draft.attack_type.is_none() {
            missing.push("attack type");
        }
        if !missing.is_empty() {
            return Err(ScenarioError::MissingFields(missing));
        }
        let attack_type = draft.attack_type.unwrap_or_default();

        if let Some(content) = &draft.content {
            if content.attack_type() != attack_type {
                return Err(ScenarioError::ContentMismatch {
                    expected: attack_type,
                    found: content.attack_type(),
                });
            }
        }

        let mut scenario = ScenarioTemplate::new(&draft.name, attack_type)
            .with_description(&draft.description)
            .with_harvest_targets(draft.harvest_targets);
        scenario.content = draft.content;

        let id = scenario.id.clone();
        info!(scenario = %scenario.name, "scenario template created");
        self.scenarios.insert(id.clone(), scenario);
        Ok(&self.scenarios[&id])
    }

    /// Insert a fully-formed template (fixtures and imports)
    pub fn insert(&mut self, scenario: ScenarioTemplate) -> &ScenarioTemplate {
        let id = scenario.id.clone();
        self.scenarios.insert(id.clone(), scenario);
        &self.scenarios[&id]
    }

    /// Publish a draft template. Rejected when already active.
    pub fn activate(&mut self, id: &str) -> ScenarioResult<&ScenarioTemplate> {
        let scenario = self
            .scenarios
            .get_mut(id)
            .ok_or_else(|| ScenarioError::NotFound(id.to_string()))?;
        if !scenario.status.can_activate() {
            return Err(ScenarioError::AlreadyActive(scenario.name.clone()));
        }
        scenario.status = ScenarioStatus::Active;
        info!(scenario = %scenario.name, "scenario activated");
        Ok(&self.scenarios[id])
    }

    /// Stamp the template as used now (called when a campaign running it
    /// starts).
    pub fn mark_used(&mut self, id: &str) -> ScenarioResult<()> {
        let scenario = self
            .scenarios
            .get_mut(id)
            .ok_or_else(|| ScenarioError::NotFound(id.to_string()))?;
        scenario.last_used = Some(Utc::now());
        Ok(())
    }

    /// Remove a template. Idempotent when the id is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        self.scenarios.shift_remove(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&ScenarioTemplate> {
        self.scenarios.get(id)
    }

    /// Look up a template by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&ScenarioTemplate> {
        self.scenarios.values().find(|s| s.name == name)
    }

    /// Ordered snapshot of all templates
    pub fn list(&self) -> Vec<ScenarioTemplate> {
        self.scenarios.values().cloned().collect()
    }

    /// Case-insensitive substring filter over name and description,
    /// preserving order.
    pub fn filter(&self, text: &str) -> Vec<ScenarioTemplate> {
        let needle = text.to_lowercase();
        self.scenarios
            .values()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle)
                    || s.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
