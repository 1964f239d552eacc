//! Target Roster Management
//!
//! Simulated recipients (employees) tracked for risk level and
//! interaction history across campaigns.

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

// ============================================================================
// Risk Level
// ============================================================================

/// Assessed susceptibility of a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Target
// ============================================================================

/// A simulated recipient record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Unique identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Department or team
    pub department: String,
    /// Current risk assessment
    pub risk_level: RiskLevel,
    /// Date of the last campaign that reached this target
    pub last_campaign: Option<NaiveDate>,
    /// Simulated attacks this target interacted with
    pub interactions: u32,
    /// Interactions where the target completed the harmful action;
    /// never exceeds `interactions`
    pub compromised: u32,
    /// When this record was added
    pub created_at: DateTime<Utc>,
}

impl Target {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            department: String::new(),
            risk_level: RiskLevel::Low,
            last_campaign: None,
            interactions: 0,
            compromised: 0,
            created_at: Utc::now(),
        }
    }

    /// Builder: set phone number
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    /// Builder: set department
    pub fn with_department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    /// Builder: set risk level
    pub fn with_risk(mut self, risk: RiskLevel) -> Self {
        self.risk_level = risk;
        self
    }

    /// Builder: set interaction history (fixtures and imports)
    pub fn with_history(mut self, interactions: u32, compromised: u32) -> Self {
        self.interactions = interactions;
        self.compromised = compromised;
        self
    }

    /// Check the interaction-history invariant
    pub fn history_is_consistent(&self) -> bool {
        self.compromised <= self.interactions
    }
}

// ============================================================================
// Target Draft
// ============================================================================

/// User input for adding a target
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDraft {
    /// Full name (required)
    pub name: String,
    /// Email address (required)
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Department or team
    pub department: String,
}

// ============================================================================
// Risk Distribution
// ============================================================================

/// Counts of targets per risk level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskDistribution {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Fold a target roster into its risk distribution
pub fn risk_distribution(targets: &[Target]) -> RiskDistribution {
    let mut dist = RiskDistribution {
        low: 0,
        medium: 0,
        high: 0,
    };
    for target in targets {
        match target.risk_level {
            RiskLevel::Low => dist.low += 1,
            RiskLevel::Medium => dist.medium += 1,
            RiskLevel::High => dist.high += 1,
        }
    }
    dist
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur in target store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("target not found: {0}")]
    NotFound(String),
}

/// Result type for target store operations
pub type TargetResult<T> = Result<T, TargetError>;

// ============================================================================
// Target Store
// ============================================================================

/// In-memory target roster, in creation order
#[derive(Debug)]
pub struct TargetStore {
    targets: IndexMap<String, Target>,
    default_risk: RiskLevel,
}

impl Default for TargetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetStore {
    pub fn new() -> Self {
        Self {
            targets: IndexMap::new(),
            default_risk: RiskLevel::Low,
        }
    }

    /// Override the risk level assigned to newly added targets
    pub fn with_default_risk(mut self, risk: RiskLevel) -> Self {
        self.default_risk = risk;
        self
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Add a target from user input. Name and email are required; the
    /// risk level starts at the store default with no history.
    pub fn create(&mut self, draft: TargetDraft) -> TargetResult<&Target> {
        let mut missing = Vec::new();
        if draft.name.trim().is_empty() {
            missing.push("name");
        }
        if draft.email.trim().is_empty() {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(TargetError::MissingFields(missing));
        }

        let target = Target::new(&draft.name, &draft.email)
            .with_phone(&draft.phone)
            .with_department(&draft.department)
            .with_risk(self.default_risk);

        let id = target.id.clone();
        info!(target = %target.name, "target added");
        self.targets.insert(id.clone(), target);
        Ok(&self.targets[&id])
    }

    /// Insert a fully-formed record (fixtures and imports)
    pub fn insert(&mut self, target: Target) -> &Target {
        let id = target.id.clone();
        self.targets.insert(id.clone(), target);
        &self.targets[&id]
    }

    /// Record that a campaign reached this target. Increments the
    /// interaction count, bumps the compromise count only when the
    /// target fell for the attack, and stamps the campaign date, so the
    /// compromised <= interactions invariant holds by construction.
    pub fn record_interaction(&mut self, id: &str, compromised: bool) -> TargetResult<&Target> {
        let target = self
            .targets
            .get_mut(id)
            .ok_or_else(|| TargetError::NotFound(id.to_string()))?;
        target.interactions += 1;
        if compromised {
            target.compromised += 1;
        }
        target.last_campaign = Some(Utc::now().date_naive());
        Ok(&self.targets[id])
    }

    /// Remove a target. Idempotent when the id is absent.
    pub fn delete(&mut self, id: &str) -> bool {
        self.targets.shift_remove(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Target> {
        self.targets.get(id)
    }

    /// Ordered snapshot of the roster
    pub fn list(&self) -> Vec<Target> {
        self.targets.values().cloned().collect()
    }

    /// Case-insensitive substring search over name, email, and
    /// department, combined with an exact risk-level filter. Preserves
    /// order.
    pub fn search(&self, text: Option<&str>, risk: Option<RiskLevel>) -> Vec<Target> {
        let needle = text.map(str::to_lowercase);
        self.targets
            .values()
            .filter(|t| risk.map_or(true, |r| t.risk_level == r))
            .filter(|t| {
                needle.as_deref().map_or(true, |n| {
                    t.name.to_lowercase().contains(n)
                        || t.email.to_lowercase().contains(n)
                        || t.department.to_lowercase().contains(n)
                })
            })
            .cloned()
            .collect()
    }

    /// Risk distribution over the whole roster
    pub fn risk_distribution(&self) -> RiskDistribution {
        let targets: Vec<Target> = self.targets.values().cloned().collect();
        risk_distribution(&targets)
    }
}

// ============================================================================
// Tests
// ============================================================================
