//! Campaign Type Definitions
//!
//! Core enum and struct types for simulated phishing campaigns: the
//! delivery channel, the lifecycle state machine, and the outcome funnel.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Attack Type Enum
// ============================================================================

/// Delivery channel of a simulated attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    /// Phishing email
    #[default]
    Email,
    /// Smishing text message
    Sms,
    /// Vishing voice call
    Call,
}

impl AttackType {
    /// Get display name for the attack type
    pub fn display_name(&self) -> &str {
        match self {
            Self::Email => "Email Phishing",
            Self::Sms => "SMS Smishing",
            Self::Call => "Call Bot Vishing",
        }
    }
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Campaign Status Enum
// ============================================================================

/// Lifecycle status of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// Created but not yet launched
    #[default]
    Scheduled,
    /// Actively sending simulated attacks
    Running,
    /// Temporarily suspended, may resume
    Paused,
    /// Aborted by the operator
    Stopped,
    /// Ran to completion
    Completed,
}

impl CampaignStatus {
    /// Check if the campaign is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped | Self::Completed)
    }

    /// Check if transition to target status is valid
    pub fn can_transition_to(&self, target: &CampaignStatus) -> bool {
        use CampaignStatus::*;
        matches!(
            (self, target),
            // From Scheduled
            (Scheduled, Running) |
            // From Running
            (Running, Paused) | (Running, Stopped) |
            // From Paused
            (Paused, Running)
            // Terminal states cannot transition
        )
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Campaign Action Enum
// ============================================================================

/// Operator-triggered lifecycle action
///
/// `Start` doubles as resume: a paused campaign goes back to running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignAction {
    Start,
    Pause,
    Stop,
}

impl CampaignAction {
    /// Resolve the status this action yields from the given state,
    /// or `None` when the action is not valid in that state.
    pub fn target_status(&self, from: &CampaignStatus) -> Option<CampaignStatus> {
        use CampaignAction::*;
        use CampaignStatus::*;
        match (self, from) {
            (Start, Scheduled) | (Start, Paused) => Some(Running),
            (Pause, Running) => Some(Paused),
            (Stop, Running) => Some(Stopped),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Stop => "stop",
        }
    }
}

impl std::fmt::Display for CampaignAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Campaign Struct
// ============================================================================

/// A simulated phishing exercise against a target roster
///
/// Counters form a funnel: every opened message was sent, every click
/// came from an opened message, every compromise from a click.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Unique identifier
    pub id: String,
    /// Campaign name
    pub name: String,
    /// Name of the scenario template this campaign runs
    pub scenario: String,
    /// Delivery channel
    pub attack_type: AttackType,
    /// Current lifecycle status
    pub status: CampaignStatus,
    /// Execution progress (0-100)
    pub progress: u8,
    /// Number of targets in the roster
    pub targets: u32,
    /// Messages/calls delivered so far
    pub sent: u32,
    /// Messages opened (or calls answered)
    pub opened: u32,
    /// Links clicked (or prompts followed)
    pub clicked: u32,
    /// Targets who completed the harmful action
    pub compromised: u32,
    /// Planned start date
    pub start_date: Option<NaiveDate>,
    /// Planned end date
    pub end_date: Option<NaiveDate>,
    /// When this campaign was created
    pub created_at: DateTime<Utc>,
    /// When this campaign was last updated
    pub updated_at: DateTime<Utc>,
    /// When this campaign first entered Running
    pub started_at: Option<DateTime<Utc>>,
    /// When this campaign was stopped or completed
    pub ended_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Create a new campaign in the Scheduled state with all counters zero
    pub fn new(name: &str, scenario: &str, attack_type: AttackType) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            scenario: scenario.to_string(),
            attack_type,
            status: CampaignStatus::Scheduled,
            progress: 0,
            targets: 0,
            sent: 0,
            opened: 0,
            clicked: 0,
            compromised: 0,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
            started_at: None,
            ended_at: None,
        }
    }

    /// Builder: set the target roster size
    pub fn with_targets(mut self, targets: u32) -> Self {
        self.targets = targets;
        self
    }

    /// Builder: set the planned execution window
    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Builder: set outcome counters (fixtures and imports)
    pub fn with_counts(mut self, sent: u32, opened: u32, clicked: u32, compromised: u32) -> Self {
        self.sent = sent;
        self.opened = opened;
        self.clicked = clicked;
        self.compromised = compromised;
        self
    }

    /// Success rate of the simulated attack as an integer percentage.
    ///
    /// Zero when nothing has been sent, else round(compromised / sent x 100)
    /// half-up.
    pub fn success_rate(&self) -> u8 {
        if self.sent == 0 {
            return 0;
        }
        ((self.compromised as f64 / self.sent as f64) * 100.0).round() as u8
    }

    /// Check the intended funnel ordering:
    /// sent <= targets, opened <= sent, clicked <= opened, compromised <= clicked.
    ///
    /// Historical data only "should" satisfy this, so it is a predicate
    /// rather than a constructor invariant.
    pub fn funnel_is_consistent(&self) -> bool {
        self.sent <= self.targets
            && self.opened <= self.sent
            && self.clicked <= self.opened
            && self.compromised <= self.clicked
    }
}

// ============================================================================
// Campaign Draft
// ============================================================================

/// User input for creating a campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    /// Campaign name (required)
    pub name: String,
    /// Scenario template reference (required)
    pub scenario: String,
    /// Target roster size; defaults to 0 when omitted
    pub targets: Option<u32>,
    /// Planned start date
    pub start_date: Option<NaiveDate>,
    /// Planned end date
    pub end_date: Option<NaiveDate>,
    /// Delivery channel; defaults to email
    pub attack_type: AttackType,
}

impl Default for CampaignDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            scenario: String::new(),
            targets: None,
            start_date: None,
            end_date: None,
            attack_type: AttackType::Email,
        }
    }
}

// ============================================================================
// Campaign Aggregate
// ============================================================================

/// Counts-by-status and roster total over a set of campaigns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAggregate {
    /// Campaigns waiting to launch
    pub scheduled: usize,
    /// Campaigns currently running
    pub running: usize,
    /// Campaigns that ran to completion
    pub completed: usize,
    /// Sum of target roster sizes across all campaigns
    pub total_targets: u64,
}

/// Fold a campaign collection into its dashboard aggregate.
///
/// Pure; recomputed on every read. No caching is warranted at this
/// data scale.
pub fn aggregate(campaigns: &[Campaign]) -> CampaignAggregate {
    let mut agg = CampaignAggregate {
        scheduled: 0,
        running: 0,
        completed: 0,
        total_targets: 0,
    };
    for campaign in campaigns {
        match campaign.status {
            CampaignStatus::Scheduled => agg.scheduled += 1,
            CampaignStatus::Running => agg.running += 1,
            CampaignStatus::Completed => agg.completed += 1,
            CampaignStatus::Paused | CampaignStatus::Stopped => {}
        }
        agg.total_targets += campaign.targets as u64;
    }
    agg
}

// ============================================================================
// Tests
// ============================================================================
