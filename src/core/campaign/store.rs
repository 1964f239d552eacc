//! Campaign Store
//!
//! The canonical campaign collection: creation with validation, explicit
//! lifecycle transitions, idempotent deletion, ordered listing and
//! filtering, and the derived dashboard aggregate.
//!
//! The store is a plain mutable structure. Every operation is synchronous
//! and completes before the next user action is processed; there is no
//! locking, no I/O, and no background work.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};

use super::types::{
    aggregate, Campaign, CampaignAction, CampaignAggregate, CampaignDraft, CampaignStatus,
};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur in campaign store operations
///
/// All of these are recoverable by the user; the collection is left
/// unchanged whenever an error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampaignError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("cannot {action} a {from} campaign")]
    InvalidTransition {
        from: CampaignStatus,
        action: CampaignAction,
    },

    #[error("campaign not found: {0}")]
    NotFound(String),
}

/// Result type for campaign store operations
pub type CampaignResult<T> = Result<T, CampaignError>;

// ============================================================================
// Campaign Store
// ============================================================================

/// In-memory store owning the campaign collection.
///
/// Backed by an insertion-ordered id map so that listing preserves
/// creation order while lookup and deletion stay O(1).
#[derive(Debug, Default)]
pub struct CampaignStore {
    campaigns: IndexMap<String, Campaign>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self {
            campaigns: IndexMap::new(),
        }
    }

    /// Number of campaigns in the store
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Create a campaign from user input.
    ///
    /// Rejects the draft without mutating the collection when a required
    /// field is missing; the error names every missing field. On success
    /// the campaign starts Scheduled with all counters zero and is
    /// appended after the existing records.
    pub fn create(&mut self, draft: CampaignDraft) -> CampaignResult<&Campaign> {
        let mut missing = Vec::new();
        if draft.name.trim().is_empty() {
            missing.push("name");
        }
        if draft.scenario.trim().is_empty() {
            missing.push("scenario");
        }
        if !missing.is_empty() {
            return Err(CampaignError::MissingFields(missing));
        }

        let mut campaign = Campaign::new(&draft.name, &draft.scenario, draft.attack_type)
            .with_targets(draft.targets.unwrap_or(0));
        campaign.start_date = draft.start_date;
        campaign.end_date = draft.end_date;

        let id = campaign.id.clone();
        info!(campaign = %campaign.name, id = %id, "campaign created");
        self.campaigns.insert(id.clone(), campaign);
        Ok(&self.campaigns[&id])
    }

    /// Insert a fully-formed campaign record (fixtures and imports).
    ///
    /// Bypasses draft validation; the record keeps whatever status and
    /// counters it carries.
    pub fn insert(&mut self, campaign: Campaign) -> &Campaign {
        let id = campaign.id.clone();
        self.campaigns.insert(id.clone(), campaign);
        &self.campaigns[&id]
    }

    /// Apply a lifecycle action to a campaign.
    ///
    /// Only the status (and bookkeeping timestamps) change; counters are
    /// never touched. An action that is not valid for the current state
    /// is rejected explicitly rather than silently ignored.
    pub fn transition(&mut self, id: &str, action: CampaignAction) -> CampaignResult<&Campaign> {
        let campaign = self
            .campaigns
            .get_mut(id)
            .ok_or_else(|| CampaignError::NotFound(id.to_string()))?;

        let next = action
            .target_status(&campaign.status)
            .ok_or(CampaignError::InvalidTransition {
                from: campaign.status,
                action,
            })?;

        debug!(
            campaign = %campaign.name,
            from = %campaign.status,
            to = %next,
            "campaign transition"
        );

        let now = chrono::Utc::now();
        campaign.status = next;
        campaign.updated_at = now;
        match next {
            CampaignStatus::Running if campaign.started_at.is_none() => {
                campaign.started_at = Some(now);
            }
            CampaignStatus::Stopped | CampaignStatus::Completed => {
                campaign.ended_at = Some(now);
            }
            _ => {}
        }

        Ok(&self.campaigns[id])
    }

    /// Remove a campaign. Idempotent: deleting an absent id is not an
    /// error and leaves the collection unchanged.
    pub fn delete(&mut self, id: &str) -> bool {
        // shift_remove keeps the remaining records in insertion order
        let removed = self.campaigns.shift_remove(id).is_some();
        if removed {
            info!(id = %id, "campaign deleted");
        }
        removed
    }

    /// Get a campaign by id
    pub fn get(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.get(id)
    }

    /// Ordered snapshot of all campaigns
    pub fn list(&self) -> Vec<Campaign> {
        self.campaigns.values().cloned().collect()
    }

    /// Filter by exact status and/or case-insensitive substring over the
    /// campaign name and scenario reference. Preserves relative order.
    pub fn filter(&self, status: Option<CampaignStatus>, text: Option<&str>) -> Vec<Campaign> {
        let needle = text.map(str::to_lowercase);
        self.campaigns
            .values()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .filter(|c| {
                needle.as_deref().map_or(true, |t| {
                    c.name.to_lowercase().contains(t) || c.scenario.to_lowercase().contains(t)
                })
            })
            .cloned()
            .collect()
    }

    /// Dashboard aggregate over the whole collection
    pub fn aggregate(&self) -> CampaignAggregate {
        let campaigns: Vec<Campaign> = self.campaigns.values().cloned().collect();
        aggregate(&campaigns)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::campaign::types::AttackType;
    use rstest::rstest;

    fn draft(name: &str, scenario: &str) -> CampaignDraft {
        CampaignDraft {
            name: name.to_string(),
            scenario: scenario.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_valid() {
        let mut store = CampaignStore::new();
        let created = store
            .create(CampaignDraft {
                targets: Some(100),
                ..draft("July Drill", "Fake VCB Bank Phishing")
            })
            .unwrap();

        assert_eq!(created.status, CampaignStatus::Scheduled);
        assert_eq!(created.targets, 100);
        assert_eq!(created.sent, 0);
        assert_eq!(created.progress, 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_defaults_targets_to_zero() {
        let mut store = CampaignStore::new();
        let created = store.create(draft("Drill", "Scenario")).unwrap();
        assert_eq!(created.targets, 0);
    }

    #[rstest]
    #[case("", "Scenario", vec!["name"])]
    #[case("Drill", "", vec!["scenario"])]
    #[case("", "", vec!["name", "scenario"])]
    #[case("   ", "Scenario", vec!["name"])]
    fn test_create_missing_fields(
        #[case] name: &str,
        #[case] scenario: &str,
        #[case] expected: Vec<&'static str>,
    ) {
        let mut store = CampaignStore::new();
        let err = store.create(draft(name, scenario)).unwrap_err();
        assert_eq!(err, CampaignError::MissingFields(expected));
        assert!(store.is_empty());
    }

    #[test]
    fn test_start_scheduled_campaign() {
        let mut store = CampaignStore::new();
        let id = store.create(draft("Drill", "Scenario")).unwrap().id.clone();

        let campaign = store.transition(&id, CampaignAction::Start).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Running);
        assert!(campaign.started_at.is_some());
    }

    #[test]
    fn test_start_running_campaign_rejected() {
        let mut store = CampaignStore::new();
        let id = store.create(draft("Drill", "Scenario")).unwrap().id.clone();
        store.transition(&id, CampaignAction::Start).unwrap();

        let err = store.transition(&id, CampaignAction::Start).unwrap_err();
        assert_eq!(
            err,
            CampaignError::InvalidTransition {
                from: CampaignStatus::Running,
                action: CampaignAction::Start,
            }
        );
        // State unchanged
        assert_eq!(store.get(&id).unwrap().status, CampaignStatus::Running);
    }

    #[test]
    fn test_stop_running_campaign() {
        let mut store = CampaignStore::new();
        let id = store.create(draft("Drill", "Scenario")).unwrap().id.clone();
        store.transition(&id, CampaignAction::Start).unwrap();

        let campaign = store.transition(&id, CampaignAction::Stop).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Stopped);
        assert!(campaign.ended_at.is_some());
    }

    #[test]
    fn test_stop_scheduled_campaign_rejected() {
        let mut store = CampaignStore::new();
        let id = store.create(draft("Drill", "Scenario")).unwrap().id.clone();

        let err = store.transition(&id, CampaignAction::Stop).unwrap_err();
        assert_eq!(
            err,
            CampaignError::InvalidTransition {
                from: CampaignStatus::Scheduled,
                action: CampaignAction::Stop,
            }
        );
    }

    #[test]
    fn test_pause_and_resume() {
        let mut store = CampaignStore::new();
        let id = store.create(draft("Drill", "Scenario")).unwrap().id.clone();
        store.transition(&id, CampaignAction::Start).unwrap();
        store.transition(&id, CampaignAction::Pause).unwrap();
        assert_eq!(store.get(&id).unwrap().status, CampaignStatus::Paused);

        // Start doubles as resume
        let campaign = store.transition(&id, CampaignAction::Start).unwrap();
        assert_eq!(campaign.status, CampaignStatus::Running);
    }

    #[test]
    fn test_transition_never_changes_counters() {
        let mut store = CampaignStore::new();
        let id = store
            .create(CampaignDraft {
                targets: Some(150),
                ..draft("Drill", "Scenario")
            })
            .unwrap()
            .id
            .clone();

        store.transition(&id, CampaignAction::Start).unwrap();
        store.transition(&id, CampaignAction::Pause).unwrap();
        store.transition(&id, CampaignAction::Start).unwrap();
        store.transition(&id, CampaignAction::Stop).unwrap();

        let campaign = store.get(&id).unwrap();
        assert_eq!(campaign.targets, 150);
        assert_eq!(campaign.sent, 0);
        assert_eq!(campaign.opened, 0);
        assert_eq!(campaign.clicked, 0);
        assert_eq!(campaign.compromised, 0);
    }

    #[test]
    fn test_transition_unknown_id() {
        let mut store = CampaignStore::new();
        let err = store
            .transition("no-such-id", CampaignAction::Start)
            .unwrap_err();
        assert_eq!(err, CampaignError::NotFound("no-such-id".to_string()));
    }

    #[test]
    fn test_delete_idempotent() {
        let mut store = CampaignStore::new();
        let id = store.create(draft("Drill", "Scenario")).unwrap().id.clone();

        assert!(store.delete(&id));
        assert_eq!(store.len(), 0);
        // Deleting again (or a nonexistent id) is not an error
        assert!(!store.delete(&id));
        assert!(!store.delete("never-existed"));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = CampaignStore::new();
        let a = store.create(draft("A", "s")).unwrap().id.clone();
        let b = store.create(draft("B", "s")).unwrap().id.clone();
        let c = store.create(draft("C", "s")).unwrap().id.clone();

        store.delete(&b);
        let names: Vec<String> = store.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(store.get(&a).is_some());
        assert!(store.get(&c).is_some());
    }

    #[test]
    fn test_filter_by_status_and_text() {
        let mut store = CampaignStore::new();
        store.create(draft("Q2 Email Drill", "Fake VCB Bank Phishing")).unwrap();
        let sms = store.create(draft("Prize Scam SMS", "Prize Scam SMS")).unwrap().id.clone();
        store.create(draft("Call Bot Test", "Fake Customer Support Call Bot")).unwrap();
        store.transition(&sms, CampaignAction::Start).unwrap();

        let running = store.filter(Some(CampaignStatus::Running), None);
        assert_eq!(running.len(), 1);
        assert_eq!(running[0].name, "Prize Scam SMS");

        let vcb = store.filter(None, Some("vcb"));
        assert_eq!(vcb.len(), 1);
        assert_eq!(vcb[0].name, "Q2 Email Drill");

        let both = store.filter(Some(CampaignStatus::Scheduled), Some("call"));
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].name, "Call Bot Test");

        // No criteria returns everything in insertion order
        let all = store.filter(None, None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Q2 Email Drill");
    }

    #[test]
    fn test_store_aggregate() {
        let mut store = CampaignStore::new();
        store
            .create(CampaignDraft {
                targets: Some(100),
                ..draft("A", "s")
            })
            .unwrap();
        let b = store
            .create(CampaignDraft {
                targets: Some(150),
                ..draft("B", "s")
            })
            .unwrap()
            .id
            .clone();
        store.transition(&b, CampaignAction::Start).unwrap();
        let mut done = Campaign::new("C", "s", AttackType::Call).with_targets(200);
        done.status = CampaignStatus::Completed;
        store.insert(done);

        let agg = store.aggregate();
        assert_eq!(agg.scheduled, 1);
        assert_eq!(agg.running, 1);
        assert_eq!(agg.completed, 1);
        assert_eq!(agg.total_targets, 450);
    }
}
