//! Property-based tests for the campaign lifecycle and metrics
//!
//! Tests invariants:
//! - Success rate is always within 0..=100 for consistent counters
//! - No lifecycle action ever changes outcome counters
//! - A rejected transition leaves the store unchanged
//! - Aggregate totals match a manual fold

use proptest::prelude::*;

use crate::core::campaign::{
    aggregate, AttackType, Campaign, CampaignAction, CampaignStatus, CampaignStore,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate a campaign whose counters satisfy the funnel ordering
fn arb_consistent_campaign() -> impl Strategy<Value = Campaign> {
    (0u32..10_000)
        .prop_flat_map(|targets| {
            (Just(targets), 0..=targets).prop_flat_map(|(targets, sent)| {
                (Just(targets), Just(sent), 0..=sent).prop_flat_map(|(targets, sent, opened)| {
                    (Just(targets), Just(sent), Just(opened), 0..=opened).prop_flat_map(
                        |(targets, sent, opened, clicked)| {
                            (
                                Just(targets),
                                Just(sent),
                                Just(opened),
                                Just(clicked),
                                0..=clicked,
                            )
                        },
                    )
                })
            })
        })
        .prop_map(|(targets, sent, opened, clicked, compromised)| {
            Campaign::new("Generated", "Generated Scenario", AttackType::Email)
                .with_targets(targets)
                .with_counts(sent, opened, clicked, compromised)
        })
}

/// Generate an arbitrary lifecycle status
fn arb_status() -> impl Strategy<Value = CampaignStatus> {
    prop_oneof![
        Just(CampaignStatus::Scheduled),
        Just(CampaignStatus::Running),
        Just(CampaignStatus::Paused),
        Just(CampaignStatus::Stopped),
        Just(CampaignStatus::Completed),
    ]
}

/// Generate an arbitrary lifecycle action
fn arb_action() -> impl Strategy<Value = CampaignAction> {
    prop_oneof![
        Just(CampaignAction::Start),
        Just(CampaignAction::Pause),
        Just(CampaignAction::Stop),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: success rate stays within 0..=100 whenever the funnel
    /// ordering holds
    #[test]
    fn prop_success_rate_bounded(campaign in arb_consistent_campaign()) {
        let rate = campaign.success_rate();
        prop_assert!(rate <= 100, "rate {} out of range", rate);
        if campaign.sent == 0 {
            prop_assert_eq!(rate, 0);
        }
    }

    /// Property: a generated campaign satisfies its own funnel check
    #[test]
    fn prop_generated_funnel_consistent(campaign in arb_consistent_campaign()) {
        prop_assert!(campaign.funnel_is_consistent());
    }

    /// Property: no sequence of lifecycle actions, valid or not, ever
    /// changes a campaign's outcome counters
    #[test]
    fn prop_actions_never_touch_counters(
        campaign in arb_consistent_campaign(),
        actions in prop::collection::vec(arb_action(), 0..12)
    ) {
        let before = (
            campaign.targets,
            campaign.sent,
            campaign.opened,
            campaign.clicked,
            campaign.compromised,
        );

        let mut store = CampaignStore::new();
        let id = store.insert(campaign).id.clone();
        for action in actions {
            let _ = store.transition(&id, action);
        }

        let after = store.get(&id).map(|c| {
            (c.targets, c.sent, c.opened, c.clicked, c.compromised)
        });
        prop_assert_eq!(after, Some(before));
    }

    /// Property: a rejected transition leaves status and timestamps alone
    #[test]
    fn prop_rejected_transition_is_a_noop(
        status in arb_status(),
        action in arb_action()
    ) {
        let mut campaign = Campaign::new("Flow", "Scenario", AttackType::Email);
        campaign.status = status;

        let mut store = CampaignStore::new();
        let id = store.insert(campaign).id.clone();
        let snapshot = store.get(&id).cloned();

        if action.target_status(&status).is_none() {
            prop_assert!(store.transition(&id, action).is_err());
            let unchanged = store.get(&id).cloned();
            prop_assert_eq!(
                unchanged.as_ref().map(|c| (c.status, c.updated_at)),
                snapshot.as_ref().map(|c| (c.status, c.updated_at))
            );
        } else {
            let next = store.transition(&id, action);
            prop_assert!(next.is_ok());
        }
    }

    /// Property: terminal states accept no action at all
    #[test]
    fn prop_terminal_states_are_final(action in arb_action()) {
        for status in [CampaignStatus::Stopped, CampaignStatus::Completed] {
            prop_assert!(action.target_status(&status).is_none());
        }
    }

    /// Property: aggregate totals match a manual fold over the same list
    #[test]
    fn prop_aggregate_matches_fold(
        campaigns in prop::collection::vec(arb_consistent_campaign(), 0..20),
        statuses in prop::collection::vec(arb_status(), 0..20)
    ) {
        let campaigns: Vec<Campaign> = campaigns
            .into_iter()
            .zip(statuses)
            .map(|(mut c, s)| {
                c.status = s;
                c
            })
            .collect();

        let agg = aggregate(&campaigns);
        let expected_targets: u64 = campaigns.iter().map(|c| c.targets as u64).sum();
        let count = |s: CampaignStatus| {
            campaigns.iter().filter(|c| c.status == s).count()
        };

        prop_assert_eq!(agg.total_targets, expected_targets);
        prop_assert_eq!(agg.scheduled, count(CampaignStatus::Scheduled));
        prop_assert_eq!(agg.running, count(CampaignStatus::Running));
        prop_assert_eq!(agg.completed, count(CampaignStatus::Completed));
    }

    /// Property: filtering is a subset that preserves insertion order
    #[test]
    fn prop_filter_preserves_order(
        names in prop::collection::vec("[a-z]{1,8}", 1..15),
        needle in "[a-z]{1,3}"
    ) {
        let mut store = CampaignStore::new();
        for name in &names {
            store.insert(Campaign::new(name, "Scenario", AttackType::Email));
        }

        let hits = store.filter(None, Some(&needle));
        // matching is case-insensitive over name or scenario
        let all_match = hits.iter().all(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.scenario.to_lowercase().contains(&needle)
        });
        prop_assert!(all_match);

        // hit order must be a subsequence of insertion order
        let all: Vec<String> = store.list().into_iter().map(|c| c.id).collect();
        let mut cursor = 0usize;
        for hit in &hits {
            let pos = all[cursor..].iter().position(|id| id == &hit.id);
            prop_assert!(pos.is_some());
            cursor += pos.unwrap_or(0) + 1;
        }
    }
}
