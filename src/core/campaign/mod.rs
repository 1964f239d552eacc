//! Campaign Execution Module
//!
//! Owns the canonical collection of simulated phishing campaigns and the
//! one non-trivial behavior in the system: the lifecycle state machine and
//! its derived metrics. The presentation layer renders whatever these
//! operations return; nothing here performs I/O.

pub mod store;
pub mod types;

pub use store::{CampaignError, CampaignResult, CampaignStore};
pub use types::{
    aggregate, AttackType, Campaign, CampaignAction, CampaignAggregate, CampaignDraft,
    CampaignStatus,
};
