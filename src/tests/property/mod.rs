//! Property-based tests
//!
//! Invariants checked with proptest over generated inputs rather than
//! hand-picked cases:
//!
//! - `campaign_props`: lifecycle and metric invariants
//!   - Success rate is always within 0..=100 for consistent counters
//!   - No lifecycle action ever changes outcome counters
//!   - A rejected transition leaves the store unchanged
//!   - Aggregate totals match a manual fold
//!
//! Run with `cargo test property`.

mod campaign_props;
