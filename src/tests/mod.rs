//! Crate-level test suites
//!
//! Unit tests live next to the code they cover; these modules hold the
//! cross-store integration flows and the proptest invariant suites.

mod property;
