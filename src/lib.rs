//! PhishSim - Simulated Phishing-Awareness Campaign Core
//!
//! Core library providing campaign lifecycle management, scenario and
//! target rosters, attack-tool and data-source catalogs, and analytics
//! reporting for phishing-awareness training programs.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
