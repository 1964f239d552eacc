//! Analytics Reporting
//!
//! Pure folds over historical series: monthly campaign outcomes,
//! per-department compromise rates, and the awareness trend. Nothing is
//! cached; every figure is recomputed from its inputs on each call,
//! which is fine at this data scale.

use serde::{Deserialize, Serialize};

// ============================================================================
// Monthly Series
// ============================================================================

/// One month of campaign outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    /// Month label ("Jan", "Feb", ...)
    pub month: String,
    /// Campaigns run that month
    pub campaigns: u32,
    /// Targets reached
    pub targets: u32,
    /// Targets compromised
    pub compromised: u32,
    /// Attack success rate for the month, integer percent
    pub success_rate: u32,
}

impl MonthlyStat {
    pub fn new(month: &str, campaigns: u32, targets: u32, compromised: u32, success_rate: u32) -> Self {
        Self {
            month: month.to_string(),
            campaigns,
            targets,
            compromised,
            success_rate,
        }
    }
}

/// Sum of targets reached over the series
pub fn total_targets(series: &[MonthlyStat]) -> u64 {
    series.iter().map(|m| m.targets as u64).sum()
}

/// Sum of compromises over the series
pub fn total_compromised(series: &[MonthlyStat]) -> u64 {
    series.iter().map(|m| m.compromised as u64).sum()
}

/// Mean of the monthly success rates, rounded to the nearest integer.
/// Zero for an empty series.
pub fn average_success_rate(series: &[MonthlyStat]) -> u32 {
    if series.is_empty() {
        return 0;
    }
    let sum: u64 = series.iter().map(|m| m.success_rate as u64).sum();
    ((sum as f64) / (series.len() as f64)).round() as u32
}

/// Compromises as a rounded percentage of targets reached.
/// Zero when nothing was targeted.
pub fn overall_compromise_rate(series: &[MonthlyStat]) -> u32 {
    let targets = total_targets(series);
    if targets == 0 {
        return 0;
    }
    ((total_compromised(series) as f64 / targets as f64) * 100.0).round() as u32
}

// ============================================================================
// Trend
// ============================================================================

/// Direction the workforce's awareness is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Attacks are succeeding less often than before
    Improving,
    /// Attacks are succeeding as often or more often than before
    Declining,
}

impl TrendDirection {
    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Improving => "Improving",
            Self::Declining => "Declining",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Compare the mean attack success rate of the most recent `window`
/// months against the `window` months before them. A lower recent rate
/// means the workforce is improving. `None` when the series has fewer
/// than two months to compare.
pub fn trend(series: &[MonthlyStat], window: usize) -> Option<TrendDirection> {
    if series.len() < 2 || window == 0 {
        return None;
    }
    let window = window.min(series.len() / 2);

    let mean = |slice: &[MonthlyStat]| -> f64 {
        slice.iter().map(|m| m.success_rate as f64).sum::<f64>() / slice.len() as f64
    };

    let recent = &series[series.len() - window..];
    let earlier = &series[series.len() - 2 * window..series.len() - window];

    if mean(recent) < mean(earlier) {
        Some(TrendDirection::Improving)
    } else {
        Some(TrendDirection::Declining)
    }
}

// ============================================================================
// Department Breakdown
// ============================================================================

/// Campaign outcomes for one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStat {
    /// Department name
    pub department: String,
    /// Targets in the department that were reached
    pub total: u32,
    /// Targets that were compromised
    pub compromised: u32,
}

impl DepartmentStat {
    pub fn new(department: &str, total: u32, compromised: u32) -> Self {
        Self {
            department: department.to_string(),
            total,
            compromised,
        }
    }

    /// Compromise rate as a rounded integer percent; zero when the
    /// department had no targets.
    pub fn rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.compromised as f64 / self.total as f64) * 100.0).round() as u32
    }
}

// ============================================================================
// Report Summary
// ============================================================================

/// Headline figures for the reporting screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_targets: u64,
    pub total_compromised: u64,
    /// Mean monthly attack success rate, integer percent
    pub average_success_rate: u32,
    /// Compromises over targets across the whole period, integer percent
    pub compromise_rate: u32,
    /// Awareness direction, when the series is long enough
    pub trend: Option<TrendDirection>,
}

impl ReportSummary {
    /// Fold a monthly series into the headline figures
    pub fn from_series(series: &[MonthlyStat], trend_window: usize) -> Self {
        Self {
            total_targets: total_targets(series),
            total_compromised: total_compromised(series),
            average_success_rate: average_success_rate(series),
            compromise_rate: overall_compromise_rate(series),
            trend: trend(series, trend_window),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
