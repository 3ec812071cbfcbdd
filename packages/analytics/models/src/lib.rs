#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Operational records and aggregate result types for the analytics view.
//!
//! The record types (fogging operations, weekly case trend, zone
//! performance, daily operations, resource allocation) are flat fixture
//! rows. Their zone ids are grouping keys only. The result types are what
//! the aggregation functions in `vector_map_analytics` return and what the
//! API serializes.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use vector_map_zone_models::RiskLevel;

/// Lifecycle state of a fogging operation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FoggingStatus {
    /// Finished, effectiveness recorded.
    Completed,
    /// Planned, not started.
    Scheduled,
    /// Currently running.
    InProgress,
}

/// A single fogging operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoggingInstance {
    /// Operation id (e.g. `"fog-001"`).
    pub id: String,
    /// Zone the operation ran in.
    pub zone_id: String,
    /// Zone display name at the time of the operation.
    pub zone_name: String,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: String,
    /// Area covered in m².
    pub area: f64,
    /// Duration in minutes (0 when not yet run).
    pub duration: u32,
    /// Assigned team.
    pub team: String,
    /// Effectiveness score, 0-100 (0 when not yet run).
    pub effectiveness: f64,
    /// Lifecycle state.
    pub status: FoggingStatus,
}

impl FoggingInstance {
    /// Returns `true` once the operation has finished.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == FoggingStatus::Completed
    }
}

/// Case counts for one reporting period (a week).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasesByPeriod {
    /// Period label (e.g. `"Feb W3"`).
    pub period: String,
    /// New cases.
    pub cases: u32,
    /// Deaths.
    pub deaths: u32,
    /// Recoveries.
    pub recovered: u32,
}

/// Operational performance for one zone over the reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePerformance {
    /// Zone id.
    pub zone_id: String,
    /// Zone display name.
    pub zone_name: String,
    /// Cases in the window.
    pub cases: u32,
    /// Fogging operations assigned to the zone.
    pub fogging_count: u32,
    /// Trap efficiency, 0-100.
    pub trap_efficiency: f64,
    /// Alert-to-action time in hours.
    pub response_time: f64,
    /// Breeding sites cleared.
    pub breeding_sites_eliminated: u32,
    /// Risk classification.
    pub risk_level: RiskLevel,
}

/// Today's field operations summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOperations {
    /// Teams in the field.
    pub teams_deployed: u32,
    /// Area covered in m².
    pub area_covered: u64,
    /// Traps inspected.
    pub traps_checked: u32,
    /// Breeding sites found.
    pub breeding_sites_found: u32,
    /// Breeding sites eliminated.
    pub breeding_sites_eliminated: u32,
    /// Fogging runs scheduled.
    pub fogging_scheduled: u32,
}

/// Budget and equipment allocation (amounts in INR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAllocation {
    /// Total budget.
    pub total_budget: u64,
    /// Amount spent so far.
    pub spent: u64,
    /// Field teams.
    pub teams: u32,
    /// Traps owned.
    pub traps: u32,
    /// Fogging machines.
    pub fogging_machines: u32,
    /// Vehicles.
    pub vehicles: u32,
}

/// Counts of records by risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevelCounts {
    /// High-risk count.
    pub high: u32,
    /// Medium-risk count.
    pub medium: u32,
    /// Low-risk count.
    pub low: u32,
}

impl RiskLevelCounts {
    /// Adds one record of the given level.
    pub const fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    /// Returns the count for one level.
    #[must_use]
    pub const fn get(&self, level: RiskLevel) -> u32 {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    /// Sum over all levels.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }
}

/// A percentage that may not be computable.
///
/// Ratios whose denominator is zero (no previous week, no budget) are
/// reported as [`Percentage::Unavailable`] instead of producing a
/// non-finite number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum Percentage {
    /// A finite percentage value (e.g. `-5.0` for a 5% drop).
    Value(f64),
    /// The denominator was zero.
    Unavailable,
}

impl Percentage {
    /// Computes `numerator / denominator * 100`, or `Unavailable` when the
    /// denominator is zero.
    #[must_use]
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Self::Unavailable;
        }
        let value = numerator / denominator * 100.0;
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Unavailable
        }
    }

    /// Returns the value, if available.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    /// Formats with the given number of decimals, `"n/a"` when unavailable.
    #[must_use]
    pub fn format(self, decimals: usize) -> String {
        match self {
            Self::Value(v) => format!("{v:.decimals$}%"),
            Self::Unavailable => "n/a".to_string(),
        }
    }
}

/// Whether a series went up or down between two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrendDirection {
    /// Latest value is at or above the previous one.
    Up,
    /// Latest value is below the previous one.
    Down,
}

/// Change between the two most recent trend periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekOverWeek {
    /// Cases in the latest period (0 when the series is empty).
    pub latest: u32,
    /// Cases in the period before (0 when missing).
    pub previous: u32,
    /// Percentage change from previous to latest.
    pub change: Percentage,
    /// Direction of change.
    pub direction: TrendDirection,
}

/// The map header counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderStats {
    /// Zones by risk level.
    pub zones: RiskLevelCounts,
    /// Sum of every zone's recent cases.
    pub total_cases: u32,
    /// Number of hotspots.
    pub total_hotspots: u32,
    /// Number of high-risk hotspots.
    pub high_risk_hotspots: u32,
}

/// Key performance indicators for the analytics view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    /// Sum of cases over zone performance rows.
    pub total_cases: u32,
    /// Week-over-week change of the case trend.
    pub week_over_week: WeekOverWeek,
    /// Completed fogging operations.
    pub completed_fogging: u32,
    /// Mean response time in hours (0 with no rows).
    pub avg_response_time: f64,
    /// Breeding sites eliminated over zone performance rows.
    pub breeding_sites_eliminated: u32,
    /// High-risk zones among zone performance rows.
    pub high_risk_zones: u32,
    /// High-risk hotspots.
    pub high_risk_hotspots: u32,
    /// Share of the budget spent.
    pub budget_utilized: Percentage,
}

/// Fogging activity for one zone, as charted on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneFogging {
    /// Zone id.
    pub zone_id: String,
    /// Zone display name.
    pub name: String,
    /// Operations assigned to the zone.
    pub count: u32,
    /// Completed effectiveness summed and divided by `count` (0 when
    /// `count` is 0).
    pub effectiveness: f64,
}

/// One slice of a labelled pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    /// Slice label.
    pub name: String,
    /// Raw value.
    pub value: f64,
    /// Share of the whole.
    pub share: Percentage,
    /// Fill color.
    pub color: String,
}

/// Budget figures expressed in millions of rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Total budget (millions).
    pub total_millions: f64,
    /// Spent (millions).
    pub spent_millions: f64,
    /// Remaining (millions). Negative when overspent.
    pub remaining_millions: f64,
    /// Spent/remaining chart slices.
    pub slices: Vec<ChartSlice>,
}

/// Hotspot counts for a single zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotSummary {
    /// Hotspots in the zone.
    pub total: u32,
    /// Hotspots by risk level.
    pub by_risk: RiskLevelCounts,
    /// Cases attributed to the zone's hotspots.
    pub total_cases: u32,
}

/// Everything the analytics view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// KPI cards.
    pub kpis: DashboardKpis,
    /// Weekly case trend (area chart).
    pub cases_trend: Vec<CasesByPeriod>,
    /// Fogging by zone (bar chart).
    pub fogging_by_zone: Vec<ZoneFogging>,
    /// Zone performance table.
    pub zone_performance: Vec<ZonePerformance>,
    /// The ten most recent fogging operations, newest first.
    pub recent_fogging: Vec<FoggingInstance>,
    /// Case share by zone (pie chart).
    pub cases_by_zone: Vec<ChartSlice>,
    /// Budget utilization (pie chart and figures).
    pub budget: BudgetSummary,
    /// Today's field operations.
    pub daily_operations: DailyOperations,
    /// Equipment allocation.
    pub resources: ResourceAllocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_guards_zero_denominator() {
        assert_eq!(Percentage::of(5.0, 0.0), Percentage::Unavailable);
        assert_eq!(Percentage::of(-2.0, 40.0), Percentage::Value(-5.0));
        assert_eq!(Percentage::Unavailable.format(1), "n/a");
        assert_eq!(Percentage::Value(-5.0).format(1), "-5.0%");
    }

    #[test]
    fn fogging_status_is_kebab_case() {
        let status: FoggingStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, FoggingStatus::InProgress);
        assert_eq!(FoggingStatus::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn risk_counts_total() {
        let mut counts = RiskLevelCounts::default();
        for level in [RiskLevel::High, RiskLevel::High, RiskLevel::Low] {
            counts.record(level);
        }
        assert_eq!(counts.get(RiskLevel::High), 2);
        assert_eq!(counts.get(RiskLevel::Medium), 0);
        assert_eq!(counts.total(), 3);
    }
}
