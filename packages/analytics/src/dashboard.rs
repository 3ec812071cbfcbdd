//! Analytics dashboard reductions.
//!
//! Mirrors the cards and charts of the analytics view: KPI cards, the weekly
//! case trend, fogging by zone, the recent fogging table, case share by zone
//! and budget utilization.

use vector_map_analytics_models::{
    BudgetSummary, CasesByPeriod, ChartSlice, Dashboard, DashboardKpis, FoggingInstance,
    Percentage, ResourceAllocation, TrendDirection, WeekOverWeek, ZoneFogging, ZonePerformance,
};
use vector_map_fixtures::Fixtures;
use vector_map_zone_models::{Hotspot, RiskLevel};

/// Pie chart palette for case share by zone. Cycles when there are more
/// zones than colors.
pub const CHART_COLORS: [&str; 8] = [
    "#ef4444", "#f59e0b", "#22c55e", "#3b82f6", "#8b5cf6", "#ec4899", "#14b8a6", "#f97316",
];

/// Fill for the spent slice of the budget pie.
pub const BUDGET_SPENT_COLOR: &str = "#ef4444";
/// Fill for the remaining slice of the budget pie.
pub const BUDGET_REMAINING_COLOR: &str = "#22c55e";

/// Rows in the recent fogging table.
pub const RECENT_FOGGING_LIMIT: usize = 10;

/// Change between the last two trend periods.
///
/// A missing or zero previous period yields [`Percentage::Unavailable`].
/// Direction is down only when the latest period is strictly lower.
#[must_use]
pub fn week_over_week(trend: &[CasesByPeriod]) -> WeekOverWeek {
    let latest = trend.last().map_or(0, |p| p.cases);
    let previous = trend
        .len()
        .checked_sub(2)
        .and_then(|i| trend.get(i))
        .map_or(0, |p| p.cases);

    let change = if previous == 0 {
        Percentage::Unavailable
    } else {
        Percentage::of(
            f64::from(latest) - f64::from(previous),
            f64::from(previous),
        )
    };

    WeekOverWeek {
        latest,
        previous,
        change,
        direction: if latest < previous {
            TrendDirection::Down
        } else {
            TrendDirection::Up
        },
    }
}

/// Mean response time in hours, rounded to one decimal. Zero for no rows.
#[must_use]
pub fn average_response_time(rows: &[ZonePerformance]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = rows.iter().map(|r| r.response_time).sum::<f64>() / rows.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// KPI cards.
#[must_use]
pub fn dashboard_kpis(fixtures: &Fixtures) -> DashboardKpis {
    let rows = &fixtures.zone_performance;

    #[allow(clippy::cast_possible_truncation)]
    let completed_fogging = fixtures.fogging.iter().filter(|f| f.is_completed()).count() as u32;
    #[allow(clippy::cast_possible_truncation)]
    let high_risk_zones = rows
        .iter()
        .filter(|r| r.risk_level == RiskLevel::High)
        .count() as u32;

    DashboardKpis {
        total_cases: rows.iter().map(|r| r.cases).sum(),
        week_over_week: week_over_week(&fixtures.cases_trend),
        completed_fogging,
        avg_response_time: average_response_time(rows),
        breeding_sites_eliminated: rows.iter().map(|r| r.breeding_sites_eliminated).sum(),
        high_risk_zones,
        high_risk_hotspots: high_risk_hotspots(&fixtures.hotspots),
        budget_utilized: budget_utilized(&fixtures.resource_allocation),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn high_risk_hotspots(hotspots: &[Hotspot]) -> u32 {
    hotspots
        .iter()
        .filter(|h| h.risk_level == RiskLevel::High)
        .count() as u32
}

/// Spent over total budget. Unavailable for a zero budget.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn budget_utilized(resources: &ResourceAllocation) -> Percentage {
    Percentage::of(resources.spent as f64, resources.total_budget as f64)
}

/// Fogging count and average completed effectiveness per performance row.
///
/// Effectiveness sums the zone's completed operations and divides by the
/// row's fogging count, not by the number of completed operations. A zero
/// count yields 0.
#[must_use]
pub fn fogging_by_zone(rows: &[ZonePerformance], fogging: &[FoggingInstance]) -> Vec<ZoneFogging> {
    rows.iter()
        .map(|row| {
            let effectiveness = if row.fogging_count == 0 {
                0.0
            } else {
                let sum: f64 = fogging
                    .iter()
                    .filter(|f| f.zone_id == row.zone_id && f.is_completed())
                    .map(|f| f.effectiveness)
                    .sum();
                sum / f64::from(row.fogging_count)
            };

            ZoneFogging {
                zone_id: row.zone_id.clone(),
                name: row.zone_name.clone(),
                count: row.fogging_count,
                effectiveness,
            }
        })
        .collect()
}

/// The last [`RECENT_FOGGING_LIMIT`] operations, newest first.
#[must_use]
pub fn recent_fogging(fogging: &[FoggingInstance]) -> Vec<FoggingInstance> {
    let start = fogging.len().saturating_sub(RECENT_FOGGING_LIMIT);
    fogging[start..].iter().rev().cloned().collect()
}

/// Each performance row's share of total cases.
#[must_use]
pub fn cases_by_zone(rows: &[ZonePerformance]) -> Vec<ChartSlice> {
    let total: u32 = rows.iter().map(|r| r.cases).sum();

    rows.iter()
        .zip(CHART_COLORS.iter().cycle())
        .map(|(row, color)| ChartSlice {
            name: row.zone_name.clone(),
            value: f64::from(row.cases),
            share: Percentage::of(f64::from(row.cases), f64::from(total)),
            color: (*color).to_string(),
        })
        .collect()
}

/// Spent and remaining budget, in millions.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn budget_summary(resources: &ResourceAllocation) -> BudgetSummary {
    let total = resources.total_budget as f64;
    let spent = resources.spent as f64;
    let remaining = resources.total_budget.saturating_sub(resources.spent) as f64;

    let slice = |name: &str, value: f64, color: &str| ChartSlice {
        name: name.to_string(),
        value,
        share: Percentage::of(value, total),
        color: color.to_string(),
    };

    BudgetSummary {
        total_millions: total / 1_000_000.0,
        spent_millions: spent / 1_000_000.0,
        remaining_millions: remaining / 1_000_000.0,
        slices: vec![
            slice("Spent", spent, BUDGET_SPENT_COLOR),
            slice("Remaining", remaining, BUDGET_REMAINING_COLOR),
        ],
    }
}

/// Assembles the full dashboard payload.
#[must_use]
pub fn build_dashboard(fixtures: &Fixtures) -> Dashboard {
    log::debug!(
        "Building dashboard from {} fogging operations and {} performance rows",
        fixtures.fogging.len(),
        fixtures.zone_performance.len()
    );

    Dashboard {
        kpis: dashboard_kpis(fixtures),
        cases_trend: fixtures.cases_trend.clone(),
        fogging_by_zone: fogging_by_zone(&fixtures.zone_performance, &fixtures.fogging),
        zone_performance: fixtures.zone_performance.clone(),
        recent_fogging: recent_fogging(&fixtures.fogging),
        cases_by_zone: cases_by_zone(&fixtures.zone_performance),
        budget: budget_summary(&fixtures.resource_allocation),
        daily_operations: fixtures.daily_operations.clone(),
        resources: fixtures.resource_allocation.clone(),
    }
}
