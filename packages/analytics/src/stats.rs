//! Header statistics and per-zone hotspot summaries.

use vector_map_analytics_models::{HeaderStats, HotspotSummary, RiskLevelCounts};
use vector_map_zone_models::{Hotspot, RiskLevel, Zone};

/// Counts items by risk level. The counts partition the input exactly.
#[must_use]
pub fn risk_level_counts<I>(levels: I) -> RiskLevelCounts
where
    I: IntoIterator<Item = RiskLevel>,
{
    let mut counts = RiskLevelCounts::default();
    for level in levels {
        counts.record(level);
    }
    counts
}

/// Statistics shown in the header above the map.
#[must_use]
pub fn header_stats(zones: &[Zone], hotspots: &[Hotspot]) -> HeaderStats {
    let by_risk = risk_level_counts(hotspots.iter().map(|h| h.risk_level));

    HeaderStats {
        zones: risk_level_counts(zones.iter().map(|z| z.risk_level)),
        total_cases: zones.iter().map(|z| z.metrics.recent_cases).sum(),
        total_hotspots: by_risk.total(),
        high_risk_hotspots: by_risk.high,
    }
}

/// Hotspot totals for one zone's detail panel.
///
/// Takes the zone's hotspots as already filtered, so an unknown zone simply
/// yields an empty summary.
#[must_use]
pub fn hotspot_summary(hotspots: &[&Hotspot]) -> HotspotSummary {
    let by_risk = risk_level_counts(hotspots.iter().map(|h| h.risk_level));

    HotspotSummary {
        total: by_risk.total(),
        by_risk,
        total_cases: hotspots.iter().map(|h| h.cases).sum(),
    }
}

#[cfg(test)]
mod tests {
    use vector_map_fixtures::Fixtures;

    use super::*;

    #[test]
    fn header_stats_for_shipped_data() {
        let fixtures = Fixtures::embedded();
        let stats = header_stats(&fixtures.zones, &fixtures.hotspots);

        assert_eq!(stats.total_cases, 428);
        assert_eq!(stats.total_hotspots, 67);
        assert_eq!(stats.zones.total(), 9);
        assert_eq!(
            stats.high_risk_hotspots as usize,
            fixtures
                .hotspots
                .iter()
                .filter(|h| h.risk_level == RiskLevel::High)
                .count()
        );
    }

    #[test]
    fn risk_counts_partition_input() {
        let fixtures = Fixtures::embedded();
        let counts = risk_level_counts(fixtures.zones.iter().map(|z| z.risk_level));

        assert_eq!(counts.total() as usize, fixtures.zones.len());
        for level in RiskLevel::all() {
            let n = fixtures.zones.iter().filter(|z| z.risk_level == *level).count();
            assert_eq!(counts.get(*level) as usize, n);
        }
    }

    #[test]
    fn empty_inputs_give_zeroes() {
        let stats = header_stats(&[], &[]);
        assert_eq!(stats.total_cases, 0);
        assert_eq!(stats.zones, RiskLevelCounts::default());
        assert_eq!(hotspot_summary(&[]), HotspotSummary::default());
    }

    #[test]
    fn zone_hotspot_summary() {
        let fixtures = Fixtures::embedded();
        let hotspots = fixtures.zone_hotspots("pond-area");
        let summary = hotspot_summary(&hotspots);

        assert_eq!(summary.total, 9);
        assert_eq!(summary.by_risk.total(), 9);
        assert_eq!(
            summary.total_cases,
            hotspots.iter().map(|h| h.cases).sum::<u32>()
        );
    }
}
