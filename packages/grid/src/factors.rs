//! Value functions for each grid factor.
//!
//! Each function maps a cell's grid distance from its hotspot (and, for the
//! noisy factors, a uniform draw) to a raw value. Values may leave `[0, 1]`;
//! the generator clamps them.

use rand::Rng;
use vector_map_grid_models::GridFactor;
use vector_map_zone_models::RiskLevel;

/// Raw factor value for a cell at `distance` grid steps from a hotspot in a
/// zone of the given risk level.
///
/// Only [`GridFactor::VegetationIndex`] and [`GridFactor::TemperatureGrid`]
/// consume randomness; the others are deterministic in `distance`.
pub fn factor_value<R: Rng + ?Sized>(
    factor: GridFactor,
    risk: RiskLevel,
    distance: f64,
    rng: &mut R,
) -> f64 {
    match factor {
        GridFactor::WaterIndex => 0.08f64.mul_add(-distance, 1.0).max(0.0),
        GridFactor::VegetationIndex => {
            let u: f64 = rng.gen_range(0.0..1.0);
            0.03f64
                .mul_add(-distance, 0.2f64.mul_add(u, 0.4))
                .max(0.0)
        }
        GridFactor::TemperatureGrid => {
            let u: f64 = rng.gen_range(0.0..1.0);
            let base = match risk {
                RiskLevel::High => 0.8,
                RiskLevel::Medium => 0.6,
                RiskLevel::Low => 0.4,
            };
            base + 0.15f64.mul_add(u, -0.075)
        }
        GridFactor::HumidityGrid => 0.05f64.mul_add(-distance, 0.7).max(0.3),
        GridFactor::BreedingSites => decay(risk_weight(risk, [1.0, 0.7, 0.4]), 0.1, distance),
        GridFactor::LarvaeDensity => decay(risk_weight(risk, [1.0, 0.6, 0.3]), 0.12, distance),
        GridFactor::RiskScoreGrid => decay(risk_weight(risk, [1.0, 0.65, 0.35]), 0.09, distance),
    }
}

/// Picks the high/medium/low multiplier.
const fn risk_weight(risk: RiskLevel, [high, medium, low]: [f64; 3]) -> f64 {
    match risk {
        RiskLevel::High => high,
        RiskLevel::Medium => medium,
        RiskLevel::Low => low,
    }
}

/// `max(0, m·(1 − rate·d))`
fn decay(multiplier: f64, rate: f64, distance: f64) -> f64 {
    (multiplier * rate.mul_add(-distance, 1.0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn water_index_decays_to_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(close(factor_value(GridFactor::WaterIndex, RiskLevel::Low, 0.0, &mut rng), 1.0));
        assert!(close(factor_value(GridFactor::WaterIndex, RiskLevel::Low, 5.0, &mut rng), 0.6));
        assert!(close(factor_value(GridFactor::WaterIndex, RiskLevel::Low, 20.0, &mut rng), 0.0));
    }

    #[test]
    fn humidity_has_a_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(close(factor_value(GridFactor::HumidityGrid, RiskLevel::High, 2.0, &mut rng), 0.6));
        assert!(close(factor_value(GridFactor::HumidityGrid, RiskLevel::High, 7.0, &mut rng), 0.35));
        assert!(close(factor_value(GridFactor::HumidityGrid, RiskLevel::High, 10.0, &mut rng), 0.3));
    }

    #[test]
    fn risk_weighted_factors_scale_by_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let at = |factor, risk, rng: &mut ChaCha8Rng| factor_value(factor, risk, 0.0, rng);

        assert!(close(at(GridFactor::BreedingSites, RiskLevel::Medium, &mut rng), 0.7));
        assert!(close(at(GridFactor::LarvaeDensity, RiskLevel::Low, &mut rng), 0.3));
        assert!(close(at(GridFactor::RiskScoreGrid, RiskLevel::Medium, &mut rng), 0.65));
        assert!(close(
            factor_value(GridFactor::BreedingSites, RiskLevel::High, 5.0, &mut rng),
            0.5
        ));
        assert!(close(
            factor_value(GridFactor::LarvaeDensity, RiskLevel::High, 9.0, &mut rng),
            0.0
        ));
    }

    #[test]
    fn noisy_factors_stay_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let t = factor_value(GridFactor::TemperatureGrid, RiskLevel::Medium, 3.0, &mut rng);
            assert!((0.525..0.675).contains(&t), "{t}");

            let v = factor_value(GridFactor::VegetationIndex, RiskLevel::Low, 0.0, &mut rng);
            assert!((0.4..0.6).contains(&v), "{v}");
        }
    }

    #[test]
    fn deterministic_factors_ignore_the_rng() {
        let mut a = ChaCha8Rng::seed_from_u64(1);
        let mut b = ChaCha8Rng::seed_from_u64(2);
        for factor in [GridFactor::WaterIndex, GridFactor::RiskScoreGrid] {
            assert!(close(
                factor_value(factor, RiskLevel::High, 1.5, &mut a),
                factor_value(factor, RiskLevel::High, 1.5, &mut b),
            ));
        }
    }
}
