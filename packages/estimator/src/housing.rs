//! Fixed-ratio housing-unit estimation.
//!
//! Converts a city's population into estimated single-family,
//! multi-family, and commercial unit counts. This is an approximation
//! pending real housing-data integration: 2.5 persons per household,
//! a 70/30 single/multi split, and one commercial unit per 50 people.
//!
//! The rounding order matters for output compatibility: the total is
//! the sum of the already-rounded components, so it may drift slightly
//! from a direct computation on the unrounded values.

use market_map_estimator_models::HousingUnits;

/// Average household size used to derive total residential units.
const PERSONS_PER_HOUSEHOLD: f64 = 2.5;

/// Share of residential units assumed single-family.
const SINGLE_FAMILY_SHARE: f64 = 0.7;

/// Share of residential units assumed multi-family.
const MULTI_FAMILY_SHARE: f64 = 0.3;

/// People per commercial unit.
const PERSONS_PER_COMMERCIAL_UNIT: f64 = 50.0;

/// Estimates the housing-unit breakdown for a population.
///
/// All rounding is half-away-from-zero on non-negative inputs.
#[must_use]
pub fn estimate_units(population: u64) -> HousingUnits {
    let population = population as f64;
    let total_units = (population / PERSONS_PER_HOUSEHOLD).round();
    let single_family_units = (total_units * SINGLE_FAMILY_SHARE).round() as u64;
    let multi_family_units = (total_units * MULTI_FAMILY_SHARE).round() as u64;
    let commercial_units = (population / PERSONS_PER_COMMERCIAL_UNIT).round() as u64;

    HousingUnits {
        single_family_units,
        multi_family_units,
        commercial_units,
        total_housing_units: single_family_units + multi_family_units + commercial_units,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn springfield_scenario() {
        let units = estimate_units(100_000);
        assert_eq!(units.single_family_units, 28_000);
        assert_eq!(units.multi_family_units, 12_000);
        assert_eq!(units.commercial_units, 2_000);
        assert_eq!(units.total_housing_units, 42_000);
    }

    #[test]
    fn total_is_sum_of_rounded_parts() {
        for population in [0, 1, 3, 49, 1_234, 99_999, 2_746_388] {
            let units = estimate_units(population);
            assert_eq!(
                units.total_housing_units,
                units.single_family_units + units.multi_family_units + units.commercial_units
            );
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 3 / 2.5 = 1.2 -> 1 unit; 1 * 0.7 = 0.7 -> 1; 1 * 0.3 = 0.3 -> 0.
        let units = estimate_units(3);
        assert_eq!(units.single_family_units, 1);
        assert_eq!(units.multi_family_units, 0);
        // 25 people -> 25 / 50 = 0.5 -> rounds up to 1 commercial unit.
        assert_eq!(estimate_units(25).commercial_units, 1);
    }

    #[test]
    fn zero_population_yields_zero_units() {
        let units = estimate_units(0);
        assert_eq!(units.total_housing_units, 0);
    }
}
