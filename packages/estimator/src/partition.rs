//! Same-state service-ring partitioning over the city dataset.
//!
//! A single linear pass classifies every same-state city into the
//! primary ring, the secondary ring, or out of the service area by
//! great-circle distance to the geocoded target point. Cross-state
//! cities are never included, even when geographically closer than
//! in-state alternatives. Output order follows dataset order; there is
//! no sort by distance.

use market_map_estimator_models::{CityEstimate, CityRecord, Coordinate};
use market_map_geography::CityDataset;
use market_map_spatial::{Ring, classify, haversine_miles};

use crate::housing::estimate_units;

/// Converts a dataset record into a ring entry with derived housing
/// estimates attached.
#[must_use]
pub fn city_estimate(record: &CityRecord) -> CityEstimate {
    let units = estimate_units(record.population);
    CityEstimate {
        name: record.city.clone(),
        state: record.state_id.clone(),
        population: record.population,
        single_family_units: units.single_family_units,
        multi_family_units: units.multi_family_units,
        commercial_units: units.commercial_units,
        total_housing_units: units.total_housing_units,
        coordinates: Coordinate {
            lat: record.lat,
            lng: record.lng,
        },
    }
}

/// Resolves the working state code for a target city.
///
/// Uses the dataset's recorded state code when the city is found by
/// case-insensitive name + state match; otherwise falls back to the
/// caller-supplied state string verbatim.
#[must_use]
pub fn resolve_state_code(dataset: &CityDataset, city: &str, state: &str) -> String {
    dataset
        .find(city, state)
        .map_or_else(|| state.to_string(), |record| record.state_id.clone())
}

/// Partitions the dataset into primary and secondary rings around the
/// target point. Only cities whose state code matches `state_code`
/// (case-insensitively) are eligible.
#[must_use]
pub fn partition(
    dataset: &CityDataset,
    target: Coordinate,
    state_code: &str,
    primary_radius_miles: f64,
    secondary_radius_miles: f64,
) -> (Vec<CityEstimate>, Vec<CityEstimate>) {
    let mut primary = Vec::new();
    let mut secondary = Vec::new();

    for record in dataset.records() {
        if !record.state_id.eq_ignore_ascii_case(state_code) {
            continue;
        }

        let distance = haversine_miles(target.lat, target.lng, record.lat, record.lng);
        match classify(distance, primary_radius_miles, secondary_radius_miles) {
            Ring::Primary => primary.push(city_estimate(record)),
            Ring::Secondary => secondary.push(city_estimate(record)),
            Ring::Excluded => {}
        }
    }

    (primary, secondary)
}
