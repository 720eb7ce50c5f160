#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Service-area partitioning and revenue estimation engine.
//!
//! The two entry points mirror the two wizard steps the presentation
//! layer drives:
//!
//! 1. [`build_service_area`] geocodes the target city, partitions the
//!    city dataset into primary/secondary rings, and derives housing
//!    estimates — one geocoding call, one linear dataset pass.
//! 2. [`estimate_revenue`](revenue::estimate_revenue) projects annual
//!    jobs and revenue per service over a previously built service
//!    area, adjusted by the climate zone's adoption fraction.
//!
//! Nothing here is persisted: every result is freshly allocated per
//! request and owned by the caller for the lifetime of its session.

pub mod housing;
pub mod lifecycle;
pub mod partition;
pub mod revenue;
pub mod services;

use market_map_estimator_models::{Coordinate, ServiceAreaResult};
use market_map_geocoder::GeocodeError;
use market_map_geography::CityDataset;
use thiserror::Error;

pub use market_map_climate::{ClimateTable, ResolvedZone};
pub use revenue::estimate_revenue;
pub use services::{INDUSTRIES, hvac_services, is_known_industry};

/// Errors from building a service area.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The target city could not be geocoded.
    #[error("Geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),
}

/// A validated step-1 request.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceAreaRequest {
    /// Target city name.
    pub city: String,
    /// Uppercase two-letter state code.
    pub state: String,
    /// Primary ring radius in statute miles.
    pub primary_radius_miles: f64,
    /// Secondary ring radius in statute miles.
    pub secondary_radius_miles: f64,
}

/// Geocodes the target city and partitions the dataset into service
/// rings with derived housing estimates.
///
/// The working state code comes from the dataset record matching the
/// target by case-insensitive name + state, falling back to the
/// caller-supplied state verbatim. The target city's own aggregates are
/// then looked up by name + resolved state; they are `None` when the
/// city is absent from the dataset, which is not an error — the rings
/// still form around the geocoded point.
///
/// # Errors
///
/// Returns [`EstimateError::Geocode`] if the geocoding provider fails
/// or returns no usable coordinate.
pub async fn build_service_area(
    client: &reqwest::Client,
    geocoder_base_url: &str,
    api_key: &str,
    dataset: &CityDataset,
    request: &ServiceAreaRequest,
) -> Result<ServiceAreaResult, EstimateError> {
    let geocoded = market_map_geocoder::geocode_city(
        client,
        geocoder_base_url,
        api_key,
        &request.city,
        &request.state,
    )
    .await?;

    let target = Coordinate {
        lat: geocoded.latitude,
        lng: geocoded.longitude,
    };

    let area = build_service_area_at(target, dataset, request);

    log::info!(
        "Service area for {}, {}: {} primary, {} secondary cities",
        area.city,
        area.state,
        area.cities_in_primary_radius.len(),
        area.cities_in_secondary_radius.len()
    );

    Ok(area)
}

/// Assembles a [`ServiceAreaResult`] from an already-geocoded target
/// point. [`build_service_area`] delegates here after its provider
/// call; tests use it to exercise the full partition-and-aggregate path
/// without a network boundary.
#[must_use]
pub fn build_service_area_at(
    target: Coordinate,
    dataset: &CityDataset,
    request: &ServiceAreaRequest,
) -> ServiceAreaResult {
    let state_code = partition::resolve_state_code(dataset, &request.city, &request.state);

    let (primary, secondary) = partition::partition(
        dataset,
        target,
        &state_code,
        request.primary_radius_miles,
        request.secondary_radius_miles,
    );

    // Deliberately a second lookup: the resolved state code can differ
    // from the caller-supplied state when the dataset records the city
    // under another state, and the target's own data follows the
    // dataset's version.
    let target_city = dataset
        .find(&request.city, &state_code)
        .map(partition::city_estimate);

    ServiceAreaResult {
        city: request.city.clone(),
        state: state_code,
        population: target_city.as_ref().map(|c| c.population),
        single_family_units: target_city.as_ref().map(|c| c.single_family_units),
        multi_family_units: target_city.as_ref().map(|c| c.multi_family_units),
        commercial_units: target_city.as_ref().map(|c| c.commercial_units),
        total_housing_units: target_city.as_ref().map(|c| c.total_housing_units),
        primary_radius: request.primary_radius_miles,
        secondary_radius: request.secondary_radius_miles,
        cities_in_primary_radius: primary,
        cities_in_secondary_radius: secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> CityDataset {
        let value = serde_json::json!([
            { "city": "Springfield", "state_id": "IL", "lat": 39.78, "lng": -89.65, "population": 100_000 },
            { "city": "Chatham", "state_id": "IL", "lat": 39.673, "lng": -89.7057, "population": 14_000 },
            { "city": "Decatur", "state_id": "IL", "lat": 39.8403, "lng": -88.9548, "population": 69_000 }
        ]);
        CityDataset::from_value(&value).unwrap()
    }

    fn request() -> ServiceAreaRequest {
        ServiceAreaRequest {
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            primary_radius_miles: 10.0,
            secondary_radius_miles: 25.0,
        }
    }

    #[test]
    fn end_to_end_springfield_scenario() {
        let target = Coordinate {
            lat: 39.78,
            lng: -89.65,
        };
        let area = build_service_area_at(target, &dataset(), &request());

        assert_eq!(area.state, "IL");
        assert_eq!(area.population, Some(100_000));
        assert_eq!(area.single_family_units, Some(28_000));
        assert_eq!(area.multi_family_units, Some(12_000));
        assert_eq!(area.commercial_units, Some(2_000));
        assert_eq!(area.total_housing_units, Some(42_000));

        // Springfield itself at distance 0 and Chatham at ~8 mi are
        // primary; Decatur at ~37 mi is outside the secondary radius.
        let primary: Vec<_> = area
            .cities_in_primary_radius
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(primary, ["Springfield", "Chatham"]);
        assert!(area.cities_in_secondary_radius.is_empty());
    }

    #[test]
    fn absent_target_city_yields_null_aggregates() {
        let target = Coordinate {
            lat: 39.78,
            lng: -89.65,
        };
        let mut req = request();
        req.city = "Nowhere".to_string();
        let area = build_service_area_at(target, &dataset(), &req);

        assert_eq!(area.state, "IL");
        assert_eq!(area.population, None);
        assert_eq!(area.total_housing_units, None);
        // Rings still form around the geocoded point.
        assert_eq!(area.cities_in_primary_radius.len(), 2);
    }

    #[test]
    fn unknown_state_falls_back_verbatim() {
        let target = Coordinate { lat: 0.0, lng: 0.0 };
        let mut req = request();
        req.state = "ZZ".to_string();
        let area = build_service_area_at(target, &dataset(), &req);
        assert_eq!(area.state, "ZZ");
        assert!(area.cities_in_primary_radius.is_empty());
        assert!(area.cities_in_secondary_radius.is_empty());
    }
}
