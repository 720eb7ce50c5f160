#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core domain types for service-area revenue estimation.
//!
//! These types flow between the dataset, the partitioner, the revenue
//! estimator, and the API server. Everything downstream of the City
//! Dataset is request-scoped and immutable after construction; the
//! presentation layer holds the results across wizard steps, so all of
//! it serializes to JSON with camelCase field names.

use serde::{Deserialize, Serialize};

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// A municipality row from the City Dataset.
///
/// The dataset ships as a static JSON document loaded once per process.
/// Records missing any of these fields are skipped at load time, so a
/// `CityRecord` is always complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// City name.
    pub city: String,
    /// Two-letter state abbreviation (e.g. "IL").
    pub state_id: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
    /// Population.
    pub population: u64,
}

/// Estimated housing-unit breakdown derived from a population count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingUnits {
    /// Estimated single-family units.
    pub single_family_units: u64,
    /// Estimated multi-family units.
    pub multi_family_units: u64,
    /// Estimated commercial units.
    pub commercial_units: u64,
    /// Sum of the three rounded components.
    pub total_housing_units: u64,
}

/// A city matched inside one of the service rings, with derived housing
/// estimates attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityEstimate {
    /// City name.
    pub name: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// Population.
    pub population: u64,
    /// Estimated single-family units.
    pub single_family_units: u64,
    /// Estimated multi-family units.
    pub multi_family_units: u64,
    /// Estimated commercial units.
    pub commercial_units: u64,
    /// Sum of the three rounded unit components.
    pub total_housing_units: u64,
    /// City center coordinates.
    pub coordinates: Coordinate,
}

/// The step-1 result: the target city's own aggregates plus every
/// same-state city classified into the primary or secondary ring.
///
/// Target-city fields are `None` when the target city is not present in
/// the dataset (the rings can still be populated around the geocoded
/// point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAreaResult {
    /// Target city name as supplied by the caller.
    pub city: String,
    /// Resolved two-letter state code.
    pub state: String,
    /// Target city population, if found in the dataset.
    pub population: Option<u64>,
    /// Target city single-family units.
    pub single_family_units: Option<u64>,
    /// Target city multi-family units.
    pub multi_family_units: Option<u64>,
    /// Target city commercial units.
    pub commercial_units: Option<u64>,
    /// Target city total housing units.
    pub total_housing_units: Option<u64>,
    /// Primary ring radius in statute miles.
    pub primary_radius: f64,
    /// Secondary ring radius in statute miles.
    pub secondary_radius: f64,
    /// Cities within the primary radius, in dataset order.
    pub cities_in_primary_radius: Vec<CityEstimate>,
    /// Cities between the primary and secondary radii, in dataset order.
    pub cities_in_secondary_radius: Vec<CityEstimate>,
}

/// An inclusive min/max cost range in whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    /// Low end of the range.
    pub min: u64,
    /// High end of the range.
    pub max: u64,
}

impl CostRange {
    /// Midpoint of the range, used as the average job price.
    #[must_use]
    pub fn average(self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }
}

/// A recurring service offered to housing units of each type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    /// Service name (e.g. "Filter Replacement").
    pub name: String,
    /// Recurrence descriptor: "N-M months", "Annually", or "N-M years".
    pub lifecycle: String,
    /// Cost range per single-family job.
    pub single_family_cost: CostRange,
    /// Cost range per multi-family job.
    pub multi_family_cost: CostRange,
    /// Cost range per commercial job.
    pub commercial_cost: CostRange,
}

/// A service definition with its projected annual jobs and revenue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEstimate {
    /// The service being estimated.
    #[serde(flatten)]
    pub definition: ServiceDefinition,
    /// Projected jobs per year across the pooled service area.
    pub estimated_jobs: u64,
    /// Projected annual revenue in whole dollars.
    pub estimated_revenue: u64,
}

/// An independently derived, coarser revenue estimate used to flag gross
/// disagreement with the itemized per-service total. Never reconciled
/// against it automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityCheck {
    /// Estimation method label.
    pub method: String,
    /// Human-readable description of the inputs.
    pub description: String,
    /// The alternative revenue estimate in whole dollars.
    pub estimated_revenue: u64,
    /// Confidence label.
    pub confidence: String,
}

/// The step-2 result: per-service estimates plus aggregate figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    /// Selected industry identifier.
    pub industry: String,
    /// Per-service job and revenue estimates.
    pub services: Vec<ServiceEstimate>,
    /// Sum of all per-service revenue estimates.
    pub total_revenue: u64,
    /// Climate adoption fraction expressed as a percentage.
    pub market_penetration: f64,
    /// Population-based cross-check estimate.
    pub sanity_check: SanityCheck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_range_average_is_midpoint() {
        let range = CostRange { min: 25, max: 50 };
        assert!((range.average() - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn city_estimate_serializes_camel_case() {
        let estimate = CityEstimate {
            name: "Springfield".to_string(),
            state: "IL".to_string(),
            population: 100_000,
            single_family_units: 28_000,
            multi_family_units: 12_000,
            commercial_units: 2_000,
            total_housing_units: 42_000,
            coordinates: Coordinate {
                lat: 39.78,
                lng: -89.65,
            },
        };
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["singleFamilyUnits"], 28_000);
        assert_eq!(json["totalHousingUnits"], 42_000);
        assert_eq!(json["coordinates"]["lat"], 39.78);
    }

    #[test]
    fn service_estimate_flattens_definition() {
        let estimate = ServiceEstimate {
            definition: ServiceDefinition {
                name: "Coil Cleaning".to_string(),
                lifecycle: "Annually".to_string(),
                single_family_cost: CostRange { min: 45, max: 350 },
                multi_family_cost: CostRange { min: 100, max: 500 },
                commercial_cost: CostRange { min: 200, max: 800 },
            },
            estimated_jobs: 10,
            estimated_revenue: 1_975,
        };
        let json = serde_json::to_value(&estimate).unwrap();
        assert_eq!(json["name"], "Coil Cleaning");
        assert_eq!(json["singleFamilyCost"]["min"], 45);
        assert_eq!(json["estimatedRevenue"], 1_975);
    }
}
