#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Municipal city dataset loading and lookups.
//!
//! The dataset is a static JSON document (an array of objects with
//! `city`, `state_id`, `lat`, `lng`, `population`) shipped with the
//! system and loaded once at startup. It is immutable after load and
//! read concurrently by all requests without locking.
//!
//! The source data is scraped, so numeric fields sometimes arrive as
//! strings ("39.78" instead of 39.78). Records missing any required
//! field are skipped rather than failing the whole load.

use std::path::Path;

use market_map_estimator_models::CityRecord;
use thiserror::Error;

/// Errors from loading the city dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset JSON has the wrong overall shape.
    #[error("Shape error: {message}")]
    Shape {
        /// Description of what was expected.
        message: String,
    },
}

/// The in-memory city dataset: every usable municipality record, in
/// file order.
#[derive(Debug, Clone)]
pub struct CityDataset {
    records: Vec<CityRecord>,
}

impl CityDataset {
    /// Loads the dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read, is not valid
    /// JSON, or is not a JSON array.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let dataset = Self::from_value(&value)?;
        log::info!(
            "Loaded {} city records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Builds the dataset from an already-parsed JSON value.
    ///
    /// Records missing a usable `city`, `state_id`, `lat`, `lng`, or
    /// `population` are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Shape`] if the value is not an array.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, DatasetError> {
        let rows = value.as_array().ok_or_else(|| DatasetError::Shape {
            message: "city dataset root is not an array".to_string(),
        })?;

        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0_usize;

        for row in rows {
            match parse_record(row) {
                Some(record) => records.push(record),
                None => {
                    skipped += 1;
                    log::debug!("Skipping incomplete city record: {row}");
                }
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} incomplete city records");
        }

        Ok(Self { records })
    }

    /// All records, in dataset (file) order.
    #[must_use]
    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    /// Number of usable records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no usable records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by case-insensitive city name + state code match.
    /// Returns the first match in dataset order.
    #[must_use]
    pub fn find(&self, city: &str, state: &str) -> Option<&CityRecord> {
        self.records.iter().find(|record| {
            record.city.eq_ignore_ascii_case(city) && record.state_id.eq_ignore_ascii_case(state)
        })
    }
}

/// Parses one dataset row, tolerating numeric fields encoded as strings.
/// Returns `None` if any required field is missing or unusable.
fn parse_record(row: &serde_json::Value) -> Option<CityRecord> {
    let city = non_empty_str(&row["city"])?;
    let state_id = non_empty_str(&row["state_id"])?;
    let lat = lenient_f64(&row["lat"])?;
    let lng = lenient_f64(&row["lng"])?;
    let population = lenient_u64(&row["population"])?;

    Some(CityRecord {
        city: city.to_string(),
        state_id: state_id.to_string(),
        lat,
        lng,
        population,
    })
}

fn non_empty_str(value: &serde_json::Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Accepts a JSON number or a numeric string.
fn lenient_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts a JSON number or a numeric string; fractional populations are
/// truncated.
fn lenient_u64(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u64))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_records_with_string_numerics() {
        let value = serde_json::json!([
            {
                "city": "Springfield",
                "state_id": "IL",
                "lat": "39.78",
                "lng": "-89.65",
                "population": "100000"
            },
            {
                "city": "Chicago",
                "state_id": "IL",
                "lat": 41.8781,
                "lng": -87.6298,
                "population": 2_746_388
            }
        ]);
        let dataset = CityDataset::from_value(&value).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!((dataset.records()[0].lat - 39.78).abs() < f64::EPSILON);
        assert_eq!(dataset.records()[0].population, 100_000);
    }

    #[test]
    fn skips_incomplete_records() {
        let value = serde_json::json!([
            { "city": "NoCoords", "state_id": "IL", "population": 500 },
            { "city": "", "state_id": "IL", "lat": 1.0, "lng": 2.0, "population": 500 },
            { "city": "NoPop", "state_id": "IL", "lat": 1.0, "lng": 2.0 },
            { "city": "Good", "state_id": "IL", "lat": 1.0, "lng": 2.0, "population": 500 }
        ]);
        let dataset = CityDataset::from_value(&value).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].city, "Good");
    }

    #[test]
    fn preserves_file_order() {
        let value = serde_json::json!([
            { "city": "B", "state_id": "IL", "lat": 1.0, "lng": 2.0, "population": 10 },
            { "city": "A", "state_id": "IL", "lat": 1.0, "lng": 2.0, "population": 20 }
        ]);
        let dataset = CityDataset::from_value(&value).unwrap();
        assert_eq!(dataset.records()[0].city, "B");
        assert_eq!(dataset.records()[1].city, "A");
    }

    #[test]
    fn find_is_case_insensitive() {
        let value = serde_json::json!([
            { "city": "Springfield", "state_id": "IL", "lat": 39.78, "lng": -89.65, "population": 100_000 }
        ]);
        let dataset = CityDataset::from_value(&value).unwrap();
        assert!(dataset.find("springfield", "il").is_some());
        assert!(dataset.find("SPRINGFIELD", "IL").is_some());
        assert!(dataset.find("Springfield", "MO").is_none());
    }

    #[test]
    fn non_array_root_is_a_shape_error() {
        let value = serde_json::json!({ "cities": [] });
        assert!(matches!(
            CityDataset::from_value(&value),
            Err(DatasetError::Shape { .. })
        ));
    }
}
