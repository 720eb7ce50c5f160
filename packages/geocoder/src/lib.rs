#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Google Maps geocoding client for resolving target cities.
//!
//! Resolves a free-text "city, state" pair to WGS84 coordinates with a
//! single request per call. There is no retry and no fallback provider;
//! transient upstream errors surface directly to the caller, which must
//! not proceed to service-area partitioning without a coordinate.
//!
//! See <https://developers.google.com/maps/documentation/geocoding>

use thiserror::Error;

/// Default Google Maps Geocoding API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// A successfully geocoded city.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedCity {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// The canonical address returned by the provider.
    pub formatted_address: Option<String>,
}

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response had an unexpected shape.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },

    /// The provider reported a non-success status or returned no results.
    #[error("No geocoding result (status: {status})")]
    NoMatch {
        /// The provider's status string (e.g. "ZERO_RESULTS").
        status: String,
    },
}

/// Geocodes a city/state pair with the Google Maps Geocoding API.
///
/// The query is the concatenated `"{city}, {state}"` string; the first
/// returned result wins.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the response has
/// an unexpected shape, or the provider reports no usable result.
pub async fn geocode_city(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    city: &str,
    state: &str,
) -> Result<GeocodedCity, GeocodeError> {
    let address = format!("{city}, {state}");
    log::debug!("Geocoding \"{address}\"");

    let resp = client
        .get(base_url)
        .query(&[("address", address.as_str()), ("key", api_key)])
        .send()
        .await?;

    let body: serde_json::Value = resp.json().await?;
    parse_response(&body)
}

/// Parses the Google Maps Geocoding JSON response.
///
/// Expected shape:
/// `{"status": "OK", "results": [{"geometry": {"location": {"lat", "lng"}}}]}`.
/// Anything non-conforming is rejected rather than trusting field
/// presence.
fn parse_response(body: &serde_json::Value) -> Result<GeocodedCity, GeocodeError> {
    let status = body["status"].as_str().ok_or_else(|| GeocodeError::Parse {
        message: "Missing status field in geocoding response".to_string(),
    })?;

    if status != "OK" {
        return Err(GeocodeError::NoMatch {
            status: status.to_string(),
        });
    }

    let results = body["results"]
        .as_array()
        .ok_or_else(|| GeocodeError::Parse {
            message: "Missing results array in geocoding response".to_string(),
        })?;

    let Some(first) = results.first() else {
        return Err(GeocodeError::NoMatch {
            status: status.to_string(),
        });
    };

    let location = &first["geometry"]["location"];
    let lat = location["lat"].as_f64().ok_or_else(|| GeocodeError::Parse {
        message: "Missing lat in geocoding result".to_string(),
    })?;
    let lng = location["lng"].as_f64().ok_or_else(|| GeocodeError::Parse {
        message: "Missing lng in geocoding result".to_string(),
    })?;

    let formatted_address = first["formatted_address"].as_str().map(String::from);

    Ok(GeocodedCity {
        latitude: lat,
        longitude: lng,
        formatted_address,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_result() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Springfield, IL, USA",
                    "geometry": { "location": { "lat": 39.78, "lng": -89.65 } }
                },
                {
                    "formatted_address": "Springfield, MO, USA",
                    "geometry": { "location": { "lat": 37.2090, "lng": -93.2923 } }
                }
            ]
        });
        let result = parse_response(&body).unwrap();
        assert!((result.latitude - 39.78).abs() < 1e-9);
        assert!((result.longitude - -89.65).abs() < 1e-9);
        assert_eq!(
            result.formatted_address.as_deref(),
            Some("Springfield, IL, USA")
        );
    }

    #[test]
    fn zero_results_is_no_match() {
        let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });
        match parse_response(&body) {
            Err(GeocodeError::NoMatch { status }) => assert_eq!(status, "ZERO_RESULTS"),
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn ok_status_with_empty_results_is_no_match() {
        let body = serde_json::json!({ "status": "OK", "results": [] });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::NoMatch { .. })
        ));
    }

    #[test]
    fn missing_location_is_a_parse_error() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [{ "geometry": {} }]
        });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }

    #[test]
    fn missing_status_is_a_parse_error() {
        let body = serde_json::json!({ "results": [] });
        assert!(matches!(
            parse_response(&body),
            Err(GeocodeError::Parse { .. })
        ));
    }
}
