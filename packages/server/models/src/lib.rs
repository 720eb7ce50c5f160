#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the market map server.
//!
//! Request fields are optional so that missing fields surface as the
//! uniform `{success: false, message}` validation response instead of a
//! framework-level deserialization error.

use market_map_estimator_models::ServiceAreaResult;
use serde::{Deserialize, Serialize};

/// `POST /api/service-area` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAreaParams {
    /// Target city name.
    pub city: Option<String>,
    /// Two-letter state code.
    pub state: Option<String>,
    /// Primary ring radius in statute miles.
    pub primary_radius: Option<f64>,
    /// Secondary ring radius in statute miles.
    pub secondary_radius: Option<f64>,
}

/// `POST /api/revenue` request body. The service area is the step-1
/// payload held by the client; nothing is stored server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueParams {
    /// Industry identifier (e.g. "hvac").
    pub industry: Option<String>,
    /// The step-1 service area result.
    pub service_area: Option<ServiceAreaResult>,
}

/// Success envelope wrapping a response payload.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T> {
    /// Always `true`.
    pub success: bool,
    /// The response payload.
    pub data: T,
}

impl<T> ApiSuccess<T> {
    /// Wraps a payload in the success envelope.
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Uniform failure envelope for all request-level errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFailure {
    /// Always `false`.
    pub success: bool,
    /// Human-readable failure description.
    pub message: String,
}

impl ApiFailure {
    /// Builds a failure envelope with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Whether the server is up.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_tolerate_missing_fields() {
        let params: ServiceAreaParams = serde_json::from_str(r#"{"city": "Springfield"}"#).unwrap();
        assert_eq!(params.city.as_deref(), Some("Springfield"));
        assert!(params.state.is_none());
        assert!(params.primary_radius.is_none());
    }

    #[test]
    fn params_accept_camel_case_radii() {
        let params: ServiceAreaParams = serde_json::from_str(
            r#"{"city": "Springfield", "state": "IL", "primaryRadius": 10, "secondaryRadius": 25}"#,
        )
        .unwrap();
        assert!((params.primary_radius.unwrap() - 10.0).abs() < f64::EPSILON);
        assert!((params.secondary_radius.unwrap() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn failure_envelope_shape() {
        let json = serde_json::to_value(ApiFailure::new("Missing required fields")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Missing required fields");
    }

    #[test]
    fn success_envelope_shape() {
        let json = serde_json::to_value(ApiSuccess::new(vec![1, 2, 3])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], 1);
    }
}
