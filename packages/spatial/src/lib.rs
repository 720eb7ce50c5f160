#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Great-circle distance and service-ring classification.
//!
//! Distances are computed with the haversine formula on a spherical
//! Earth of radius 3958.8 statute miles. Every downstream unit estimate
//! keys off these distances, so the radius constant and the inclusive
//! ring boundaries are load-bearing: do not change them without
//! re-deriving expected outputs.

/// Mean Earth radius in statute miles (not nautical, not km).
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Which service ring a city falls into relative to the target point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ring {
    /// Within the primary radius (inclusive).
    Primary,
    /// Between the primary (exclusive) and secondary (inclusive) radii.
    Secondary,
    /// Beyond the secondary radius.
    Excluded,
}

/// Haversine great-circle distance between two WGS84 points, in statute
/// miles. Inputs are decimal degrees.
#[must_use]
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Classifies a distance into a service ring.
///
/// Boundaries are inclusive: a city at exactly the primary radius is
/// primary, and one at exactly the secondary radius is secondary.
#[must_use]
pub fn classify(
    distance_miles: f64,
    primary_radius_miles: f64,
    secondary_radius_miles: f64,
) -> Ring {
    if distance_miles <= primary_radius_miles {
        Ring::Primary
    } else if distance_miles <= secondary_radius_miles {
        Ring::Secondary
    } else {
        Ring::Excluded
    }
}
