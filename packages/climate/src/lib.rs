#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Climate zone table and HVAC adoption resolution.
//!
//! Maps a two-letter state code to a named climate zone and the fraction
//! of housing units assumed to already have HVAC. The adoption fraction
//! acts as a demand ceiling in the revenue model. The table is injected
//! at construction so tests can substitute synthetic zones; production
//! code uses [`ClimateTable::builtin`].

use serde::{Deserialize, Serialize};

/// Fallback adoption fraction for states outside every zone.
pub const DEFAULT_ADOPTION: f64 = 0.75;

/// Zone name reported for states outside every zone.
pub const UNKNOWN_ZONE: &str = "Unknown";

/// One named climate zone with its member states.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDef {
    /// Zone name (e.g. "Hot-Humid").
    pub name: String,
    /// Member state codes, uppercase two-letter.
    pub states: Vec<String>,
    /// Fraction of housing units with HVAC already adopted, in [0, 1].
    pub adoption: f64,
}

/// A state's resolved zone membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedZone {
    /// Zone name, or "Unknown".
    pub zone: String,
    /// Adoption fraction for the zone, or the 0.75 fallback.
    pub adoption: f64,
}

/// An immutable climate zone lookup table.
#[derive(Debug, Clone)]
pub struct ClimateTable {
    zones: Vec<ZoneDef>,
}

impl ClimateTable {
    /// Builds a table from the given zones.
    #[must_use]
    pub const fn new(zones: Vec<ZoneDef>) -> Self {
        Self { zones }
    }

    /// The production table. Adoption figures follow DOE Building America
    /// climate regions.
    #[must_use]
    pub fn builtin() -> Self {
        let zone = |name: &str, states: &[&str], adoption: f64| ZoneDef {
            name: name.to_string(),
            states: states.iter().map(ToString::to_string).collect(),
            adoption,
        };
        Self::new(vec![
            zone("Hot-Humid", &["FL", "TX", "LA"], 0.92),
            zone("Hot-Dry", &["AZ", "NV", "NM"], 0.88),
            zone("Mixed-Humid", &["GA", "NC", "SC"], 0.83),
            zone("Mixed-Dry", &["CA", "CO", "UT"], 0.78),
            zone("Cold", &["MN", "WI", "MI"], 0.88),
            zone("Very Cold", &["ND", "MT", "ME"], 0.83),
            zone("Marine", &["WA", "OR"], 0.68),
        ])
    }

    /// Resolves a state code to its zone. State codes are matched exactly
    /// as stored (uppercase two-letter); a state outside every zone gets
    /// the "Unknown" zone with the 0.75 fallback.
    #[must_use]
    pub fn resolve(&self, state_code: &str) -> ResolvedZone {
        for zone in &self.zones {
            if zone.states.iter().any(|s| s == state_code) {
                return ResolvedZone {
                    zone: zone.name.clone(),
                    adoption: zone.adoption,
                };
            }
        }
        ResolvedZone {
            zone: UNKNOWN_ZONE.to_string(),
            adoption: DEFAULT_ADOPTION,
        }
    }
}
