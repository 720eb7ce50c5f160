//! Built-in service catalogs.
//!
//! The industry selector exposes several trades, but only HVAC has a
//! priced catalog today; the remaining identifiers are accepted and
//! echoed back while reusing the HVAC service set. Cost ranges are
//! national averages in whole dollars.

use market_map_estimator_models::{CostRange, ServiceDefinition};

/// Industry identifiers accepted by the revenue endpoint.
pub const INDUSTRIES: &[&str] = &["hvac", "plumbing", "electrical", "landscaping", "cleaning"];

/// Whether an industry identifier is one the system accepts.
#[must_use]
pub fn is_known_industry(industry: &str) -> bool {
    INDUSTRIES.contains(&industry)
}

/// The HVAC service catalog: recurring maintenance services with their
/// lifecycles and per-unit-type cost ranges.
#[must_use]
pub fn hvac_services() -> Vec<ServiceDefinition> {
    let service = |name: &str,
                   lifecycle: &str,
                   single: (u64, u64),
                   multi: (u64, u64),
                   commercial: (u64, u64)| ServiceDefinition {
        name: name.to_string(),
        lifecycle: lifecycle.to_string(),
        single_family_cost: CostRange {
            min: single.0,
            max: single.1,
        },
        multi_family_cost: CostRange {
            min: multi.0,
            max: multi.1,
        },
        commercial_cost: CostRange {
            min: commercial.0,
            max: commercial.1,
        },
    };

    vec![
        service("Filter Replacement", "1-3 months", (25, 50), (30, 75), (50, 150)),
        service("Coil Cleaning", "Annually", (45, 350), (100, 500), (200, 800)),
        service("Drain Line Cleaning", "Annually", (75, 200), (150, 400), (300, 800)),
        service("System Tune-up", "Annually", (70, 200), (200, 500), (400, 1_000)),
        service("Refrigerant Recharge", "2-3 years", (100, 500), (300, 800), (500, 1_500)),
        service("Duct Cleaning", "3-5 years", (250, 1_000), (500, 2_000), (1_000, 5_000)),
        service(
            "Electrical Component Check",
            "Annually",
            (100, 250),
            (200, 600),
            (500, 1_200),
        ),
        service("Motor Lubrication", "Annually", (50, 150), (100, 300), (200, 600)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::jobs_per_year;

    #[test]
    fn catalog_has_eight_services() {
        assert_eq!(hvac_services().len(), 8);
    }

    #[test]
    fn every_lifecycle_parses_to_a_positive_frequency() {
        for service in hvac_services() {
            assert!(
                jobs_per_year(&service.lifecycle) > 0.0,
                "{} has unparseable lifecycle {}",
                service.name,
                service.lifecycle
            );
        }
    }

    #[test]
    fn cost_ranges_are_ordered() {
        for service in hvac_services() {
            for range in [
                service.single_family_cost,
                service.multi_family_cost,
                service.commercial_cost,
            ] {
                assert!(range.min <= range.max, "{}", service.name);
            }
        }
    }

    #[test]
    fn recognizes_known_industries() {
        assert!(is_known_industry("hvac"));
        assert!(is_known_industry("plumbing"));
        assert!(!is_known_industry("roofing"));
        assert!(!is_known_industry(""));
    }
}
