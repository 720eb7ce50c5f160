//! Per-service job and revenue projection.
//!
//! Pools housing units across both service rings (rings are not
//! weighted differently), applies the climate adoption fraction as a
//! demand ceiling, annualizes each service's recurrence, and prices
//! jobs at the midpoint of each cost range. Every fractional result in
//! the chain is floored, so all published figures are conservative
//! integers.

use market_map_climate::ResolvedZone;
use market_map_estimator_models::{
    RevenueSummary, SanityCheck, ServiceAreaResult, ServiceDefinition, ServiceEstimate,
};

use crate::lifecycle::jobs_per_year;

/// Share of the population modeled as paying customers in the
/// population-based sanity check.
const SANITY_CUSTOMER_SHARE: f64 = 0.15;

/// Average annual spend per sanity-check customer, in dollars.
const SANITY_ANNUAL_SPEND: f64 = 500.0;

/// Pooled unit totals across both rings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PooledUnits {
    single_family: u64,
    multi_family: u64,
    commercial: u64,
}

fn pool_units(area: &ServiceAreaResult) -> PooledUnits {
    let mut pooled = PooledUnits::default();
    for city in area
        .cities_in_primary_radius
        .iter()
        .chain(&area.cities_in_secondary_radius)
    {
        pooled.single_family += city.single_family_units;
        pooled.multi_family += city.multi_family_units;
        pooled.commercial += city.commercial_units;
    }
    pooled
}

/// Applies the adoption fraction, truncating toward zero.
fn adjust(units: u64, adoption: f64) -> u64 {
    (units as f64 * adoption).floor() as u64
}

/// Projects jobs and revenue for one service over the pooled units.
fn estimate_service(
    definition: &ServiceDefinition,
    pooled: PooledUnits,
    adoption: f64,
) -> ServiceEstimate {
    let single_family = adjust(pooled.single_family, adoption);
    let multi_family = adjust(pooled.multi_family, adoption);
    let commercial = adjust(pooled.commercial, adoption);

    let frequency = jobs_per_year(&definition.lifecycle);

    let estimated_jobs =
        ((single_family + multi_family + commercial) as f64 * frequency).floor() as u64;

    let estimated_revenue = ((single_family as f64 * definition.single_family_cost.average()
        + multi_family as f64 * definition.multi_family_cost.average()
        + commercial as f64 * definition.commercial_cost.average())
        * frequency)
        .floor() as u64;

    ServiceEstimate {
        definition: definition.clone(),
        estimated_jobs,
        estimated_revenue,
    }
}

/// The independent population-based cross-check: 15% of the adjusted
/// target-city population paying $500/year. Deliberately crude; it only
/// exists to flag gross disagreement with the itemized total and is
/// never reconciled against it.
fn sanity_check(area: &ServiceAreaResult, zone: &ResolvedZone) -> SanityCheck {
    let population = area.population.unwrap_or(0);
    let estimated_revenue =
        (population as f64 * zone.adoption * SANITY_CUSTOMER_SHARE * SANITY_ANNUAL_SPEND).floor()
            as u64;

    SanityCheck {
        method: "Population-based estimation".to_string(),
        description: format!(
            "Based on {population} population with {}% HVAC adoption rate",
            zone.adoption * 100.0
        ),
        estimated_revenue,
        confidence: "High".to_string(),
    }
}

/// Projects annual jobs and revenue for every service over a service
/// area, adjusted by the resolved climate zone.
#[must_use]
pub fn estimate_revenue(
    area: &ServiceAreaResult,
    definitions: &[ServiceDefinition],
    zone: &ResolvedZone,
    industry: &str,
) -> RevenueSummary {
    let pooled = pool_units(area);

    let services: Vec<ServiceEstimate> = definitions
        .iter()
        .map(|definition| estimate_service(definition, pooled, zone.adoption))
        .collect();

    let total_revenue = services.iter().map(|s| s.estimated_revenue).sum();

    RevenueSummary {
        industry: industry.to_string(),
        services,
        total_revenue,
        market_penetration: zone.adoption * 100.0,
        sanity_check: sanity_check(area, zone),
    }
}
