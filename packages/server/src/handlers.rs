//! HTTP handler functions for the market map API.
//!
//! All request-level failures are converted to the uniform
//! `{success: false, message}` body; the presentation layer decides how
//! to display them. Validation happens before any outbound call, so a
//! malformed request never reaches the geocoding provider.

use actix_web::{HttpResponse, web};
use market_map_estimator::{EstimateError, ServiceAreaRequest};
use market_map_server_models::{
    ApiFailure, ApiHealth, ApiSuccess, RevenueParams, ServiceAreaParams,
};

use crate::{API_KEY_ENV, AppState};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/service-area`
///
/// Step 1: validate, geocode the target city, and partition the city
/// dataset into primary/secondary service rings with derived housing
/// estimates.
pub async fn service_area(
    state: web::Data<AppState>,
    params: web::Json<ServiceAreaParams>,
) -> HttpResponse {
    let request = match validate_service_area(&params) {
        Ok(request) => request,
        Err(message) => {
            return HttpResponse::BadRequest().json(ApiFailure::new(message));
        }
    };

    let Ok(api_key) = std::env::var(API_KEY_ENV) else {
        log::error!("{API_KEY_ENV} is not set");
        return HttpResponse::InternalServerError().json(ApiFailure::new("API keys not configured"));
    };
    if api_key.is_empty() {
        log::error!("{API_KEY_ENV} is empty");
        return HttpResponse::InternalServerError().json(ApiFailure::new("API keys not configured"));
    }

    match market_map_estimator::build_service_area(
        &state.client,
        &state.geocoder_base_url,
        &api_key,
        &state.dataset,
        &request,
    )
    .await
    {
        Ok(area) => HttpResponse::Ok().json(ApiSuccess::new(area)),
        Err(e @ EstimateError::Geocode(_)) => {
            log::error!("Failed to build service area: {e}");
            HttpResponse::BadGateway().json(ApiFailure::new(format!("{e}")))
        }
    }
}

/// `POST /api/revenue`
///
/// Step 2: resolve the climate zone for the service area's state and
/// project annual jobs and revenue per service. Stateless — the client
/// supplies the step-1 result back.
pub async fn revenue(state: web::Data<AppState>, params: web::Json<RevenueParams>) -> HttpResponse {
    let Some(area) = params.service_area.as_ref() else {
        return HttpResponse::BadRequest().json(ApiFailure::new("Missing required fields"));
    };
    let Some(industry) = params.industry.as_deref().filter(|i| !i.is_empty()) else {
        return HttpResponse::BadRequest().json(ApiFailure::new("Missing required fields"));
    };
    if !market_map_estimator::is_known_industry(industry) {
        return HttpResponse::BadRequest()
            .json(ApiFailure::new(format!("Unknown industry: {industry}")));
    }

    let zone = state.climate.resolve(&area.state);
    // Only the HVAC catalog is priced today; other industries reuse it.
    let services = market_map_estimator::hvac_services();
    let summary = market_map_estimator::estimate_revenue(area, &services, &zone, industry);

    HttpResponse::Ok().json(ApiSuccess::new(summary))
}

/// Validates the step-1 request: every field present, city/state
/// non-empty, radii positive and finite. The state code is uppercased
/// so downstream fallbacks see the canonical two-letter form.
fn validate_service_area(params: &ServiceAreaParams) -> Result<ServiceAreaRequest, &'static str> {
    let city = params
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or("Missing required fields")?;
    let state = params
        .state
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or("Missing required fields")?;
    let primary = params
        .primary_radius
        .filter(|r| r.is_finite() && *r > 0.0)
        .ok_or("Missing required fields")?;
    let secondary = params
        .secondary_radius
        .filter(|r| r.is_finite() && *r > 0.0)
        .ok_or("Missing required fields")?;

    Ok(ServiceAreaRequest {
        city: city.to_string(),
        state: state.to_uppercase(),
        primary_radius_miles: primary,
        secondary_radius_miles: secondary,
    })
}
