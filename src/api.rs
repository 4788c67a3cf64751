// Turnberry Place - REST API with Axum
// Listing queries over the compiled-in tables plus the lead intake endpoint

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path as FsPath;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::availability::{ListingCount, ListingCountFeed};
use crate::comparison::{ComparisonSelection, SelectionState};
use crate::config::Config;
use crate::entities::{
    default_testimonials, FloorPlan, FloorPlanRegistry, Place, PlaceRegistry, Testimonial, TowerRegistry,
};
use crate::filter::{filter, filter_places, FilterCriteria, TypeFilter};
use crate::leads::{self, LeadError};
use crate::pagination::Paginator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    plans: Arc<FloorPlanRegistry>,
    places: Arc<PlaceRegistry>,
    towers: Arc<TowerRegistry>,
    testimonials: Arc<Vec<Testimonial>>,
    availability: Arc<Mutex<ListingCountFeed>>,
    sales_phone: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            plans: Arc::new(FloorPlanRegistry::with_defaults()),
            places: Arc::new(PlaceRegistry::with_defaults()),
            towers: Arc::new(TowerRegistry::with_defaults()),
            testimonials: Arc::new(default_testimonials()),
            availability: Arc::new(Mutex::new(ListingCountFeed::new(
                config.listing_fallback,
                config.listing_max_age,
            ))),
            sales_phone: Arc::from(config.sales_phone.as_str()),
        }
    }

    fn availability(&self) -> MutexGuard<'_, ListingCountFeed> {
        self.availability.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::err(message))).into_response()
}

// ============================================================================
// Query / response shapes
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FloorPlanQuery {
    #[serde(rename = "type")]
    plan_type: Option<String>,
    min_size: Option<u32>,
    max_size: Option<u32>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    tower_id: Option<u8>,
}

impl FloorPlanQuery {
    /// Overlay the query onto the default criteria
    fn into_criteria(self) -> anyhow::Result<FilterCriteria> {
        let defaults = FilterCriteria::default();
        let plan_type = match self.plan_type.as_deref() {
            Some(raw) => raw.parse::<TypeFilter>()?,
            None => defaults.plan_type,
        };

        let criteria = FilterCriteria {
            plan_type,
            min_size: self.min_size.unwrap_or(defaults.min_size),
            max_size: self.max_size.unwrap_or(defaults.max_size),
            min_price: self.min_price.unwrap_or(defaults.min_price),
            max_price: self.max_price.unwrap_or(defaults.max_price),
            tower_id: self.tower_id,
        };
        criteria.validate()?;
        Ok(criteria)
    }
}

#[derive(Serialize)]
struct FloorPlanListResponse {
    criteria: FilterCriteria,
    total: usize,
    plans: Vec<FloorPlan>,
}

#[derive(Debug, Deserialize)]
struct PlaceQuery {
    category: Option<String>,
    window: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaceListResponse {
    category: String,
    items: Vec<Place>,
    total: usize,
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct CompareQuery {
    ids: Option<String>,
}

#[derive(Serialize)]
struct CompareResponse {
    selection: SelectionState,
    plans: Vec<FloorPlan>,
}

#[derive(Debug, Deserialize)]
struct AvailabilityReport {
    count: usize,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/floor-plans - Filtered floor plans
async fn list_floor_plans(
    State(state): State<AppState>,
    query: Result<Query<FloorPlanQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            log::debug!("unreadable floor plan query: {}", rejection);
            return bad_request(rejection.body_text());
        }
    };

    let criteria = match query.into_criteria() {
        Ok(criteria) => criteria,
        Err(e) => {
            log::debug!("rejected floor plan query: {}", e);
            return bad_request(e.to_string());
        }
    };

    let plans: Vec<FloorPlan> = filter(state.plans.all(), &criteria)
        .into_iter()
        .cloned()
        .collect();

    let response = FloorPlanListResponse {
        criteria,
        total: plans.len(),
        plans,
    };
    (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
}

/// GET /api/floor-plans/:id - Single floor plan
async fn get_floor_plan(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.plans.find_by_id(&id) {
        Some(plan) => (StatusCode::OK, Json(ApiResponse::ok(plan.clone()))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::err(format!("Floor plan not found: {}", id))),
        )
            .into_response(),
    }
}

/// GET /api/compare?ids=plan-a,plan-b - Resolve a comparison selection
async fn compare_plans(State(state): State<AppState>, Query(query): Query<CompareQuery>) -> Response {
    let mut selection = ComparisonSelection::new();
    for id in query.ids.as_deref().unwrap_or("").split(',') {
        let id = id.trim();
        if !id.is_empty() && state.plans.find_by_id(id).is_some() {
            selection.add(id);
        }
    }

    let response = CompareResponse {
        selection: selection.state(),
        plans: selection.resolve(&state.plans).into_iter().cloned().collect(),
    };
    (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
}

/// GET /api/places?category=dining&window=6 - Places by category, paginated
async fn list_places(State(state): State<AppState>, Query(query): Query<PlaceQuery>) -> Response {
    let category = query
        .category
        .unwrap_or_else(|| crate::entities::ALL_CATEGORIES.to_string());
    let paginator = query.window.map(Paginator::with_window).unwrap_or_default();

    let filtered = filter_places(state.places.all(), &category);
    let response = PlaceListResponse {
        items: paginator.visible_slice(&filtered).iter().map(|&p| p.clone()).collect(),
        total: filtered.len(),
        has_more: paginator.has_more(filtered.len()),
        category,
    };
    (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
}

/// GET /api/towers - The four towers
async fn list_towers(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.towers.all().to_vec()))
}

/// GET /api/testimonials - Carousel content
async fn list_testimonials(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.testimonials.as_ref().clone()))
}

/// GET /api/availability - Available residence count (reported or fallback)
async fn get_availability(State(state): State<AppState>) -> impl IntoResponse {
    let count: ListingCount = state.availability().current(Instant::now());
    Json(ApiResponse::ok(count))
}

/// POST /api/availability - Listings widget callback
async fn report_availability(
    State(state): State<AppState>,
    Json(report): Json<AvailabilityReport>,
) -> impl IntoResponse {
    let now = Instant::now();
    let mut feed = state.availability();
    feed.report(report.count, now);
    Json(ApiResponse::ok(feed.current(now)))
}

/// POST /api/leads - Contact form intake
async fn submit_lead(State(state): State<AppState>, body: Result<Bytes, BytesRejection>) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            return unreadable_lead(rejection.status(), rejection.body_text(), &state.sales_phone)
        }
    };

    match leads::parse_request(&body).and_then(|request| leads::validate(&request)) {
        Ok(lead) => (StatusCode::OK, Json(leads::submit(&lead))).into_response(),
        Err(e) => {
            log::info!("lead rejected: {}", e);
            let message = match &e {
                LeadError::Validation(_) => "Please correct the highlighted fields.".to_string(),
                LeadError::Malformed(_) => e.to_string(),
            };
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": message,
                    "errors": e.field_errors(),
                })),
            )
                .into_response()
        }
    }
}

/// Client mistakes (oversized or broken bodies) keep their 4xx status.
/// Anything else is our failure and points the visitor at the sales line.
fn unreadable_lead(status: StatusCode, detail: String, sales_phone: &str) -> Response {
    if status.is_client_error() {
        log::info!("lead body rejected ({}): {}", status, detail);
        return (status, Json(json!({ "success": false, "message": detail }))).into_response();
    }

    log::error!("failed to read lead body ({}): {}", status, detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "message": leads::failure_message(sales_phone),
        })),
    )
        .into_response()
}

/// Any non-POST method on /api/leads
async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({
            "success": false,
            "message": "Method not allowed",
        })),
    )
        .into_response()
}

/// GET / - Serve the landing page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState, web_dir: &FsPath) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/floor-plans", get(list_floor_plans))
        .route("/floor-plans/:id", get(get_floor_plan))
        .route("/compare", get(compare_plans))
        .route("/places", get(list_places))
        .route("/towers", get(list_towers))
        .route("/testimonials", get(list_testimonials))
        .route("/availability", get(get_availability).post(report_availability))
        .route(
            "/leads",
            axum::routing::post(submit_lead).fallback(method_not_allowed),
        )
        .with_state(state);

    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(web_dir))
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Tests
// ============================================================================
