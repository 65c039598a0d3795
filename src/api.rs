// 🌐 REST API - axum router over the Directory handle
//
// Thin request/response mapping: parse, call Directory, wrap in ApiResponse.

use crate::directory::Directory;
use crate::entities::{AggregatedReview, Business, NewReview, Review};
use crate::error::{DirectoryError, ErrorKind};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// API Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// DirectoryError rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(DirectoryError);

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError(err)
    }
}

/// Unparseable query string → Validation
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(DirectoryError::validation("query", rejection.body_text()))
    }
}

/// Malformed or incomplete JSON body → Validation
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DirectoryError::validation("body", rejection.body_text()))
    }
}

pub(crate) fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Configuration => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::ExternalService => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiErrorBody {
                code: kind.code().to_string(),
                message: self.0.to_string(),
            }),
        };
        (status_for(kind), Json(body)).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<ApiResponse<T>>, ApiError>;

// ============================================================================
// REQUEST SHAPES
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub author: String,
    pub rating: u8,
    pub text: String,
    /// Defaults to today's local date
    #[serde(default)]
    pub date: Option<String>,
}

/// Path ids arrive as text so a non-numeric id is a validation error
fn parse_business_id(raw: &str) -> Result<u32, DirectoryError> {
    raw.parse::<u32>()
        .map_err(|_| DirectoryError::validation("business id", format!("'{raw}' is not a number")))
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/businesses - All businesses
async fn list_businesses(
    State(directory): State<Directory>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Vec<Business>> {
    let Query(params) = params?;
    Ok(Json(ApiResponse::ok(directory.list(params.open).await)))
}

/// GET /api/businesses/search?q= - Substring search
async fn search_businesses(
    State(directory): State<Directory>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Vec<Business>> {
    let Query(params) = params?;
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| DirectoryError::validation("q", "search query is required"))?;

    Ok(Json(ApiResponse::ok(
        directory.search(query, params.open).await,
    )))
}

/// GET /api/businesses/category/:category - Category filter
async fn businesses_by_category(
    State(directory): State<Directory>,
    Path(category): Path<String>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Vec<Business>> {
    let Query(params) = params?;
    Ok(Json(ApiResponse::ok(
        directory.by_category(&category, params.open).await,
    )))
}

/// GET /api/businesses/:id - One business
async fn get_business(
    State(directory): State<Directory>,
    Path(id): Path<String>,
) -> ApiResult<Business> {
    let id = parse_business_id(&id)?;
    Ok(Json(ApiResponse::ok(directory.get(id).await?)))
}

/// GET /api/businesses/:id/reviews - First-party + external reviews
async fn get_reviews(
    State(directory): State<Directory>,
    Path(id): Path<String>,
) -> ApiResult<Vec<AggregatedReview>> {
    let id = parse_business_id(&id)?;
    Ok(Json(ApiResponse::ok(directory.reviews(id).await?)))
}

/// POST /api/businesses/:id/reviews - Add a first-party review
async fn create_review(
    State(directory): State<Directory>,
    Path(id): Path<String>,
    request: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>), ApiError> {
    let business_id = parse_business_id(&id)?;
    let Json(request) = request?;
    let date = request
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive().to_string());

    let review = directory
        .add_review(NewReview {
            business_id,
            author: request.author,
            rating: request.rating,
            text: request.text,
            date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(review))))
}

/// POST /api/businesses/:id/sync - Refresh from the external service
async fn sync_business(
    State(directory): State<Directory>,
    Path(id): Path<String>,
) -> ApiResult<Business> {
    let id = parse_business_id(&id)?;
    Ok(Json(ApiResponse::ok(directory.sync(id).await?)))
}

/// GET /api/categories - Distinct categories
async fn list_categories(State(directory): State<Directory>) -> ApiResult<Vec<String>> {
    Ok(Json(ApiResponse::ok(directory.categories().await)))
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the `/api` routes (without outer layers)
pub fn routes(directory: Directory) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/businesses", get(list_businesses))
        .route("/businesses/search", get(search_businesses))
        .route("/businesses/category/:category", get(businesses_by_category))
        .route("/businesses/:id", get(get_business))
        .route("/businesses/:id/reviews", get(get_reviews).post(create_review))
        .route("/businesses/:id/sync", post(sync_business))
        .route("/categories", get(list_categories))
        .with_state(directory)
}

/// Full application router: `/api` nested, CORS open, requests traced
pub fn router(directory: Directory) -> Router {
    Router::new()
        .nest("/api", routes(directory))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// TESTS
// ============================================================================
