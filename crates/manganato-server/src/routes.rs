use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use manganato_core::{Fetcher, GenreSort};

use crate::dto::{
    HealthResponse, MangaDetailsResponse, MangaEntryResponse, MangaResponse, PageResponse,
    SearchQuery,
};
use crate::error::{ApiError, FETCH_DATA_FAILED, FETCH_DETAILS_FAILED, SEARCH_FAILED};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router<F: Fetcher + 'static>(state: Arc<AppState<F>>) -> Router {
    let api = Router::new()
        .route("/mangas", get(list_mangas::<F>))
        .route("/mangas/{id}", get(get_manga::<F>))
        .route("/search", get(search::<F>))
        .route("/mangas/latest/{page}", get(latest_mangas::<F>))
        .route("/mangas/hot/{page}", get(hot_mangas::<F>))
        .route("/mangas/newest/{page}", get(newest_mangas::<F>));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

/// Page numbers are signed integers; anything else is rejected before fetching.
fn parse_page(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_page(raw))
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/mangas",
    responses(
        (status = 200, description = "Titles on the home page", body = Vec<MangaResponse>),
        (status = 500, description = "Scrape failed", body = crate::dto::ErrorResponse),
    ),
    tag = "mangas"
)]
pub async fn list_mangas<F: Fetcher>(
    State(state): State<Arc<AppState<F>>>,
) -> Result<impl IntoResponse, ApiError> {
    let mangas = state
        .service
        .home_listing()
        .await
        .map_err(|e| ApiError::new(e, FETCH_DATA_FAILED))?;

    let response: Vec<MangaResponse> = mangas.into_iter().map(MangaResponse::from).collect();
    Ok(axum::Json(response))
}

#[utoipa::path(
    get,
    path = "/mangas/latest/{page}",
    params(
        ("page" = i64, Path, description = "Page number")
    ),
    responses(
        (status = 200, description = "One page of recently updated titles", body = PageResponse),
        (status = 400, description = "Page is not a number", body = crate::dto::ErrorResponse),
        (status = 500, description = "Scrape failed", body = crate::dto::ErrorResponse),
    ),
    tag = "mangas"
)]
pub async fn latest_mangas<F: Fetcher>(
    State(state): State<Arc<AppState<F>>>,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let page = parse_page(&page)?;
    let listing = state
        .service
        .genre_listing(page, GenreSort::Latest)
        .await
        .map_err(|e| ApiError::new(e, FETCH_DATA_FAILED))?;

    Ok(axum::Json(PageResponse::from(listing)))
}

#[utoipa::path(
    get,
    path = "/mangas/hot/{page}",
    params(
        ("page" = i64, Path, description = "Page number")
    ),
    responses(
        (status = 200, description = "Most viewed titles", body = Vec<MangaEntryResponse>),
        (status = 400, description = "Page is not a number", body = crate::dto::ErrorResponse),
        (status = 500, description = "Scrape failed", body = crate::dto::ErrorResponse),
    ),
    tag = "mangas"
)]
pub async fn hot_mangas<F: Fetcher>(
    State(state): State<Arc<AppState<F>>>,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    sorted_page(&state, &page, GenreSort::TopView).await
}

#[utoipa::path(
    get,
    path = "/mangas/newest/{page}",
    params(
        ("page" = i64, Path, description = "Page number")
    ),
    responses(
        (status = 200, description = "Newest titles", body = Vec<MangaEntryResponse>),
        (status = 400, description = "Page is not a number", body = crate::dto::ErrorResponse),
        (status = 500, description = "Scrape failed", body = crate::dto::ErrorResponse),
    ),
    tag = "mangas"
)]
pub async fn newest_mangas<F: Fetcher>(
    State(state): State<Arc<AppState<F>>>,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    sorted_page(&state, &page, GenreSort::Newest).await
}

/// Sorted genre pages answer with the bare list, without pagination info.
async fn sorted_page<F: Fetcher>(
    state: &AppState<F>,
    page: &str,
    sort: GenreSort,
) -> Result<axum::Json<Vec<MangaEntryResponse>>, ApiError> {
    let page = parse_page(page)?;
    let listing = state
        .service
        .genre_listing(page, sort)
        .await
        .map_err(|e| ApiError::new(e, FETCH_DATA_FAILED))?;

    Ok(axum::Json(
        listing
            .mangas
            .into_iter()
            .map(MangaEntryResponse::from)
            .collect(),
    ))
}

// ---------------------------------------------------------------------------
// Details & search
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/mangas/{id}",
    params(
        ("id" = String, Path, description = "Title id, e.g. `ax951880`")
    ),
    responses(
        (status = 200, description = "Title details", body = MangaDetailsResponse),
        (status = 500, description = "Scrape failed", body = crate::dto::ErrorResponse),
    ),
    tag = "mangas"
)]
pub async fn get_manga<F: Fetcher>(
    State(state): State<Arc<AppState<F>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .service
        .manga_by_id(&id)
        .await
        .map_err(|e| ApiError::new(e, FETCH_DETAILS_FAILED))?;

    Ok(axum::Json(MangaDetailsResponse::from(details)))
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = Vec<MangaEntryResponse>),
        (status = 500, description = "Scrape failed", body = crate::dto::ErrorResponse),
    ),
    tag = "mangas"
)]
pub async fn search<F: Fetcher>(
    State(state): State<Arc<AppState<F>>>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let keywords = query.query.unwrap_or_default();
    let mangas = state
        .service
        .search(&keywords)
        .await
        .map_err(|e| ApiError::new(e, SEARCH_FAILED))?;

    let response: Vec<MangaEntryResponse> =
        mangas.into_iter().map(MangaEntryResponse::from).collect();
    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse { status: "healthy" })
}
