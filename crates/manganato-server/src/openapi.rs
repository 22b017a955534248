use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Manganato API",
        version = "0.1.0",
        description = "Scraped manganato listings, title details, and search as JSON."
    ),
    paths(
        crate::routes::list_mangas,
        crate::routes::get_manga,
        crate::routes::search,
        crate::routes::latest_mangas,
        crate::routes::hot_mangas,
        crate::routes::newest_mangas,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::MangaResponse,
        crate::dto::MangaEntryResponse,
        crate::dto::PageResponse,
        crate::dto::MangaDetailsResponse,
        crate::dto::ChapterResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "mangas", description = "Listings, details, and search"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
