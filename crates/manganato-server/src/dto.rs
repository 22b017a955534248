use serde::{Deserialize, Serialize};

use manganato_core::models::{Chapter, Manga, MangaDetails, PaginationResponse};

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// Home-page entry: a title without update/view stats.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MangaResponse {
    pub id: String,
    pub name: String,
    pub author: String,
    pub rating: String,
    pub image: String,
}

impl From<Manga> for MangaResponse {
    fn from(m: Manga) -> Self {
        Self {
            id: m.id,
            name: m.name,
            author: m.author,
            rating: m.rating,
            image: m.image,
        }
    }
}

/// Search and genre-listing entry.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MangaEntryResponse {
    pub id: String,
    pub name: String,
    pub author: String,
    pub rating: String,
    pub image: String,
    pub updated: String,
    pub view: String,
}

impl From<Manga> for MangaEntryResponse {
    fn from(m: Manga) -> Self {
        Self {
            id: m.id,
            name: m.name,
            author: m.author,
            rating: m.rating,
            image: m.image,
            updated: m.updated,
            view: m.view,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PageResponse {
    pub current_page: i64,
    pub last_pages: i64,
    pub mangas: Vec<MangaEntryResponse>,
}

impl From<PaginationResponse> for PageResponse {
    fn from(p: PaginationResponse) -> Self {
        Self {
            current_page: p.current_page,
            last_pages: p.last_page,
            mangas: p.mangas.into_iter().map(MangaEntryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Free-text title search
    pub query: Option<String>,
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MangaDetailsResponse {
    pub name: String,
    pub alternative_name: String,
    pub author: String,
    pub status: String,
    pub updated: String,
    pub view: String,
    pub rating: String,
    pub description: String,
    pub genre: Vec<String>,
    pub chapters: Vec<ChapterResponse>,
}

impl From<MangaDetails> for MangaDetailsResponse {
    fn from(d: MangaDetails) -> Self {
        Self {
            name: d.name,
            alternative_name: d.alternative_name,
            author: d.author,
            status: d.status,
            updated: d.updated,
            view: d.view,
            rating: d.rating,
            description: d.description,
            genre: d.genre,
            chapters: d.chapters.into_iter().map(ChapterResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChapterResponse {
    pub title: String,
    pub number: String,
    pub url: String,
    pub uploaded: String,
}

impl From<Chapter> for ChapterResponse {
    fn from(c: Chapter) -> Self {
        Self {
            title: c.title,
            number: c.number,
            url: c.url,
            uploaded: c.uploaded,
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
