use serde::{Deserialize, Serialize};

/// Summary record for one title, as shown in listings and search results.
///
/// `updated` and `view` are only filled by the search and genre listings;
/// the home listing leaves them empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manga {
    /// Trailing `-`-delimited segment of the title's detail link.
    pub id: String,
    pub name: String,
    pub author: String,
    pub rating: String,
    pub image: String,
    pub updated: String,
    pub view: String,
}

/// Everything the detail page says about one title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaDetails {
    pub name: String,
    pub alternative_name: String,
    pub author: String,
    pub status: String,
    pub updated: String,
    pub view: String,
    pub rating: String,
    pub description: String,
    /// Genre tags in document order.
    pub genre: Vec<String>,
    /// Chapters in document order (newest first on the live site).
    pub chapters: Vec<Chapter>,
}

/// One row of a title's chapter list. All fields are display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub number: String,
    pub url: String,
    pub uploaded: String,
}

/// One page of a genre listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResponse {
    pub current_page: i64,
    #[serde(rename = "last_pages")]
    pub last_page: i64,
    pub mangas: Vec<Manga>,
}
