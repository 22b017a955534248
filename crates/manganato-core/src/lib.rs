pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod service;
pub mod traits;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use config::{GenreSort, SiteConfig};
pub use error::AppError;
pub use models::{Chapter, Manga, MangaDetails, PaginationResponse};
pub use service::MangaService;
pub use traits::Fetcher;
