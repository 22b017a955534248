use scraper::Html;

use crate::config::{GenreSort, SiteConfig};
use crate::error::AppError;
use crate::extract;
use crate::models::{Manga, MangaDetails, PaginationResponse};
use crate::traits::Fetcher;

/// Runs one scrape per call: fetch a page, parse it, apply the extraction
/// rules for its kind.
///
/// Generic over the [`Fetcher`] so tests can serve canned HTML. The parsed
/// document is built and dropped between awaits, which keeps every future
/// `Send`.
#[derive(Clone)]
pub struct MangaService<F: Fetcher> {
    fetcher: F,
    site: SiteConfig,
}

impl<F: Fetcher> MangaService<F> {
    pub fn new(fetcher: F, site: SiteConfig) -> Self {
        Self { fetcher, site }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Titles on the home page.
    pub async fn home_listing(&self) -> Result<Vec<Manga>, AppError> {
        let html = self.fetch(&self.site.home_url()).await?;
        let mangas = extract::home_listing(&Html::parse_document(&html));
        tracing::debug!(count = mangas.len(), "Extracted home listing");
        Ok(mangas)
    }

    /// Details of one title, trying the chapter host first and the main host
    /// only if that fetch fails.
    pub async fn manga_by_id(&self, id: &str) -> Result<MangaDetails, AppError> {
        let [primary, secondary] = self.site.detail_urls(id);

        let html = match self.fetch(&primary).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(url = %primary, error = %e, "Primary detail fetch failed, trying fallback");
                self.fetch(&secondary).await?
            }
        };

        let details = extract::manga_details(&Html::parse_document(&html))?;
        tracing::debug!(
            chapters = details.chapters.len(),
            genres = details.genre.len(),
            "Extracted manga details"
        );
        Ok(details)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Manga>, AppError> {
        let html = self.fetch(&self.site.search_url(query)).await?;
        let mangas = extract::search_results(&Html::parse_document(&html));
        tracing::debug!(count = mangas.len(), query, "Extracted search results");
        Ok(mangas)
    }

    /// One page of the genre listing in the given sort order.
    pub async fn genre_listing(
        &self,
        page: i64,
        sort: GenreSort,
    ) -> Result<PaginationResponse, AppError> {
        let html = self.fetch(&self.site.genre_url(page, sort)).await?;
        let listing = extract::genre_listing(&Html::parse_document(&html), page);
        tracing::debug!(
            count = listing.mangas.len(),
            last_page = listing.last_page,
            ?sort,
            "Extracted genre listing"
        );
        Ok(listing)
    }

    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        tracing::info!("Fetching {}", url);
        let html = self.fetcher.fetch(url).await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());
        Ok(html)
    }
}
