use manganato_core::{Fetcher, MangaService};

/// Shared application state, available to all route handlers via `State<Arc<AppState<F>>>`.
///
/// Holds no mutable data; every request runs its own scrape.
pub struct AppState<F: Fetcher> {
    pub service: MangaService<F>,
}

impl<F: Fetcher> AppState<F> {
    pub fn new(service: MangaService<F>) -> Self {
        Self { service }
    }
}
