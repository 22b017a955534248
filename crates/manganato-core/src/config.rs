use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://manganato.com";
pub const DEFAULT_CHAPTER_URL: &str = "https://chapmanganato.to";

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("static regex is valid"));

/// Sort order of the `genre-all` listing, selected by a query-string suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreSort {
    /// Latest updates (no suffix).
    Latest,
    /// Most viewed.
    TopView,
    /// Newest titles.
    Newest,
}

impl GenreSort {
    pub fn query_suffix(self) -> &'static str {
        match self {
            GenreSort::Latest => "",
            GenreSort::TopView => "?type=topview",
            GenreSort::Newest => "?type=newest",
        }
    }
}

/// Base URLs of the scraped site.
///
/// Detail pages live on two hosts; `chapter_url` is tried first and
/// `base_url` second. Everything else is served from `base_url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_url: String,
    pub chapter_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chapter_url: DEFAULT_CHAPTER_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Build a config from explicit URLs, validating both.
    pub fn new(base_url: &str, chapter_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            base_url: validate_base("base URL", base_url)?,
            chapter_url: validate_base("chapter URL", chapter_url)?,
        })
    }

    /// Read configuration from environment variables.
    ///
    /// - `MANGANATO_BASE_URL` (optional, defaults to `https://manganato.com`)
    /// - `MANGANATO_CHAPTER_URL` (optional, defaults to `https://chapmanganato.to`)
    pub fn from_env() -> Result<Self, AppError> {
        let base_url =
            std::env::var("MANGANATO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let chapter_url = std::env::var("MANGANATO_CHAPTER_URL")
            .unwrap_or_else(|_| DEFAULT_CHAPTER_URL.to_string());
        Self::new(&base_url, &chapter_url)
    }

    pub fn home_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// Candidate detail URLs for `id`, in the order they must be tried.
    pub fn detail_urls(&self, id: &str) -> [String; 2] {
        [
            format!("{}/manga-{id}", self.chapter_url),
            format!("{}/manga-{id}", self.base_url),
        ]
    }

    pub fn search_url(&self, query: &str) -> String {
        format!("{}/search/story/{}", self.base_url, normalize_keywords(query))
    }

    pub fn genre_url(&self, page: i64, sort: GenreSort) -> String {
        format!(
            "{}/genre-all/{page}{}",
            self.base_url,
            sort.query_suffix()
        )
    }
}

/// Turn free text into the underscore-joined form the site's search path expects.
pub fn normalize_keywords(query: &str) -> String {
    NON_WORD
        .replace_all(&query.replace(' ', "_"), "")
        .into_owned()
}

fn validate_base(what: &str, raw: &str) -> Result<String, AppError> {
    let parsed = Url::parse(raw)
        .map_err(|e| AppError::ConfigError(format!("Invalid {what} '{raw}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::ConfigError(format!(
                "Invalid {what} '{raw}': scheme '{scheme}' is not allowed (only http/https)"
            )));
        }
    }

    if parsed.host_str().is_none() {
        return Err(AppError::ConfigError(format!(
            "Invalid {what} '{raw}': URL has no host"
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
