//! HTML-to-record extraction rules, one function per page kind.
//!
//! Every function takes an already parsed [`Html`] document and never
//! touches the network. Missing elements yield empty strings; the only
//! hard failure is a rating line too short to post-process.
//!
//! Text lookups follow two rules:
//! - *child text* is the concatenated text of **all** matching descendants,
//!   trimmed;
//! - *child attribute* is the attribute of the **first** matching
//!   descendant, trimmed.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::AppError;
use crate::models::{Chapter, Manga, MangaDetails, PaginationResponse};

const DESCRIPTION_PREFIX: &str = "Description :\n";

static ITEM_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Updated : (.+?)View : (.+)").expect("static regex is valid"));

static SELECTORS: LazyLock<Selectors> = LazyLock::new(Selectors::new);

struct Selectors {
    anchor: Selector,
    image: Selector,
    h1: Selector,
    h3: Selector,
    h3_anchor: Selector,

    // home
    home_item: Selector,
    item_author: Selector,
    item_rate: Selector,

    // search
    search_item: Selector,
    item_time: Selector,

    // genre listing
    genre_item: Selector,
    genre_author: Selector,
    genre_rate: Selector,
    genre_time: Selector,
    genre_view: Selector,
    pagination_item: Selector,
    last_page_link: Selector,

    // detail
    title_block: Selector,
    info_table: Selector,
    alternative_name: Selector,
    author: Selector,
    status: Selector,
    genre_links: Selector,
    stats_block: Selector,
    updated: Selector,
    view: Selector,
    rating: Selector,
    description_block: Selector,
    chapter_row: Selector,
    chapter_name: Selector,
    chapter_time: Selector,
}

impl Selectors {
    fn new() -> Self {
        Self {
            anchor: css("a"),
            image: css("img"),
            h1: css("h1"),
            h3: css("h3"),
            h3_anchor: css("h3 a"),

            home_item: css(".content-homepage-item"),
            item_author: css(".item-author"),
            item_rate: css(".item-rate"),

            search_item: css(".search-story-item"),
            item_time: css(".item-time"),

            genre_item: css(".content-genres-item"),
            genre_author: css(".genres-item-author"),
            genre_rate: css(".genres-item-rate"),
            genre_time: css(".genres-item-time"),
            genre_view: css(".genres-item-view"),
            pagination_item: css(".pagination li"),
            last_page_link: css(".page-blue.page-last"),

            title_block: css(".story-info-right"),
            info_table: css(".variations-tableInfo"),
            // Rows are positional: alternative name, author, status, genres.
            alternative_name: css("tr:nth-child(1) .table-value"),
            author: css("tr:nth-child(2) .table-value"),
            status: css("tr:nth-child(3) .table-value"),
            genre_links: css("tr:nth-child(4) .table-value a"),
            stats_block: css(".story-info-right-extent"),
            updated: css("p:nth-child(1) .stre-value"),
            view: css("p:nth-child(2) .stre-value"),
            rating: css("em#rate_row_cmd"),
            description_block: css(".panel-story-info-description"),
            chapter_row: css(".row-content-chapter li.a-h"),
            chapter_name: css("a.chapter-name"),
            chapter_time: css("span.chapter-time"),
        }
    }
}

fn css(selector: &'static str) -> Selector {
    Selector::parse(selector).expect("static selector is valid")
}

// ---------------------------------------------------------------------------
// Page kinds
// ---------------------------------------------------------------------------

/// Titles on the home page.
pub fn home_listing(doc: &Html) -> Vec<Manga> {
    let s = &*SELECTORS;
    doc.select(&s.home_item)
        .map(|item| Manga {
            id: id_from_link(&child_attr(&item, &s.anchor, "href")),
            name: child_text(&item, &s.h3),
            author: child_text(&item, &s.item_author),
            rating: child_text(&item, &s.item_rate),
            image: child_attr(&item, &s.image, "src"),
            ..Default::default()
        })
        .collect()
}

/// A title's detail page.
///
/// Fails only when the stats block is present but its rating line has
/// fewer than four tokens.
pub fn manga_details(doc: &Html) -> Result<MangaDetails, AppError> {
    let s = &*SELECTORS;
    let mut details = MangaDetails::default();

    for block in doc.select(&s.title_block) {
        details.name = child_text(&block, &s.h1);
    }

    for table in doc.select(&s.info_table) {
        details.alternative_name = child_text(&table, &s.alternative_name);
        details.author = child_text(&table, &s.author);
        details.status = child_text(&table, &s.status);
        details.genre.extend(
            table
                .select(&s.genre_links)
                .map(|link| link.text().collect::<String>()),
        );
    }

    for block in doc.select(&s.stats_block) {
        details.updated = child_text(&block, &s.updated);
        details.view = child_text(&block, &s.view);
        details.rating = manga_rating(&child_text(&block, &s.rating))?;
    }

    for block in doc.select(&s.description_block) {
        details.description = manga_description(&block.text().collect::<String>());
    }

    details.chapters = doc
        .select(&s.chapter_row)
        .map(|row| {
            let name = child_text(&row, &s.chapter_name);
            Chapter {
                title: name.clone(),
                number: name,
                url: child_attr(&row, &s.chapter_name, "href"),
                uploaded: child_text(&row, &s.chapter_time),
            }
        })
        .collect();

    Ok(details)
}

/// Titles on a search results page.
pub fn search_results(doc: &Html) -> Vec<Manga> {
    let s = &*SELECTORS;
    doc.select(&s.search_item)
        .map(|item| {
            let (updated, view) = parse_item_time(&child_text(&item, &s.item_time));
            Manga {
                id: id_from_link(&child_attr(&item, &s.anchor, "href")),
                name: child_text(&item, &s.h3_anchor),
                author: child_text(&item, &s.item_author),
                rating: child_text(&item, &s.item_rate),
                image: child_attr(&item, &s.image, "src"),
                updated,
                view,
            }
        })
        .collect()
}

/// One page of the `genre-all` listing, whatever its sort order.
pub fn genre_listing(doc: &Html, current_page: i64) -> PaginationResponse {
    let s = &*SELECTORS;

    let mangas = doc
        .select(&s.genre_item)
        .map(|item| Manga {
            id: id_from_link(&child_attr(&item, &s.anchor, "href")),
            name: child_text(&item, &s.h3),
            author: child_text(&item, &s.genre_author),
            rating: child_text(&item, &s.genre_rate),
            image: child_attr(&item, &s.image, "src"),
            updated: child_text(&item, &s.genre_time),
            view: child_text(&item, &s.genre_view),
        })
        .collect();

    PaginationResponse {
        current_page,
        last_page: last_page(doc),
        mangas,
    }
}

/// Highest numeric pagination label, overridden by the "last page" link
/// when its href ends in a page number.
fn last_page(doc: &Html) -> i64 {
    let s = &*SELECTORS;

    let mut last = doc
        .select(&s.pagination_item)
        .filter_map(|li| li.text().collect::<String>().parse::<i64>().ok())
        .fold(0, i64::max);

    for link in doc.select(&s.last_page_link) {
        if let Some(page) = link.value().attr("href").and_then(last_page_from_link) {
            last = page;
        }
    }

    last
}

// ---------------------------------------------------------------------------
// Field post-processing
// ---------------------------------------------------------------------------

/// Drop the leading `Rating : <score>` style tokens and keep the rest.
///
/// `"Rating : 4.5/5 9 votes"` becomes `"9 votes"`.
pub fn manga_rating(raw: &str) -> Result<String, AppError> {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.len() < 4 {
        return Err(AppError::ScrapeError(format!(
            "rating text has {} tokens, expected at least 4: {raw:?}",
            words.len()
        )));
    }
    Ok(words[3..].join(" "))
}

/// Trim surrounding newlines and the `Description :` heading.
pub fn manga_description(raw: &str) -> String {
    let trimmed = raw.trim_matches('\n');
    trimmed
        .strip_prefix(DESCRIPTION_PREFIX)
        .unwrap_or(trimmed)
        .to_string()
}

/// Split `"Updated : <when>View : <count>"` into its two values.
///
/// Returns two empty strings if the text does not have that shape.
pub fn parse_item_time(text: &str) -> (String, String) {
    match ITEM_TIME.captures(text) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (String::new(), String::new()),
    }
}

/// Page number in the trailing path segment of a pagination link.
pub fn last_page_from_link(href: &str) -> Option<i64> {
    let path = href.split('?').next().unwrap_or(href);
    path.rsplit('/').next()?.parse().ok()
}

/// Title id: the last `-`-delimited segment of its detail link.
pub fn id_from_link(link: &str) -> String {
    link.rsplit('-').next().unwrap_or_default().to_string()
}

fn child_text(element: &ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

fn child_attr(element: &ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
