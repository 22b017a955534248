use axum::http::StatusCode;

use manganato_core::AppError;
use manganato_core::testutil::MockFetcher;

use crate::common::{DETAIL_PAGE, GENRE_PAGE, HOME_PAGE, get_json, setup_test_app};

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app(MockFetcher::default());

    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

// ---------------------------------------------------------------------------
// Home listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_mangas_returns_summaries() {
    let fetcher = MockFetcher::new(HOME_PAGE);
    let app = setup_test_app(fetcher.clone());

    let (status, json) = get_json(app, "/mangas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "ax951880",
            "name": "Solo Leveling",
            "author": "Chugong",
            "rating": "4.8",
            "image": "https://cdn.example/sl.jpg",
        }])
    );
    assert_eq!(fetcher.requested(), vec!["https://manganato.com/"]);
}

#[tokio::test]
async fn list_mangas_empty_page_is_empty_array() {
    let app = setup_test_app(MockFetcher::new("<html><body></body></html>"));

    let (status, json) = get_json(app, "/mangas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn list_mangas_fetch_failure_returns_500() {
    let app = setup_test_app(MockFetcher::with_error(AppError::NetworkError(
        "connection refused".into(),
    )));

    let (status, json) = get_json(app, "/mangas").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "scrape_error");
    assert_eq!(json["message"], "Failed to fetch manga data");
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_manga_returns_details() {
    let app = setup_test_app(MockFetcher::new(DETAIL_PAGE));

    let (status, json) = get_json(app, "/mangas/ax951880").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Solo Leveling");
    assert_eq!(json["alternative_name"], "Only I Level Up");
    assert_eq!(json["author"], "Chugong");
    assert_eq!(json["status"], "Completed");
    assert_eq!(json["genre"], serde_json::json!(["Action", "Fantasy"]));
    assert_eq!(json["view"], "150.2M");
    assert_eq!(json["rating"], "4.8 / 5 - 51,234 votes");
    assert_eq!(json["description"], "");
    assert_eq!(json["chapters"][0]["number"], "Chapter 200");
    assert_eq!(json["chapters"][0]["uploaded"], "Dec 29,23");
}

#[tokio::test]
async fn get_manga_falls_back_to_second_host() {
    let fetcher = MockFetcher::with_responses(vec![
        Err(AppError::HttpError("HTTP 404".into())),
        Ok(DETAIL_PAGE.to_string()),
    ]);
    let app = setup_test_app(fetcher.clone());

    let (status, json) = get_json(app, "/mangas/ax951880").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Solo Leveling");
    assert_eq!(
        fetcher.requested(),
        vec![
            "https://chapmanganato.to/manga-ax951880",
            "https://manganato.com/manga-ax951880",
        ]
    );
}

#[tokio::test]
async fn get_manga_both_hosts_failing_returns_500_without_cause() {
    let fetcher = MockFetcher::with_responses(vec![
        Err(AppError::HttpError("HTTP 404 for secret-host".into())),
        Err(AppError::HttpError("HTTP 404 for secret-host".into())),
    ]);
    let app = setup_test_app(fetcher);

    let (status, json) = get_json(app, "/mangas/ax951880").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to fetch manga details");
    assert!(!json.to_string().contains("secret-host"));
}

#[tokio::test]
async fn get_manga_short_rating_returns_500() {
    let app = setup_test_app(MockFetcher::new(
        r#"<div class="story-info-right-extent"><em id="rate_row_cmd">4.8</em></div>"#,
    ));

    let (status, json) = get_json(app, "/mangas/ax951880").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "scrape_error");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_normalizes_query_into_path() {
    let fetcher = MockFetcher::new(
        r#"<div class="search-story-item">
             <a href="https://chapmanganato.to/manga-dr980474"><img src="https://cdn.example/op.jpg"></a>
             <h3><a href="https://chapmanganato.to/manga-dr980474">One Piece</a></h3>
             <span class="item-time">Updated : Jan 1View : 100</span>
           </div>"#,
    );
    let app = setup_test_app(fetcher.clone());

    let (status, json) = get_json(app, "/search?query=one%20piece").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["id"], "dr980474");
    assert_eq!(json[0]["updated"], "Jan 1");
    assert_eq!(json[0]["view"], "100");
    assert_eq!(
        fetcher.requested(),
        vec!["https://manganato.com/search/story/one_piece"]
    );
}

#[tokio::test]
async fn search_without_query_uses_empty_keywords() {
    let fetcher = MockFetcher::default();
    let app = setup_test_app(fetcher.clone());

    let (status, json) = get_json(app, "/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
    assert_eq!(
        fetcher.requested(),
        vec!["https://manganato.com/search/story/"]
    );
}

#[tokio::test]
async fn search_failure_returns_500() {
    let app = setup_test_app(MockFetcher::with_error(AppError::Timeout(30)));

    let (status, json) = get_json(app, "/search?query=x").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to perform manga search");
}

// ---------------------------------------------------------------------------
// Genre pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn latest_returns_pagination() {
    let fetcher = MockFetcher::new(GENRE_PAGE);
    let app = setup_test_app(fetcher.clone());

    let (status, json) = get_json(app, "/mangas/latest/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["last_pages"], 1682);
    assert_eq!(json["mangas"][0]["name"], "One Piece");
    assert_eq!(json["mangas"][0]["author"], "Oda Eiichiro");
    assert_eq!(json["mangas"][0]["view"], "312.4M");
    assert_eq!(json["mangas"][0]["updated"], "Jan 05,24");
    assert_eq!(
        fetcher.requested(),
        vec!["https://manganato.com/genre-all/2"]
    );
}

#[tokio::test]
async fn hot_returns_bare_list() {
    let fetcher = MockFetcher::new(GENRE_PAGE);
    let app = setup_test_app(fetcher.clone());

    let (status, json) = get_json(app, "/mangas/hot/2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.is_array());
    assert_eq!(json[0]["id"], "dr980474");
    assert_eq!(json[0]["rating"], "4.9");
    assert_eq!(
        fetcher.requested(),
        vec!["https://manganato.com/genre-all/2?type=topview"]
    );
}

#[tokio::test]
async fn newest_hits_newest_sort() {
    let fetcher = MockFetcher::new(GENRE_PAGE);
    let app = setup_test_app(fetcher.clone());

    let (status, json) = get_json(app, "/mangas/newest/5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(
        fetcher.requested(),
        vec!["https://manganato.com/genre-all/5?type=newest"]
    );
}

#[tokio::test]
async fn non_numeric_page_returns_400_without_fetching() {
    for uri in ["/mangas/latest/abc", "/mangas/hot/2x", "/mangas/newest/1.5"] {
        let fetcher = MockFetcher::new(GENRE_PAGE);
        let app = setup_test_app(fetcher.clone());

        let (status, json) = get_json(app, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["message"], "Invalid page number");
        assert!(fetcher.requested().is_empty(), "{uri} fetched");
    }
}

#[tokio::test]
async fn genre_fetch_failure_returns_500() {
    let app = setup_test_app(MockFetcher::with_error(AppError::HttpError(
        "HTTP 502".into(),
    )));

    let (status, json) = get_json(app, "/mangas/hot/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "Failed to fetch manga data");
}
