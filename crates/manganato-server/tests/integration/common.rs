use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use manganato_core::testutil::MockFetcher;
use manganato_core::{MangaService, SiteConfig};
use manganato_server::routes;
use manganato_server::state::AppState;

pub const HOME_PAGE: &str = r#"
    <div class="content-homepage-item">
      <a href="https://chapmanganato.to/manga-ax951880"><img src="https://cdn.example/sl.jpg"></a>
      <h3><a href="https://chapmanganato.to/manga-ax951880">Solo Leveling</a></h3>
      <span class="item-author">Chugong</span>
      <em class="item-rate">4.8</em>
    </div>
"#;

pub const DETAIL_PAGE: &str = r#"
    <div class="story-info-right">
      <h1>Solo Leveling</h1>
      <table class="variations-tableInfo"><tbody>
        <tr><td class="table-value">Only I Level Up</td></tr>
        <tr><td class="table-value"><a>Chugong</a></td></tr>
        <tr><td class="table-value">Completed</td></tr>
        <tr><td class="table-value"><a>Action</a> - <a>Fantasy</a></td></tr>
      </tbody></table>
      <div class="story-info-right-extent">
        <p><span class="stre-value">Jan 02,2024</span></p>
        <p><span class="stre-value">150.2M</span></p>
        <em id="rate_row_cmd">MangaNato.com rate : 4.8 / 5 - 51,234 votes</em>
      </div>
    </div>
    <ul class="row-content-chapter">
      <li class="a-h"><a class="chapter-name" href="https://chapmanganato.to/manga-ax951880/chapter-200">Chapter 200</a><span class="chapter-time">Dec 29,23</span></li>
    </ul>
"#;

pub const GENRE_PAGE: &str = r#"
    <div class="content-genres-item">
      <a href="https://chapmanganato.to/manga-dr980474"><img src="https://cdn.example/op.jpg"></a>
      <h3><a href="https://chapmanganato.to/manga-dr980474">One Piece</a></h3>
      <span class="genres-item-view">312.4M</span>
      <span class="genres-item-time">Jan 05,24</span>
      <span class="genres-item-author">Oda Eiichiro</span>
      <em class="genres-item-rate">4.9</em>
    </div>
    <a class="page-blue page-last" href="https://manganato.com/genre-all/1682">LAST(1682)</a>
"#;

/// Build the app router over a mock fetcher pointed at the default site.
pub fn setup_test_app(fetcher: MockFetcher) -> Router {
    let service = MangaService::new(fetcher, SiteConfig::default());
    routes::router(Arc::new(AppState::new(service)))
}

/// Send a GET and return the status and the parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
