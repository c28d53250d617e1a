use std::num::NonZeroUsize;
use std::time::Duration;

use pager_core::{ListConfig, ListStatus, PageRequest};
use pager_engine::{HttpPageSource, HttpSourceSettings, ListController, PageSource};
use serde::Deserialize;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Post {
    id: u32,
    title: String,
}

fn post(id: u32) -> serde_json::Value {
    serde_json::json!({ "id": id, "title": format!("post {id}") })
}

fn page(offset: usize, limit: usize) -> PageRequest {
    PageRequest {
        offset,
        limit: NonZeroUsize::new(limit).unwrap(),
    }
}

#[tokio::test]
async fn fetches_json_array_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![post(1), post(2)]))
        .mount(&server)
        .await;

    let source: HttpPageSource<Post> =
        HttpPageSource::new(&format!("{}/posts", server.uri()), HttpSourceSettings::default())
            .unwrap();
    let items = source.fetch_page(page(0, 2)).await.expect("fetch ok");

    assert_eq!(
        items,
        vec![
            Post {
                id: 1,
                title: "post 1".to_string()
            },
            Post {
                id: 2,
                title: "post 2".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn reads_items_from_configured_field_and_param_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .and(query_param("skip", "20"))
        .and(query_param("take", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": [post(21)], "total": 21 })),
        )
        .mount(&server)
        .await;

    let settings = HttpSourceSettings {
        offset_param: "skip".to_string(),
        limit_param: "take".to_string(),
        items_field: Some("data".to_string()),
        ..HttpSourceSettings::default()
    };
    let source: HttpPageSource<Post> =
        HttpPageSource::new(&format!("{}/feed", server.uri()), settings).unwrap();
    let items = source.fetch_page(page(20, 5)).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 21);
}

#[tokio::test]
async fn http_status_becomes_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source: HttpPageSource<Post> = HttpPageSource::new(
        &format!("{}/missing", server.uri()),
        HttpSourceSettings::default(),
    )
    .unwrap();
    let err = source.fetch_page(page(0, 10)).await.unwrap_err();

    assert!(err.message().starts_with("http status 404"), "{err}");
}

#[tokio::test]
async fn malformed_body_becomes_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let source: HttpPageSource<Post> =
        HttpPageSource::new(&server.uri(), HttpSourceSettings::default()).unwrap();
    let err = source.fetch_page(page(0, 10)).await.unwrap_err();

    assert_eq!(err.message(), "malformed page body");
    assert!(err.cause().is_some());
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(Vec::<serde_json::Value>::new()),
        )
        .mount(&server)
        .await;

    let settings = HttpSourceSettings {
        request_timeout: Duration::from_millis(50),
        ..HttpSourceSettings::default()
    };
    let source: HttpPageSource<Post> = HttpPageSource::new(&server.uri(), settings).unwrap();
    let err = source.fetch_page(page(0, 10)).await.unwrap_err();

    assert_eq!(err.message(), "timeout");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[1,2,3,4,5]"),
        )
        .mount(&server)
        .await;

    let settings = HttpSourceSettings {
        max_bytes: 10,
        ..HttpSourceSettings::default()
    };
    let source: HttpPageSource<u32> = HttpPageSource::new(&server.uri(), settings).unwrap();
    let err = source.fetch_page(page(0, 10)).await.unwrap_err();

    assert_eq!(err.message(), "page body too large: 11 bytes (max 10)");
}

#[tokio::test]
async fn body_within_limit_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3,4]"))
        .mount(&server)
        .await;

    let settings = HttpSourceSettings {
        max_bytes: 9,
        ..HttpSourceSettings::default()
    };
    let source: HttpPageSource<u32> = HttpPageSource::new(&server.uri(), settings).unwrap();

    assert_eq!(source.fetch_page(page(0, 10)).await.unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn invalid_endpoint_is_rejected() {
    let result = HttpPageSource::<Post>::new("not a url", HttpSourceSettings::default());
    assert!(result.is_err());
}

#[tokio::test]
async fn controller_pages_through_http_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![post(1), post(2)]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<serde_json::Value>::new()))
        .mount(&server)
        .await;

    let source: HttpPageSource<Post> =
        HttpPageSource::new(&server.uri(), HttpSourceSettings::default()).unwrap();
    let controller = ListController::spawn(
        ListConfig::new(NonZeroUsize::new(2).unwrap()),
        source,
    );

    controller.load().unwrap();
    controller.settled().await.unwrap();
    controller.load_more().unwrap();
    let status = controller.settled().await.unwrap();

    assert!(matches!(status, ListStatus::Exhausted(ref items) if items.len() == 2));
}
