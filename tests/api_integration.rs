//! End-to-end tests for the request pipeline against a mock API server:
//! header attachment, retry accounting, and response classification.

use framelight_sdk::prelude::*;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock server, with a fast backoff so retry tests
/// stay quick.
fn test_client(uri: &str) -> FramelightClient {
    FramelightClient::builder()
        .host(uri)
        .token("test-token")
        .retry(RetryConfig {
            backoff_base: Duration::from_millis(10),
            ..RetryConfig::default()
        })
        .build()
        .unwrap()
}

fn single(resp: ApiResponse) -> serde_json::Value {
    match resp {
        ApiResponse::Single(value) => value,
        ApiResponse::Paginated(page) => panic!("expected unwrapped body, got page {page:?}"),
    }
}

fn paginated(resp: ApiResponse) -> PaginatedResponse {
    match resp {
        ApiResponse::Paginated(page) => page,
        ApiResponse::Single(value) => panic!("expected paginated body, got {value}"),
    }
}

#[tokio::test]
async fn test_session_headers_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/me"))
        .and(header("authorization", "Bearer test-token"))
        .and(header_exists("x-framelight-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "user-1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let me = single(client.accounts().me().await.unwrap());
    assert_eq!(me["id"], "user-1");
}

#[tokio::test]
async fn test_payload_sent_as_json_body_on_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/teams/t1/projects"))
        .and(body_json(json!({ "page": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let params = ListParams {
        page: Some(2),
        ..ListParams::default()
    };
    client.projects().list("t1", &params).await.unwrap();
}

#[tokio::test]
async fn test_response_without_page_header_is_unwrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/p1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "p1", "name": "Launch" })),
        )
        .mount(&mock_server)
        .await;

    #[derive(serde::Deserialize)]
    struct Project {
        id: String,
        name: String,
    }

    let client = test_client(&mock_server.uri());
    let resp = client.projects().get("p1").await.unwrap();
    let project: Project = resp.deserialize().unwrap();
    assert_eq!(project.id, "p1");
    assert_eq!(project.name, "Launch");
}

#[tokio::test]
async fn test_single_page_listing_is_unwrapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/assets/a1/children"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "id": "c1" }, { "id": "c2" }]))
                .insert_header("page-number", "1")
                .insert_header("per-page", "50")
                .insert_header("total", "2")
                .insert_header("total-pages", "1"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let resp = client
        .assets()
        .children("a1", &ListParams::default())
        .await
        .unwrap();
    let body = single(resp);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_multi_page_listing_is_wrapped_with_header_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/assets/a1/children"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["a", "b", "c"]))
                .insert_header("page-number", "1")
                .insert_header("per-page", "3")
                .insert_header("total", "10")
                .insert_header("total-pages", "4"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let resp = client
        .assets()
        .children("a1", &ListParams::default())
        .await
        .unwrap();
    let page = paginated(resp);

    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 3);
    assert_eq!(page.total, 10);
    assert_eq!(page.total_pages, 4);

    let items: Vec<serde_json::Value> = page.into_iter().collect();
    assert_eq!(items, vec![json!("a"), json!("b"), json!("c")]);
}

#[tokio::test]
async fn test_malformed_page_headers_fail_fast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .insert_header("page-number", "1")
                .insert_header("per-page", "50")
                .insert_header("total", "99")
                .insert_header("total-pages", "soon"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .teams()
        .list_all(&ListParams::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SdkError::Api(ApiError::InvalidPageHeader {
            header: "total-pages",
            ..
        })
    ));
}

#[tokio::test]
async fn test_get_makes_exactly_three_attempts_on_repeated_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/me"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.accounts().me().await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Api(ApiError::RateLimitExhausted { attempts: 3 })
    ));
}

#[tokio::test]
async fn test_post_succeeds_on_final_attempt_after_429s() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/assets/a1/comments"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/assets/a1/comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "cm1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let comment = CreateComment::text("Looks good");
    let created = single(client.comments().create("a1", &comment).await.unwrap());
    assert_eq!(created["id"], "cm1");
}

#[tokio::test]
async fn test_put_429_is_terminal_with_zero_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/assets/a1"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let changes = UpdateAsset {
        name: Some("renamed.mp4".into()),
        ..UpdateAsset::default()
    };
    let err = client.assets().update("a1", &changes).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Api(ApiError::RequestFailed { status: 429, .. })
    ));
}

#[tokio::test]
async fn test_delete_429_is_terminal_with_zero_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/assets/a1"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.assets().delete("a1").await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Api(ApiError::RequestFailed { status: 429, .. })
    ));
}

#[tokio::test]
async fn test_422_on_presentation_endpoint_is_a_named_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/assets/a1/presentations"))
        .respond_with(ResponseTemplate::new(422).set_body_string("already presented"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let presentation = CreatePresentation {
        title: "Cut v3".into(),
        password: None,
    };
    let err = client
        .presentations()
        .create("a1", &presentation)
        .await
        .unwrap_err();
    match err {
        SdkError::Api(ApiError::PresentationConstraint { body }) => {
            assert_eq!(body, "already presented");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_422_elsewhere_is_a_generic_request_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/teams/t1/projects"))
        .respond_with(ResponseTemplate::new(422).set_body_string("name taken"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let project = CreateProject {
        name: "Launch".into(),
        private: None,
    };
    let err = client.projects().create("t1", &project).await.unwrap_err();
    match err {
        SdkError::Api(ApiError::RequestFailed { status, body }) => {
            assert_eq!(status, 422);
            assert_eq!(body, "name taken");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/projects/p1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.projects().get("p1").await.unwrap_err();
    match err {
        SdkError::Api(ApiError::RequestFailed { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Nothing listens on this port.
    let client = test_client("http://127.0.0.1:9");
    let err = client.accounts().me().await.unwrap_err();
    assert!(matches!(err, SdkError::Api(ApiError::Transport(_))));
}
