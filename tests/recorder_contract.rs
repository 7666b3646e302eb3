// tests/recorder_contract.rs
//! Wire contract of the recording service client: multipart field
//! names, strict status handling, verbatim identifiers.

use mockito::Matcher;
use nbshare::{AppError, LinkRecorder, NotebookSnapshot, RecorderClient, ServiceEndpoint};

fn endpoint(url: &str) -> ServiceEndpoint {
    ServiceEndpoint::parse(url).expect("endpoint should parse")
}

fn client_for(server: &mockito::ServerGuard, cookie: Option<&str>) -> RecorderClient {
    RecorderClient::new(
        endpoint(&format!("{}/record", server.url())),
        endpoint(&format!("{}/lookup", server.url())),
        cookie,
    )
    .expect("client should build")
}

fn snapshot() -> NotebookSnapshot {
    NotebookSnapshot::from_json_text(r#"{"cells":[]}"#).expect("snapshot should parse")
}

#[tokio::test]
async fn record_posts_multipart_fields_and_returns_identifier() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/record")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="Stdin""#.to_string()),
            Matcher::Regex(r#"\{"cells":\[\]\}"#.to_string()),
            Matcher::Regex(r#"name="InputType""#.to_string()),
            Matcher::Regex(r"\r\n\r\n\.ipynb".to_string()),
        ]))
        .with_status(200)
        .with_body("abc123")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let identifier = client
        .record(&snapshot())
        .await
        .expect("record should succeed");

    assert_eq!(identifier.as_str(), "abc123");
    mock.assert_async().await;
}

#[tokio::test]
async fn identifier_is_taken_verbatim_from_the_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/record")
        .with_status(200)
        .with_body("abc123\n")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let identifier = client
        .record(&snapshot())
        .await
        .expect("record should succeed");

    // Trimming would be guessing at the service's format.
    assert_eq!(identifier.as_str(), "abc123\n");
}

#[tokio::test]
async fn only_a_literal_200_counts_as_success() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/record")
        .with_status(201)
        .with_body("created")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let result = client.record(&snapshot()).await;

    assert!(matches!(
        result,
        Err(AppError::RecorderService { status, .. }) if status.as_u16() == 201
    ));
}

#[tokio::test]
async fn server_errors_carry_a_body_preview() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/record")
        .with_status(500)
        .with_body("upload quota exceeded")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let result = client.record(&snapshot()).await;

    match result {
        Err(AppError::RecorderService {
            status,
            body_preview,
        }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body_preview, "upload quota exceeded");
        }
        other => panic!("expected a recorder service error, got {:?}", other),
    }
}

#[tokio::test]
async fn configured_cookie_rides_along() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/record")
        .match_header("cookie", "session=abc")
        .with_status(200)
        .with_body("abc123")
        .create_async()
        .await;

    let client = client_for(&server, Some("session=abc"));
    client
        .record(&snapshot())
        .await
        .expect("record should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn lookup_posts_repository_coordinates() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/lookup")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="Owner""#.to_string()),
            Matcher::Regex(r"\r\n\r\nacme".to_string()),
            Matcher::Regex(r#"name="Repo""#.to_string()),
            Matcher::Regex(r"\r\n\r\nnotebooks".to_string()),
            Matcher::Regex(r#"name="FilePath""#.to_string()),
            Matcher::Regex(r"content/demo\.ipynb".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"ReturnCode": 0}"#)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let payload = client
        .lookup("acme", "notebooks", "content/demo.ipynb")
        .await
        .expect("lookup should succeed");

    assert!(payload.indicates_existing());
    mock.assert_async().await;
}

#[tokio::test]
async fn lookup_rejects_unrecognizable_payloads() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/lookup")
        .with_status(200)
        .with_body("<html>Sign in required</html>")
        .create_async()
        .await;

    let client = client_for(&server, None);
    let result = client.lookup("acme", "notebooks", "content/demo.ipynb").await;

    assert!(matches!(result, Err(AppError::MalformedResponse(_))));
}

#[tokio::test]
async fn lookup_requires_a_literal_200() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/lookup")
        .with_status(500)
        .with_body(r#"{"ReturnCode": 0}"#)
        .create_async()
        .await;

    let client = client_for(&server, None);
    let result = client.lookup("acme", "notebooks", "content/demo.ipynb").await;

    // The parseable body must not rescue the verdict.
    assert!(matches!(
        result,
        Err(AppError::RecorderService { status, .. }) if status.as_u16() == 500
    ));
}
