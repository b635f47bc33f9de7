mod helpers;

use anyhow::Result;
use helpers::MockTransport;
use notekeeper_client::app::{run, Outcome, SAMPLE_NOTES};
use notekeeper_client::config::Config;
use notekeeper_client::NoteClient;
use reqwest::Method;

const AUTH: &str = "/api/v1/auth";
const NOTES: &str = "/api/v1/notes";

fn run_with(transport: MockTransport) -> Result<(Outcome, String, NoteClient<MockTransport>)> {
    let config = Config::default();
    let mut client = NoteClient::with_transport(&config.base_url, transport);
    let mut out = Vec::new();
    let outcome = run(&mut client, &config.credentials, &mut out)?;
    Ok((outcome, String::from_utf8(out)?, client))
}

#[test]
fn given_empty_service_when_running_then_completes_with_zero_notes() -> Result<()> {
    // Arrange
    let transport = MockTransport::new()
        .route(Method::POST, AUTH, 200, r#"{"token":"abc123"}"#)
        .route(Method::POST, NOTES, 201, r#"{"id":1}"#)
        .route(Method::GET, NOTES, 200, "[]");

    // Act
    let (outcome, out, client) = run_with(transport)?;

    // Assert
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(outcome.exit_code(), 0);
    assert!(out.contains("Total notes: 0"));
    assert!(out.contains("No notes found."));
    assert!(out.contains("Client execution completed successfully!"));
    assert_eq!(client.transport().count(&Method::POST, NOTES), SAMPLE_NOTES.len());
    Ok(())
}

#[test]
fn given_sample_notes_when_running_then_creates_in_order_with_bearer() -> Result<()> {
    // Arrange
    let transport = MockTransport::new()
        .route(Method::POST, AUTH, 200, r#"{"token":"abc123"}"#)
        .route(Method::POST, NOTES, 201, r#"{"id":1}"#)
        .route(Method::GET, NOTES, 200, "[]");

    // Act
    let (_, _, client) = run_with(transport)?;

    // Assert
    let sent = client.transport().sent.borrow();
    let titles: Vec<String> = sent
        .iter()
        .filter(|r| r.method == Method::POST && r.url.ends_with(NOTES))
        .map(|r| {
            assert_eq!(r.bearer.as_deref(), Some("abc123"));
            r.body.as_ref().unwrap()["title"].as_str().unwrap().to_string()
        })
        .collect();
    let expected: Vec<String> = SAMPLE_NOTES.iter().map(|(t, _)| t.to_string()).collect();
    assert_eq!(titles, expected);
    Ok(())
}

#[test]
fn given_rejected_credentials_when_running_then_exits_nonzero_without_other_calls() -> Result<()> {
    // Arrange
    let transport = MockTransport::new()
        .route(Method::POST, AUTH, 401, r#"{"message":"Invalid username or password"}"#);

    // Act
    let (outcome, out, client) = run_with(transport)?;

    // Assert
    assert_eq!(outcome, Outcome::AuthenticationFailed);
    assert_eq!(outcome.exit_code(), 1);
    assert!(out.contains("Invalid username or password"));
    assert!(!out.contains("NOTES REPORT"));
    assert_eq!(client.transport().sent.borrow().len(), 1);
    Ok(())
}

#[test]
fn given_failing_creates_when_running_then_still_reports() -> Result<()> {
    // Arrange
    let transport = MockTransport::new()
        .route(Method::POST, AUTH, 200, r#"{"token":"abc123"}"#)
        .route(Method::POST, NOTES, 400, r#"{"message":"Title is required"}"#)
        .route(
            Method::GET,
            NOTES,
            200,
            r#"[{"id":1,"title":"Apple","content":"fruit"},{"id":2,"title":"Banana"}]"#,
        );

    // Act
    let (outcome, out, client) = run_with(transport)?;

    // Assert
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(client.transport().count(&Method::POST, NOTES), SAMPLE_NOTES.len());
    assert!(out.contains("Total notes: 2"));
    assert!(out.contains(" - Apple\n"));
    assert!(!out.contains(" - Banana"));
    assert!(out.contains("   Content: No content\n"));
    Ok(())
}

#[test]
fn given_list_failure_when_running_then_exits_nonzero() -> Result<()> {
    // Arrange
    let transport = MockTransport::new()
        .route(Method::POST, AUTH, 200, r#"{"token":"abc123"}"#)
        .route(Method::POST, NOTES, 201, r#"{"id":1}"#)
        .route(Method::GET, NOTES, 500, "Internal Server Error");

    // Act
    let (outcome, out, _) = run_with(transport)?;

    // Assert
    assert_eq!(outcome, Outcome::RetrievalFailed);
    assert_eq!(outcome.exit_code(), 1);
    assert!(out.contains("Failed to retrieve notes: HTTP 500: Internal Server Error"));
    assert!(!out.contains("NOTES REPORT"));
    Ok(())
}

#[test]
fn given_malformed_list_body_when_running_then_treated_as_failure() -> Result<()> {
    // Arrange
    let transport = MockTransport::new()
        .route(Method::POST, AUTH, 200, r#"{"token":"abc123"}"#)
        .route(Method::POST, NOTES, 201, r#"{"id":1}"#)
        .route(Method::GET, NOTES, 200, "not json");

    // Act
    let (outcome, out, _) = run_with(transport)?;

    // Assert
    assert_eq!(outcome, Outcome::RetrievalFailed);
    assert!(out.contains("Invalid response"));
    Ok(())
}
