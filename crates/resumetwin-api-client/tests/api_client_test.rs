use std::time::Duration;

use mockito::Matcher;
use resumetwin_api_client::{ApiClient, ResumeBackend};
use resumetwin_core::{AppError, AtsResult, CareerPath, SelectedFile};
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> ApiClient {
    ApiClient::new(server.url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_upload_resume_sends_multipart_resume_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/upload")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="resume"; filename="cv.pdf""#.to_string()),
            Matcher::Regex("%PDF-1.4 fake".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "message": "Resume uploaded and parsed!",
                "resume_text": "SQL and Python",
                "ats_result": { "score": 70, "keywords_found": ["Python", "SQL"], "suggestions": [] },
                "career_twins": [{ "role": "Data Analyst", "company": "Acme", "skills": ["SQL"] }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let file = SelectedFile::new("cv.pdf", b"%PDF-1.4 fake".to_vec());
    let response = client.upload_resume(&file).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.message, "Resume uploaded and parsed!");
    assert_eq!(response.resume_text, "SQL and Python");
    assert_eq!(response.ats_result.score_display(), "70");
    assert_eq!(response.career_twins[0].company, "Acme");
}

#[tokio::test]
async fn test_upload_resume_reports_backend_message_on_400() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "No selected file"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let file = SelectedFile::new("cv.pdf", b"%PDF".to_vec());
    let err = client.upload_resume(&file).await.unwrap_err();

    match err {
        AppError::Api {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message.as_deref(), Some("No selected file"));
            assert_eq!(body, r#"{"message": "No selected file"}"#);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_upload_resume_html_error_page_has_no_backend_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<!doctype html><title>500 Internal Server Error</title>")
        .create_async()
        .await;

    let client = client_for(&server);
    let file = SelectedFile::new("cv.pdf", b"%PDF".to_vec());
    let err = client.upload_resume(&file).await.unwrap_err();

    assert!(matches!(err, AppError::Api { status: 500, .. }));
    assert_eq!(err.api_message(), None);
    assert_eq!(err.user_message(), "Something went wrong!");
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_upload_resume_invalid_json_is_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let file = SelectedFile::new("cv.pdf", b"%PDF".to_vec());
    let err = client.upload_resume(&file).await.unwrap_err();

    assert!(matches!(err, AppError::Transport { .. }));
    assert_eq!(err.user_message(), "Something went wrong!");
}

#[tokio::test]
async fn test_suggest_skills_posts_json_and_accepts_suggested_skills() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/suggest-skills")
        .match_body(Matcher::Json(json!({
            "resume_text": "Python, SQL",
            "job_role": "Data Scientist"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"matched_skills": ["Python"], "suggested_skills": ["TensorFlow"]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let suggestions = client
        .suggest_skills("Python, SQL", CareerPath::DataScientist)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(suggestions.career_path, "Data Scientist");
    assert_eq!(suggestions.matched_skills, vec!["Python"]);
    assert_eq!(suggestions.missing_skills, vec!["TensorFlow"]);
}

#[tokio::test]
async fn test_download_report_returns_bytes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/download-report")
        .match_body(Matcher::Json(json!({
            "score": 82,
            "suggestions": ["Add metrics"],
            "keywords": ["SQL", "Python"]
        })))
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.4 report".to_vec())
        .create_async()
        .await;

    let ats: AtsResult = serde_json::from_value(json!({
        "score": 82,
        "keywords_found": ["SQL", "Python"],
        "suggestions": ["Add metrics"]
    }))
    .unwrap();

    let client = client_for(&server);
    let bytes = client.download_report(&ats).await.unwrap();

    mock.assert_async().await;
    assert_eq!(&bytes[..], b"%PDF-1.4 report");
}

#[tokio::test]
async fn test_send_email_through_backend_trait() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/send-email")
        .match_body(Matcher::Json(json!({ "email": "jane@example.com" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Email sent successfully!"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let backend: &dyn ResumeBackend = &client;
    let response = backend.send_email("jane@example.com").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.message, "Email sent successfully!");
}

#[tokio::test]
async fn test_send_email_missing_report_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send-email")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "PDF not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.send_email("jane@example.com").await.unwrap_err();

    assert_eq!(err.api_message(), Some("PDF not found"));
}

#[tokio::test]
async fn test_send_email_html_error_page_has_no_backend_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send-email")
        .with_status(500)
        .with_header("content-type", "text/html")
        .with_body("<html><body><h1>Internal Server Error</h1></body></html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.send_email("jane@example.com").await.unwrap_err();

    assert_eq!(err.api_message(), None);
    assert_eq!(err.user_message(), "Something went wrong!");
}

#[tokio::test]
async fn test_upload_resume_null_fields_decode_to_defaults() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/upload")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "ok", "resume_text": null, "ats_result": null, "career_twins": null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let file = SelectedFile::new("cv.pdf", b"%PDF".to_vec());
    let response = client.upload_resume(&file).await.unwrap();

    assert_eq!(response.message, "ok");
    assert_eq!(response.resume_text, "");
    assert_eq!(response.ats_result, AtsResult::default());
    assert!(response.career_twins.is_empty());
}
