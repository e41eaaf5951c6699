use anyhow::Result;
use mockito::Matcher;
use test_utils::image_fixture;
use test_utils::image_response_fixture;
use test_utils::text_response_fixture;

use super::HttpClassifier;
use crate::domain::models::Attachment;
use crate::domain::models::Classifier;

#[tokio::test]
async fn it_classifies_text() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict-text")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({ "message": "is this ok?" })))
        .with_status(200)
        .with_body(text_response_fixture("Safe", 0.8675))
        .create();

    let classifier = HttpClassifier::new(&server.url());
    let res = classifier.classify_text("is this ok?").await?;

    mock.assert();
    assert_eq!(res.prediction, "Safe");
    assert_eq!(res.confidence_percentage(), "86.75%");
    return Ok(());
}

#[tokio::test]
async fn it_trims_trailing_slashes_from_the_url() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict-text")
        .with_status(200)
        .with_body(text_response_fixture("Safe", 0.5))
        .create();

    let classifier = HttpClassifier::new(&format!("{}/", server.url()));
    classifier.classify_text("hi").await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_text_on_error_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict-text")
        .with_status(500)
        .create();

    let classifier = HttpClassifier::new(&server.url());
    let res = classifier.classify_text("hello").await;

    mock.assert();
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_text_on_malformed_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict-text")
        .with_status(200)
        .with_body(r#"{"prediction": "Safe"}"#)
        .create();

    let classifier = HttpClassifier::new(&server.url());
    let res = classifier.classify_text("hello").await;

    mock.assert();
    assert_eq!(
        res.unwrap_err().to_string(),
        "Classifier returned an unreadable response"
    );
}

#[tokio::test]
async fn it_fails_when_unreachable() {
    let classifier = HttpClassifier::new("http://127.0.0.1:1");
    let res = classifier.classify_text("hello").await;

    assert_eq!(res.unwrap_err().to_string(), "Classifier is not reachable");
}

#[tokio::test]
async fn it_classifies_images_as_multipart() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict-image")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="cat.png""#.to_string()),
            Matcher::Regex("Content-Type: image/png".to_string()),
            Matcher::Regex("not-really-a-png-but-close-enough".to_string()),
        ]))
        .with_status(200)
        .with_body(image_response_fixture("Unsafe"))
        .create();

    let classifier = HttpClassifier::new(&server.url());
    let attachment = Attachment::new("cat.png", image_fixture());
    let res = classifier.classify_image(&attachment).await?;

    mock.assert();
    assert!(res.is_unsafe());
    return Ok(());
}

#[tokio::test]
async fn it_fails_images_on_error_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict-image")
        .with_status(502)
        .create();

    let classifier = HttpClassifier::new(&server.url());
    let attachment = Attachment::new("cat.png", image_fixture());
    let res = classifier.classify_image(&attachment).await;

    mock.assert();
    assert_eq!(
        res.unwrap_err().to_string(),
        "Classifier request failed with status 502"
    );
}

#[tokio::test]
async fn it_fails_images_on_malformed_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict-image")
        .with_status(200)
        .with_body("{}")
        .create();

    let classifier = HttpClassifier::new(&server.url());
    let attachment = Attachment::new("cat.png", image_fixture());
    let res = classifier.classify_image(&attachment).await;

    mock.assert();
    assert_eq!(
        res.unwrap_err().to_string(),
        "Classifier returned an unreadable response"
    );
}

#[tokio::test]
async fn it_fails_images_when_unreachable() {
    let classifier = HttpClassifier::new("http://127.0.0.1:1");
    let attachment = Attachment::new("cat.png", image_fixture());
    let res = classifier.classify_image(&attachment).await;

    assert_eq!(res.unwrap_err().to_string(), "Classifier is not reachable");
}
