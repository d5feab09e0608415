mod test_utils;

use pictune_client::{AnalysisClient, ClientConfig, PHOTO_FIELD};
use pictune_core::LanguageFilter;
use pictune_error::AnalysisErrorKind;
use pictune_interface::PhotoAnalyzer;
use std::time::{Duration, Instant};
use test_utils::{Behavior, FakeApi, PNG_HEADER, dead_base_url, happy_body, sample_photo};

#[tokio::test]
async fn test_success_parses_result() -> anyhow::Result<()> {
    let api = FakeApi::spawn(Behavior::Ok(happy_body())).await;
    let client = AnalysisClient::new(ClientConfig::new(api.base_url.clone()));

    let result = client.analyze_photo(&sample_photo()).await?;

    assert_eq!(result.mood(), "Happy");
    assert_eq!(result.songs().len(), 2);
    assert_eq!(result.filtered(LanguageFilter::Hindi)[0].title(), "A");
    let features = result.songs()[1].audio_features().expect("features present");
    assert_eq!(features.match_percent(), 95);
    Ok(())
}

#[tokio::test]
async fn test_photo_sent_as_single_multipart_part() -> anyhow::Result<()> {
    let api = FakeApi::spawn(Behavior::Ok(happy_body())).await;
    let client = AnalysisClient::new(ClientConfig::new(api.base_url.clone()));

    client.analyze_photo(&sample_photo()).await?;

    let parts = api.received();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, PHOTO_FIELD);
    assert_eq!(parts[0].file_name.as_deref(), Some("beach.png"));
    assert_eq!(parts[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(parts[0].bytes, PNG_HEADER);
    Ok(())
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() -> anyhow::Result<()> {
    let api = FakeApi::spawn(Behavior::Ok(happy_body())).await;
    let client = AnalysisClient::new(ClientConfig::new(format!("{}/", api.base_url)));

    assert!(!client.endpoint().contains("//api"));
    assert!(client.endpoint().ends_with("/api/analyze-photo"));
    client.analyze_photo(&sample_photo()).await?;
    Ok(())
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let api = FakeApi::spawn(Behavior::Status(
        422,
        r#"{"error":"bad image"}"#.to_string(),
    ))
    .await;
    let client = AnalysisClient::new(ClientConfig::new(api.base_url.clone()));

    let err = client.analyze_photo(&sample_photo()).await.unwrap_err();

    assert_eq!(
        err.kind,
        AnalysisErrorKind::ServerError {
            status: 422,
            message: "bad image".to_string()
        }
    );
    assert_eq!(err.user_message(), "bad image");
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_status() {
    let api = FakeApi::spawn(Behavior::Status(503, String::new())).await;
    let client = AnalysisClient::new(ClientConfig::new(api.base_url.clone()));

    let err = client.analyze_photo(&sample_photo()).await.unwrap_err();

    assert_eq!(err.user_message(), "Server error: 503");
}

#[tokio::test]
async fn test_unparseable_error_body_falls_back_to_status() {
    let api = FakeApi::spawn(Behavior::Status(
        502,
        "<html>Bad Gateway</html>".to_string(),
    ))
    .await;
    let client = AnalysisClient::new(ClientConfig::new(api.base_url.clone()));

    let err = client.analyze_photo(&sample_photo()).await.unwrap_err();

    assert_eq!(err.user_message(), "Server error: 502");
}

#[tokio::test]
async fn test_error_body_without_error_field_falls_back() {
    let api = FakeApi::spawn(Behavior::Status(
        500,
        r#"{"detail":"stack trace"}"#.to_string(),
    ))
    .await;
    let client = AnalysisClient::new(ClientConfig::new(api.base_url.clone()));

    let err = client.analyze_photo(&sample_photo()).await.unwrap_err();

    assert_eq!(err.user_message(), "Server error: 500");
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let api = FakeApi::spawn(Behavior::Hang(Duration::from_secs(10))).await;
    let config =
        ClientConfig::new(api.base_url.clone()).with_timeout(Duration::from_millis(200));
    let client = AnalysisClient::new(config);

    let started = Instant::now();
    let err = client.analyze_photo(&sample_photo()).await.unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.user_message(), "Request timed out. Please try again.");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = AnalysisClient::new(ClientConfig::new(dead_base_url().await));

    let err = client.analyze_photo(&sample_photo()).await.unwrap_err();

    assert!(matches!(err.kind, AnalysisErrorKind::NetworkError(_)));
    assert!(err.user_message().starts_with("Failed to analyze image: "));
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let api = FakeApi::spawn(Behavior::Status(200, "not json".to_string())).await;
    let client = AnalysisClient::new(ClientConfig::new(api.base_url.clone()));

    let err = client.analyze_photo(&sample_photo()).await.unwrap_err();

    assert!(matches!(err.kind, AnalysisErrorKind::InvalidResponse(_)));
}

#[tokio::test]
async fn test_trait_object_delegates_to_client() -> anyhow::Result<()> {
    let api = FakeApi::spawn(Behavior::Ok(happy_body())).await;
    let analyzer: Box<dyn PhotoAnalyzer> =
        Box::new(AnalysisClient::new(ClientConfig::new(api.base_url.clone())));

    let result = analyzer.analyze(&sample_photo()).await?;
    assert_eq!(result.mood(), "Happy");
    assert_eq!(analyzer.endpoint(), format!("{}/api/analyze-photo", api.base_url));
    Ok(())
}
