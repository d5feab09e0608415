use crate::ClientConfig;
use async_trait::async_trait;
use pictune_core::{AnalysisResult, PhotoFile};
use pictune_error::{AnalysisError, AnalysisErrorKind};
use pictune_interface::PhotoAnalyzer;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::instrument;

/// Multipart field carrying the image.
pub const PHOTO_FIELD: &str = "photo";

/// Optional body of a non-success response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Client for the mood-analysis API
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    config: ClientConfig,
    endpoint: String,
    client: reqwest::Client,
}

impl AnalysisClient {
    /// Create a new analysis client
    #[instrument(skip(config), fields(base_url = %config.base_url(), timeout_ms = config.timeout_ms()))]
    pub fn new(config: ClientConfig) -> Self {
        tracing::debug!("Creating analysis client");
        let endpoint = config.analyze_url();
        Self {
            config,
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit a photo and wait for the mood and recommendations.
    ///
    /// The whole exchange (upload, response headers and body) must finish
    /// within the configured deadline. On expiry the in-flight request is
    /// dropped, which aborts the connection.
    #[instrument(skip(self, photo), fields(file = %photo.file_name(), size = photo.byte_len()))]
    pub async fn analyze_photo(&self, photo: &PhotoFile) -> Result<AnalysisResult, AnalysisError> {
        match tokio::time::timeout(self.config.timeout(), self.exchange(photo)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.timeout_ms(),
                    "Analysis request timed out, aborting"
                );
                Err(AnalysisError::new(AnalysisErrorKind::Timeout))
            }
        }
    }

    async fn exchange(&self, photo: &PhotoFile) -> Result<AnalysisResult, AnalysisError> {
        let part = Part::bytes(photo.bytes().clone())
            .file_name(photo.file_name().clone())
            .mime_str(photo.media_type())
            .map_err(|e| {
                AnalysisError::new(AnalysisErrorKind::NetworkError(format!(
                    "Invalid media type '{}': {}",
                    photo.media_type(),
                    e
                )))
            })?;
        let form = Form::new().part(PHOTO_FIELD, part);

        tracing::debug!("Sending analysis request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                transport_error(e)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            transport_error(e)
        })?;

        if !status.is_success() {
            tracing::error!("Server returned error: {}", status);
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            return Err(AnalysisError::new(AnalysisErrorKind::server(
                status.as_u16(),
                message,
            )));
        }

        let result: AnalysisResult = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            AnalysisError::new(AnalysisErrorKind::InvalidResponse(e.to_string()))
        })?;

        tracing::debug!(mood = %result.mood(), songs = result.songs().len(), "Analysis successful");
        Ok(result)
    }
}

#[track_caller]
fn transport_error(e: reqwest::Error) -> AnalysisError {
    if e.is_timeout() {
        AnalysisError::new(AnalysisErrorKind::Timeout)
    } else {
        AnalysisError::new(AnalysisErrorKind::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl PhotoAnalyzer for AnalysisClient {
    async fn analyze(&self, photo: &PhotoFile) -> Result<AnalysisResult, AnalysisError> {
        self.analyze_photo(photo).await
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
