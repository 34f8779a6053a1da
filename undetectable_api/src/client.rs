//! HTTP client for the Undetectable detection and humanization APIs.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    types::{
        DetectRequest, DetectResponse, Document, DocumentIdRequest, ListDocumentsRequest,
        ListDocumentsResponse, RehumanizeDocumentResponse, SubmitDocumentRequest,
        SubmitDocumentResponse,
    },
    Error, Result,
};

/// Production base URL of the AI detection service.
pub const DEFAULT_DETECTOR_URL: &str = "https://aidetect.undetectable.ai";

/// Production base URL of the humanization service.
pub const DEFAULT_HUMANIZER_URL: &str = "https://humanize.undetectable.ai";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const APIKEY_HEADER: &str = "apikey";

/// Immutable settings captured by a [`Client`] at construction.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    detector_base_url: String,
    humanizer_base_url: String,
    timeout: Duration,
}

impl Config {
    /// Settings for the production services with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            detector_base_url: DEFAULT_DETECTOR_URL.to_string(),
            humanizer_base_url: DEFAULT_HUMANIZER_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the detection service base URL. Used for testing with wiremock.
    pub fn with_detector_base_url(mut self, base_url: &str) -> Self {
        self.detector_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the humanization service base URL. Used for testing with wiremock.
    pub fn with_humanizer_base_url(mut self, base_url: &str) -> Self {
        self.humanizer_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout. Defaults to 30 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn detector_base_url(&self) -> &str {
        &self.detector_base_url
    }

    pub fn humanizer_base_url(&self) -> &str {
        &self.humanizer_base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("detector_base_url", &self.detector_base_url)
            .field("humanizer_base_url", &self.humanizer_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Clone, Copy, Debug)]
enum Service {
    /// Key travels in the JSON body.
    Detector,
    /// Key travels in the `apikey` header.
    Humanizer,
}

/// HTTP client for the Undetectable APIs.
///
/// Construct one per process and pass it to whatever needs it; clones share
/// the underlying connection pool. Every operation is a single POST with no
/// retries, and every failure comes back as a classified [`Error`].
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Creates a client for the production services.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_key))
    }

    /// Creates a client from explicit settings.
    pub fn with_config(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestSetup(e.to_string())
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn get_url(&self, service: Service, path: &str) -> Result<Url> {
        let base = match service {
            Service::Detector => &self.config.detector_base_url,
            Service::Humanizer => &self.config.humanizer_base_url,
        };
        Url::parse(format!("{}{}", base, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestSetup(e.to_string())
        })
    }

    async fn post<B, T>(&self, service: Service, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.get_url(service, path)?;
        let payload = serde_json::to_vec(body).map_err(|e| {
            tracing::error!("Failed to serialize request body: {}", e);
            Error::RequestSetup(e.to_string())
        })?;

        let mut request = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Service::Humanizer = service {
            let mut key = HeaderValue::from_str(&self.config.api_key).map_err(|e| {
                tracing::error!("API key is not a valid header value: {}", e);
                Error::RequestSetup(e.to_string())
            })?;
            key.set_sensitive(true);
            request = request.header(APIKEY_HEADER, key);
        }

        tracing::debug!(%url, "POST");
        let resp = request.body(payload).send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", url, e);
            Error::from_transport(&e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::NoResponse
        })?;

        if !status.is_success() {
            let err = Error::from_status(status.as_u16(), truncate_body(&body));
            tracing::error!("{} | body: {}", err, truncate_body(&body));
            return Err(err);
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::Decode(e.to_string())
        })
    }

    async fn detect_at(&self, path: &str, text: &str) -> Result<DetectResponse> {
        let body = DetectRequest {
            text,
            key: &self.config.api_key,
        };
        self.post(Service::Detector, path, &body).await
    }

    /// Scores how human-like `text` reads.
    pub async fn detect(&self, text: &str) -> Result<DetectResponse> {
        self.detect_at("/detect", text).await
    }

    /// Scores `text` through the individual third-party detectors.
    pub async fn detect_individual(&self, text: &str) -> Result<DetectResponse> {
        self.detect_at("/detectIndividual", text).await
    }

    /// Submits a document for humanization.
    pub async fn submit_document(
        &self,
        request: &SubmitDocumentRequest,
    ) -> Result<SubmitDocumentResponse> {
        self.post(Service::Humanizer, "/submit", request).await
    }

    /// Fetches a submitted document. `output` stays `None` until processing finishes.
    pub async fn retrieve_document(&self, request: &DocumentIdRequest) -> Result<Document> {
        self.post(Service::Humanizer, "/document", request).await
    }

    /// Asks the humanizer to rewrite an already submitted document again.
    pub async fn rehumanize_document(
        &self,
        request: &DocumentIdRequest,
    ) -> Result<RehumanizeDocumentResponse> {
        self.post(Service::Humanizer, "/rehumanize", request).await
    }

    /// Lists submitted documents, one page at a time.
    pub async fn list_documents(
        &self,
        request: &ListDocumentsRequest,
    ) -> Result<ListDocumentsResponse> {
        self.post(Service::Humanizer, "/list", request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
