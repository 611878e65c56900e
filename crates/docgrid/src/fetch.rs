//! Async HTTP fetcher wrapping reqwest.
//!
//! One GET per document. No retry, no fallback: any transport failure or
//! non-success status is returned to the caller and ends the run.

use std::time::Duration;

use tracing::debug;

/// Failure while retrieving the source document.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// Whether the failure was the request timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Transport(e) if e.is_timeout())
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            FetchError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Knobs for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout, connect through body.
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: default_user_agent(),
            max_redirects: 5,
        }
    }
}

/// `docgrid/<crate version>`.
pub fn default_user_agent() -> String {
    format!("docgrid/{}", env!("CARGO_PKG_VERSION"))
}

/// A successfully retrieved document.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// Content-Type header, if sent.
    pub content_type: Option<String>,
    /// Response body as text.
    pub body: String,
}

/// HTTP client for the document source.
#[derive(Clone)]
pub struct DocFetcher {
    client: reqwest::Client,
}

impl DocFetcher {
    /// Build a fetcher from explicit options.
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .redirect(reqwest::redirect::Policy::limited(options.max_redirects))
            .user_agent(options.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Perform a single GET and return the body of a 2xx response.
    pub async fn fetch(&self, url: &str) -> Result<FetchedDocument, FetchError> {
        let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        debug!("GET {parsed}");
        let resp = self.client.get(parsed).send().await?;

        let status = resp.status();
        let final_url = resp.url().to_string();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = resp.text().await?;
        debug!(
            "fetched {} bytes from {final_url} (status {})",
            body.len(),
            status.as_u16()
        );

        Ok(FetchedDocument {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
