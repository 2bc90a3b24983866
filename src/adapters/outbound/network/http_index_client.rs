use crate::ports::outbound::IndexPageFetcher;
use crate::shared::error::DepvizError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Timeout applied to the single index request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for building the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientSettings {
    pub timeout: Duration,
    pub user_agent: String,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment
    pub use_env_proxy: bool,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("depviz/{}", env!("CARGO_PKG_VERSION")),
            use_env_proxy: true,
        }
    }
}

/// HttpIndexClient adapter fetching index pages over HTTP(S)
///
/// One GET per call, no retries. Non-success status codes and bodies that
/// are not valid UTF-8 are reported as [`DepvizError::NetworkError`].
pub struct HttpIndexClient {
    client: reqwest::Client,
}

impl HttpIndexClient {
    /// Creates a client with the default timeout and user agent
    pub fn new() -> Result<Self> {
        Self::with_settings(&HttpClientSettings::default())
    }

    pub fn with_settings(settings: &HttpClientSettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str());
        if !settings.use_env_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client })
    }
}

// Note: no Default implementation, since building the client can fail.

fn network_error(url: &str, details: impl ToString) -> anyhow::Error {
    DepvizError::NetworkError {
        url: url.to_string(),
        details: details.to_string(),
    }
    .into()
}

#[async_trait]
impl IndexPageFetcher for HttpIndexClient {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(
                url,
                format!("index returned status code {}", status),
            ));
        }

        let body = response.bytes().await.map_err(|e| network_error(url, e))?;
        String::from_utf8(body.to_vec())
            .map_err(|e| network_error(url, format!("response body is not valid UTF-8: {}", e)))
    }
}
