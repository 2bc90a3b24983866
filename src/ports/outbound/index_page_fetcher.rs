use crate::shared::Result;
use async_trait::async_trait;

/// IndexPageFetcher port for downloading a package index page
#[async_trait]
pub trait IndexPageFetcher: Send + Sync {
    /// Fetches the page at `url` and returns its body decoded as UTF-8
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request fails or times out
    /// - The server answers with a non-success status code
    /// - The body is not valid UTF-8
    async fn fetch_page(&self, url: &str) -> Result<String>;
}
