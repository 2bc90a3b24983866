use async_trait::async_trait;
use depviz::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock IndexPageFetcher serving a fixed page (or failing) and recording URLs
#[derive(Clone)]
pub struct MockPageFetcher {
    page: Option<String>,
    pub requested_urls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn with_page(page: &str) -> Self {
        Self {
            page: Some(page.to_string()),
            requested_urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            page: None,
            requested_urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requested_urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IndexPageFetcher for MockPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        match &self.page {
            Some(page) => Ok(page.clone()),
            None => Err(DepvizError::NetworkError {
                url: url.to_string(),
                details: "Mock network failure".to_string(),
            }
            .into()),
        }
    }
}
