/// Network adapters for package index access
mod http_index_client;
mod remote_index_source;

pub use http_index_client::{HttpClientSettings, HttpIndexClient, DEFAULT_TIMEOUT};
pub use remote_index_source::RemoteIndexSource;
