/// Mock implementations for testing
mod mock_page_fetcher;
mod mock_progress_reporter;

pub use mock_page_fetcher::MockPageFetcher;
pub use mock_progress_reporter::MockProgressReporter;
