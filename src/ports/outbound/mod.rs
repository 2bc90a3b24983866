/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod dependency_source;
pub mod index_page_fetcher;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_source::DependencySource;
pub use index_page_fetcher::IndexPageFetcher;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
