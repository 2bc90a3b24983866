//! depviz - direct dependency lookup for Python packages
//!
//! Given a package name and a dependency source, depviz resolves the
//! package's direct (one level) dependencies. Two interchangeable sources
//! exist: a local fixture file scanned for `A depends on: B, C` declarations,
//! and a remote simple index whose answers come from a bundled lookup table.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_lookup`): Request model, dependency lists,
//!   the fallback table and pure services (validation, fixture matching, HTML scanning)
//! - **Application Layer** (`application`): Use case and source selection
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depviz::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let params = RequestParameters::builder()
//!     .package_name("A")
//!     .repository_location("tests/fixtures/repository.txt")
//!     .test_mode(true)
//!     .build();
//! assert!(RequestValidator::validate(&params).is_empty());
//!
//! let source = FixtureFileSource::new(
//!     PathBuf::from(params.repository_location()),
//!     StderrProgressReporter::new(),
//! );
//! let response = LookupDependenciesUseCase::new(source).execute(&params).await;
//!
//! let formatter = ConsoleFormatter::new();
//! print!(
//!     "{}",
//!     formatter.format_dependencies(&response.package_name, None, &response.dependencies)
//! );
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_lookup;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::FixtureFileSource;
    pub use crate::adapters::outbound::formatters::ConsoleFormatter;
    pub use crate::adapters::outbound::network::{
        HttpClientSettings, HttpIndexClient, RemoteIndexSource,
    };
    pub use crate::application::dto::LookupResponse;
    pub use crate::application::factories::{SelectedSource, SourceFactory, SourceType};
    pub use crate::application::use_cases::LookupDependenciesUseCase;
    pub use crate::dependency_lookup::domain::{
        DependencyList, FallbackLookupTable, RequestParameters,
    };
    pub use crate::dependency_lookup::services::{
        HtmlLinkScanner, RequestValidator, ValidationError,
    };
    pub use crate::ports::outbound::{
        DependencySource, IndexPageFetcher, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{DepvizError, ExitCode};
    pub use crate::shared::Result;
}
