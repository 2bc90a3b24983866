use crate::application::dto::LookupResponse;
use crate::dependency_lookup::domain::RequestParameters;
use crate::ports::outbound::DependencySource;

/// LookupDependenciesUseCase - resolves the direct dependencies of one package
///
/// The source is injected, so the use case runs unchanged against the
/// fixture backend, the remote index backend or a test double.
pub struct LookupDependenciesUseCase<S> {
    source: S,
}

impl<S: DependencySource> LookupDependenciesUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Executes a single, one-level lookup
    ///
    /// The parameters must already have passed `RequestValidator`.
    pub async fn execute(&self, params: &RequestParameters) -> LookupResponse {
        let dependencies = self
            .source
            .fetch_direct(params.package_name(), params.version())
            .await;

        LookupResponse::new(
            params.package_name().to_string(),
            params.version().map(str::to_string),
            dependencies,
        )
    }
}
