use crate::dependency_lookup::domain::RequestParameters;
use thiserror::Error;

/// A single problem with the request parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Package name must not be empty")]
    EmptyPackageName,

    #[error("Repository URL or fixture path must not be empty")]
    EmptyRepositoryLocation,
}

/// RequestValidator checks request parameters before any I/O happens
///
/// Version and filter are typed as `Option<String>`, so the rule that they
/// must be strings when present holds by construction and needs no check.
pub struct RequestValidator;

impl RequestValidator {
    /// Returns every violation found, in a fixed order. An empty vector means
    /// the parameters are well-formed.
    pub fn validate(params: &RequestParameters) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if params.package_name().is_empty() {
            errors.push(ValidationError::EmptyPackageName);
        }

        if params.repository_location().is_empty() {
            errors.push(ValidationError::EmptyRepositoryLocation);
        }

        errors
    }
}
