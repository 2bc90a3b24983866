/// Use cases - Application business logic
mod lookup_dependencies;

pub use lookup_dependencies::LookupDependenciesUseCase;
