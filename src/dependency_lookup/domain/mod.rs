pub mod dependency_list;
pub mod fallback_table;
pub mod request_parameters;

pub use dependency_list::DependencyList;
pub use fallback_table::FallbackLookupTable;
pub use request_parameters::RequestParameters;
