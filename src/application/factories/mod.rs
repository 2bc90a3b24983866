/// Factories for creating adapter instances
mod source_factory;

pub use source_factory::{SelectedSource, SourceFactory, SourceType};
