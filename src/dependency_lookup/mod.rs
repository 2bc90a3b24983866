/// Dependency lookup domain - models and pure services
///
/// Nothing in this module performs I/O. Backends and presentation live in
/// the adapters layer and depend on the types defined here.
pub mod domain;
pub mod services;
