/// Filesystem adapters for file I/O operations
mod fixture_file_source;

pub use fixture_file_source::FixtureFileSource;
