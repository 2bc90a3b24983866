/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (fixture files, the
/// package index, the console) through the traits defined here.
pub mod outbound;
