/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain and selects infrastructure adapters
/// through the ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
