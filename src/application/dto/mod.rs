/// Data Transfer Objects for application layer
mod lookup_response;

pub use lookup_response::LookupResponse;
