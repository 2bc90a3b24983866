mod fixture_matcher;
mod html_link_scanner;
mod request_validator;

pub use fixture_matcher::FixtureMatcher;
pub use html_link_scanner::{HtmlLinkScanner, Links, Tag, Tags};
pub use request_validator::{RequestValidator, ValidationError};
