pub mod client;
pub mod response;

pub use client::{JSON_CONTENT_TYPE, Request, RestClient};
pub use response::Response;
