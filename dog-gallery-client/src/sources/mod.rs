//! Concrete [`DogSource`](crate::DogSource) implementations.

mod demo;
mod http;

pub use demo::{DEMO_PAGE_SIZE, DemoDogSource};
pub use http::{DATA_PATH, DogApiClient, decode_response};
