//! # dog-gallery-client
//!
//! Client library for a paginated dog listing served at
//! `GET /api/data?page=<n>`.
//!
//! ## Wire format
//!
//! ```json
//! { "status": "success", "data": [ { "breed": "Pug", "image": "https://..." } ] }
//! { "status": "error", "message": "..." }
//! ```
//!
//! ## Sources
//!
//! | Source | Settings | Notes |
//! |--------|----------|-------|
//! | [`DogApiClient`] | [`SourceSettings::Http`] | reqwest, optional timeout |
//! | [`DemoDogSource`] | [`SourceSettings::Demo`] | built-in catalogue, 5 per page |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dog_gallery_client::{create_source, DogSource, SourceSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(SourceSettings::Http {
//!         base_url: "http://localhost:8000".to_string(),
//!         timeout: None,
//!     })?;
//!
//!     for dog in source.fetch_page(1).await? {
//!         println!("{} -> {}", dog.breed, dog.image_url());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every failure is a [`ClientError`] whose `Display` text is ready to show
//! to a user. HTTP 500 always becomes [`ClientError::Server`]; other non-2xx
//! statuses keep the server's `message` when the body has one. Nothing is
//! retried.

mod error;
mod factory;
mod http_client;
mod sources;
mod traits;
mod types;

pub use error::{ClientError, DEFAULT_API_ERROR_MESSAGE, Result, SERVER_ERROR_MESSAGE};

pub use factory::{SourceSettings, create_source};

pub use traits::DogSource;

pub use types::{DogRecord, Envelope, EnvelopeStatus, PLACEHOLDER_IMAGE_URL};

pub use sources::{DATA_PATH, DEMO_PAGE_SIZE, DemoDogSource, DogApiClient, decode_response};

pub use http_client::truncate_for_log;
