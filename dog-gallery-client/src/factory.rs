//! Source factory.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::sources::{DemoDogSource, DogApiClient};
use crate::traits::DogSource;

/// Which source to build and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSettings {
    /// Talk to the HTTP API at `base_url`.
    Http {
        base_url: String,
        /// `None` means requests may wait forever.
        timeout: Option<Duration>,
    },
    /// Serve the built-in catalogue.
    Demo { latency: Duration },
}

/// Creates a [`DogSource`] from the given settings.
///
/// The result is wrapped in `Arc<dyn DogSource>` so it can be shared with
/// every spawned fetch task.
///
/// ```rust,no_run
/// use dog_gallery_client::{create_source, SourceSettings};
///
/// let source = create_source(SourceSettings::Http {
///     base_url: "http://localhost:8000".to_string(),
///     timeout: None,
/// }).unwrap();
/// ```
pub fn create_source(settings: SourceSettings) -> Result<Arc<dyn DogSource>> {
    match settings {
        SourceSettings::Http { base_url, timeout } => {
            Ok(Arc::new(DogApiClient::with_timeout(base_url, timeout)?))
        }
        SourceSettings::Demo { latency } => {
            Ok(Arc::new(DemoDogSource::new().with_latency(latency)))
        }
    }
}
