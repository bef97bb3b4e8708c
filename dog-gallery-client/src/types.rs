//! Wire types for the `/api/data` endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Image shown for records whose `image` is empty or missing.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300";

/// A single dog entry.
///
/// Records have no identity beyond their position in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogRecord {
    /// Breed label.
    pub breed: String,
    /// Image URL; `None` when the server sent an empty, blank or null value.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
}

impl DogRecord {
    pub fn new(breed: impl Into<String>, image: impl Into<String>) -> Self {
        let image = image.into();
        Self {
            breed: breed.into(),
            image: (!image.trim().is_empty()).then_some(image),
        }
    }

    /// Image to display, falling back to [`PLACEHOLDER_IMAGE_URL`].
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Whether [`Self::image_url`] is the placeholder.
    pub fn uses_placeholder(&self) -> bool {
        self.image.is_none()
    }
}

/// Envelope `status` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// JSON wrapper returned by the API.
///
/// ```json
/// { "status": "success", "data": [ { "breed": "Pug", "image": "..." } ] }
/// { "status": "error", "message": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: EnvelopeStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<DogRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn success(data: Vec<DogRecord>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data,
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            data: Vec::new(),
            message: Some(message.into()),
        }
    }
}

/// Lenient view of a non-2xx body, used only to dig out a message.
///
/// `detail` is what FastAPI puts in its own error bodies.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(match self.detail {
            Some(serde_json::Value::String(s)) => Some(s),
            _ => None,
        })
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
