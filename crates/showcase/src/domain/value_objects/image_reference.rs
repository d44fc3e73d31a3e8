//! ImageReference - Recognizes which image references still need uploading
//!
//! A reference needing upload is a base64 data URL of an image or a video:
//!
//! ```text
//! data:image/png;base64,iVBORw0KGgo...
//! data:video/mp4;base64,AAAAIGZ0eXBp...
//! ```
//!
//! Both media kinds are held to the same rule: the header before the first
//! comma must end in `;base64` and the payload after it must be non-empty
//! and made only of base64 alphabet characters.

use serde::{Deserialize, Serialize};

const IMAGE_DATA_PREFIX: &str = "data:image/";
const VIDEO_DATA_PREFIX: &str = "data:video/";
const BASE64_MARKER: &str = ";base64";

/// Shape of an image reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageReference {
    ImageDataUrl,
    VideoDataUrl,
    RemoteUrl,
    Other,
}

impl ImageReference {
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with(IMAGE_DATA_PREFIX) {
            Self::ImageDataUrl
        } else if reference.starts_with(VIDEO_DATA_PREFIX) {
            Self::VideoDataUrl
        } else if reference.starts_with("https://") || reference.starts_with("http://") {
            Self::RemoteUrl
        } else {
            Self::Other
        }
    }

    pub fn is_data_url(self) -> bool {
        matches!(self, Self::ImageDataUrl | Self::VideoDataUrl)
    }

    /// Whether `reference` is an embedded payload that must go through the upload service
    pub fn needs_upload(reference: &str) -> bool {
        Self::classify(reference).is_data_url() && has_base64_payload(reference)
    }
}

fn has_base64_payload(reference: &str) -> bool {
    let Some((header, payload)) = reference.split_once(',') else {
        return false;
    };

    header.ends_with(BASE64_MARKER)
        && !payload.is_empty()
        && payload
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
}
