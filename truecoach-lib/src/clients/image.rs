use crate::api::wire::nullable;
use serde::{Deserialize, Serialize};

/// An uploaded image, typically a user's avatar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    pub id: u64,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "uploaded_by_id")]
    pub uploader_id: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub parent: ImageParent,
}

/// The record an image is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageParent {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
