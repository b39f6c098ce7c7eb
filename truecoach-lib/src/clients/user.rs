use super::Image;
use crate::api::wire::nullable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person with a login, either a trainer or a client.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub image_id: Option<u64>,

    /// Attached during hydration when an image with `image_id` is present in the same response.
    #[serde(skip_deserializing)]
    pub image: Option<Image>,

    #[serde(default, rename = "birthday_timestamp")]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable")]
    pub demo: bool,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub in_person: bool,
    #[serde(default)]
    pub invite_accepted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub invite_token: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "is_mfp_connected", deserialize_with = "nullable")]
    pub mfp_connected: bool,
    #[serde(default, rename = "is_online", deserialize_with = "nullable")]
    pub online: bool,
    #[serde(default, rename = "has_pending_invite", deserialize_with = "nullable")]
    pub pending_invite: bool,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub skype: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub timezone_offset: Option<i32>,
    #[serde(default, rename = "has_trainer", deserialize_with = "nullable")]
    pub trainer: bool,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl User {
    /// First and last name joined by a space, skipping whichever is missing.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
