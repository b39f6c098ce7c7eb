use super::User;
use crate::api::wire::{nullable, optional_date};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A coaching client of the authenticated trainer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Client {
    pub id: u64,
    #[serde(default)]
    pub organization_id: Option<u64>,
    #[serde(default)]
    pub trainer_id: Option<u64>,
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Attached during hydration when a user with `user_id` is present in the same response.
    #[serde(skip_deserializing)]
    pub user: Option<User>,

    #[serde(default)]
    pub completed_workouts_count: Option<u32>,
    #[serde(default)]
    pub compliance_rate_month: Option<f64>,
    #[serde(default)]
    pub compliance_rate_quarter: Option<f64>,
    #[serde(default)]
    pub compliance_rate_week: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "is_delinquent", deserialize_with = "nullable")]
    pub delinquent: bool,
    #[serde(default, deserialize_with = "optional_date")]
    pub due: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_date_locked: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub hide_from_feed: bool,
    #[serde(default)]
    pub missed_sessions_count: Option<u32>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, rename = "is_transferring", deserialize_with = "nullable")]
    pub transferring: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "nullable")]
    pub links: ClientLinks,
    #[serde(default, deserialize_with = "nullable")]
    pub settings: ClientSettings,
}

/// Relative API paths to the client's related collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientLinks {
    pub assessment_groups: Option<String>,
    pub assessments: Option<String>,
    pub conversation: Option<String>,
    pub daily_nutrition_logs: Option<String>,
    pub health_trackings: Option<String>,
    pub notes: Option<String>,
    pub nutrition_plan: Option<String>,
    pub photo_sessions: Option<String>,
    pub skeletons: Option<String>,
    pub stripe_subscriptions: Option<String>,
    pub weight_trackings: Option<String>,
    pub workouts: Option<String>,
}

/// Per-client notification preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    #[serde(default, deserialize_with = "nullable")]
    pub current_week_only: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub daily_workout_emails: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub missed_workouts_emails: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub new_comment_emails: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub new_message_emails: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub override_defaults: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub weekly_digest: bool,
    #[serde(default)]
    pub workouts_threshold: Option<u32>,
}
