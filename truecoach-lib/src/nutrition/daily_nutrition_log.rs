use crate::api::wire::{nullable, optional_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of the `/clients/{id}/daily_nutrition_logs` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyNutritionLogsResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub daily_nutrition_logs: Vec<DailyNutritionLog>,
}

/// What a client logged for one day next to that day's goals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DailyNutritionLog {
    pub id: u64,
    #[serde(default)]
    pub client_id: u64,
    #[serde(default, deserialize_with = "optional_date")]
    pub due: Option<NaiveDate>,

    #[serde(default, deserialize_with = "nullable")]
    pub goal_calories: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub actual_calories: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub goal_carbs: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub actual_carbs: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub goal_protein: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub actual_protein: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub goal_fat: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub actual_fat: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub goal_fiber: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub actual_fiber: i64,

    #[serde(default, rename = "is_editable", deserialize_with = "nullable")]
    pub editable: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: String,

    /// Passed through untouched; the API does not document their shape.
    #[serde(default, deserialize_with = "nullable")]
    pub attachments: Vec<serde_json::Value>,
}

impl DailyNutritionLog {
    /// Logged calories as a fraction of the goal, or `None` without a goal.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "calorie counts are far below 2^52")]
    pub fn calorie_ratio(&self) -> Option<f64> {
        (self.goal_calories > 0).then(|| self.actual_calories as f64 / self.goal_calories as f64)
    }
}
