use crate::api::wire::nullable;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Body of the `/clients/{id}/nutrition_plan` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutritionPlanResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub nutrition_plan: NutritionPlan,
}

/// Daily macro targets a trainer assigned to a client, one set per weekday.
///
/// Missing or null targets decode as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NutritionPlan {
    #[serde(deserialize_with = "nullable")]
    pub threshold: i64,
    #[serde(deserialize_with = "nullable")]
    pub description: String,

    #[serde(deserialize_with = "nullable")]
    pub mon_carbs: i64,
    #[serde(deserialize_with = "nullable")]
    pub mon_fat: i64,
    #[serde(deserialize_with = "nullable")]
    pub mon_protein: i64,
    #[serde(deserialize_with = "nullable")]
    pub mon_fiber: i64,
    #[serde(deserialize_with = "nullable")]
    pub mon_calories: i64,

    #[serde(deserialize_with = "nullable")]
    pub tue_carbs: i64,
    #[serde(deserialize_with = "nullable")]
    pub tue_fat: i64,
    #[serde(deserialize_with = "nullable")]
    pub tue_protein: i64,
    #[serde(deserialize_with = "nullable")]
    pub tue_fiber: i64,
    #[serde(deserialize_with = "nullable")]
    pub tue_calories: i64,

    #[serde(deserialize_with = "nullable")]
    pub wed_carbs: i64,
    #[serde(deserialize_with = "nullable")]
    pub wed_fat: i64,
    #[serde(deserialize_with = "nullable")]
    pub wed_protein: i64,
    #[serde(deserialize_with = "nullable")]
    pub wed_fiber: i64,
    #[serde(deserialize_with = "nullable")]
    pub wed_calories: i64,

    #[serde(deserialize_with = "nullable")]
    pub thu_carbs: i64,
    #[serde(deserialize_with = "nullable")]
    pub thu_fat: i64,
    #[serde(deserialize_with = "nullable")]
    pub thu_protein: i64,
    #[serde(deserialize_with = "nullable")]
    pub thu_fiber: i64,
    #[serde(deserialize_with = "nullable")]
    pub thu_calories: i64,

    #[serde(deserialize_with = "nullable")]
    pub fri_carbs: i64,
    #[serde(deserialize_with = "nullable")]
    pub fri_fat: i64,
    #[serde(deserialize_with = "nullable")]
    pub fri_protein: i64,
    #[serde(deserialize_with = "nullable")]
    pub fri_fiber: i64,
    #[serde(deserialize_with = "nullable")]
    pub fri_calories: i64,

    #[serde(deserialize_with = "nullable")]
    pub sat_carbs: i64,
    #[serde(deserialize_with = "nullable")]
    pub sat_fat: i64,
    #[serde(deserialize_with = "nullable")]
    pub sat_protein: i64,
    #[serde(deserialize_with = "nullable")]
    pub sat_fiber: i64,
    #[serde(deserialize_with = "nullable")]
    pub sat_calories: i64,

    #[serde(deserialize_with = "nullable")]
    pub sun_carbs: i64,
    #[serde(deserialize_with = "nullable")]
    pub sun_fat: i64,
    #[serde(deserialize_with = "nullable")]
    pub sun_protein: i64,
    #[serde(deserialize_with = "nullable")]
    pub sun_fiber: i64,
    #[serde(deserialize_with = "nullable")]
    pub sun_calories: i64,
}

/// One day's worth of targets out of a [`NutritionPlan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroTargets {
    pub carbs: i64,
    pub fat: i64,
    pub protein: i64,
    pub fiber: i64,
    pub calories: i64,
}

impl NutritionPlan {
    /// Targets for a given day of the week.
    #[must_use]
    pub const fn targets(&self, day: Weekday) -> MacroTargets {
        match day {
            Weekday::Mon => MacroTargets {
                carbs: self.mon_carbs,
                fat: self.mon_fat,
                protein: self.mon_protein,
                fiber: self.mon_fiber,
                calories: self.mon_calories,
            },
            Weekday::Tue => MacroTargets {
                carbs: self.tue_carbs,
                fat: self.tue_fat,
                protein: self.tue_protein,
                fiber: self.tue_fiber,
                calories: self.tue_calories,
            },
            Weekday::Wed => MacroTargets {
                carbs: self.wed_carbs,
                fat: self.wed_fat,
                protein: self.wed_protein,
                fiber: self.wed_fiber,
                calories: self.wed_calories,
            },
            Weekday::Thu => MacroTargets {
                carbs: self.thu_carbs,
                fat: self.thu_fat,
                protein: self.thu_protein,
                fiber: self.thu_fiber,
                calories: self.thu_calories,
            },
            Weekday::Fri => MacroTargets {
                carbs: self.fri_carbs,
                fat: self.fri_fat,
                protein: self.fri_protein,
                fiber: self.fri_fiber,
                calories: self.fri_calories,
            },
            Weekday::Sat => MacroTargets {
                carbs: self.sat_carbs,
                fat: self.sat_fat,
                protein: self.sat_protein,
                fiber: self.sat_fiber,
                calories: self.sat_calories,
            },
            Weekday::Sun => MacroTargets {
                carbs: self.sun_carbs,
                fat: self.sun_fat,
                protein: self.sun_protein,
                fiber: self.sun_fiber,
                calories: self.sun_calories,
            },
        }
    }

    /// Targets for every day, Monday first.
    pub fn week(&self) -> impl Iterator<Item = (Weekday, MacroTargets)> + '_ {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(|day| (day, self.targets(day)))
    }
}
