//! Nutrition plans and daily nutrition logs
//!
//! Both endpoints return a single wrapped value with no related collections, so unlike
//! [`clients`](crate::clients) and [`metrics`](crate::metrics) there is nothing to hydrate.

mod daily_nutrition_log;
mod nutrition_plan;

pub use daily_nutrition_log::{DailyNutritionLog, DailyNutritionLogsResponse};
pub use nutrition_plan::{MacroTargets, NutritionPlan, NutritionPlanResponse};
