use chrono::{DateTime, Utc};
use serde::Serialize;

/// One dated observation of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub id: u64,
    pub value: f64,
    pub date: DateTime<Utc>,
}
