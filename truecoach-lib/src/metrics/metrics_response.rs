use super::{Assessment, Diagnostics, Group, LOG_TARGET, Metrics, Sample, Unit};
use crate::api::wire::{nullable, padded_string, timestamp};
use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter};
use ohno::{EnrichableExt, app_err};
use serde::Deserialize;
use std::collections::HashMap;

/// Decoded body of the `/clients/{id}/assessment_groups` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub assessment_groups: Vec<AssessmentGroupRecord>,
    #[serde(default)]
    pub assessments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub assessment_items: Vec<AssessmentItemRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentGroupRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRecord {
    pub id: u64,
    #[serde(rename = "assessment_group_id")]
    pub group_id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, rename = "units", deserialize_with = "nullable")]
    pub unit: String,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentItemRecord {
    pub id: u64,
    pub assessment_id: u64,
    /// Raw value with its padding already stripped.
    #[serde(default, deserialize_with = "padded_string")]
    pub value: String,
    /// The Unix epoch when the API sends no date.
    #[serde(default, deserialize_with = "timestamp")]
    pub date: DateTime<Utc>,
}

/// Resolution failure, carrying whatever was resolved before the failing record.
#[derive(Debug)]
pub struct PartialMetrics {
    metrics: Metrics,
    error: ohno::AppError,
}

impl PartialMetrics {
    #[must_use]
    pub const fn new(metrics: Metrics, error: ohno::AppError) -> Self {
        Self { metrics, error }
    }

    /// The metrics resolved before the failure.
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub const fn error(&self) -> &ohno::AppError {
        &self.error
    }

    #[must_use]
    pub fn into_parts(self) -> (Metrics, ohno::AppError) {
        (self.metrics, self.error)
    }

    /// Add context to the error, keeping the partial metrics.
    #[must_use]
    pub fn enrich(self, context: impl Into<String>) -> Self {
        let context: String = context.into();
        Self {
            metrics: self.metrics,
            error: self.error.enrich(context),
        }
    }
}

/// Failures that happen before resolution starts have nothing resolved.
impl From<ohno::AppError> for PartialMetrics {
    fn from(error: ohno::AppError) -> Self {
        Self::new(Metrics::default(), error)
    }
}

/// Only the error's message. The enrichment trail and backtrace are available through
/// [`PartialMetrics::error`].
impl Display for PartialMetrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.error.message())
    }
}

impl MetricsResponse {
    /// Join groups, assessments, and items into [`Metrics`].
    ///
    /// # Errors
    ///
    /// Fails on the first assessment whose group is missing, the first item whose assessment
    /// is missing, or the first decimal value that does not parse. The returned
    /// [`PartialMetrics`] holds everything resolved up to that point.
    pub fn resolve(&self, diagnostics: &dyn Diagnostics) -> Result<Metrics, PartialMetrics> {
        let mut metrics = Metrics::default();

        for group in &self.assessment_groups {
            metrics.insert_group(Group::new(group.id, group.name.clone()));
        }

        // items only reference their assessment, so remember which group owns each one
        let mut assessment_groups: HashMap<u64, u64> = HashMap::with_capacity(self.assessments.len());

        for assessment in &self.assessments {
            let Some(group) = metrics.group_mut(assessment.group_id) else {
                let error = app_err!("missing assessment group '{}'", assessment.group_id);
                return Err(PartialMetrics::new(metrics, error));
            };

            group.insert_assessment(Assessment::new(
                assessment.id,
                assessment.name.clone(),
                Unit::parse(&assessment.unit),
            ));

            let _ = assessment_groups.insert(assessment.id, assessment.group_id);
        }

        for item in &self.assessment_items {
            let Some(&group_id) = assessment_groups.get(&item.assessment_id) else {
                let error = app_err!("missing assessment group mapping '{}'", item.assessment_id);
                return Err(PartialMetrics::new(metrics, error));
            };

            let Some(group) = metrics.group_mut(group_id) else {
                let error = app_err!("missing item group '{group_id}'");
                return Err(PartialMetrics::new(metrics, error));
            };

            let Some(assessment) = group.assessment_mut(item.assessment_id) else {
                let error = app_err!("missing item assessment '{}'", item.assessment_id);
                return Err(PartialMetrics::new(metrics, error));
            };

            if !assessment.unit().is_known() {
                diagnostics.unsupported_unit(assessment.id(), assessment.unit().as_str());
            }

            let value = match assessment.unit().coerce(&item.value) {
                Ok(value) => value,
                Err(e) => {
                    let error = e.enrich(format!("sample {} of assessment {}", item.id, item.assessment_id));
                    return Err(PartialMetrics::new(metrics, error));
                }
            };

            assessment.push_sample(Sample {
                id: item.id,
                value,
                date: item.date,
            });
        }

        log::debug!(
            target: LOG_TARGET,
            "Resolved {} group(s), {} assessment(s), {} sample(s)",
            metrics.len(),
            assessment_groups.len(),
            metrics.sample_count()
        );

        Ok(metrics)
    }
}
