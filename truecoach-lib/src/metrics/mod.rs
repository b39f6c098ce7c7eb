//! Assessment metrics for a client
//!
//! The `/clients/{id}/assessment_groups` endpoint returns three flat collections: assessment
//! groups, assessments, and assessment items. This module joins them into a [`Metrics`]
//! tree (group → assessment → sample) and provides name-based lookup over the result.
//!
//! # Implementation Model
//!
//! [`MetricsResponse::resolve`] performs three strictly ordered passes:
//!
//! 1. **Seed**: one [`Group`] per group record, keyed by id.
//! 2. **Assessments**: each [`Assessment`] is placed under its group. A side table records
//!    which group owns each assessment, because items only carry the assessment id.
//! 3. **Samples**: each item is routed through the side table to its assessment, its raw
//!    value is normalized according to the assessment's [`Unit`], and a [`Sample`] is
//!    appended in arrival order.
//!
//! Unlike client hydration, this join is strict. A reference to an unknown group or
//! assessment aborts resolution, as does a numeric value that cannot be parsed. The
//! [`PartialMetrics`] error still carries everything resolved up to that point.
//!
//! An assessment whose unit is outside the known vocabulary is not an error. Its samples get
//! a zero value and each one is reported through the injected [`Diagnostics`] sink.
//!
//! Groups and assessments can be found by name with [`Metrics::group`] and
//! [`Group::assessment`], which match case-insensitively and ignore a trailing parenthesized
//! qualifier (see [`NamePattern`]).

mod assessment;
mod diagnostics;
mod group;
mod metrics_data;
mod metrics_response;
mod name_pattern;
mod sample;
mod unit;

pub use assessment::Assessment;
pub use diagnostics::{Diagnostics, LogDiagnostics, SilentDiagnostics};
pub use group::Group;
pub use metrics_data::Metrics;
pub use metrics_response::{AssessmentGroupRecord, AssessmentItemRecord, AssessmentRecord, MetricsResponse, PartialMetrics};
pub use name_pattern::NamePattern;
pub use sample::Sample;
pub use unit::{Coercion, Unit};

const LOG_TARGET: &str = "   metrics";
