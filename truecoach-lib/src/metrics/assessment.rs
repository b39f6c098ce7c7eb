use super::{Sample, Unit};
use serde::Serialize;

/// A named, unit-typed measurable and its samples.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assessment {
    id: u64,
    name: String,
    unit: Unit,
    samples: Vec<Sample>,
}

impl Assessment {
    #[must_use]
    pub const fn new(id: u64, name: String, unit: Unit) -> Self {
        Self {
            id,
            name,
            unit,
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Samples in the order they arrived from the API, which is not necessarily chronological.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The sample with the latest date, if any.
    #[must_use]
    pub fn latest_sample(&self) -> Option<&Sample> {
        self.samples.iter().max_by_key(|sample| sample.date)
    }

    pub(super) fn push_sample(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}
