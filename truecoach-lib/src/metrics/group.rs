use super::{Assessment, NamePattern};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

static EMPTY_ASSESSMENT: LazyLock<Assessment> = LazyLock::new(Assessment::default);

/// A category of assessments, such as "Body Composition".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    id: u64,
    name: String,
    assessments: HashMap<u64, Assessment>,
}

impl Group {
    #[must_use]
    pub fn new(id: u64, name: String) -> Self {
        Self {
            id,
            name,
            assessments: HashMap::new(),
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

    /// Assessments keyed by assessment id.
    #[must_use]
    pub const fn assessments(&self) -> &HashMap<u64, Assessment> {
        &self.assessments
    }

    /// Find an assessment by name, see [`NamePattern`] for the matching rules.
    ///
    /// When several assessments match, which one is returned is unspecified.
    #[must_use]
    pub fn find_assessment(&self, name: &str) -> Option<&Assessment> {
        let pattern = NamePattern::new(name);
        self.assessments.values().find(|assessment| pattern.matches(assessment.name()))
    }

    /// Like [`Self::find_assessment`], but returns an empty assessment and `false` when nothing matches.
    #[must_use]
    pub fn assessment(&self, name: &str) -> (&Assessment, bool) {
        self.find_assessment(name).map_or((&*EMPTY_ASSESSMENT, false), |assessment| (assessment, true))
    }

    #[expect(unused_results, reason = "duplicate ids overwrite, last write wins")]
    pub(super) fn insert_assessment(&mut self, assessment: Assessment) {
        self.assessments.insert(assessment.id(), assessment);
    }

    pub(super) fn assessment_mut(&mut self, id: u64) -> Option<&mut Assessment> {
        self.assessments.get_mut(&id)
    }
}
