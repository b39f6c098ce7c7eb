use super::{Group, NamePattern};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

static EMPTY_GROUP: LazyLock<Group> = LazyLock::new(Group::default);

/// Resolved assessment data for one client, keyed by group id.
///
/// Built once by [`MetricsResponse::resolve`](super::MetricsResponse::resolve) and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Metrics {
    groups: HashMap<u64, Group>,
}

impl Metrics {
    #[must_use]
    pub fn get(&self, group_id: u64) -> Option<&Group> {
        self.groups.get(&group_id)
    }

    /// Groups in unspecified order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of samples across all groups and assessments.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.groups
            .values()
            .flat_map(|group| group.assessments().values())
            .map(|assessment| assessment.samples().len())
            .sum()
    }

    /// Find a group by name, see [`NamePattern`] for the matching rules.
    ///
    /// When several groups match, which one is returned is unspecified.
    #[must_use]
    pub fn find_group(&self, name: &str) -> Option<&Group> {
        let pattern = NamePattern::new(name);
        self.groups.values().find(|group| pattern.matches(group.name()))
    }

    /// Like [`Self::find_group`], but returns an empty group and `false` when nothing matches.
    #[must_use]
    pub fn group(&self, name: &str) -> (&Group, bool) {
        self.find_group(name).map_or((&*EMPTY_GROUP, false), |group| (group, true))
    }

    #[expect(unused_results, reason = "duplicate ids overwrite, last write wins")]
    pub(super) fn insert_group(&mut self, group: Group) {
        self.groups.insert(group.id(), group);
    }

    pub(super) fn group_mut(&mut self, group_id: u64) -> Option<&mut Group> {
        self.groups.get_mut(&group_id)
    }
}
