use crate::metrics::{Assessment, Group, Metrics};
use serde::Serialize;

/// A group together with the subset of its assessments to report.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSelection<'a> {
    pub id: u64,
    pub name: &'a str,
    pub assessments: Vec<&'a Assessment>,
}

/// Pick the groups and assessments to report, both ordered by id.
///
/// `group` and `assessment` are fuzzy names. A group filter keeps at most one group. An
/// assessment filter keeps at most one assessment per group and drops groups without a match.
#[must_use]
pub fn select_metrics<'a>(metrics: &'a Metrics, group: Option<&str>, assessment: Option<&str>) -> Vec<GroupSelection<'a>> {
    let mut groups: Vec<&Group> = match group {
        Some(name) => metrics.find_group(name).into_iter().collect(),
        None => metrics.groups().collect(),
    };
    groups.sort_by_key(|group| group.id());

    groups
        .into_iter()
        .filter_map(|group| {
            let assessments: Vec<&Assessment> = match assessment {
                Some(name) => group.find_assessment(name).into_iter().collect(),
                None => {
                    let mut all: Vec<_> = group.assessments().values().collect();
                    all.sort_by_key(|assessment| assessment.id());
                    all
                }
            };

            if assessment.is_some() && assessments.is_empty() {
                return None;
            }

            Some(GroupSelection {
                id: group.id(),
                name: group.name(),
                assessments,
            })
        })
        .collect()
}
