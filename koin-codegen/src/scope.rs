//! Partitioning of definitions into unscoped and per-scope groups.

use std::collections::HashSet;

use crate::model::{Definition, Scope};

/// Definitions sharing one scope, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeGroup<'a> {
    /// Scope shared by every member.
    pub scope: &'a Scope,
    /// Members in input order.
    pub members: Vec<&'a Definition>,
}

/// Result of [`group_by_scope`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping<'a> {
    /// Unscoped definitions in input order.
    pub unscoped: Vec<&'a Definition>,
    /// Scope groups ordered by first occurrence of their scope.
    pub scoped: Vec<ScopeGroup<'a>>,
}

/// What the chunk planner counts: a single definition or a whole scope group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionUnit<'a> {
    /// One unscoped definition.
    Single(&'a Definition),
    /// One scope group, counted once regardless of its size.
    Group(ScopeGroup<'a>),
}

impl<'a> Grouping<'a> {
    /// Total number of emission units.
    #[must_use]
    pub const fn unit_count(&self) -> usize {
        self.unscoped.len() + self.scoped.len()
    }

    /// Emission units: unscoped definitions first, then scope groups.
    #[must_use]
    pub fn into_units(self) -> Vec<EmissionUnit<'a>> {
        self.unscoped
            .into_iter()
            .map(EmissionUnit::Single)
            .chain(self.scoped.into_iter().map(EmissionUnit::Group))
            .collect()
    }
}

/// Drops exact-duplicate definitions, keeping the first occurrence of each.
#[must_use]
pub fn dedup_first_occurrence<'a, I>(definitions: I) -> Vec<&'a Definition>
where
    I: IntoIterator<Item = &'a Definition>,
{
    let mut seen = HashSet::new();
    definitions
        .into_iter()
        .filter(|definition| seen.insert(*definition))
        .collect()
}

/// Splits `definitions` into unscoped definitions and scope groups.
///
/// Duplicates are removed first (see [`dedup_first_occurrence`]). Relative
/// order is preserved inside every partition, and groups appear in the order
/// their scope is first seen, so the result is stable across runs.
#[must_use]
pub fn group_by_scope<'a, I>(definitions: I) -> Grouping<'a>
where
    I: IntoIterator<Item = &'a Definition>,
{
    let mut grouping = Grouping::default();
    for definition in dedup_first_occurrence(definitions) {
        let Some(scope) = definition.scope.as_ref() else {
            grouping.unscoped.push(definition);
            continue;
        };
        match grouping.scoped.iter_mut().find(|group| group.scope == scope) {
            Some(group) => group.members.push(definition),
            None => grouping.scoped.push(ScopeGroup {
                scope,
                members: vec![definition],
            }),
        }
    }
    grouping
}
