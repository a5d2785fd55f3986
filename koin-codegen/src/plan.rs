//! Chunk planning: splitting emission units into size-capped routines.
//!
//! The JVM rejects methods above a fixed bytecode size, so a module's
//! registrations are spread over numbered routines of at most `R` units
//! each. Planning is a pure function of the unit list; the dispatcher calls
//! and the routine bodies are both emitted from the same [`ChunkPlan`].

use std::num::NonZeroUsize;

/// Units assigned to one routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    /// Routine number, used as the suffix of the routine name.
    pub index: usize,
    /// Units in emission order; never more than the plan capacity.
    pub units: Vec<T>,
}

/// Materialised assignment of units to routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan<T> {
    capacity: NonZeroUsize,
    total_units: usize,
    chunks: Vec<Chunk<T>>,
}

impl<T> ChunkPlan<T> {
    /// Maximum units per routine.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Number of planned units.
    #[must_use]
    pub const fn total_units(&self) -> usize {
        self.total_units
    }

    /// Routines that received at least one unit, in ascending index order.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk<T>] {
        &self.chunks
    }

    /// Number of dispatcher calls emitted for the plan.
    ///
    /// Computed as `total_units / R + 1`. This matches the routine count
    /// except when `total_units` is an exact multiple of `R`, including zero
    /// units, where one extra call names a routine that is never opened.
    #[must_use]
    pub fn dispatcher_count(&self) -> usize {
        self.total_units / self.capacity + 1
    }

    /// `(routine index, unit)` pairs in emission order.
    pub fn assignments(&self) -> impl Iterator<Item = (usize, &T)> {
        self.chunks
            .iter()
            .flat_map(|chunk| chunk.units.iter().map(move |unit| (chunk.index, unit)))
    }
}

/// Assigns unit `i` of `units` to routine `i / capacity`.
///
/// Only routines that receive a unit appear in the plan.
#[must_use]
pub fn plan_chunks<T, I>(units: I, capacity: NonZeroUsize) -> ChunkPlan<T>
where
    I: IntoIterator<Item = T>,
{
    let mut chunks: Vec<Chunk<T>> = Vec::new();
    let mut total_units = 0;
    for (position, unit) in units.into_iter().enumerate() {
        let index = position / capacity;
        match chunks.last_mut() {
            Some(chunk) if chunk.index == index => chunk.units.push(unit),
            _ => chunks.push(Chunk {
                index,
                units: vec![unit],
            }),
        }
        total_units = position + 1;
    }
    ChunkPlan {
        capacity,
        total_units,
        chunks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn cap(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).expect("non-zero capacity")
    }

    #[rstest]
    #[case(0, 2, 0, 1)]
    #[case(1, 2, 1, 1)]
    #[case(2, 2, 1, 2)]
    #[case(3, 2, 2, 2)]
    #[case(1000, 500, 2, 3)]
    #[case(1001, 500, 3, 3)]
    #[case(499, 500, 1, 1)]
    fn routine_and_dispatcher_counts(
        #[case] units: usize,
        #[case] capacity: usize,
        #[case] routines: usize,
        #[case] dispatchers: usize,
    ) {
        let plan = plan_chunks(0..units, cap(capacity));
        assert_eq!(plan.total_units(), units);
        assert_eq!(plan.chunks().len(), routines);
        assert_eq!(plan.dispatcher_count(), dispatchers);
    }

    #[rstest]
    fn no_chunk_exceeds_capacity() {
        let plan = plan_chunks(0..23, cap(5));
        assert!(plan.chunks().iter().all(|chunk| chunk.units.len() <= 5));
        let indices: Vec<_> = plan.chunks().iter().map(|chunk| chunk.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(plan.chunks().last().map(|chunk| chunk.units.len()), Some(3));
    }

    #[rstest]
    fn assignments_preserve_order() {
        let plan = plan_chunks(["a", "b", "c"], cap(2));
        let pairs: Vec<_> = plan.assignments().map(|(index, unit)| (index, *unit)).collect();
        assert_eq!(pairs, vec![(0, "a"), (0, "b"), (1, "c")]);
    }

    #[rstest]
    fn capacity_of_one_gives_one_routine_per_unit() {
        let plan = plan_chunks(0..4, NonZeroUsize::MIN);
        assert_eq!(plan.chunks().len(), 4);
        assert_eq!(plan.dispatcher_count(), 5);
        assert_eq!(plan.capacity(), NonZeroUsize::MIN);
    }
}
