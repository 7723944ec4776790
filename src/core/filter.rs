//! Composable entity predicates built from criteria
//!
//! A [`Filter`] decides whether a single entity matches. Three comparison
//! policies exist: exact value equality ([`ByValue`]), case-insensitive
//! substring matching ([`ByContains`]) and inclusive intervals
//! ([`ByInterval`]). [`CompositeFilter`] AND-combines any number of filters.
//!
//! Composition is AND-only on purpose: the observed use case is narrowing
//! (name-contains AND category-equals), and AND keeps the evaluation
//! semantics trivial to reason about and test. OR/NOT support belongs in an
//! explicit expression-tree type, not in a silent change to
//! `CompositeFilter`.

use std::sync::Arc;

use crate::core::criterion::Criterion;

/// A matching rule over entities of type `T`.
///
/// Evaluation is pure, synchronous computation over in-memory data; it never
/// fails for well-formed entities.
pub trait Filter<T>: Send + Sync {
    /// Whether the entity satisfies this filter.
    fn is_satisfied_by(&self, entity: &T) -> bool;
}

/// Matches when the extracted value equals the target exactly.
///
/// Equality is exact for the value type; for strings this is case-sensitive
/// by design — [`ByContains`] is the case-insensitive rule.
pub struct ByValue<T, V> {
    criterion: Criterion<T, V>,
    value: V,
}

impl<T, V: PartialEq> ByValue<T, V> {
    pub fn new(criterion: Criterion<T, V>, value: V) -> Self {
        Self { criterion, value }
    }
}

impl<T, V> Filter<T> for ByValue<T, V>
where
    V: PartialEq + Send + Sync,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        match self.criterion.evaluate(entity) {
            Some(value) => value == self.value,
            None => false,
        }
    }
}

/// Matches when the extracted string contains the needle, ignoring case.
///
/// An absent extracted value never matches and never panics.
pub struct ByContains<T> {
    criterion: Criterion<T, String>,
    needle: String,
}

impl<T> ByContains<T> {
    pub fn new(criterion: Criterion<T, String>, needle: impl Into<String>) -> Self {
        Self {
            criterion,
            // Lowercased once here so evaluation only lowercases the haystack.
            needle: needle.into().to_lowercase(),
        }
    }
}

impl<T> Filter<T> for ByContains<T> {
    fn is_satisfied_by(&self, entity: &T) -> bool {
        match self.criterion.evaluate(entity) {
            Some(value) => value.to_lowercase().contains(&self.needle),
            None => false,
        }
    }
}

/// Matches when `min <= value <= max` under the value type's total order.
///
/// Both bounds are inclusive. A filter constructed with `min > max` is an
/// empty range and matches nothing; it is not rejected at construction.
pub struct ByInterval<T, V> {
    criterion: Criterion<T, V>,
    min: V,
    max: V,
}

impl<T, V: Ord> ByInterval<T, V> {
    pub fn new(criterion: Criterion<T, V>, min: V, max: V) -> Self {
        Self { criterion, min, max }
    }
}

impl<T, V> Filter<T> for ByInterval<T, V>
where
    V: Ord + Send + Sync,
{
    fn is_satisfied_by(&self, entity: &T) -> bool {
        match self.criterion.evaluate(entity) {
            Some(value) => value >= self.min && value <= self.max,
            None => false,
        }
    }
}

/// An ordered AND-combination of filters.
///
/// An empty composite is vacuously true for every entity — "no filters
/// selected" means "all entities pass". Members are held as
/// `Arc<dyn Filter<T>>`; removal is by `Arc` pointer identity.
pub struct CompositeFilter<T> {
    filters: Vec<Arc<dyn Filter<T>>>,
}

impl<T> CompositeFilter<T> {
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Append a filter to the evaluation list.
    ///
    /// Order affects only short-circuit efficiency, never the result.
    pub fn add(&mut self, filter: Arc<dyn Filter<T>>) {
        self.filters.push(filter);
    }

    /// Remove a filter by pointer identity. Removing a filter that is not a
    /// member is a no-op.
    pub fn remove(&mut self, filter: &Arc<dyn Filter<T>>) {
        if let Some(index) = self.filters.iter().position(|f| Arc::ptr_eq(f, filter)) {
            self.filters.remove(index);
        }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Keep the entities satisfying every member filter, preserving input
    /// order.
    pub fn filter(&self, entities: Vec<T>) -> Vec<T> {
        entities
            .into_iter()
            .filter(|entity| self.is_satisfied_by(entity))
            .collect()
    }
}

impl<T> Default for CompositeFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Filter<T> for CompositeFilter<T> {
    /// True only if every member filter matches; short-circuits on the first
    /// failure. Vacuously true when empty.
    fn is_satisfied_by(&self, entity: &T) -> bool {
        self.filters.iter().all(|f| f.is_satisfied_by(entity))
    }
}
