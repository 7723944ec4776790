//! Named field-extraction strategies used as the basis of filter judgments

/// A criterion is a named, pure rule extracting one comparable value from an
/// entity.
///
/// Criteria are the open end of the filter machinery: a new query dimension
/// is added by declaring a new criterion, never by touching filter logic.
/// The extractor is a plain `fn` pointer, so criteria are stateless, `Copy`,
/// and safe to share across threads and calls.
///
/// `evaluate` returns `None` when the entity has no value for the dimension;
/// every filter treats an absent value as non-matching.
pub struct Criterion<T, V> {
    name: &'static str,
    extract: fn(&T) -> Option<V>,
}

impl<T, V> Criterion<T, V> {
    /// Create a criterion from a name and an extraction function.
    pub const fn new(name: &'static str, extract: fn(&T) -> Option<V>) -> Self {
        Self { name, extract }
    }

    /// The dimension name, used for logging and debugging.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Extract this criterion's value from an entity.
    ///
    /// Pure and total: never fails and never mutates for well-formed
    /// entities.
    pub fn evaluate(&self, entity: &T) -> Option<V> {
        (self.extract)(entity)
    }
}

impl<T, V> Clone for Criterion<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Criterion<T, V> {}

impl<T, V> std::fmt::Debug for Criterion<T, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Criterion").field("name", &self.name).finish()
    }
}
