use super::types::EntityKind;

/// Per-kind identifier counters.
///
/// Each counter holds the last id handed out, so the first allocation is 1.
/// Ids are never reused.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    users: i64,
    categories: i64,
    articles: i64,
    solutions: i64,
}

impl IdAllocator {
    /// Allocate the next id for `kind`.
    ///
    /// Call only once the record is known to be accepted; a rejected create
    /// must not burn an id.
    pub(crate) fn next(&mut self, kind: EntityKind) -> i64 {
        let counter = self.counter_mut(kind);
        *counter += 1;
        *counter
    }

    /// Last id allocated for `kind`, or 0 if none.
    #[cfg(test)]
    pub(crate) fn last(&self, kind: EntityKind) -> i64 {
        match kind {
            EntityKind::User => self.users,
            EntityKind::Category => self.categories,
            EntityKind::Article => self.articles,
            EntityKind::Solution => self.solutions,
        }
    }

    fn counter_mut(&mut self, kind: EntityKind) -> &mut i64 {
        match kind {
            EntityKind::User => &mut self.users,
            EntityKind::Category => &mut self.categories,
            EntityKind::Article => &mut self.articles,
            EntityKind::Solution => &mut self.solutions,
        }
    }
}
