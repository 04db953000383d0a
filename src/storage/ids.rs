//! Identity allocation
//!
//! One monotonically increasing counter per entity kind, each starting at 1.
//! Counters are independent: creating authors never advances the category
//! counter. Ids are never reused.

use crate::model::EntityKind;

#[derive(Debug, Clone)]
pub struct IdAllocator {
    authors: i64,
    categories: i64,
    articles: i64,
    comments: i64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            authors: 1,
            categories: 1,
            articles: 1,
            comments: 1,
        }
    }

    fn counter_mut(&mut self, kind: EntityKind) -> &mut i64 {
        match kind {
            EntityKind::Author => &mut self.authors,
            EntityKind::Category => &mut self.categories,
            EntityKind::Article => &mut self.articles,
            EntityKind::Comment => &mut self.comments,
        }
    }

    /// The id the next `next(kind)` call will hand out
    pub fn peek(&self, kind: EntityKind) -> i64 {
        match kind {
            EntityKind::Author => self.authors,
            EntityKind::Category => self.categories,
            EntityKind::Article => self.articles,
            EntityKind::Comment => self.comments,
        }
    }

    /// Take the next id for `kind`
    pub fn next(&mut self, kind: EntityKind) -> i64 {
        let counter = self.counter_mut(kind);
        let id = *counter;
        *counter += 1;
        id
    }
}
