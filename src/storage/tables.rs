//! Keyed entity tables
//!
//! A `Table` maps id -> entity. Iteration is always in ascending id order,
//! which is also creation order because ids only ever grow.

use std::collections::BTreeMap;

use crate::model::{Article, Author, Category, Comment};

/// Anything that can live in a `Table`.
pub trait Keyed {
    fn id(&self) -> i64;
}

impl Keyed for Author {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for Article {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Keyed for Comment {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Keyed + Clone> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row under its own id.
    ///
    /// Callers hand out ids from an `IdAllocator`, so a key is never inserted twice.
    pub fn insert(&mut self, row: T) -> &T {
        let id = row.id();
        debug_assert!(!self.rows.contains_key(&id), "id {id} inserted twice");
        self.rows.entry(id).or_insert(row)
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Iterate rows in creation order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Owned copies of every row, in creation order
    pub fn all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// First row (in creation order) matching `predicate`
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.iter().find(|row| predicate(row))
    }

    /// Owned copies of every row matching `predicate`, in creation order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.iter().filter(|row| predicate(row)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
