//! [`MovieCatalog`]: the in-memory, insertion-ordered movie collection.
//!
//! Records live in an [`IndexMap`] keyed by [`MovieId`]. The map's order is
//! the addressing order, so the 1-based position of a record is its index
//! plus one. Deleting a record shifts every later record down one position
//! while their ids stay put, and ids are never handed out twice.

use indexmap::IndexMap;

use crate::error::CoreError;
use crate::filter::CategoryPair;
use crate::id::MovieId;
use crate::movie::{MovieDraft, MovieRecord};
use crate::seed::seed_drafts;

#[derive(Debug, Clone)]
pub struct MovieCatalog {
    records: IndexMap<MovieId, MovieRecord>,
    /// Id the next created record receives.
    next_id: MovieId,
}

impl MovieCatalog {
    /// Creates an empty catalog whose first record will get id `1`.
    pub fn new() -> Self {
        MovieCatalog {
            records: IndexMap::new(),
            next_id: MovieId(1),
        }
    }

    /// Creates a catalog holding the fixed seed set, with ids `1..=14`.
    pub fn seeded() -> Self {
        Self::from_drafts(seed_drafts())
    }

    pub fn from_drafts(drafts: impl IntoIterator<Item = MovieDraft>) -> Self {
        let mut catalog = Self::new();
        for draft in drafts {
            catalog.create(draft);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &MovieRecord> + '_ {
        self.records.values()
    }

    /// Looks up a record by its stable id.
    pub fn get(&self, id: MovieId) -> Option<&MovieRecord> {
        self.records.get(&id)
    }

    /// Current 1-based position of the record with `id`, if present.
    pub fn position_of(&self, id: MovieId) -> Option<usize> {
        self.records.get_index_of(&id).map(|index| index + 1)
    }

    /// Returns the record at 1-based `position`.
    pub fn get_by_position(&self, position: usize) -> Result<&MovieRecord, CoreError> {
        let index = self.index_of(position)?;
        self.records
            .get_index(index)
            .map(|(_, record)| record)
            .ok_or(CoreError::NotFound { position })
    }

    /// Records whose category equals either category of `pair`, in order.
    pub fn filter_by_category_pair<'a>(
        &'a self,
        pair: &'a CategoryPair,
    ) -> impl Iterator<Item = &'a MovieRecord> + 'a {
        self.records
            .values()
            .filter(move |record| pair.matches(&record.category))
    }

    /// Appends a new record built from `draft` and returns it.
    pub fn create(&mut self, draft: MovieDraft) -> &MovieRecord {
        let id = self.next_id;
        self.next_id = id.next();
        let (index, _) = self
            .records
            .insert_full(id, MovieRecord::from_draft(id, draft));
        &self.records[index]
    }

    /// Replaces the fields of the record at `position`, keeping its id.
    pub fn update_by_position(
        &mut self,
        position: usize,
        draft: MovieDraft,
    ) -> Result<&MovieRecord, CoreError> {
        let index = self.index_of(position)?;
        let (_, record) = self
            .records
            .get_index_mut(index)
            .ok_or(CoreError::NotFound { position })?;
        record.apply(draft);
        Ok(&*record)
    }

    /// Removes and returns the record at `position`. Later records move up
    /// one position.
    pub fn delete_by_position(&mut self, position: usize) -> Result<MovieRecord, CoreError> {
        let index = self.index_of(position)?;
        self.records
            .shift_remove_index(index)
            .map(|(_, record)| record)
            .ok_or(CoreError::NotFound { position })
    }

    fn index_of(&self, position: usize) -> Result<usize, CoreError> {
        position
            .checked_sub(1)
            .filter(|index| *index < self.records.len())
            .ok_or(CoreError::NotFound { position })
    }
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}
