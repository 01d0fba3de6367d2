//! Entity Store: the in-memory collection of one domain's records.
//!
//! Mutation happens only through whole-record replacement (`replace`) or insertion at the
//! front (`append` / `append_new`). Nothing is ever removed.

pub mod memo;

use thiserror::Error;

use crate::store::memo::Memo;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("A record with id '{0}' already exists")]
    DuplicateId(String),
}

/// A flat domain record addressable by a unique string id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Prefix of generated ids, e.g. `"LR"` for `LR005`.
    const ID_PREFIX: &'static str;
    /// Minimum digit count of generated ids (zero-padded).
    const ID_WIDTH: usize = 3;

    fn id(&self) -> &str;
}

/// Monotonic id allocator. Starts after the highest numeric suffix seen in the seed, so
/// generated ids never collide with seeded ones.
#[derive(Debug, Clone)]
pub struct IdSequence {
    prefix: &'static str,
    width: usize,
    next: u64,
}

impl IdSequence {
    pub fn new(prefix: &'static str, width: usize) -> Self {
        Self {
            prefix,
            width,
            next: 1,
        }
    }

    /// Advances the counter past `id` if it carries this sequence's prefix.
    pub fn observe(&mut self, id: &str) {
        if let Some(n) = id
            .strip_prefix(self.prefix)
            .and_then(|suffix| suffix.parse::<u64>().ok())
        {
            self.next = self.next.max(n + 1);
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{:0width$}", self.prefix, self.next, width = self.width);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    records: Vec<T>,
    ids: IdSequence,
    revision: u64,
}

impl<T: Entity> EntityStore<T> {
    /// Copies the seed data as the starting state.
    pub fn initialize(seed: Vec<T>) -> Self {
        let mut ids = IdSequence::new(T::ID_PREFIX, T::ID_WIDTH);
        for record in &seed {
            ids.observe(record.id());
        }
        Self {
            records: seed,
            ids,
            revision: 0,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|r| predicate(r))
    }

    /// Replaces the record with `id` by `updater(record)`. Returns the new record, or `None`
    /// (and leaves the store untouched) when no record has that id.
    pub fn replace<F>(&mut self, id: &str, updater: F) -> Option<&T>
    where
        F: FnOnce(&T) -> T,
    {
        let index = self.records.iter().position(|r| r.id() == id)?;
        let updated = updater(&self.records[index]);
        self.records[index] = updated;
        self.revision += 1;
        Some(&self.records[index])
    }

    /// Inserts a caller-built record at the front.
    pub fn append(&mut self, entity: T) -> Result<&T, StoreError> {
        if self.get(entity.id()).is_some() {
            return Err(StoreError::DuplicateId(entity.id().to_string()));
        }
        self.ids.observe(entity.id());
        self.records.insert(0, entity);
        self.revision += 1;
        Ok(&self.records[0])
    }

    /// Allocates the next id, builds the record with it and inserts it at the front.
    pub fn append_new<F>(&mut self, build: F) -> &T
    where
        F: FnOnce(String) -> T,
    {
        // Skip ids a caller may have claimed through `append`.
        let mut id = self.ids.next_id();
        while self.get(&id).is_some() {
            id = self.ids.next_id();
        }
        self.records.insert(0, build(id));
        self.revision += 1;
        &self.records[0]
    }

    /// Stable sort, for collections whose page keeps them ordered (calendar).
    pub fn sort_by_key<K, F>(&mut self, key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.records.sort_by_key(key);
        self.revision += 1;
    }
}

/// A page's working copy: its store plus the memoized last listing.
#[derive(Debug)]
pub struct Page<T: Entity, C> {
    store: EntityStore<T>,
    listing: Memo<(u64, C), Vec<T>>,
}

impl<T: Entity, C: Clone + PartialEq> Page<T, C> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            store: EntityStore::initialize(seed),
            listing: Memo::default(),
        }
    }

    pub fn store(&self) -> &EntityStore<T> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore<T> {
        &mut self.store
    }

    /// Runs `compute` over the records unless the store revision and the full criteria
    /// tuple are identical to the previous call.
    pub fn visible<F>(&mut self, criteria: C, compute: F) -> Vec<T>
    where
        F: FnOnce(&[T], &C) -> Vec<T>,
    {
        let Page { store, listing } = self;
        let key = (store.revision(), criteria);
        listing.get_or_compute(key, |(_, criteria)| compute(store.records(), criteria))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        status: &'static str,
    }

    impl Entity for Item {
        const ID_PREFIX: &'static str = "IT";
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, status: &'static str) -> Item {
        Item {
            id: id.to_string(),
            status,
        }
    }

    fn seeded() -> EntityStore<Item> {
        EntityStore::initialize(vec![
            item("IT001", "Pending"),
            item("IT002", "Pending"),
            item("IT007", "Approved"),
        ])
    }

    #[test]
    fn test_replace_transforms_only_matching_record() {
        let mut store = seeded();
        let before = store.records().to_vec();

        let updated = store
            .replace("IT002", |r| Item {
                status: "Approved",
                ..r.clone()
            })
            .cloned();

        assert_eq!(updated, Some(item("IT002", "Approved")));
        assert_eq!(store.len(), before.len());
        assert_eq!(store.records()[0], before[0]);
        assert_eq!(store.records()[1], item("IT002", "Approved"));
        assert_eq!(store.records()[2], before[2]);
    }

    #[test]
    fn test_replace_missing_id_is_noop() {
        let mut store = seeded();
        let before = store.records().to_vec();
        let revision = store.revision();

        assert!(store.replace("IT999", |r| r.clone()).is_none());
        assert_eq!(store.records(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_append_prepends_and_keeps_originals() {
        let mut store = seeded();
        let before = store.records().to_vec();

        store.append(item("IT100", "Pending")).unwrap();

        assert_eq!(store.len(), before.len() + 1);
        assert_eq!(store.records()[0].id, "IT100");
        assert_eq!(&store.records()[1..], before.as_slice());
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut store = seeded();
        let err = store.append(item("IT001", "Pending")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("IT001".to_string()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_append_new_allocates_after_highest_seeded_suffix() {
        let mut store = seeded();
        let first = store.append_new(|id| item(&id, "Pending")).id.clone();
        let second = store.append_new(|id| item(&id, "Pending")).id.clone();
        assert_eq!(first, "IT008");
        assert_eq!(second, "IT009");
    }

    #[test]
    fn test_append_new_skips_ids_claimed_by_append() {
        let mut store = seeded();
        store.append(item("IT008", "Pending")).unwrap();
        let next = store.append_new(|id| item(&id, "Pending")).id.clone();
        assert_eq!(next, "IT009");
    }

    #[test]
    fn test_id_sequence_ignores_foreign_prefixes() {
        let mut ids = IdSequence::new("TKT-", 3);
        ids.observe("TKT-004");
        ids.observe("LR900");
        ids.observe("TKT-abc");
        assert_eq!(ids.next_id(), "TKT-005");
    }

    #[test]
    fn test_page_memoizes_until_store_changes() {
        let mut page: Page<Item, String> = Page::new(seeded().records().to_vec());
        let mut calls = 0;

        let first = page.visible("Pending".to_string(), |records, status| {
            calls += 1;
            records.iter().filter(|r| r.status == status).cloned().collect()
        });
        let second = page.visible("Pending".to_string(), |_, _| {
            calls += 1;
            Vec::new()
        });
        assert_eq!(first, second);
        assert_eq!(calls, 1);

        page.store_mut()
            .replace("IT001", |r| Item {
                status: "Approved",
                ..r.clone()
            });
        let third = page.visible("Pending".to_string(), |records, status| {
            calls += 1;
            records.iter().filter(|r| r.status == status).cloned().collect()
        });
        assert_eq!(calls, 2);
        assert_eq!(third.len(), 1);
    }
}
