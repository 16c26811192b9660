//! RecordStore - HashMap-backed record storage with a monotonic id counter.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::Record;

/// Map and counter, always locked together.
struct Inner<T> {
    records: HashMap<u64, T>,
    next_id: u64,
}

/// In-memory store for one record type.
///
/// Clone-friendly via Arc: clones share the same map and counter.
pub struct RecordStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store. The first created record gets id 1.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store pre-populated with `records`, keyed by their own ids.
    ///
    /// The counter starts one past the highest seeded id so fixtures are
    /// never overwritten by later creates.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let records: HashMap<u64, T> = records.into_iter().map(|r| (r.id(), r)).collect();
        let next_id = records.keys().max().map(|max| max + 1).unwrap_or(1);

        Self {
            inner: Arc::new(RwLock::new(Inner { records, next_id })),
        }
    }

    /// Snapshot of every record, ordered by id.
    pub fn list(&self) -> Vec<T> {
        let inner = self.inner.read();
        let mut records: Vec<T> = inner.records.values().cloned().collect();
        records.sort_by_key(|r| r.id());
        records
    }

    /// Look up a record by id.
    pub fn get(&self, id: u64) -> Option<T> {
        self.inner.read().records.get(&id).cloned()
    }

    /// Store `record` under the next id, ignoring whatever id it carried.
    ///
    /// Returns the record as stored.
    pub fn create(&self, mut record: T) -> T {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        record.set_id(id);
        inner.records.insert(id, record.clone());
        inner.next_id += 1;

        tracing::debug!(collection = T::COLLECTION, id, "record created");
        record
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> u64 {
        self.inner.read().next_id
    }
}
