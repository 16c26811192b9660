//! Record stores - keyed in-memory storage for one record type.
//!
//! A store owns a map from integer id to record plus the counter that hands
//! out the next id. Both sit behind a single reader/writer lock: listing and
//! lookups share it, creation takes it exclusively.
//!
//! ## Example
//!
//! ```ignore
//! use lab_services::model::User;
//! use lab_services::store::RecordStore;
//!
//! let store = RecordStore::<User>::new();
//! let alice = store.create(User::new("Alice", "alice@example.com"));
//! assert_eq!(store.get(alice.id), Some(alice));
//! ```

mod in_memory;

pub use in_memory::RecordStore;

/// Trait for types that can live in a [`RecordStore`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Collection name used in log fields and error messages (e.g. "users").
    const COLLECTION: &'static str;

    /// Returns the identifier assigned by the store.
    fn id(&self) -> u64;

    /// Overwrites the identifier. Only the store calls this.
    fn set_id(&mut self, id: u64);
}
