use std::sync::Mutex;

/// A stored record that knows its own identifier.
pub trait Record {
    fn id(&self) -> &str;
}

/// Insertion-ordered in-memory collection, the only backing this deployment
/// uses. Every operation is a synchronous read-modify-write under the lock,
/// so no caller ever observes a partially-updated collection.
pub struct MemoryRepo<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Record + Clone> MemoryRepo<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn list(&self) -> Vec<T> {
        self.records.lock().unwrap().clone()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    pub fn insert(&self, record: T) -> T {
        let mut records = self.records.lock().unwrap();
        records.push(record.clone());
        record
    }

    /// Mutates the record with the given id in place, returning the updated
    /// record, or `None` if no record matches.
    pub fn update_with(&self, id: &str, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.records.lock().unwrap();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        f(record);
        Some(record.clone())
    }

    /// Removes and returns the record with the given id, preserving the
    /// order of the remaining records.
    pub fn delete(&self, id: &str) -> Option<T> {
        let mut records = self.records.lock().unwrap();
        let index = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(index))
    }
}

impl<T: Record + Clone> Default for MemoryRepo<T> {
    fn default() -> Self {
        Self::new()
    }
}
