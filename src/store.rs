use std::collections::HashMap;
use std::sync::Mutex;

use crate::record::LoanRecord;
use crate::types::LoanId;

/// the record store contract the ledger runs against
///
/// any transactional key-value store satisfies this; both write operations
/// must be atomic so racing writers cannot both commit
pub trait RecordStore: Send + Sync {
    /// load the record at `id`, if any
    fn get(&self, id: &LoanId) -> Option<LoanRecord>;

    /// insert `record` at `id` only if nothing exists there;
    /// returns false when the slot is already occupied
    fn create_if_absent(&self, id: &LoanId, record: LoanRecord) -> bool;

    /// replace the record at `id` only if it still equals `expected`;
    /// returns false when the record changed (or vanished) since the read
    fn compare_and_swap(&self, id: &LoanId, expected: &LoanRecord, new: LoanRecord) -> bool;
}

/// in-memory record store for tests, demos, and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<LoanId, LoanRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<LoanId, LoanRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, id: &LoanId) -> Option<LoanRecord> {
        self.lock().get(id).cloned()
    }

    fn create_if_absent(&self, id: &LoanId, record: LoanRecord) -> bool {
        let mut records = self.lock();
        if records.contains_key(id) {
            return false;
        }
        records.insert(*id, record);
        true
    }

    fn compare_and_swap(&self, id: &LoanId, expected: &LoanRecord, new: LoanRecord) -> bool {
        let mut records = self.lock();
        match records.get(id) {
            Some(current) if current == expected => {
                records.insert(*id, new);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Apy, Money};
    use crate::types::PartyId;

    fn record(paid: u64) -> LoanRecord {
        let mut record = LoanRecord::new(
            PartyId::new([1; 32]),
            PartyId::new([2; 32]),
            Money::from_units(1_000),
            Apy::from_bps(500).unwrap(),
            3600,
            1_700_000_000,
        );
        record.paid_amount = Money::from_units(paid);
        record
    }

    #[test]
    fn test_create_if_absent_rejects_second_insert() {
        let store = MemoryStore::new();
        let id = LoanId::from_bytes([9; 32]);

        assert!(store.create_if_absent(&id, record(0)));
        assert!(!store.create_if_absent(&id, record(0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_compare_and_swap_requires_unchanged_record() {
        let store = MemoryStore::new();
        let id = LoanId::from_bytes([9; 32]);
        store.create_if_absent(&id, record(0));

        // swap against the stored value succeeds
        assert!(store.compare_and_swap(&id, &record(0), record(100)));

        // a second swap against the stale expectation fails
        assert!(!store.compare_and_swap(&id, &record(0), record(200)));
        assert_eq!(store.get(&id).unwrap().paid_amount, Money::from_units(100));
    }

    #[test]
    fn test_compare_and_swap_on_missing_record_fails() {
        let store = MemoryStore::new();
        let id = LoanId::from_bytes([9; 32]);

        assert!(!store.compare_and_swap(&id, &record(0), record(100)));
    }
}
