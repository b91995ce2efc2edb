use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::{Apy, Money};
use crate::types::{LoanId, PartyId};

/// all events the ledger can emit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    LoanCreated {
        loan_id: LoanId,
        lender: PartyId,
        borrower: PartyId,
        principal: Money,
        apy: Apy,
        duration_seconds: u64,
        start_time: i64,
    },
    PaymentReceived {
        loan_id: LoanId,
        reference: Uuid,
        amount: Money,
        paid_amount: Money,
        remaining: Money,
        timestamp: DateTime<Utc>,
    },
    LoanClosed {
        loan_id: LoanId,
        total_paid: Money,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
///
/// interior locking so a shared ledger can emit from any thread
#[derive(Debug, Default)]
pub struct EventStore {
    events: std::sync::Mutex<Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: Event) {
        self.lock().push(event);
    }

    /// drain all collected events
    pub fn take_events(&self) -> Vec<Event> {
        std::mem::take(&mut *self.lock())
    }

    /// copy of the collected events without draining
    pub fn snapshot(&self) -> Vec<Event> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_events_drains_store() {
        let store = EventStore::new();
        store.emit(Event::LoanClosed {
            loan_id: LoanId::from_bytes([1; 32]),
            total_paid: Money::from_units(100),
            timestamp: Utc::now(),
        });

        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(store.take_events().len(), 1);
        assert!(store.take_events().is_empty());
    }
}
