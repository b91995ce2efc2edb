use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

use crate::money::Money;
use crate::types::PartyId;

/// failures the settlement collaborator can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettlementError {
    #[error("settlement did not respond within its timeout")]
    Timeout,

    #[error("transfer declined: {reason}")]
    Declined {
        reason: String,
    },
}

/// external collaborator that moves value between parties
///
/// `make_payment` invokes this atomically with the record update; a
/// transfer must either fully complete or leave both balances untouched
pub trait Settlement: Send + Sync {
    fn transfer(
        &self,
        from: &PartyId,
        to: &PartyId,
        amount: Money,
    ) -> Result<(), SettlementError>;
}

/// in-memory balance book for tests and demos
///
/// declines transfers the payer cannot cover, which is how the
/// all-or-nothing property is exercised in tests
#[derive(Debug, Default)]
pub struct MemorySettlement {
    balances: Mutex<HashMap<PartyId, u64>>,
}

impl MemorySettlement {
    pub fn new() -> Self {
        Self::default()
    }

    /// seed a party's balance
    pub fn credit(&self, party: &PartyId, amount: Money) {
        let mut balances = self.lock();
        let balance = balances.entry(*party).or_insert(0);
        *balance = balance.saturating_add(amount.units());
    }

    pub fn balance_of(&self, party: &PartyId) -> Money {
        Money::from_units(self.lock().get(party).copied().unwrap_or(0))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PartyId, u64>> {
        self.balances.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Settlement for MemorySettlement {
    fn transfer(
        &self,
        from: &PartyId,
        to: &PartyId,
        amount: Money,
    ) -> Result<(), SettlementError> {
        let mut balances = self.lock();

        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount.units() {
            return Err(SettlementError::Declined {
                reason: format!("insufficient balance: available {available}, requested {amount}"),
            });
        }

        *balances.entry(*from).or_insert(0) -= amount.units();
        let credit = balances.entry(*to).or_insert(0);
        *credit = credit.saturating_add(amount.units());
        Ok(())
    }
}
