use hourglass_rs::SafeTimeProvider;
use uuid::Uuid;

use crate::config::{LedgerConfig, TimestampPolicy};
use crate::derive::{AccountDeriver, Derived};
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::interest::InterestQuote;
use crate::record::LoanRecord;
use crate::requests::{CreateLoanRequest, PaymentRequest};
use crate::settlement::{Settlement, SettlementError};
use crate::store::RecordStore;
use crate::types::{LoanId, PartyId, PaymentReceipt};

/// the loan state machine
///
/// collaborators are injected at construction; every operation is scoped
/// to a single bounded round-trip against them and commits atomically or
/// not at all
pub struct LoanLedger<S, X> {
    pub config: LedgerConfig,
    pub store: S,
    pub settlement: X,
    pub events: EventStore,
    deriver: AccountDeriver,
}

impl<S: RecordStore, X: Settlement> LoanLedger<S, X> {
    pub fn new(config: LedgerConfig, store: S, settlement: X) -> Self {
        let deriver = AccountDeriver::new(config.namespace);
        Self {
            config,
            store,
            settlement,
            events: EventStore::new(),
            deriver,
        }
    }

    /// originate a loan at its derived identifier
    ///
    /// validation precedes any mutation; the insert is atomic, so a
    /// second creation with identical inputs observes `DuplicateLoan`
    pub fn create_loan(
        &self,
        request: &CreateLoanRequest,
        caller: &PartyId,
        time: &SafeTimeProvider,
    ) -> Result<(Derived, LoanRecord)> {
        let apy = request.validate()?;

        if caller != &request.lender {
            return Err(LedgerError::UnauthorizedCreator {
                caller: *caller,
                lender: request.lender,
            });
        }

        let start_time = match self.config.timestamp_policy {
            TimestampPolicy::ServerAssigned => time.now().timestamp(),
            TimestampPolicy::CallerSupplied => request
                .start_time
                .unwrap_or_else(|| time.now().timestamp()),
        };

        let derived = self
            .deriver
            .derive(&request.lender, &request.borrower, start_time)?;

        let record = LoanRecord::new(
            request.lender,
            request.borrower,
            request.principal,
            apy,
            request.duration_seconds,
            start_time,
        );

        if !self.store.create_if_absent(&derived.id, record.clone()) {
            return Err(LedgerError::DuplicateLoan { id: derived.id });
        }

        self.events.emit(Event::LoanCreated {
            loan_id: derived.id,
            lender: record.lender,
            borrower: record.borrower,
            principal: record.principal,
            apy: record.apy,
            duration_seconds: record.duration_seconds,
            start_time,
        });

        Ok((derived, record))
    }

    /// apply a borrower payment, accruing interest as of now
    ///
    /// the value transfer and the record update succeed or fail together:
    /// a settlement failure aborts before any write, and a lost
    /// compare-and-swap is unwound with a reverse transfer
    pub fn make_payment(
        &self,
        request: &PaymentRequest,
        caller: &PartyId,
        time: &SafeTimeProvider,
    ) -> Result<(LoanRecord, PaymentReceipt)> {
        request.validate()?;

        let current = self
            .store
            .get(&request.loan_id)
            .ok_or(LedgerError::LoanNotFound {
                id: request.loan_id,
            })?;

        if !current.is_active() {
            return Err(LedgerError::LoanAlreadyClosed {
                id: request.loan_id,
            });
        }

        if caller != &current.borrower {
            return Err(LedgerError::UnauthorizedPayer {
                caller: *caller,
                borrower: current.borrower,
            });
        }

        let now_utc = time.now();
        let now = now_utc.timestamp();
        let interest = current.accrued_interest_at(now);
        let owed = current.principal.saturating_add(interest);

        let new_paid = current.paid_amount.units() as u128 + request.amount.units() as u128;
        if new_paid > owed.units() as u128 {
            return Err(LedgerError::OverpaymentRejected {
                paid: current.paid_amount,
                attempted: request.amount,
                owed,
            });
        }

        let mut updated = current.clone();
        updated.apply_payment(request.amount, owed, now);

        self.settlement
            .transfer(&current.borrower, &current.lender, request.amount)
            .map_err(|err| match err {
                SettlementError::Timeout => LedgerError::SettlementTimeout,
                SettlementError::Declined { reason } => LedgerError::SettlementDeclined { reason },
            })?;

        if !self
            .store
            .compare_and_swap(&request.loan_id, &current, updated.clone())
        {
            // unwind the transfer before reporting the lost race; any
            // residual discrepancy belongs to the settlement layer
            let _ = self
                .settlement
                .transfer(&current.lender, &current.borrower, request.amount);
            return Err(LedgerError::ConcurrentModification {
                id: request.loan_id,
            });
        }

        let receipt = PaymentReceipt {
            reference: Uuid::new_v4(),
            loan_id: request.loan_id,
            amount: request.amount,
            interest_accrued: interest,
            total_owed: owed,
            remaining: owed.saturating_sub(updated.paid_amount),
            paid_at: now,
            closes_loan: !updated.is_active(),
        };

        self.events.emit(Event::PaymentReceived {
            loan_id: request.loan_id,
            reference: receipt.reference,
            amount: request.amount,
            paid_amount: updated.paid_amount,
            remaining: receipt.remaining,
            timestamp: now_utc,
        });

        if !updated.is_active() {
            self.events.emit(Event::LoanClosed {
                loan_id: request.loan_id,
                total_paid: updated.paid_amount,
                timestamp: now_utc,
            });
        }

        Ok((updated, receipt))
    }

    /// pure read of the record at `id`, available to any caller
    pub fn get_loan(&self, id: &LoanId) -> Result<LoanRecord> {
        self.store
            .get(id)
            .ok_or(LedgerError::LoanNotFound { id: *id })
    }

    /// point-in-time balance view of the loan at `id`
    pub fn quote(&self, id: &LoanId, time: &SafeTimeProvider) -> Result<InterestQuote> {
        let record = self.get_loan(id)?;
        Ok(InterestQuote::for_record(&record, time.now().timestamp()))
    }

    /// recompute the identifier a creation with these inputs would use
    pub fn derive_loan_id(
        &self,
        lender: &PartyId,
        borrower: &PartyId,
        start_time: i64,
    ) -> Result<Derived> {
        self.deriver.derive(lender, borrower, start_time)
    }

    /// drain events collected since the last call
    pub fn take_events(&self) -> Vec<Event> {
        self.events.take_events()
    }
}
