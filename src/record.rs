use serde::{Deserialize, Serialize};

use crate::interest;
use crate::money::{Apy, Money};
use crate::types::{LoanStatus, PartyId};

/// the sole persistent entity: one loan's terms and repayment progress
///
/// terms are fixed at creation; only `paid_amount`, `status`, and the
/// payment tracking fields ever change, and only through `make_payment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub lender: PartyId,
    pub borrower: PartyId,
    pub principal: Money,
    pub apy: Apy,
    pub duration_seconds: u64,
    /// unix seconds, captured at creation
    pub start_time: i64,
    /// monotonically non-decreasing, starts at zero
    pub paid_amount: Money,
    pub status: LoanStatus,

    // payment tracking
    pub payment_count: u32,
    pub last_payment_at: Option<i64>,
}

impl LoanRecord {
    /// create a fresh active record; callers validate terms beforehand
    pub fn new(
        lender: PartyId,
        borrower: PartyId,
        principal: Money,
        apy: Apy,
        duration_seconds: u64,
        start_time: i64,
    ) -> Self {
        Self {
            lender,
            borrower,
            principal,
            apy,
            duration_seconds,
            start_time,
            paid_amount: Money::ZERO,
            status: LoanStatus::Active,
            payment_count: 0,
            last_payment_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// interest accrued from `start_time` to `now`
    pub fn accrued_interest_at(&self, now: i64) -> Money {
        let elapsed = interest::elapsed_seconds(self.start_time, now);
        interest::accrued_interest(self.principal, self.apy, elapsed)
    }

    /// principal plus interest accrued as of `now`
    pub fn total_owed_at(&self, now: i64) -> Money {
        self.principal.saturating_add(self.accrued_interest_at(now))
    }

    /// owed minus paid as of `now`, clamped at zero
    pub fn remaining_at(&self, now: i64) -> Money {
        self.total_owed_at(now).saturating_sub(self.paid_amount)
    }

    /// the loan's contractual maturity instant
    pub fn maturity_time(&self) -> i64 {
        self.start_time.saturating_add_unsigned(self.duration_seconds)
    }

    /// record a validated payment against `total_owed`, closing the loan
    /// when it is fully repaid; the caller has already checked that the
    /// new paid total cannot exceed `total_owed`
    pub fn apply_payment(&mut self, amount: Money, total_owed: Money, now: i64) {
        self.paid_amount = self.paid_amount.saturating_add(amount);
        self.payment_count += 1;
        self.last_payment_at = Some(now);

        if self.paid_amount >= total_owed {
            self.status = LoanStatus::Closed;
        }
    }

    /// serialize to a JSON string for external persistence or transport
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// restore from a JSON string produced by `to_json`
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
