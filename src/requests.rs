use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};
use crate::money::{Apy, Money};
use crate::types::{LoanId, PartyId};

/// validated request to originate a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLoanRequest {
    pub lender: PartyId,
    pub borrower: PartyId,
    pub principal: Money,
    pub apy_bps: u16,
    pub duration_seconds: u64,
    /// honored only under `TimestampPolicy::CallerSupplied`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
}

impl CreateLoanRequest {
    /// reject malformed terms before they reach the state machine;
    /// returns the validated rate
    pub fn validate(&self) -> Result<Apy> {
        if self.principal.is_zero() {
            return Err(LedgerError::InvalidPrincipal {
                amount: self.principal,
            });
        }

        let apy = Apy::from_bps(self.apy_bps)?;

        if self.duration_seconds == 0 {
            return Err(LedgerError::InvalidDuration {
                seconds: self.duration_seconds,
            });
        }

        Ok(apy)
    }
}

/// validated request to pay down a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub loan_id: LoanId,
    pub amount: Money,
}

impl PaymentRequest {
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        Ok(())
    }
}
