use thiserror::Error;

use crate::money::Money;
use crate::types::{LoanId, PartyId};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid apy: {bps} basis points (maximum 10000)")]
    InvalidApy {
        bps: u16,
    },

    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid duration: {seconds} seconds")]
    InvalidDuration {
        seconds: u64,
    },

    #[error("loan already exists at {id}")]
    DuplicateLoan {
        id: LoanId,
    },

    #[error("caller {caller} is not the lender {lender}")]
    UnauthorizedCreator {
        caller: PartyId,
        lender: PartyId,
    },

    #[error("loan not found: {id}")]
    LoanNotFound {
        id: LoanId,
    },

    #[error("loan already closed: {id}")]
    LoanAlreadyClosed {
        id: LoanId,
    },

    #[error("caller {caller} is not the borrower {borrower}")]
    UnauthorizedPayer {
        caller: PartyId,
        borrower: PartyId,
    },

    #[error("overpayment rejected: paid {paid} plus {attempted} exceeds total owed {owed}")]
    OverpaymentRejected {
        paid: Money,
        attempted: Money,
        owed: Money,
    },

    #[error("payment amount must be greater than zero")]
    ZeroAmount,

    #[error("record {id} changed between read and write")]
    ConcurrentModification {
        id: LoanId,
    },

    #[error("settlement did not respond within its timeout")]
    SettlementTimeout,

    #[error("settlement declined the transfer: {reason}")]
    SettlementDeclined {
        reason: String,
    },

    #[error("no non-signable identifier found for the given seed")]
    DerivationExhausted,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
