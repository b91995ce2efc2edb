use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;

/// canonical 32-byte participant identity, compared for equality only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartyId([u8; 32]);

impl PartyId {
    pub fn new(bytes: [u8; 32]) -> Self {
        PartyId(bytes)
    }

    /// canonical byte encoding used in derivation preimages
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// derived 32-byte loan account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoanId([u8; 32]);

impl LoanId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        LoanId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// loan lifecycle status
///
/// the uninitialized state is the absence of a record at the derived
/// identifier; Closed is terminal and never re-entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// repayment in progress
    Active,
    /// fully repaid
    Closed,
}

/// receipt returned for each applied payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: Uuid,
    pub loan_id: LoanId,
    pub amount: Money,
    /// interest accrued as of the payment instant
    pub interest_accrued: Money,
    /// principal plus accrued interest at the payment instant
    pub total_owed: Money,
    /// owed minus paid after this payment
    pub remaining: Money,
    pub paid_at: i64,
    /// whether this payment closed the loan
    pub closes_loan: bool,
}
