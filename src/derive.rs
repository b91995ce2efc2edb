use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha256};

use crate::errors::{LedgerError, Result};
use crate::types::{LoanId, PartyId};

/// domain-separation tag for loan account derivation
pub const LOAN_SEED: &[u8] = b"loan";

/// marker appended to every preimage so derived identifiers can never be
/// confused with output of any other hashing scheme in the ecosystem
const DERIVATION_MARKER: &[u8] = b"LoanLedgerDerivedAccount";

/// a derived identifier together with the bump that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derived {
    pub id: LoanId,
    pub bump: u8,
}

/// deterministic loan account derivation under a fixed program namespace
///
/// any party holding the same namespace and creation parameters recomputes
/// the same identifier without a lookup table
pub struct AccountDeriver {
    namespace: [u8; 32],
}

impl AccountDeriver {
    pub fn new(namespace: [u8; 32]) -> Self {
        Self { namespace }
    }

    /// derive the identifier for `(lender, borrower, start_time)`
    ///
    /// walks the bump counter from 255 downward and accepts the first
    /// candidate that is not a valid Ed25519 verifying key, so the result
    /// can never collide with a signing identity
    pub fn derive(&self, lender: &PartyId, borrower: &PartyId, start_time: i64) -> Result<Derived> {
        for bump in (0..=u8::MAX).rev() {
            let candidate = self.candidate(lender, borrower, start_time, bump);
            if is_non_signable(&candidate) {
                return Ok(Derived {
                    id: LoanId::from_bytes(candidate),
                    bump,
                });
            }
        }
        Err(LedgerError::DerivationExhausted)
    }

    /// recompute the candidate for a known bump, for callers verifying an
    /// identifier they were handed
    pub fn derive_with_bump(
        &self,
        lender: &PartyId,
        borrower: &PartyId,
        start_time: i64,
        bump: u8,
    ) -> Result<LoanId> {
        let candidate = self.candidate(lender, borrower, start_time, bump);
        if !is_non_signable(&candidate) {
            return Err(LedgerError::DerivationExhausted);
        }
        Ok(LoanId::from_bytes(candidate))
    }

    fn candidate(&self, lender: &PartyId, borrower: &PartyId, start_time: i64, bump: u8) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(LOAN_SEED);
        hasher.update(lender.as_bytes());
        hasher.update(borrower.as_bytes());
        hasher.update(start_time.to_le_bytes());
        hasher.update([bump]);
        hasher.update(self.namespace);
        hasher.update(DERIVATION_MARKER);
        hasher.finalize().into()
    }
}

/// a candidate is acceptable only if it does not decompress to a valid
/// Ed25519 verifying key; such bytes cannot belong to any signing keypair
fn is_non_signable(bytes: &[u8; 32]) -> bool {
    VerifyingKey::from_bytes(bytes).is_err()
}
