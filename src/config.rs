use serde::{Deserialize, Serialize};

/// who stamps `start_time` at loan creation
///
/// one deliberate protocol choice instead of per-handler variation: the
/// timestamp seeds the identifier derivation, so it decides whether a
/// caller can precompute the loan's address before submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimestampPolicy {
    /// the ledger clock stamps creation time; callers never supply it
    #[default]
    ServerAssigned,
    /// a caller-supplied `start_time` is honored when present
    CallerSupplied,
}

/// ledger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// program namespace keying identifier derivation
    pub namespace: [u8; 32],
    pub timestamp_policy: TimestampPolicy,
}

impl LedgerConfig {
    pub fn new(namespace: [u8; 32]) -> Self {
        Self {
            namespace,
            timestamp_policy: TimestampPolicy::default(),
        }
    }

    pub fn with_timestamp_policy(mut self, policy: TimestampPolicy) -> Self {
        self.timestamp_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_server_assigned() {
        let config = LedgerConfig::new([0; 32]);
        assert_eq!(config.timestamp_policy, TimestampPolicy::ServerAssigned);
    }

    #[test]
    fn test_policy_override() {
        let config =
            LedgerConfig::new([0; 32]).with_timestamp_policy(TimestampPolicy::CallerSupplied);
        assert_eq!(config.timestamp_policy, TimestampPolicy::CallerSupplied);
    }
}
