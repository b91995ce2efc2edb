pub mod config;
pub mod derive;
pub mod errors;
pub mod events;
pub mod interest;
pub mod ledger;
pub mod money;
pub mod record;
pub mod requests;
pub mod settlement;
pub mod store;
pub mod types;

// re-export key types
pub use config::{LedgerConfig, TimestampPolicy};
pub use derive::{AccountDeriver, Derived, LOAN_SEED};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use interest::{InterestQuote, BPS_DENOMINATOR, SECONDS_PER_YEAR};
pub use ledger::LoanLedger;
pub use money::{Apy, Money};
pub use record::LoanRecord;
pub use requests::{CreateLoanRequest, PaymentRequest};
pub use settlement::{MemorySettlement, Settlement, SettlementError};
pub use store::{MemoryStore, RecordStore};
pub use types::{LoanId, LoanStatus, PartyId, PaymentReceipt};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
