/// quick start - minimal example to get started
use loan_ledger_rs::{
    CreateLoanRequest, LedgerConfig, LoanLedger, MemorySettlement, MemoryStore, Money,
    PartyId, PaymentRequest, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lender = PartyId::new([1; 32]);
    let borrower = PartyId::new([2; 32]);

    // ledger with in-memory collaborators
    let ledger = LoanLedger::new(
        LedgerConfig::new([42; 32]),
        MemoryStore::new(),
        MemorySettlement::new(),
    );
    ledger.settlement.credit(&borrower, Money::from_units(1_000_000_000));

    let time = SafeTimeProvider::new(TimeSource::System);

    // originate a 1_000_000_000-unit loan at 10% apy for one year
    let (derived, _) = ledger.create_loan(
        &CreateLoanRequest {
            lender,
            borrower,
            principal: Money::from_units(1_000_000_000),
            apy_bps: 1000,
            duration_seconds: 31_536_000,
            start_time: None,
        },
        &lender,
        &time,
    )?;
    println!("loan created at {}", derived.id);

    // borrower pays down part of the balance
    let (record, receipt) = ledger.make_payment(
        &PaymentRequest {
            loan_id: derived.id,
            amount: Money::from_units(250_000_000),
        },
        &borrower,
        &time,
    )?;
    println!("payment {} applied, remaining {}", receipt.reference, receipt.remaining);

    // print current state
    println!("{}", record.to_json()?);

    Ok(())
}
