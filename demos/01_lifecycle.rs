/// lifecycle - create, pay down, and close a loan
use loan_ledger_rs::{
    CreateLoanRequest, LedgerConfig, LoanLedger, MemorySettlement, MemoryStore, Money,
    PartyId, PaymentRequest, SafeTimeProvider, TimeSource,
};
use chrono::{TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== loan lifecycle example ===\n");

    let lender = PartyId::new([1; 32]);
    let borrower = PartyId::new([2; 32]);

    let ledger = LoanLedger::new(
        LedgerConfig::new([42; 32]),
        MemoryStore::new(),
        MemorySettlement::new(),
    );
    ledger.settlement.credit(&borrower, Money::from_units(1_000_000_000));

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));

    let (derived, record) = ledger.create_loan(
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
    println!("created loan {}", derived.id);
    println!("principal: {}, apy: {}", record.principal, record.apy);

    // first payment covers most of the balance
    let (record, _) = ledger.make_payment(
        &PaymentRequest {
            loan_id: derived.id,
            amount: Money::from_units(600_000_000),
        },
        &borrower,
        &time,
    )?;
    println!("\nafter first payment: paid {}, active {}", record.paid_amount, record.is_active());

    let quote = ledger.quote(&derived.id, &time)?;
    println!("remaining balance: {}", quote.remaining);

    // final payment clears the rest
    let (record, receipt) = ledger.make_payment(
        &PaymentRequest {
            loan_id: derived.id,
            amount: quote.remaining,
        },
        &borrower,
        &time,
    )?;
    println!("\nafter final payment: paid {}, active {}", record.paid_amount, record.is_active());
    println!("receipt closed the loan: {}", receipt.closes_loan);

    println!("\nevents:");
    for event in ledger.take_events() {
        println!("  {:?}", event);
    }

    Ok(())
}
