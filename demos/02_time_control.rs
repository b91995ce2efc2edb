/// time control - deterministic interest accrual with controlled time
use loan_ledger_rs::{
    CreateLoanRequest, LedgerConfig, LoanLedger, MemorySettlement, MemoryStore, Money,
    PartyId, PaymentRequest, SafeTimeProvider, TimeSource, SECONDS_PER_YEAR,
};
use chrono::{Duration, TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    let lender = PartyId::new([1; 32]);
    let borrower = PartyId::new([2; 32]);

    let ledger = LoanLedger::new(
        LedgerConfig::new([42; 32]),
        MemoryStore::new(),
        MemorySettlement::new(),
    );
    ledger.settlement.credit(&borrower, Money::from_units(2_000_000_000));

    // create controlled time for testing
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    println!("starting date: {}", time.now().format("%Y-%m-%d"));

    let (derived, _) = ledger.create_loan(
        &CreateLoanRequest {
            lender,
            borrower,
            principal: Money::from_units(1_000_000_000),
            apy_bps: 1000,
            duration_seconds: SECONDS_PER_YEAR,
            start_time: None,
        },
        &lender,
        &time,
    )?;
    println!("loan originated at 10% apy");

    // watch interest accrue quarter by quarter
    for quarter in 1..=4 {
        controller.advance(Duration::seconds(SECONDS_PER_YEAR as i64 / 4));
        let quote = ledger.quote(&derived.id, &time)?;
        println!(
            "quarter {}: accrued {}, total owed {}",
            quarter, quote.accrued_interest, quote.total_owed
        );
    }

    // a full year has elapsed; pay everything off
    let quote = ledger.quote(&derived.id, &time)?;
    let (record, _) = ledger.make_payment(
        &PaymentRequest {
            loan_id: derived.id,
            amount: quote.remaining,
        },
        &borrower,
        &time,
    )?;

    println!("\npaid {} to settle", record.paid_amount);
    println!("final status: {:?}", record.status);

    Ok(())
}
