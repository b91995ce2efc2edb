use serde::{Deserialize, Serialize};

use crate::money::{Apy, Money};
use crate::record::LoanRecord;

/// fixed 365-day year used for pro-rating; not calendar-aware
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// basis-point denominator (10000 bps = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// seconds elapsed between `start_time` and `now`, clamped at zero
pub fn elapsed_seconds(start_time: i64, now: i64) -> u64 {
    let elapsed = now as i128 - start_time as i128;
    elapsed.clamp(0, u64::MAX as i128) as u64
}

/// simple interest accrued over `elapsed` seconds:
/// floor(principal * apy_bps * elapsed / (10000 * seconds_per_year))
///
/// computed in u128 so the product cannot overflow; the truncating
/// division is the floor the accrual contract requires
pub fn accrued_interest(principal: Money, apy: Apy, elapsed: u64) -> Money {
    let numerator = principal.units() as u128 * apy.bps() as u128 * elapsed as u128;
    let denominator = BPS_DENOMINATOR as u128 * SECONDS_PER_YEAR as u128;
    let interest = numerator / denominator;
    Money::from_units(u64::try_from(interest).unwrap_or(u64::MAX))
}

/// principal plus interest accrued over `elapsed` seconds
pub fn total_owed(principal: Money, apy: Apy, elapsed: u64) -> Money {
    principal.saturating_add(accrued_interest(principal, apy, elapsed))
}

/// point-in-time view of a loan's balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestQuote {
    pub elapsed_seconds: u64,
    pub accrued_interest: Money,
    pub total_owed: Money,
    pub paid_amount: Money,
    /// owed minus paid, clamped at zero
    pub remaining: Money,
}

impl InterestQuote {
    /// quote a record's balances as of `now`
    pub fn for_record(record: &LoanRecord, now: i64) -> Self {
        let elapsed = elapsed_seconds(record.start_time, now);
        let interest = accrued_interest(record.principal, record.apy, elapsed);
        let owed = record.principal.saturating_add(interest);

        Self {
            elapsed_seconds: elapsed,
            accrued_interest: interest,
            total_owed: owed,
            paid_amount: record.paid_amount,
            remaining: owed.saturating_sub(record.paid_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_year_accrual() {
        // 1 full year at 10% on 1_000_000_000 units
        let principal = Money::from_units(1_000_000_000);
        let apy = Apy::from_bps(1000).unwrap();

        let interest = accrued_interest(principal, apy, SECONDS_PER_YEAR);

        assert_eq!(interest, Money::from_units(100_000_000));
        assert_eq!(
            total_owed(principal, apy, SECONDS_PER_YEAR),
            Money::from_units(1_100_000_000)
        );
    }

    #[test]
    fn test_zero_elapsed_accrues_nothing() {
        let principal = Money::from_units(1_000_000_000);
        let apy = Apy::from_bps(1000).unwrap();

        assert_eq!(accrued_interest(principal, apy, 0), Money::ZERO);
        assert_eq!(total_owed(principal, apy, 0), principal);
    }

    #[test]
    fn test_elapsed_clamps_below_start() {
        assert_eq!(elapsed_seconds(1_000, 500), 0);
        assert_eq!(elapsed_seconds(1_000, 1_000), 0);
        assert_eq!(elapsed_seconds(1_000, 1_001), 1);
        assert_eq!(elapsed_seconds(i64::MIN, i64::MAX), u64::MAX);
    }

    #[test]
    fn test_accrual_floors() {
        // 1 second at 100% on 31_536_000 units is exactly 1 unit;
        // one unit less of principal floors to zero
        let apy = Apy::from_bps(10_000).unwrap();

        assert_eq!(
            accrued_interest(Money::from_units(SECONDS_PER_YEAR), apy, 1),
            Money::from_units(1)
        );
        assert_eq!(
            accrued_interest(Money::from_units(SECONDS_PER_YEAR - 1), apy, 1),
            Money::ZERO
        );
    }

    #[test]
    fn test_zero_apy_accrues_nothing() {
        let principal = Money::from_units(1_000_000_000);
        let interest = accrued_interest(principal, Apy::ZERO, SECONDS_PER_YEAR * 10);
        assert_eq!(interest, Money::ZERO);
    }

    #[test]
    fn test_wide_product_does_not_overflow() {
        // u64::MAX principal at 100% for a decade stays defined
        let interest = accrued_interest(
            Money::MAX,
            Apy::from_bps(10_000).unwrap(),
            SECONDS_PER_YEAR * 10,
        );
        assert_eq!(interest, Money::MAX);
    }
}
