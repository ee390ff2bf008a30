use chrono::NaiveDate;

use crate::entities::{BalanceReport, BalanceState};

/// Derive the calorie balance for a day from its expenditure and intake
///
/// The balance is `tdee - intake`; the sign convention follows: burning
/// more than was eaten is a deficit, eating more than was burned is a
/// surplus.
pub fn calorie_balance(date: NaiveDate, tdee: i32, intake: u32) -> BalanceReport {
    let balance = tdee - intake as i32;

    BalanceReport {
        date,
        intake,
        tdee,
        balance,
        state: BalanceState::for_balance(balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_positive_balance_is_a_deficit() {
        let report = calorie_balance(date("2024-01-05"), 2200, 1800);
        assert_eq!(report.balance, 400);
        assert_eq!(report.state, BalanceState::Deficit);
        assert!(report.note().contains("deficit"));
        assert!(report.note().contains("weight loss"));
    }

    #[test]
    fn test_negative_balance_is_a_surplus() {
        let report = calorie_balance(date("2024-01-05"), 2200, 2500);
        assert_eq!(report.balance, -300);
        assert_eq!(report.state, BalanceState::Surplus);
        assert!(report.note().contains("surplus"));
        assert!(report.note().contains("weight gain"));
    }

    #[test]
    fn test_zero_balance_is_balanced() {
        let report = calorie_balance(date("2024-01-05"), 2200, 2200);
        assert_eq!(report.balance, 0);
        assert_eq!(report.state, BalanceState::Balanced);
        assert!(report.note().contains("maintain"));
    }
}
