//! Time-of-day price adjustments, independent of ticket categories.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// Adjustment applied to a base price for a screening slot. Selection is
/// the caller's business; `suggested_for` is a convenience for the common
/// schedule (weekends up 20%, weekday mornings down 20%).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricingStrategy {
    Standard,
    Weekend,
    Morning,
}

impl PricingStrategy {
    pub fn apply(&self, base_price: f64) -> f64 {
        match self {
            Self::Standard => base_price,
            Self::Weekend => base_price * 1.2,
            Self::Morning => base_price * 0.8,
        }
    }

    pub fn suggested_for(date_time: NaiveDateTime) -> Self {
        match date_time.weekday() {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ if date_time.hour() < 12 => Self::Morning,
            _ => Self::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_strategy_multipliers() {
        assert_eq!(PricingStrategy::Standard.apply(25.0), 25.0);
        assert_eq!(PricingStrategy::Weekend.apply(25.0), 30.0);
        assert_eq!(PricingStrategy::Morning.apply(25.0), 20.0);
    }

    #[test]
    fn test_suggested_strategy() {
        // 2026-06-06 is a Saturday.
        assert_eq!(
            PricingStrategy::suggested_for(at(2026, 6, 6, 20)),
            PricingStrategy::Weekend
        );
        // 2026-06-01 is a Monday.
        assert_eq!(
            PricingStrategy::suggested_for(at(2026, 6, 1, 10)),
            PricingStrategy::Morning
        );
        assert_eq!(
            PricingStrategy::suggested_for(at(2026, 6, 1, 20)),
            PricingStrategy::Standard
        );
    }
}
