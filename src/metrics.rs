use crate::models::FinancialRecord;

/// Parse a stored digit string. Empty or unparseable values count as zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Profit, margin and growth for the latest month. Computed on demand,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSummary {
    pub current_revenue: f64,
    pub current_expense: f64,
    pub profit: f64,
    pub profit_margin: f64,
    pub growth: f64,
}

impl DerivedSummary {
    pub fn from_record(record: &FinancialRecord) -> Self {
        let current_revenue = parse_amount(&record.revenue_month5);
        let current_expense = parse_amount(&record.expense_month5);
        // A missing or zero month 4 falls back to month 5, so growth reads 0
        let previous_revenue = Some(parse_amount(&record.revenue_month4))
            .filter(|v| *v != 0.0)
            .unwrap_or(current_revenue);

        let profit = current_revenue - current_expense;
        let profit_margin = if current_revenue > 0.0 {
            profit / current_revenue * 100.0
        } else {
            0.0
        };
        let growth = if previous_revenue > 0.0 {
            (current_revenue - previous_revenue) / previous_revenue * 100.0
        } else {
            0.0
        };

        Self {
            current_revenue,
            current_expense,
            profit,
            profit_margin,
            growth,
        }
    }

    pub fn is_growing(&self) -> bool {
        self.growth >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldKey;

    fn record(revenue: &str, expense: &str, previous: &str) -> FinancialRecord {
        let mut r = FinancialRecord::default();
        r.set(FieldKey::RevenueMonth5, revenue);
        r.set(FieldKey::ExpenseMonth5, expense);
        r.set(FieldKey::RevenueMonth4, previous);
        r
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_example() {
        let s = DerivedSummary::from_record(&record("15000000", "12000000", "12000000"));
        assert_close(s.profit, 3_000_000.0);
        assert_close(s.profit_margin, 20.0);
        assert_close(s.growth, 25.0);
        assert_close(s.current_revenue, 15_000_000.0);
        assert_close(s.current_expense, 12_000_000.0);
    }

    #[test]
    fn test_profit_is_exact_difference() {
        for (r, e) in [(0u64, 0u64), (1, 999), (123_456_789, 1), (5_000, 5_000)] {
            let s = DerivedSummary::from_record(&record(&r.to_string(), &e.to_string(), ""));
            assert_close(s.profit, r as f64 - e as f64);
        }
    }

    #[test]
    fn test_margin_is_zero_without_revenue() {
        let s = DerivedSummary::from_record(&record("0", "500", ""));
        assert_close(s.profit_margin, 0.0);
        assert_close(s.profit, -500.0);

        let s = DerivedSummary::from_record(&record("", "500", ""));
        assert_close(s.profit_margin, 0.0);
    }

    #[test]
    fn test_negative_margin_when_losing_money() {
        let s = DerivedSummary::from_record(&record("1000", "1500", ""));
        assert_close(s.profit_margin, -50.0);
    }

    #[test]
    fn test_growth_falls_back_to_zero_without_previous_month() {
        let s = DerivedSummary::from_record(&record("15000000", "12000000", ""));
        assert_close(s.growth, 0.0);
        assert!(s.is_growing());
    }

    #[test]
    fn test_growth_treats_zero_previous_as_absent() {
        let s = DerivedSummary::from_record(&record("15000000", "0", "0"));
        assert_close(s.growth, 0.0);
    }

    #[test]
    fn test_growth_can_be_negative() {
        let s = DerivedSummary::from_record(&record("9000", "0", "12000"));
        assert_close(s.growth, -25.0);
        assert!(!s.is_growing());
    }

    #[test]
    fn test_empty_record_is_all_zero() {
        let s = DerivedSummary::from_record(&FinancialRecord::default());
        assert_eq!(
            s,
            DerivedSummary {
                current_revenue: 0.0,
                current_expense: 0.0,
                profit: 0.0,
                profit_margin: 0.0,
                growth: 0.0,
            }
        );
    }

    #[test]
    fn test_revenue_past_64_bits_displays_in_full() {
        let s = DerivedSummary::from_record(&record("100000000000000000000", "0", ""));
        assert_eq!(
            crate::fmt::rupiah(s.current_revenue),
            "Rp 100.000.000.000.000.000.000"
        );
        assert_close(s.profit_margin, 100.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_close(parse_amount("15000000"), 15_000_000.0);
        assert_close(parse_amount(""), 0.0);
        assert_close(parse_amount("abc"), 0.0);
    }
}
