use super::bands::{BandSet, apply_deductions, classify_burden, progressive_charge, tapered_deduction};
use super::error::{CalcError, require_non_negative, require_positive};
use super::types::{TaxInputs, TaxResult};

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Self-employed income tax and Class 2/Class 4 National Insurance for one tax
/// year. Expense items are summed and taken off income to give profit; the
/// personal allowance tapers on profit.
pub fn estimate_tax(inputs: &TaxInputs) -> Result<TaxResult, CalcError> {
    let rates = inputs.tax_year.rates();
    let income = require_positive("income", inputs.income)?;

    let mut expenses = 0.0;
    for &item in &inputs.expenses {
        expenses += require_non_negative("expenses", item)?;
    }

    let profit = apply_deductions(income, &[expenses], 0.0)?;
    let personal_allowance = tapered_deduction(
        profit,
        rates.personal_allowance,
        rates.allowance_taper_threshold,
    )?;
    let taxable_income = apply_deductions(profit, &[personal_allowance], 0.0)?;

    let income_tax_bands = BandSet::from_thresholds(rates.income_tax_bands)?;
    let class4_bands = BandSet::from_thresholds(rates.class4_bands)?;

    let income_tax = progressive_charge(taxable_income, &income_tax_bands)?;
    let class4_ni = progressive_charge(profit, &class4_bands)?;
    let class2_ni = if profit > rates.class2_threshold {
        rates.class2_weekly_rate * WEEKS_PER_YEAR
    } else {
        0.0
    };

    let total_tax = income_tax + class2_ni + class4_ni;
    let burden = classify_burden(total_tax, income)?;

    // Inside the taper every extra pound also removes 50p of allowance.
    let in_taper = profit > rates.allowance_taper_threshold && personal_allowance > 0.0;
    let taper_multiplier = if in_taper { 1.5 } else { 1.0 };
    let income_tax_marginal = if profit > personal_allowance {
        income_tax_bands.marginal_rate(taxable_income) * taper_multiplier
    } else {
        0.0
    };
    let marginal_rate = income_tax_marginal + class4_bands.marginal_rate(profit);

    Ok(TaxResult {
        tax_year: inputs.tax_year,
        income,
        expenses,
        profit,
        personal_allowance,
        taxable_income,
        income_tax,
        class2_ni,
        class4_ni,
        total_tax,
        take_home: profit - total_tax,
        monthly_set_aside: total_tax / MONTHS_PER_YEAR,
        marginal_rate,
        burden,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BurdenTier, TaxYear};
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_inputs(income: f64) -> TaxInputs {
        TaxInputs {
            tax_year: TaxYear::Y2025_26,
            income,
            expenses: Vec::new(),
        }
    }

    #[test]
    fn fifty_five_thousand_profit_scenario() {
        let result = estimate_tax(&sample_inputs(55_000.0)).expect("valid");
        assert_approx(result.personal_allowance, 12_570.0);
        assert_approx(result.taxable_income, 42_430.0);
        assert_approx(result.income_tax, 9_432.0);
        // (50 270 - 12 570) × 6 % + (55 000 - 50 270) × 2 %
        assert_approx(result.class4_ni, 2_262.0 + 94.6);
        assert_approx(result.class2_ni, 0.0);
        assert_approx(result.total_tax, 9_432.0 + 2_356.6);
        assert_approx(result.take_home, 55_000.0 - 11_788.6);
        assert_approx(result.monthly_set_aside, 11_788.6 / 12.0);
        assert_eq!(result.burden.tier, BurdenTier::Moderate);
        assert_approx(result.marginal_rate, 0.42);
    }

    #[test]
    fn progressive_rates_at_sixty_thousand() {
        let result = estimate_tax(&sample_inputs(60_000.0)).expect("valid");
        assert!((result.income_tax - 11_432.0).abs() < 1e-3);
    }

    #[test]
    fn class2_charged_in_2024_25_on_profit_above_threshold() {
        let mut inputs = sample_inputs(55_000.0);
        inputs.tax_year = TaxYear::Y2024_25;
        let result = estimate_tax(&inputs).expect("valid");
        assert_approx(result.class2_ni, 3.45 * 52.0);

        inputs.income = 6_000.0;
        let result = estimate_tax(&inputs).expect("valid");
        assert_approx(result.class2_ni, 0.0);
    }

    #[test]
    fn class2_starts_above_the_lower_profits_limit() {
        let mut inputs = sample_inputs(10_000.0);
        inputs.tax_year = TaxYear::Y2024_25;
        assert_approx(estimate_tax(&inputs).expect("valid").class2_ni, 0.0);

        inputs.income = 12_570.0;
        assert_approx(estimate_tax(&inputs).expect("valid").class2_ni, 0.0);

        inputs.income = 13_000.0;
        assert_approx(estimate_tax(&inputs).expect("valid").class2_ni, 179.4);
    }

    #[test]
    fn expenses_are_summed_before_allowance() {
        let mut inputs = sample_inputs(70_000.0);
        inputs.expenses = vec![8_000.0, 4_500.0, 2_500.0];
        let result = estimate_tax(&inputs).expect("valid");
        assert_approx(result.expenses, 15_000.0);
        assert_approx(result.profit, 55_000.0);
        assert_approx(result.income_tax, 9_432.0);
    }

    #[test]
    fn expenses_above_income_leave_nothing_to_tax() {
        let mut inputs = sample_inputs(10_000.0);
        inputs.expenses = vec![12_000.0];
        let result = estimate_tax(&inputs).expect("valid");
        assert_approx(result.profit, 0.0);
        assert_approx(result.total_tax, 0.0);
        assert_eq!(result.burden.tier, BurdenTier::Low);
    }

    #[test]
    fn allowance_tapers_above_one_hundred_thousand() {
        let result = estimate_tax(&sample_inputs(110_000.0)).expect("valid");
        assert_approx(result.personal_allowance, 7_570.0);
        assert_approx(result.income_tax, 7_540.0 + (102_430.0 - 37_700.0) * 0.40);
        assert_approx(result.marginal_rate, 0.40 * 1.5 + 0.02);

        let result = estimate_tax(&sample_inputs(125_140.0)).expect("valid");
        assert_approx(result.personal_allowance, 0.0);

        let result = estimate_tax(&sample_inputs(200_000.0)).expect("valid");
        assert_approx(result.personal_allowance, 0.0);
        assert_approx(
            result.income_tax,
            37_700.0 * 0.20 + (125_140.0 - 37_700.0) * 0.40 + (200_000.0 - 125_140.0) * 0.45,
        );
        assert_eq!(result.burden.tier, BurdenTier::High);
    }

    #[test]
    fn income_below_allowance_pays_no_income_tax() {
        let result = estimate_tax(&sample_inputs(12_000.0)).expect("valid");
        assert_approx(result.income_tax, 0.0);
        assert_approx(result.class4_ni, 0.0);
        assert_approx(result.marginal_rate, 0.0);
    }

    #[test]
    fn rejects_non_positive_income_and_negative_expenses() {
        assert!(matches!(
            estimate_tax(&sample_inputs(0.0)),
            Err(CalcError::InvalidMagnitude { .. })
        ));
        assert!(matches!(
            estimate_tax(&sample_inputs(f64::NAN)),
            Err(CalcError::InvalidMagnitude { .. })
        ));
        let mut inputs = sample_inputs(40_000.0);
        inputs.expenses = vec![1_000.0, -5.0];
        assert!(matches!(
            estimate_tax(&inputs),
            Err(CalcError::InvalidMagnitude { .. })
        ));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn prop_total_tax_is_non_decreasing_in_income(
            income in 1u32..300_000,
            delta in 0u32..20_000
        ) {
            let low = estimate_tax(&sample_inputs(income as f64)).expect("valid");
            let high = estimate_tax(&sample_inputs((income + delta) as f64)).expect("valid");
            prop_assert!(high.total_tax + 1e-6 >= low.total_tax);
            prop_assert!(high.income_tax + 1e-6 >= low.income_tax);
        }

        #[test]
        fn prop_take_home_stays_positive_and_reruns_match(income in 1u32..500_000) {
            let first = estimate_tax(&sample_inputs(income as f64)).expect("valid");
            let second = estimate_tax(&sample_inputs(income as f64)).expect("valid");
            prop_assert!(first == second);
            prop_assert!(first.take_home > 0.0);
            prop_assert!(first.total_tax <= first.profit);
        }
    }
}
