use super::error::{CalcError, require_non_negative};
use super::types::{Burden, BurdenTier};

/// Upper effective-rate limits (percent, inclusive) for each burden tier; anything
/// above the last limit is `High`.
const BURDEN_TIERS: [(f64, BurdenTier); 2] = [(15.0, BurdenTier::Low), (25.0, BurdenTier::Moderate)];

/// Half-open interval `[lower, upper)` charged at `rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub rate: f64,
}

/// Ordered bands covering `[0, ∞)` with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSet {
    bands: Vec<Band>,
}

impl BandSet {
    pub fn new(bands: Vec<Band>) -> Result<Self, CalcError> {
        let Some(first) = bands.first() else {
            return Err(CalcError::InvalidTable("band set must not be empty".to_string()));
        };
        if first.lower != 0.0 {
            return Err(CalcError::InvalidTable(format!(
                "first band must start at 0, not {}",
                first.lower
            )));
        }

        for (i, band) in bands.iter().enumerate() {
            if !band.rate.is_finite() || band.rate < 0.0 {
                return Err(CalcError::InvalidTable(format!(
                    "band {i} has invalid rate {}",
                    band.rate
                )));
            }
            if !band.lower.is_finite() || band.upper < band.lower {
                return Err(CalcError::InvalidTable(format!(
                    "band {i} bounds are out of order ({} to {})",
                    band.lower, band.upper
                )));
            }
            if i > 0 && band.lower != bands[i - 1].upper {
                return Err(CalcError::InvalidTable(format!(
                    "band {i} starts at {} but the previous band ends at {}",
                    band.lower,
                    bands[i - 1].upper
                )));
            }
            let is_last = i + 1 == bands.len();
            if is_last != band.upper.is_infinite() {
                return Err(CalcError::InvalidTable(
                    "only the last band may be, and must be, open ended".to_string(),
                ));
            }
        }

        Ok(Self { bands })
    }

    /// Builds bands from `(lower threshold, rate)` pairs; each band ends where the
    /// next begins and the last one is open ended.
    pub fn from_thresholds(thresholds: &[(f64, f64)]) -> Result<Self, CalcError> {
        let bands = thresholds
            .iter()
            .enumerate()
            .map(|(i, &(lower, rate))| Band {
                lower,
                upper: thresholds.get(i + 1).map_or(f64::INFINITY, |next| next.0),
                rate,
            })
            .collect();
        Self::new(bands)
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Rate of the band holding `amount`; negative amounts fall in the first band.
    pub fn marginal_rate(&self, amount: f64) -> f64 {
        self.bands
            .iter()
            .rev()
            .find(|band| amount >= band.lower)
            .or(self.bands.first())
            .map_or(0.0, |band| band.rate)
    }
}

/// Subtracts each deduction in turn, never letting the running amount fall below
/// `floor`.
pub fn apply_deductions(gross: f64, deductions: &[f64], floor: f64) -> Result<f64, CalcError> {
    let mut remaining = require_non_negative("gross", gross)?.max(floor);
    for &deduction in deductions {
        let deduction = require_non_negative("deduction", deduction)?;
        remaining = (remaining - deduction).max(floor);
    }
    Ok(remaining)
}

/// Reduces `deduction` by half of whatever `gross` exceeds `threshold` by,
/// bottoming out at zero.
pub fn tapered_deduction(gross: f64, deduction: f64, threshold: f64) -> Result<f64, CalcError> {
    let gross = require_non_negative("gross", gross)?;
    let deduction = require_non_negative("deduction", deduction)?;
    let threshold = require_non_negative("threshold", threshold)?;
    if gross > threshold {
        let reduction = ((gross - threshold) / 2.0).min(deduction);
        Ok(deduction - reduction)
    } else {
        Ok(deduction)
    }
}

/// Charges each slice of `taxable` at the rate of the band it falls in.
pub fn progressive_charge(taxable: f64, band_set: &BandSet) -> Result<f64, CalcError> {
    if !taxable.is_finite() {
        return Err(CalcError::magnitude("taxable", taxable));
    }
    let taxable = taxable.max(0.0);

    let mut charge = 0.0;
    for band in band_set.bands() {
        if taxable <= band.lower {
            break;
        }
        let taxed_here = (taxable.min(band.upper) - band.lower).max(0.0);
        charge += taxed_here * band.rate;
    }
    Ok(charge)
}

/// Effective rate of `charge` on `gross`, in percent, and its tier. A zero
/// `gross` carries no burden.
pub fn classify_burden(charge: f64, gross: f64) -> Result<Burden, CalcError> {
    let charge = require_non_negative("charge", charge)?;
    let gross = require_non_negative("gross", gross)?;
    let effective_rate = if gross > 0.0 {
        charge * 100.0 / gross
    } else {
        0.0
    };
    let tier = BURDEN_TIERS
        .iter()
        .find(|(limit, _)| effective_rate <= *limit)
        .map_or(BurdenTier::High, |&(_, tier)| tier);
    Ok(Burden {
        effective_rate,
        tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn three_bands() -> BandSet {
        BandSet::from_thresholds(&[(0.0, 0.20), (37_700.0, 0.40), (125_140.0, 0.45)])
            .expect("valid bands")
    }

    #[test]
    fn from_thresholds_links_bands_end_to_end() {
        let set = three_bands();
        let bands = set.bands();
        assert_eq!(bands.len(), 3);
        assert_approx(bands[0].upper, 37_700.0);
        assert_approx(bands[1].lower, 37_700.0);
        assert_approx(bands[1].upper, 125_140.0);
        assert!(bands[2].upper.is_infinite());
    }

    #[test]
    fn new_rejects_gaps_negative_rates_and_closed_top_band() {
        let gap = vec![
            Band { lower: 0.0, upper: 10.0, rate: 0.1 },
            Band { lower: 12.0, upper: f64::INFINITY, rate: 0.2 },
        ];
        assert!(BandSet::new(gap).is_err());

        let negative = vec![Band { lower: 0.0, upper: f64::INFINITY, rate: -0.1 }];
        assert!(BandSet::new(negative).is_err());

        let closed = vec![Band { lower: 0.0, upper: 100.0, rate: 0.1 }];
        assert!(BandSet::new(closed).is_err());

        let late_start = vec![Band { lower: 5.0, upper: f64::INFINITY, rate: 0.1 }];
        assert!(BandSet::new(late_start).is_err());

        assert!(BandSet::new(Vec::new()).is_err());
        assert!(BandSet::from_thresholds(&[(0.0, 0.1), (50.0, 0.2), (20.0, 0.3)]).is_err());
    }

    #[test]
    fn charge_at_second_boundary_is_sum_of_lower_bands() {
        let set = BandSet::from_thresholds(&[(0.0, 0.1), (1_000.0, 0.2), (5_000.0, 0.5)])
            .expect("valid bands");
        let charge = progressive_charge(5_000.0, &set).expect("finite");
        assert_approx(charge, 1_000.0 * 0.1 + 4_000.0 * 0.2);
    }

    #[test]
    fn charge_splits_across_basic_and_higher_bands() {
        let charge = progressive_charge(42_430.0, &three_bands()).expect("finite");
        assert_approx(charge, 9_432.0);
    }

    #[test]
    fn charge_rejects_non_finite_and_clamps_negative() {
        assert!(progressive_charge(f64::NAN, &three_bands()).is_err());
        assert_approx(progressive_charge(-50.0, &three_bands()).expect("clamped"), 0.0);
    }

    #[test]
    fn marginal_rate_picks_containing_band() {
        let set = three_bands();
        assert_approx(set.marginal_rate(0.0), 0.20);
        assert_approx(set.marginal_rate(37_699.0), 0.20);
        assert_approx(set.marginal_rate(37_700.0), 0.40);
        assert_approx(set.marginal_rate(1e9), 0.45);
        assert_approx(set.marginal_rate(-1.0), 0.20);
    }

    #[test]
    fn apply_deductions_floors_at_zero() {
        assert_approx(apply_deductions(55_000.0, &[12_570.0], 0.0).expect("valid"), 42_430.0);
        assert_approx(apply_deductions(10_000.0, &[8_000.0, 5_000.0], 0.0).expect("valid"), 0.0);
        assert_approx(apply_deductions(10_000.0, &[8_000.0, 5_000.0], 500.0).expect("valid"), 500.0);
        assert!(apply_deductions(10_000.0, &[-1.0], 0.0).is_err());
        assert!(apply_deductions(f64::INFINITY, &[], 0.0).is_err());
    }

    #[test]
    fn taper_is_unreduced_at_threshold_and_gone_at_twice_the_deduction() {
        let taper = |gross: f64| tapered_deduction(gross, 12_570.0, 100_000.0).expect("valid");
        assert_approx(taper(100_000.0), 12_570.0);
        assert_approx(taper(99_000.0), 12_570.0);
        assert_approx(taper(110_000.0), 7_570.0);
        assert_approx(taper(125_140.0), 0.0);
        assert_approx(taper(400_000.0), 0.0);
    }

    #[test]
    fn taper_rejects_non_finite_and_negative_inputs() {
        for (gross, deduction, threshold) in [
            (f64::NAN, 12_570.0, 100_000.0),
            (f64::INFINITY, 12_570.0, 100_000.0),
            (-1.0, 12_570.0, 100_000.0),
            (50_000.0, f64::NAN, 100_000.0),
            (50_000.0, -12_570.0, 100_000.0),
            (50_000.0, 12_570.0, f64::INFINITY),
        ] {
            let err = tapered_deduction(gross, deduction, threshold).expect_err("must reject");
            assert!(matches!(err, CalcError::InvalidMagnitude { .. }));
        }
    }

    #[test]
    fn burden_rejects_non_finite_and_negative_inputs() {
        for (charge, gross) in [
            (f64::NAN, 50_000.0),
            (f64::INFINITY, 50_000.0),
            (-1.0, 50_000.0),
            (1_000.0, f64::INFINITY),
            (1_000.0, f64::NAN),
            (1_000.0, -50_000.0),
        ] {
            let err = classify_burden(charge, gross).expect_err("must reject");
            assert!(matches!(err, CalcError::InvalidMagnitude { .. }));
        }
    }

    #[test]
    fn burden_tiers_use_inclusive_limits() {
        let tier = |charge: f64| classify_burden(charge, 100.0).expect("valid").tier;
        assert_eq!(tier(15.0), BurdenTier::Low);
        assert_eq!(tier(15.01), BurdenTier::Moderate);
        assert_eq!(tier(25.0), BurdenTier::Moderate);
        assert_eq!(tier(25.5), BurdenTier::High);

        let zero = classify_burden(500.0, 0.0).expect("valid");
        assert_approx(zero.effective_rate, 0.0);
        assert_eq!(zero.tier, BurdenTier::Low);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn prop_charge_is_non_decreasing(a in 0u32..400_000, delta in 0u32..50_000) {
            let set = three_bands();
            let low = progressive_charge(a as f64, &set).expect("finite");
            let high = progressive_charge((a + delta) as f64, &set).expect("finite");
            prop_assert!(high + 1e-9 >= low);
        }

        #[test]
        fn prop_charge_has_no_jumps_at_boundaries(boundary_idx in 1usize..3) {
            let set = three_bands();
            let boundary = set.bands()[boundary_idx].lower;
            let below = progressive_charge(boundary - 1e-6, &set).expect("finite");
            let at = progressive_charge(boundary, &set).expect("finite");
            prop_assert!((at - below).abs() < 1e-5);
        }

        #[test]
        fn prop_charge_never_exceeds_top_rate(amount in 0u32..1_000_000) {
            let set = three_bands();
            let charge = progressive_charge(amount as f64, &set).expect("finite");
            prop_assert!(charge <= amount as f64 * 0.45 + 1e-9);
            prop_assert!(charge >= 0.0);
        }

        #[test]
        fn prop_taper_stays_within_zero_and_deduction(gross in 0u32..400_000) {
            let d = tapered_deduction(gross as f64, 12_570.0, 100_000.0).expect("valid");
            prop_assert!((0.0..=12_570.0).contains(&d));
        }
    }
}
