use super::engine::{MILLIVOLTS_PER_VOLT, classify_compliance, compute_linear_result};
use super::error::{CalcError, require_positive};
use super::table::LookupTable;
use super::types::{Alternative, Alternatives};

pub const DEFAULT_MAX_ALTERNATIVES: usize = 4;

const MAX_ULP_STEPS: usize = 64;

/// Largest free factor that keeps `compute_linear_result` exactly on the
/// `limit_percent` boundary:
/// `reference × (limit_percent / 100) × scale / (coefficient × fixed_factor)`.
/// The returned value is always compliant; no result is given when none can be
/// represented.
pub fn solve_maximum_input(
    reference: f64,
    limit_percent: f64,
    coefficient: f64,
    fixed_factor: f64,
    scale: f64,
) -> Result<f64, CalcError> {
    let reference = require_positive("reference", reference)?;
    let limit_percent = require_positive("limitPercent", limit_percent)?;
    // A zero coefficient has no boundary to solve for.
    let coefficient = require_positive("coefficient", coefficient)?;
    let fixed_factor = require_positive("fixedFactor", fixed_factor)?;
    let scale = require_positive("scale", scale)?;

    let mut max = reference * (limit_percent / 100.0) * scale / (coefficient * fixed_factor);
    // Rounding can leave the solved value a few ulps past the limit.
    for _ in 0..MAX_ULP_STEPS {
        let result = compute_linear_result(coefficient, fixed_factor, max, scale)?;
        if classify_compliance(result, reference, limit_percent)?.compliant {
            return Ok(max);
        }
        max = f64::from_bits(max.to_bits() - 1);
    }
    Err(CalcError::magnitude("limitPercent", limit_percent))
}

/// Compliant breakpoints of one sub-category, smallest first, at most
/// `max_count` of them. An empty list means nothing in the table complies.
#[allow(clippy::too_many_arguments)]
pub fn rank_alternatives(
    table: &LookupTable,
    category: &str,
    sub_category: &str,
    factor_a: f64,
    factor_b: f64,
    reference: f64,
    limit_percent: f64,
    scale: f64,
    max_count: usize,
) -> Result<Alternatives, CalcError> {
    let mut options = Vec::with_capacity(max_count.min(16));
    let mut truncated = false;

    for point in table.breakpoints(category, sub_category)? {
        let voltage_drop = compute_linear_result(point.value, factor_a, factor_b, scale)?;
        let compliance = classify_compliance(voltage_drop, reference, limit_percent)?;
        if !compliance.compliant {
            continue;
        }
        if options.len() == max_count {
            truncated = true;
            break;
        }
        options.push(Alternative {
            size_mm2: point.key,
            mv_per_amp_metre: point.value,
            voltage_drop,
            percentage: compliance.percentage,
        });
    }

    Ok(Alternatives { options, truncated })
}

/// Smallest size that both carries `current` and keeps the voltage drop within
/// `limit_percent`. Sizes missing from the capacity table are skipped.
#[allow(clippy::too_many_arguments)]
pub fn find_minimum_size(
    drop_table: &LookupTable,
    capacity_table: &LookupTable,
    category: &str,
    sub_category: &str,
    current: f64,
    length: f64,
    reference: f64,
    limit_percent: f64,
) -> Result<Option<f64>, CalcError> {
    let current = require_positive("current", current)?;

    for point in drop_table.breakpoints(category, sub_category)? {
        let Ok(rating) = capacity_table.lookup(category, sub_category, point.key) else {
            continue;
        };
        if rating < current {
            continue;
        }
        let voltage_drop = compute_linear_result(point.value, current, length, MILLIVOLTS_PER_VOLT)?;
        if classify_compliance(voltage_drop, reference, limit_percent)?.compliant {
            return Ok(Some(point.key));
        }
    }
    Ok(None)
}
