use super::data::{current_capacity_table, voltage_drop_table};
use super::error::{CalcError, require_non_negative, require_positive};
use super::solver::{find_minimum_size, rank_alternatives, solve_maximum_input};
use super::table::{LookupTable, lookup_coefficient};
use super::types::{Compliance, VoltageDropInputs, VoltageDropResult};

/// Converts millivolts (mV/A/m × A × m) to volts.
pub const MILLIVOLTS_PER_VOLT: f64 = 1000.0;

/// `coefficient × factor_a × factor_b / scale`.
pub fn compute_linear_result(
    coefficient: f64,
    factor_a: f64,
    factor_b: f64,
    scale: f64,
) -> Result<f64, CalcError> {
    let coefficient = require_non_negative("coefficient", coefficient)?;
    let factor_a = require_positive("factorA", factor_a)?;
    let factor_b = require_positive("factorB", factor_b)?;
    let scale = require_positive("scale", scale)?;
    Ok(coefficient * factor_a * factor_b / scale)
}

/// Expresses `result` as a percentage of `reference`; compliant when it does not
/// exceed `limit_percent`.
pub fn classify_compliance(
    result: f64,
    reference: f64,
    limit_percent: f64,
) -> Result<Compliance, CalcError> {
    let result = require_non_negative("result", result)?;
    let reference = require_positive("reference", reference)?;
    let limit_percent = require_positive("limitPercent", limit_percent)?;
    let percentage = result * 100.0 / reference;
    Ok(Compliance {
        percentage,
        compliant: percentage <= limit_percent,
    })
}

pub fn calculate_voltage_drop(inputs: &VoltageDropInputs) -> Result<VoltageDropResult, CalcError> {
    calculate_voltage_drop_with(voltage_drop_table(), current_capacity_table(), inputs)
}

/// Voltage drop against explicit tables. The capacity table is optional data:
/// selections it does not cover leave the rating fields empty.
pub fn calculate_voltage_drop_with(
    drop_table: &LookupTable,
    capacity_table: &LookupTable,
    inputs: &VoltageDropInputs,
) -> Result<VoltageDropResult, CalcError> {
    let mv_per_amp_metre =
        lookup_coefficient(drop_table, &inputs.cable, &inputs.method, inputs.size_mm2)?;

    let current = require_positive("current", inputs.current)?;
    let length = require_positive("length", inputs.length_m)?;
    let supply_voltage = require_positive("supplyVoltage", inputs.supply_voltage)?;
    let limit_percent = inputs.circuit.limit_percent();

    let voltage_drop = compute_linear_result(mv_per_amp_metre, current, length, MILLIVOLTS_PER_VOLT)?;
    let compliance = classify_compliance(voltage_drop, supply_voltage, limit_percent)?;

    let max_length_m = if mv_per_amp_metre > 0.0 {
        solve_maximum_input(
            supply_voltage,
            limit_percent,
            mv_per_amp_metre,
            current,
            MILLIVOLTS_PER_VOLT,
        )?
    } else {
        f64::INFINITY
    };

    let alternatives = rank_alternatives(
        drop_table,
        &inputs.cable,
        &inputs.method,
        current,
        length,
        supply_voltage,
        limit_percent,
        MILLIVOLTS_PER_VOLT,
        inputs.max_alternatives,
    )?;

    let current_rating = capacity_table
        .lookup(&inputs.cable, &inputs.method, inputs.size_mm2)
        .ok();
    let current_capacity_ok = current_rating.map(|rating| rating >= current);

    let minimum_size_mm2 = find_minimum_size(
        drop_table,
        capacity_table,
        &inputs.cable,
        &inputs.method,
        current,
        length,
        supply_voltage,
        limit_percent,
    )?;

    Ok(VoltageDropResult {
        cable: inputs.cable.clone(),
        method: inputs.method.clone(),
        size_mm2: inputs.size_mm2,
        mv_per_amp_metre,
        voltage_drop,
        percentage: compliance.percentage,
        limit_percent,
        compliant: compliance.compliant,
        max_length_m,
        current_rating,
        current_capacity_ok,
        minimum_size_mm2,
        alternatives,
    })
}
