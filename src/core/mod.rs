mod bands;
mod data;
mod engine;
mod error;
mod solver;
mod table;
mod tax;
mod types;

pub use bands::{
    Band, BandSet, apply_deductions, classify_burden, progressive_charge, tapered_deduction,
};
pub use data::{
    CLIPPED_DIRECT, COPPER_SWA, COPPER_TWIN_AND_EARTH, DIRECT_IN_GROUND, FIRE_RESISTANT,
    IN_CONDUIT, IN_DUCT_IN_GROUND, IN_FREE_AIR, IN_INSULATED_WALL, IN_TRUNKING,
    LSOH_SINGLE_CORE, MICC, NYY_J, ON_PERFORATED_TRAY, ON_VENTILATED_TRAY,
    ON_WALL_IN_CONDUIT, PVC_SINGLE_CORE, RUBBER_FLEX, TaxYearRates, current_capacity_table,
    voltage_drop_table,
};
pub use engine::{
    MILLIVOLTS_PER_VOLT, calculate_voltage_drop, calculate_voltage_drop_with,
    classify_compliance, compute_linear_result,
};
pub use error::CalcError;
pub use solver::{
    DEFAULT_MAX_ALTERNATIVES, find_minimum_size, rank_alternatives, solve_maximum_input,
};
pub use table::{Breakpoint, CategoryData, LookupTable, SeriesData, lookup_coefficient};
pub use tax::estimate_tax;
pub use types::{
    Alternative, Alternatives, Burden, BurdenTier, CircuitKind, Compliance, TaxInputs,
    TaxResult, TaxYear, VoltageDropInputs, VoltageDropResult,
};
