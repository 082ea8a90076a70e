use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CircuitKind {
    Lighting,
    Other,
}

impl CircuitKind {
    /// Maximum voltage drop as a percentage of supply voltage.
    pub fn limit_percent(self) -> f64 {
        match self {
            CircuitKind::Lighting => 3.0,
            CircuitKind::Other => 5.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum TaxYear {
    #[serde(rename = "2024-25")]
    Y2024_25,
    #[serde(rename = "2025-26")]
    Y2025_26,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BurdenTier {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compliance {
    pub percentage: f64,
    pub compliant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Burden {
    pub effective_rate: f64,
    pub tier: BurdenTier,
}

#[derive(Debug, Clone)]
pub struct VoltageDropInputs {
    pub cable: String,
    pub method: String,
    pub size_mm2: f64,
    pub current: f64,
    pub length_m: f64,
    pub supply_voltage: f64,
    pub circuit: CircuitKind,
    pub max_alternatives: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub size_mm2: f64,
    pub mv_per_amp_metre: f64,
    pub voltage_drop: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternatives {
    pub options: Vec<Alternative>,
    /// More compliant sizes existed beyond the requested count.
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltageDropResult {
    pub cable: String,
    pub method: String,
    pub size_mm2: f64,
    pub mv_per_amp_metre: f64,
    pub voltage_drop: f64,
    pub percentage: f64,
    pub limit_percent: f64,
    pub compliant: bool,
    pub max_length_m: f64,
    pub current_rating: Option<f64>,
    pub current_capacity_ok: Option<bool>,
    pub minimum_size_mm2: Option<f64>,
    pub alternatives: Alternatives,
}

#[derive(Debug, Clone)]
pub struct TaxInputs {
    pub tax_year: TaxYear,
    pub income: f64,
    pub expenses: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub tax_year: TaxYear,
    pub income: f64,
    pub expenses: f64,
    pub profit: f64,
    pub personal_allowance: f64,
    pub taxable_income: f64,
    pub income_tax: f64,
    pub class2_ni: f64,
    pub class4_ni: f64,
    pub total_tax: f64,
    pub take_home: f64,
    pub monthly_set_aside: f64,
    pub marginal_rate: f64,
    pub burden: Burden,
}
