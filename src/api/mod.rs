use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error as _, IntoDeserializer, value::Error as ValueError},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    CalcError, CircuitKind, DEFAULT_MAX_ALTERNATIVES, TaxInputs, TaxResult, TaxYear,
    VoltageDropInputs, VoltageDropResult, calculate_voltage_drop, estimate_tax,
    voltage_drop_table,
};

const MAX_ALTERNATIVES_LIMIT: usize = 32;
const DEFAULT_SUPPLY_VOLTAGE: f64 = 230.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCircuitKind {
    Lighting,
    Other,
}

impl From<CliCircuitKind> for CircuitKind {
    fn from(value: CliCircuitKind) -> Self {
        match value {
            CliCircuitKind::Lighting => CircuitKind::Lighting,
            CliCircuitKind::Other => CircuitKind::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliTaxYear {
    #[value(name = "2024-25")]
    Y2024_25,
    #[value(name = "2025-26")]
    Y2025_26,
}

impl From<CliTaxYear> for TaxYear {
    fn from(value: CliTaxYear) -> Self {
        match value {
            CliTaxYear::Y2024_25 => TaxYear::Y2024_25,
            CliTaxYear::Y2025_26 => TaxYear::Y2025_26,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiCircuitKind {
    Lighting,
    Other,
}

impl From<ApiCircuitKind> for CliCircuitKind {
    fn from(value: ApiCircuitKind) -> Self {
        match value {
            ApiCircuitKind::Lighting => CliCircuitKind::Lighting,
            ApiCircuitKind::Other => CliCircuitKind::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
enum ApiTaxYear {
    #[serde(rename = "2024-25")]
    Y2024_25,
    #[serde(rename = "2025-26")]
    Y2025_26,
}

impl From<ApiTaxYear> for CliTaxYear {
    fn from(value: ApiTaxYear) -> Self {
        match value {
            ApiTaxYear::Y2024_25 => CliTaxYear::Y2024_25,
            ApiTaxYear::Y2025_26 => CliTaxYear::Y2025_26,
        }
    }
}

/// A form field as typed: a JSON number, or text holding one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    fn into_number<E: serde::de::Error>(self) -> Result<Option<f64>, E> {
        match self {
            FormValue::Number(v) => Ok(Some(v)),
            FormValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| E::custom(format!("'{trimmed}' is not a number")))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FormValues {
    Many(Vec<FormValue>),
    One(FormValue),
}

/// Blank text and `null` both mean "not entered yet".
fn form_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<FormValue>::deserialize(deserializer)? {
        Some(value) => value.into_number(),
        None => Ok(None),
    }
}

fn form_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    let Some(value) = form_number(deserializer)? else {
        return Ok(None);
    };
    if value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
        Ok(Some(value as usize))
    } else {
        Err(D::Error::custom(format!("'{value}' is not a whole number")))
    }
}

fn form_numbers<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let values = match Option::<FormValues>::deserialize(deserializer)? {
        Some(FormValues::Many(values)) => values,
        Some(FormValues::One(value)) => vec![value],
        None => Vec::new(),
    };
    let mut numbers = Vec::with_capacity(values.len());
    for value in values {
        if let Some(number) = value.into_number::<D::Error>()? {
            numbers.push(number);
        }
    }
    Ok(numbers)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VoltageDropPayload {
    cable: Option<String>,
    method: Option<String>,
    #[serde(deserialize_with = "form_number")]
    size: Option<f64>,
    #[serde(deserialize_with = "form_number")]
    current: Option<f64>,
    #[serde(deserialize_with = "form_number")]
    length: Option<f64>,
    #[serde(deserialize_with = "form_number")]
    supply_voltage: Option<f64>,
    circuit: Option<ApiCircuitKind>,
    #[serde(deserialize_with = "form_count")]
    max_alternatives: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TaxPayload {
    tax_year: Option<ApiTaxYear>,
    #[serde(deserialize_with = "form_number")]
    income: Option<f64>,
    #[serde(deserialize_with = "form_numbers")]
    expenses: Vec<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "sparkcalc",
    about = "BS 7671 voltage drop and UK self-employed tax calculators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Voltage drop, maximum length and compliant sizes for one cable run
    VoltageDrop(VoltageDropCli),
    /// Income tax and National Insurance for a sole trader
    Tax(TaxCli),
    /// List the cable types, installation methods and sizes that can be selected
    Tables,
}

#[derive(Args, Debug, Clone)]
pub struct VoltageDropCli {
    #[arg(long, help = "Cable type, e.g. \"Copper T&E (6242Y)\"")]
    cable: String,
    #[arg(long, help = "Installation method, e.g. \"Clipped direct (C)\"")]
    method: String,
    #[arg(long, help = "Conductor size in mm²")]
    size: f64,
    #[arg(long, help = "Design current Ib in amperes")]
    current: f64,
    #[arg(long, help = "Run length in metres")]
    length: f64,
    #[arg(long, default_value_t = DEFAULT_SUPPLY_VOLTAGE)]
    supply_voltage: f64,
    #[arg(long, value_enum, default_value_t = CliCircuitKind::Other)]
    circuit: CliCircuitKind,
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_ALTERNATIVES,
        help = "How many compliant sizes to list"
    )]
    max_alternatives: usize,
}

#[derive(Args, Debug, Clone)]
pub struct TaxCli {
    #[arg(long, value_enum, default_value_t = CliTaxYear::Y2025_26)]
    tax_year: CliTaxYear,
    #[arg(long, help = "Gross self-employed income in pounds")]
    income: f64,
    #[arg(long = "expense", help = "Allowable business expense in pounds; repeat for each item")]
    expenses: Vec<f64>,
}

#[derive(Debug)]
enum RequestError {
    Invalid(String),
    Calc(CalcError),
}

impl From<CalcError> for RequestError {
    fn from(value: CalcError) -> Self {
        RequestError::Calc(value)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoltageDropResponse {
    current: f64,
    length_m: f64,
    supply_voltage: f64,
    circuit: CircuitKind,
    #[serde(flatten)]
    result: VoltageDropResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaxResponse {
    expense_items: usize,
    class2_weekly_rate: f64,
    #[serde(flatten)]
    result: TaxResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MethodOption {
    name: String,
    sizes_mm2: Vec<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CableOption {
    name: String,
    methods: Vec<MethodOption>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CircuitOption {
    circuit: CircuitKind,
    limit_percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TablesResponse {
    cables: Vec<CableOption>,
    circuits: Vec<CircuitOption>,
    tax_years: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
}

fn build_voltage_drop_inputs(cli: VoltageDropCli) -> Result<VoltageDropInputs, String> {
    if cli.max_alternatives > MAX_ALTERNATIVES_LIMIT {
        return Err(format!(
            "--max-alternatives must be <= {MAX_ALTERNATIVES_LIMIT}"
        ));
    }

    Ok(VoltageDropInputs {
        cable: cli.cable.trim().to_string(),
        method: cli.method.trim().to_string(),
        size_mm2: cli.size,
        current: cli.current,
        length_m: cli.length,
        supply_voltage: cli.supply_voltage,
        circuit: cli.circuit.into(),
        max_alternatives: cli.max_alternatives,
    })
}

fn build_tax_inputs(cli: TaxCli) -> Result<TaxInputs, String> {
    if cli.expenses.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err("--expense values must be >= 0".to_string());
    }

    Ok(TaxInputs {
        tax_year: cli.tax_year.into(),
        income: cli.income,
        expenses: cli.expenses,
    })
}

/// Runs a one-shot subcommand and returns its JSON output.
pub fn run_command(command: Command) -> Result<String, String> {
    let json = match command {
        Command::Serve { .. } => return Err("serve runs the HTTP server".to_string()),
        Command::VoltageDrop(cli) => {
            let inputs = build_voltage_drop_inputs(cli)?;
            let result = calculate_voltage_drop(&inputs).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&build_voltage_drop_response(&inputs, result))
        }
        Command::Tax(cli) => {
            let inputs = build_tax_inputs(cli)?;
            let result = estimate_tax(&inputs).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&build_tax_response(&inputs, result))
        }
        Command::Tables => serde_json::to_string_pretty(&build_tables_response()),
    };
    json.map_err(|e| format!("Failed to serialize output: {e}"))
}

pub fn app() -> Router {
    Router::new()
        .route(
            "/api/voltage-drop",
            get(voltage_drop_get_handler).post(voltage_drop_post_handler),
        )
        .route("/api/tax", get(tax_get_handler).post(tax_post_handler))
        .route("/api/tables", get(tables_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    log::info!("sparkcalc HTTP API listening on http://{addr}");
    log::info!("Local access: http://127.0.0.1:{port}/api/tables");

    axum::serve(listener, app()).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found", None)
}

async fn tables_handler() -> Response {
    json_response(StatusCode::OK, build_tables_response())
}

async fn voltage_drop_get_handler(
    payload: Result<Query<VoltageDropPayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => voltage_drop_handler_impl(payload).await,
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

async fn voltage_drop_post_handler(
    payload: Result<Json<VoltageDropPayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => voltage_drop_handler_impl(payload).await,
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

async fn tax_get_handler(
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let payload = params
        .map_err(|rejection| rejection.body_text())
        .and_then(|Query(params)| tax_payload_from_query(params));
    match payload {
        Ok(payload) => tax_handler_impl(payload).await,
        Err(msg) => rejected_payload(msg),
    }
}

async fn tax_post_handler(payload: Result<Json<TaxPayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => tax_handler_impl(payload).await,
        Err(rejection) => rejected_payload(rejection.body_text()),
    }
}

async fn voltage_drop_handler_impl(payload: VoltageDropPayload) -> Response {
    let outcome = voltage_drop_request_from_payload(payload).and_then(|inputs| {
        let result = calculate_voltage_drop(&inputs)?;
        Ok(build_voltage_drop_response(&inputs, result))
    });
    match outcome {
        Ok(response) => {
            log::debug!(
                "voltage drop {} / {} / {} mm²: {:.2}%",
                response.result.cable,
                response.result.method,
                response.result.size_mm2,
                response.result.percentage
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => request_error_response(err),
    }
}

async fn tax_handler_impl(payload: TaxPayload) -> Response {
    let outcome = tax_request_from_payload(payload).and_then(|inputs| {
        let result = estimate_tax(&inputs)?;
        Ok(build_tax_response(&inputs, result))
    });
    match outcome {
        Ok(response) => {
            log::debug!(
                "tax estimate {}: total {:.2}",
                response.result.tax_year.label(),
                response.result.total_tax
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => request_error_response(err),
    }
}

fn rejected_payload(msg: String) -> Response {
    log::warn!("rejected payload: {msg}");
    error_response(StatusCode::BAD_REQUEST, &msg, None)
}

fn request_error_response(err: RequestError) -> Response {
    match err {
        RequestError::Invalid(msg) => {
            log::warn!("invalid request: {msg}");
            error_response(StatusCode::BAD_REQUEST, &msg, None)
        }
        RequestError::Calc(err) => {
            log::warn!("no result: {err}");
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &err.to_string(),
                Some(err.kind()),
            )
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str, kind: Option<&'static str>) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            kind,
        },
    )
}

#[cfg(test)]
fn voltage_drop_request_from_json(json: &str) -> Result<VoltageDropInputs, RequestError> {
    let payload = serde_json::from_str::<VoltageDropPayload>(json)
        .map_err(|e| RequestError::Invalid(format!("Invalid API JSON payload: {e}")))?;
    voltage_drop_request_from_payload(payload)
}

fn required_text(value: Option<String>, field: &str) -> Result<String, CalcError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(CalcError::incomplete(field)),
    }
}

fn required_number(value: Option<f64>, field: &str) -> Result<f64, CalcError> {
    value.ok_or_else(|| CalcError::incomplete(field))
}

fn voltage_drop_request_from_payload(
    payload: VoltageDropPayload,
) -> Result<VoltageDropInputs, RequestError> {
    let mut cli = default_voltage_drop_cli_for_api();

    cli.cable = required_text(payload.cable, "cable")?;
    cli.method = required_text(payload.method, "method")?;
    cli.size = required_number(payload.size, "size")?;
    cli.current = required_number(payload.current, "current")?;
    cli.length = required_number(payload.length, "length")?;

    if let Some(v) = payload.supply_voltage {
        cli.supply_voltage = v;
    }
    if let Some(v) = payload.circuit {
        cli.circuit = v.into();
    }
    if let Some(v) = payload.max_alternatives {
        cli.max_alternatives = v;
    }

    build_voltage_drop_inputs(cli).map_err(RequestError::Invalid)
}

#[cfg(test)]
fn tax_request_from_json(json: &str) -> Result<TaxInputs, RequestError> {
    let payload = serde_json::from_str::<TaxPayload>(json)
        .map_err(|e| RequestError::Invalid(format!("Invalid API JSON payload: {e}")))?;
    tax_request_from_payload(payload)
}

/// Folds query parameters into a payload. `expenses` repeats once per item.
fn tax_payload_from_query(params: Vec<(String, String)>) -> Result<TaxPayload, String> {
    let mut payload = TaxPayload::default();
    for (key, value) in params {
        match key.as_str() {
            "taxYear" if !value.trim().is_empty() => {
                let deserializer: serde::de::value::StrDeserializer<'_, ValueError> =
                    value.trim().into_deserializer();
                payload.tax_year = Some(
                    ApiTaxYear::deserialize(deserializer)
                        .map_err(|e| format!("Failed to deserialize query string: taxYear: {e}"))?,
                );
            }
            "income" => payload.income = query_number("income", value)?,
            "expenses" => payload.expenses.extend(query_number("expenses", value)?),
            _ => {}
        }
    }
    Ok(payload)
}

fn query_number(field: &str, value: String) -> Result<Option<f64>, String> {
    FormValue::Text(value)
        .into_number::<ValueError>()
        .map_err(|e| format!("Failed to deserialize query string: {field}: {e}"))
}

fn tax_request_from_payload(payload: TaxPayload) -> Result<TaxInputs, RequestError> {
    let mut cli = default_tax_cli_for_api();

    cli.income = required_number(payload.income, "income")?;
    if let Some(v) = payload.tax_year {
        cli.tax_year = v.into();
    }
    cli.expenses = payload.expenses;

    build_tax_inputs(cli).map_err(RequestError::Invalid)
}

fn default_voltage_drop_cli_for_api() -> VoltageDropCli {
    VoltageDropCli {
        cable: String::new(),
        method: String::new(),
        size: 0.0,
        current: 0.0,
        length: 0.0,
        supply_voltage: DEFAULT_SUPPLY_VOLTAGE,
        circuit: CliCircuitKind::Other,
        max_alternatives: DEFAULT_MAX_ALTERNATIVES,
    }
}

fn default_tax_cli_for_api() -> TaxCli {
    TaxCli {
        tax_year: CliTaxYear::Y2025_26,
        income: 0.0,
        expenses: Vec::new(),
    }
}

fn build_voltage_drop_response(
    inputs: &VoltageDropInputs,
    result: VoltageDropResult,
) -> VoltageDropResponse {
    VoltageDropResponse {
        current: inputs.current,
        length_m: inputs.length_m,
        supply_voltage: inputs.supply_voltage,
        circuit: inputs.circuit,
        result,
    }
}

fn build_tax_response(inputs: &TaxInputs, result: TaxResult) -> TaxResponse {
    TaxResponse {
        expense_items: inputs.expenses.len(),
        class2_weekly_rate: inputs.tax_year.rates().class2_weekly_rate,
        result,
    }
}

fn build_tables_response() -> TablesResponse {
    let table = voltage_drop_table();
    let cables = table
        .categories()
        .map(|cable| CableOption {
            name: cable.to_string(),
            methods: table
                .sub_categories(cable)
                .unwrap_or_default()
                .into_iter()
                .map(|method| MethodOption {
                    name: method.to_string(),
                    sizes_mm2: table
                        .breakpoints(cable, method)
                        .map(|points| points.iter().map(|p| p.key).collect())
                        .unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    TablesResponse {
        cables,
        circuits: [CircuitKind::Lighting, CircuitKind::Other]
            .into_iter()
            .map(|circuit| CircuitOption {
                circuit,
                limit_percent: circuit.limit_percent(),
            })
            .collect(),
        tax_years: TaxYear::ALL.iter().map(|year| year.label()).collect(),
    }
}
