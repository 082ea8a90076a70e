use thiserror::Error;

/// Reasons a calculation refuses to produce a result.
///
/// Every variant is recoverable: callers render guidance and wait for the next
/// input change rather than treating any of these as a fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A required selection is missing or names a key the table does not hold.
    #[error("incomplete selection: {field}")]
    IncompleteSelection { field: String },

    /// A numeric input is non-finite, negative, or zero where it must be positive.
    #[error("invalid magnitude for {field}: {value}")]
    InvalidMagnitude { field: String, value: f64 },

    /// Compiled-in table data breaks its construction invariant.
    #[error("invalid table: {0}")]
    InvalidTable(String),
}

impl CalcError {
    pub fn incomplete(field: impl Into<String>) -> Self {
        Self::IncompleteSelection {
            field: field.into(),
        }
    }

    pub fn magnitude(field: impl Into<String>, value: f64) -> Self {
        Self::InvalidMagnitude {
            field: field.into(),
            value,
        }
    }

    /// Short machine-readable tag, used by the HTTP adapter.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IncompleteSelection { .. } => "incompleteSelection",
            Self::InvalidMagnitude { .. } => "invalidMagnitude",
            Self::InvalidTable(_) => "invalidTable",
        }
    }
}

/// Accepts finite values strictly greater than zero.
pub fn require_positive(field: &str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::magnitude(field, value))
    }
}

/// Accepts finite values greater than or equal to zero.
pub fn require_non_negative(field: &str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::magnitude(field, value))
    }
}
