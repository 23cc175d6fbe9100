//! Error type shared by the grid, parameter sets, scenario loader and runner

use thiserror::Error;

/// Errors raised while validating or running a storage simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Grid dimension or extent is unusable
    #[error("Invalid grid along {axis}: {reason}")]
    InvalidGrid {
        /// Axis name (`"x"`, `"y"`, `"z"`) or `"cells"` for the total count
        axis: &'static str,
        reason: String,
    },

    /// Rock, fluid or injection parameter is out of range
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Injection well placed in a cell the grid does not contain
    #[error("Well cell {cell:?} lies outside the {dims:?} grid")]
    WellOutsideGrid { cell: [usize; 3], dims: [usize; 3] },

    /// Output or scenario file I/O failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario JSON could not be parsed or serialized
    #[error("Scenario config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimulationError {
    /// Create an invalid-grid error for an axis
    pub fn invalid_grid(axis: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidGrid {
            axis,
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimulationError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Crate result alias
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Check that `value` is finite and strictly positive
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimulationError::invalid_parameter(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SimulationError::invalid_parameter(name, value, "must be > 0"));
    }
    Ok(())
}

/// Check that `value` is finite and not negative
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(SimulationError::invalid_parameter(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(SimulationError::invalid_parameter(name, value, "must be >= 0"));
    }
    Ok(())
}
