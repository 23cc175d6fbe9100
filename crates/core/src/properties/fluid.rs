use crate::error::{require_positive, Result};
use serde::{Deserialize, Serialize};

/// Supercritical CO2 and formation brine properties at reservoir conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidProperties {
    pub co2_density: f64,     // kg/m³
    pub brine_density: f64,   // kg/m³
    pub co2_viscosity: f64,   // Pa·s
    pub brine_viscosity: f64, // Pa·s
}

impl FluidProperties {
    /// Check that every value is finite and positive
    ///
    /// # Errors
    /// Returns [`crate::SimulationError::InvalidParameter`] for the first bad value.
    pub fn validate(&self) -> Result<()> {
        require_positive("co2_density", self.co2_density)?;
        require_positive("brine_density", self.brine_density)?;
        require_positive("co2_viscosity", self.co2_viscosity)?;
        require_positive("brine_viscosity", self.brine_viscosity)
    }
}

impl Default for FluidProperties {
    // ~1.5 km depth, ~15 MPa, ~50°C
    fn default() -> Self {
        FluidProperties {
            co2_density: 700.0,
            brine_density: 1100.0,
            co2_viscosity: 6.0e-5,
            brine_viscosity: 6.0e-4,
        }
    }
}
