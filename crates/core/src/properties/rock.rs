use crate::error::{require_non_negative, require_positive, Result, SimulationError};
use serde::{Deserialize, Serialize};

/// Reservoir rock properties, uniform over the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockProperties {
    pub porosity: f64,               // fraction of bulk volume, (0, 1]
    pub permeability_md: f64,        // absolute permeability (mD)
    pub compressibility_per_pa: f64, // pore compressibility (1/Pa)
}

impl RockProperties {
    /// Clean saline-aquifer sandstone
    pub const SANDSTONE: RockProperties = RockProperties {
        porosity: 0.2,
        permeability_md: 100.0,
        compressibility_per_pa: 4.5e-10,
    };

    /// Tight carbonate
    pub const CARBONATE: RockProperties = RockProperties {
        porosity: 0.12,
        permeability_md: 10.0,
        compressibility_per_pa: 3.0e-10,
    };

    /// Check ranges
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] for the first value out of range.
    pub fn validate(&self) -> Result<()> {
        if !(self.porosity > 0.0 && self.porosity <= 1.0) {
            return Err(SimulationError::invalid_parameter(
                "porosity",
                self.porosity,
                "must be in (0, 1]",
            ));
        }
        require_positive("permeability_md", self.permeability_md)?;
        require_non_negative("compressibility_per_pa", self.compressibility_per_pa)
    }
}

impl Default for RockProperties {
    fn default() -> Self {
        Self::SANDSTONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(RockProperties::SANDSTONE.validate().is_ok());
        assert!(RockProperties::CARBONATE.validate().is_ok());
        assert_eq!(RockProperties::default(), RockProperties::SANDSTONE);
    }

    #[test]
    fn test_porosity_bounds() {
        let mut rock = RockProperties::default();

        rock.porosity = 1.0;
        assert!(rock.validate().is_ok());

        for bad in [0.0, -0.1, 1.01, f64::NAN] {
            rock.porosity = bad;
            assert!(
                matches!(
                    rock.validate(),
                    Err(SimulationError::InvalidParameter { name: "porosity", .. })
                ),
                "porosity {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_compressibility_allowed() {
        let rock = RockProperties {
            compressibility_per_pa: 0.0,
            ..RockProperties::default()
        };
        assert!(rock.validate().is_ok());
    }
}
