use crate::error::{require_non_negative, require_positive, Result, SimulationError};
use crate::grid::Grid3D;
use serde::{Deserialize, Serialize};

/// CO2 injection schedule at a single well cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectionParams {
    /// Grid cell `[ix, iy, iz]` the well perforates
    pub well_cell: [usize; 3],
    /// Mass rate (kg/s)
    pub rate_kg_per_s: f64,
    /// Injection period (years)
    pub duration_years: f64,
}

impl InjectionParams {
    /// Check rate and duration
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidParameter`] for a negative rate or
    /// a non-positive duration.
    pub fn validate(&self) -> Result<()> {
        require_non_negative("rate_kg_per_s", self.rate_kg_per_s)?;
        require_positive("duration_years", self.duration_years)
    }

    /// Check that the well cell lies inside `grid`
    ///
    /// # Errors
    /// Returns [`SimulationError::WellOutsideGrid`] otherwise.
    pub fn validate_against(&self, grid: &Grid3D) -> Result<()> {
        let [ix, iy, iz] = self.well_cell;
        if grid.contains_cell(ix, iy, iz) {
            Ok(())
        } else {
            Err(SimulationError::WellOutsideGrid {
                cell: self.well_cell,
                dims: grid.dims(),
            })
        }
    }
}

impl Default for InjectionParams {
    fn default() -> Self {
        InjectionParams {
            well_cell: [0, 0, 0],
            rate_kg_per_s: 10.0,
            duration_years: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let injection = InjectionParams::default();
        assert!(injection.validate().is_ok());
        assert_eq!(injection.well_cell, [0, 0, 0]);
    }

    #[test]
    fn test_rate_and_duration_bounds() {
        let shut_in = InjectionParams {
            rate_kg_per_s: 0.0,
            ..InjectionParams::default()
        };
        assert!(shut_in.validate().is_ok());

        let negative = InjectionParams {
            rate_kg_per_s: -1.0,
            ..InjectionParams::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(SimulationError::InvalidParameter {
                name: "rate_kg_per_s",
                ..
            })
        ));

        for bad in [0.0, -2.0, f64::INFINITY] {
            let instant = InjectionParams {
                duration_years: bad,
                ..InjectionParams::default()
            };
            assert!(
                matches!(
                    instant.validate(),
                    Err(SimulationError::InvalidParameter {
                        name: "duration_years",
                        ..
                    })
                ),
                "duration {bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_well_inside_grid() {
        let grid = Grid3D::new(4, 4, 2, 400.0, 400.0, 20.0);

        let inside = InjectionParams {
            well_cell: [3, 3, 1],
            ..InjectionParams::default()
        };
        assert!(inside.validate_against(&grid).is_ok());

        let outside = InjectionParams {
            well_cell: [3, 4, 1],
            ..InjectionParams::default()
        };
        assert!(matches!(
            outside.validate_against(&grid),
            Err(SimulationError::WellOutsideGrid {
                cell: [3, 4, 1],
                dims: [4, 4, 2]
            })
        ));
    }
}
