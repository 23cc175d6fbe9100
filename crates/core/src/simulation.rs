//! CO2 storage simulation runner
//!
//! Aggregates a reservoir grid with rock, fluid and injection parameter sets.
//! No solver is attached yet: running the simulation only reports completion
//! and points at the full implementation. Structural, residual, solubility
//! and mineral trapping are not modeled.

use crate::error::Result;
use crate::grid::Grid3D;
use crate::properties::{FluidProperties, InjectionParams, RockProperties};
use std::io::{self, Write};
use tracing::{debug, info, info_span};

/// Output interval used when the caller has no preference
pub const DEFAULT_OUTPUT_INTERVAL: usize = 10;

/// First line written by [`CO2StorageSimulation::run_simulation`]
pub const COMPLETION_MESSAGE: &str = "Simulation complete";

/// Second line written by [`CO2StorageSimulation::run_simulation`]
pub const FULL_IMPLEMENTATION_NOTICE: &str = "For full implementation, see the original notebook";

/// CO2 storage simulation over a 3D grid
///
/// Generic over the three parameter sets so callers can attach their own
/// types; the defaults are the crate's concrete property holders.
#[derive(Debug, Clone, PartialEq)]
pub struct CO2StorageSimulation<R = RockProperties, F = FluidProperties, I = InjectionParams> {
    grid: Grid3D,
    rock_props: R,
    fluid_props: F,
    injection_params: I,
}

impl<R, F, I> CO2StorageSimulation<R, F, I> {
    /// Store the grid and parameter sets as given, without validation
    pub fn new(grid: Grid3D, rock_props: R, fluid_props: F, injection_params: I) -> Self {
        Self {
            grid,
            rock_props,
            fluid_props,
            injection_params,
        }
    }

    /// Reservoir grid
    pub fn grid(&self) -> &Grid3D {
        &self.grid
    }

    /// Rock parameter set
    pub fn rock_props(&self) -> &R {
        &self.rock_props
    }

    /// Fluid parameter set
    pub fn fluid_props(&self) -> &F {
        &self.fluid_props
    }

    /// Injection parameter set
    pub fn injection_params(&self) -> &I {
        &self.injection_params
    }

    /// Run the simulation, reporting to stdout
    ///
    /// Performs no computation. Writes [`COMPLETION_MESSAGE`] and
    /// [`FULL_IMPLEMENTATION_NOTICE`] on two lines whatever the
    /// `output_interval`.
    ///
    /// # Errors
    /// Returns [`crate::SimulationError::Io`] if stdout cannot be written.
    pub fn run_simulation(&self, output_interval: usize) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_simulation_to(&mut out, output_interval)
    }

    /// Same as [`CO2StorageSimulation::run_simulation`], reporting to `out`
    ///
    /// # Errors
    /// Returns [`crate::SimulationError::Io`] if `out` cannot be written.
    pub fn run_simulation_to<W: Write>(&self, out: &mut W, output_interval: usize) -> Result<()> {
        let _span = info_span!(
            "run_simulation",
            nx = self.grid.nx,
            ny = self.grid.ny,
            nz = self.grid.nz,
            output_interval
        )
        .entered();

        info!(
            "Running CO2 storage simulation on {} ({} cells)",
            self.grid, self.grid.n_cells
        );
        debug!("No solver attached, output interval {} has no effect", output_interval);

        writeln!(out, "{COMPLETION_MESSAGE}")?;
        writeln!(out, "{FULL_IMPLEMENTATION_NOTICE}")?;
        out.flush()?;

        Ok(())
    }
}

impl CO2StorageSimulation {
    /// Validate the grid, every parameter set, and the well placement
    ///
    /// [`CO2StorageSimulation::new`] never calls this; scenario building does.
    ///
    /// # Errors
    /// Returns the first validation failure found.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.rock_props.validate()?;
        self.fluid_props.validate()?;
        self.injection_params.validate()?;
        self.injection_params.validate_against(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimulationError;

    fn expected_output() -> String {
        format!("{COMPLETION_MESSAGE}\n{FULL_IMPLEMENTATION_NOTICE}\n")
    }

    fn default_simulation() -> CO2StorageSimulation {
        CO2StorageSimulation::new(
            Grid3D::new(10, 10, 5, 1000.0, 1000.0, 50.0),
            RockProperties::default(),
            FluidProperties::default(),
            InjectionParams::default(),
        )
    }

    #[test]
    fn test_run_writes_two_fixed_lines() {
        let sim = default_simulation();
        let mut out = Vec::new();

        sim.run_simulation_to(&mut out, DEFAULT_OUTPUT_INTERVAL).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), expected_output());
    }

    #[test]
    fn test_output_independent_of_interval() {
        let sim = default_simulation();

        for interval in [0, 1, 10, 1000, usize::MAX] {
            let mut out = Vec::new();
            sim.run_simulation_to(&mut out, interval).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), expected_output());
        }
    }

    #[test]
    fn test_run_accepts_invalid_grid() {
        let sim = CO2StorageSimulation::new(Grid3D::new(0, 0, 0, 0.0, 0.0, 0.0), (), (), ());
        let mut out = Vec::new();

        sim.run_simulation_to(&mut out, DEFAULT_OUTPUT_INTERVAL).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), expected_output());
    }

    #[test]
    fn test_arbitrary_parameter_types() {
        let sim = CO2StorageSimulation::new(
            Grid3D::new(2, 2, 2, 2.0, 2.0, 2.0),
            "shale caprock",
            vec![1.0_f64, 2.0],
            42_u32,
        );

        assert_eq!(*sim.rock_props(), "shale caprock");
        assert_eq!(sim.fluid_props().len(), 2);
        assert_eq!(*sim.injection_params(), 42);
        assert_eq!(sim.grid().n_cells, 8);
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct BrokenPipe;

        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sim = default_simulation();
        let err = sim.run_simulation_to(&mut BrokenPipe, 10).unwrap_err();
        assert!(matches!(err, SimulationError::Io(_)));
    }

    #[test]
    fn test_validate() {
        assert!(default_simulation().validate().is_ok());

        let sim = CO2StorageSimulation::new(
            Grid3D::new(2, 2, 2, 2.0, 2.0, 2.0),
            RockProperties::default(),
            FluidProperties::default(),
            InjectionParams {
                well_cell: [0, 0, 2],
                ..InjectionParams::default()
            },
        );
        assert!(matches!(
            sim.validate(),
            Err(SimulationError::WellOutsideGrid { .. })
        ));
    }
}
