//! Scenario files describing a storage simulation
//!
//! A scenario bundles the grid shape with the rock, fluid and injection
//! parameter sets. Only `grid` is required; every other section falls back to
//! its default.

use crate::error::{Result, SimulationError};
use crate::grid::Grid3D;
use crate::properties::{FluidProperties, InjectionParams, RockProperties};
use crate::simulation::{CO2StorageSimulation, DEFAULT_OUTPUT_INTERVAL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serialized grid shape: counts and extents, spacing is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub lx: f64,
    pub ly: f64,
    pub lz: f64,
}

impl GridSpec {
    /// Build a validated grid
    ///
    /// # Errors
    /// See [`Grid3D::try_new`].
    pub fn to_grid(&self) -> Result<Grid3D> {
        Grid3D::try_new(self.nx, self.ny, self.nz, self.lx, self.ly, self.lz)
    }

    /// Build a grid without validation
    pub fn to_grid_unchecked(&self) -> Grid3D {
        Grid3D::new(self.nx, self.ny, self.nz, self.lx, self.ly, self.lz)
    }
}

impl From<&Grid3D> for GridSpec {
    fn from(grid: &Grid3D) -> Self {
        GridSpec {
            nx: grid.nx,
            ny: grid.ny,
            nz: grid.nz,
            lx: grid.lx,
            ly: grid.ly,
            lz: grid.lz,
        }
    }
}

/// Complete scenario: grid, parameter sets and reporting interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub grid: GridSpec,
    #[serde(default)]
    pub rock: RockProperties,
    #[serde(default)]
    pub fluid: FluidProperties,
    #[serde(default)]
    pub injection: InjectionParams,
    #[serde(default = "default_output_interval")]
    pub output_interval: usize,
}

fn default_output_interval() -> usize {
    DEFAULT_OUTPUT_INTERVAL
}

impl ScenarioConfig {
    /// Scenario over `grid` with default parameter sets
    pub fn with_grid(grid: GridSpec) -> Self {
        ScenarioConfig {
            grid,
            rock: RockProperties::default(),
            fluid: FluidProperties::default(),
            injection: InjectionParams::default(),
            output_interval: DEFAULT_OUTPUT_INTERVAL,
        }
    }

    /// Parse a scenario from JSON text
    ///
    /// # Errors
    /// Returns [`crate::SimulationError::Config`] if the JSON is malformed
    /// or misses the `grid` section.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// JSON has no NaN or infinity, so non-finite values are refused rather
    /// than written as `null`.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidGrid`] or
    /// [`SimulationError::InvalidParameter`] for a non-finite value, or
    /// [`SimulationError::Config`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        self.check_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every floating-point value survives a JSON round trip
    ///
    /// # Errors
    /// Returns the first non-finite value found.
    pub fn check_finite(&self) -> Result<()> {
        for (axis, length) in [("x", self.grid.lx), ("y", self.grid.ly), ("z", self.grid.lz)] {
            if !length.is_finite() {
                return Err(SimulationError::invalid_grid(
                    axis,
                    format!("extent must be finite, got {length}"),
                ));
            }
        }

        let values = [
            ("porosity", self.rock.porosity),
            ("permeability_md", self.rock.permeability_md),
            ("compressibility_per_pa", self.rock.compressibility_per_pa),
            ("co2_density", self.fluid.co2_density),
            ("brine_density", self.fluid.brine_density),
            ("co2_viscosity", self.fluid.co2_viscosity),
            ("brine_viscosity", self.fluid.brine_viscosity),
            ("rate_kg_per_s", self.injection.rate_kg_per_s),
            ("duration_years", self.injection.duration_years),
        ];
        match values.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(SimulationError::invalid_parameter(
                name,
                value,
                "must be finite",
            )),
            None => Ok(()),
        }
    }

    /// Load a scenario file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a config error if
    /// it cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("Loaded scenario from {}", path.display());
        Ok(config)
    }

    /// Save the scenario as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error for non-finite values (see
    /// [`ScenarioConfig::to_json_string`]) or if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        debug!("Saved scenario to {}", path.display());
        Ok(())
    }

    /// Validate every section and build the simulation
    ///
    /// # Errors
    /// Returns the first failure among grid, rock, fluid, injection and
    /// well placement.
    pub fn build(&self) -> Result<CO2StorageSimulation> {
        let sim = CO2StorageSimulation::new(
            self.grid.to_grid()?,
            self.rock,
            self.fluid,
            self.injection,
        );
        sim.validate()?;
        Ok(sim)
    }

    /// Build the simulation without any validation
    pub fn build_unchecked(&self) -> CO2StorageSimulation {
        CO2StorageSimulation::new(
            self.grid.to_grid_unchecked(),
            self.rock,
            self.fluid,
            self.injection,
        )
    }
}
