//! CO2 Geological Storage Simulator Core Library
//!
//! Building blocks for a CO2 geological-storage reservoir simulator: a regular
//! 3D Cartesian grid, rock/fluid/injection parameter sets, a scenario file
//! format, and the simulation runner that aggregates them.
//!
//! The runner has no solver attached. Multiphase flow, pressure response and
//! the trapping mechanisms (structural, residual, solubility, mineral) are
//! not modeled; `run_simulation` only reports completion.
//!
//! ```
//! use co2_storage_core::{CO2StorageSimulation, FluidProperties, Grid3D, InjectionParams, RockProperties};
//!
//! let grid = Grid3D::try_new(20, 20, 5, 1000.0, 1000.0, 50.0)?;
//! assert_eq!(grid.n_cells, 2000);
//! assert_eq!(grid.dx, 50.0);
//!
//! let sim = CO2StorageSimulation::new(
//!     grid,
//!     RockProperties::default(),
//!     FluidProperties::default(),
//!     InjectionParams::default(),
//! );
//! let mut report = Vec::new();
//! sim.run_simulation_to(&mut report, 10)?;
//! assert_eq!(report.iter().filter(|&&b| b == b'\n').count(), 2);
//! # Ok::<(), co2_storage_core::SimulationError>(())
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod properties;
pub mod simulation;
pub mod vec3;

pub use config::{GridSpec, ScenarioConfig};
pub use error::{Result, SimulationError};
pub use grid::Grid3D;
pub use properties::{FluidProperties, InjectionParams, RockProperties};
pub use simulation::{
    CO2StorageSimulation, COMPLETION_MESSAGE, DEFAULT_OUTPUT_INTERVAL, FULL_IMPLEMENTATION_NOTICE,
};
pub use vec3::Vec3;
