//! Parameter sets aggregated by a storage simulation
//!
//! These are inert holders: the simulation carries them alongside the grid
//! but no flow, rock or trapping physics reads them.

pub mod fluid;
pub mod injection;
pub mod rock;

pub use fluid::FluidProperties;
pub use injection::InjectionParams;
pub use rock::RockProperties;
