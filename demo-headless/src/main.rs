use clap::{Parser, ValueEnum};
use co2_storage_core::{Grid3D, GridSpec, RockProperties, ScenarioConfig, SimulationError};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Headless CO2 storage simulation runner
#[derive(Parser, Debug)]
#[command(name = "co2-storage-headless")]
#[command(about = "CO2 geological storage simulation (headless)", long_about = None)]
struct Args {
    /// Scenario JSON file (overrides the grid flags)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cells along x
    #[arg(long, default_value_t = 20)]
    nx: usize,

    /// Cells along y
    #[arg(long, default_value_t = 20)]
    ny: usize,

    /// Cells along z
    #[arg(long, default_value_t = 5)]
    nz: usize,

    /// Domain length along x in meters
    #[arg(long, default_value_t = 1000.0)]
    lx: f64,

    /// Domain length along y in meters
    #[arg(long, default_value_t = 1000.0)]
    ly: f64,

    /// Domain thickness along z in meters
    #[arg(long, default_value_t = 50.0)]
    lz: f64,

    /// Rock preset (overrides the scenario's rock section)
    #[arg(long, value_enum)]
    rock: Option<RockPreset>,

    /// Report interval in steps (overrides the scenario value)
    #[arg(short, long)]
    output_interval: Option<usize>,

    /// Write the effective scenario to this path before running
    #[arg(long)]
    dump_config: Option<PathBuf>,

    /// Skip validation and build the grid as given
    #[arg(long)]
    unchecked: bool,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RockPreset {
    Sandstone,
    Carbonate,
}

impl RockPreset {
    fn properties(self) -> RockProperties {
        match self {
            RockPreset::Sandstone => RockProperties::SANDSTONE,
            RockPreset::Carbonate => RockProperties::CARBONATE,
        }
    }
}

impl Args {
    fn scenario(&self) -> Result<ScenarioConfig, SimulationError> {
        let mut scenario = match &self.config {
            Some(path) => ScenarioConfig::load(path)?,
            None => ScenarioConfig::with_grid(GridSpec {
                nx: self.nx,
                ny: self.ny,
                nz: self.nz,
                lx: self.lx,
                ly: self.ly,
                lz: self.lz,
            }),
        };
        if let Some(preset) = self.rock {
            scenario.rock = preset.properties();
        }
        if let Some(interval) = self.output_interval {
            scenario.output_interval = interval;
        }
        Ok(scenario)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the simulation report only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), SimulationError> {
    let scenario = args.scenario()?;

    if let Some(path) = &args.dump_config {
        scenario.save(path)?;
        info!("Wrote effective scenario to {}", path.display());
    }

    let sim = if args.unchecked {
        warn!("Validation disabled, grid built as given");
        // Grid3D::new multiplies the counts unchecked
        Grid3D::checked_cell_count(scenario.grid.nx, scenario.grid.ny, scenario.grid.nz)?;
        scenario.build_unchecked()
    } else {
        scenario.build()?
    };

    let grid = sim.grid();
    info!(
        "Grid: {} (dx={:.2} m, dy={:.2} m, dz={:.2} m, bulk volume {:.3e} m³)",
        grid,
        grid.dx,
        grid.dy,
        grid.dz,
        grid.bulk_volume()
    );
    info!(
        "Rock: porosity {:.2}, permeability {:.1} mD; injection {:.1} kg/s for {:.1} years at cell {:?}",
        sim.rock_props().porosity,
        sim.rock_props().permeability_md,
        sim.injection_params().rate_kg_per_s,
        sim.injection_params().duration_years,
        sim.injection_params().well_cell
    );

    sim.run_simulation(scenario.output_interval)
}

/// Process exit status for a run, reporting any failure to `err_out`
fn report_outcome<W: Write>(outcome: Result<(), SimulationError>, err_out: &mut W) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(e) => {
            error!("Simulation failed: {}", e);
            let _ = writeln!(err_out, "Error: {e}");
            1
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let status = report_outcome(run(&args), &mut io::stderr());
    ExitCode::from(status)
}
