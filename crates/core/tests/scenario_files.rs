//! Scenario file round trips and validation through the public API

use co2_storage_core::{
    GridSpec, InjectionParams, RockProperties, ScenarioConfig, SimulationError,
    DEFAULT_OUTPUT_INTERVAL,
};
use std::fs;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reservoir_spec() -> GridSpec {
    GridSpec {
        nx: 40,
        ny: 40,
        nz: 10,
        lx: 4000.0,
        ly: 4000.0,
        lz: 100.0,
    }
}

#[test]
fn test_save_then_load_preserves_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");

    let mut config = ScenarioConfig::with_grid(reservoir_spec());
    config.rock = RockProperties::CARBONATE;
    config.injection = InjectionParams {
        well_cell: [20, 20, 9],
        rate_kg_per_s: 31.7,
        duration_years: 25.0,
    };
    config.output_interval = 4;

    config.save(&path).unwrap();
    let loaded = ScenarioConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_is_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");

    ScenarioConfig::with_grid(reservoir_spec()).save(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains("\"grid\""));
    assert!(text.contains("\"porosity\""));
    assert!(text.contains("\"output_interval\": 10"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScenarioConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimulationError::Io(_)));
}

#[test]
fn test_load_malformed_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"grid\": { \"nx\": 4 ").unwrap();

    let err = ScenarioConfig::load(&path).unwrap_err();
    assert!(matches!(err, SimulationError::Config(_)));
}

#[test]
fn test_loaded_scenario_builds_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.json");
    ScenarioConfig::with_grid(reservoir_spec()).save(&path).unwrap();

    let config = ScenarioConfig::load(&path).unwrap();
    let sim = config.build().unwrap();

    assert_eq!(config.output_interval, DEFAULT_OUTPUT_INTERVAL);
    assert_eq!(sim.grid().n_cells, 16_000);
    assert_eq!(sim.grid().dz, 10.0);
    assert_eq!(sim.rock_props(), &RockProperties::default());
}
