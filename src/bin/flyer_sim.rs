use bevy::prelude::*;
use std::{
    env,
    io::{self, BufWriter, Write},
    path::Path,
};

use flyer_core::{
    resources::SimulationConfig, utils::SimError, vehicles::FlightVehicle, VehicleConfig,
};

/// Runs a headless simulation and writes one JSON record per step to stdout.
///
/// Usage: `flyer_sim [simulation.yaml]`
fn main() -> Result<(), SimError> {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy::log::LogPlugin::default()));

    let (sim, base_dir) = match env::args().nth(1) {
        Some(path) => {
            info!("Loading simulation from {}", path);
            let config = SimulationConfig::load(&path)?;
            let base_dir = Path::new(&path).parent().map(Path::to_path_buf);
            (config, base_dir)
        }
        None => {
            info!("No simulation file given, flying the default Aerosonde run");
            (SimulationConfig::default(), None)
        }
    };

    let vehicle_config = VehicleConfig::new(sim.vehicle.source(base_dir.as_deref()))?;
    let mut vehicle = FlightVehicle::new(vehicle_config, sim.turbulence())?;
    let environment = sim.weather.environment();
    let dt = sim.physics.timestep;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut state = sim.initial_state;

    for step in 0..sim.step_count() {
        let output = vehicle.step(&state, &sim.commands, &environment, dt);
        state = output.state;
        let record = serde_json::json!({
            "time": (step + 1) as f64 * dt,
            "output": output,
        });
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        "{} finished after {} steps at altitude {:.1} m",
        vehicle.name(),
        sim.step_count(),
        state.altitude()
    );
    Ok(())
}
