use flyer_core::{
    components::{ControlCommands, DrydenConfig, SpatialComponent, VehicleConfig},
    resources::Environment,
    vehicles::{FlightVehicle, StepOutput},
};
use nalgebra::Vector3;
use std::path::PathBuf;

/// Whole milliseconds, so the fixed clock advances by exactly one step
pub const DT: f64 = 0.01;

/// Aerosonde heading north at 25 m/s, 150 m up
pub fn cruise_state() -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 0.0, -150.0),
        velocity: Vector3::new(25.0, 0.0, 0.0),
        ..Default::default()
    }
}

/// Stationary, 50 m up
pub fn hover_state() -> SpatialComponent {
    SpatialComponent::at_position(Vector3::new(0.0, 0.0, -50.0))
}

pub fn aerosonde() -> FlightVehicle {
    FlightVehicle::new(VehicleConfig::aerosonde(), None).expect("aerosonde preset is valid")
}

pub fn quadrotor() -> FlightVehicle {
    FlightVehicle::new(VehicleConfig::generic_quadrotor(), None)
        .expect("quadrotor preset is valid")
}

pub fn turbulent_aerosonde(seed: u64) -> FlightVehicle {
    let turbulence = DrydenConfig {
        seed,
        ..Default::default()
    };
    FlightVehicle::new(VehicleConfig::aerosonde(), Some(turbulence))
        .expect("aerosonde preset is valid")
}

pub fn breezy() -> Environment {
    Environment::default().with_wind(Vector3::new(0.0, 8.0, 0.0))
}

pub fn demo_config(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("configs")
        .join(name)
}

/// Flies `vehicle` for `steps` steps with constant commands, returning every output.
pub fn fly(
    vehicle: &mut FlightVehicle,
    start: SpatialComponent,
    commands: ControlCommands,
    environment: &Environment,
    steps: usize,
) -> Vec<StepOutput> {
    let mut state = start;
    (0..steps)
        .map(|_| {
            let output = vehicle.step(&state, &commands, environment, DT);
            state = output.state;
            output
        })
        .collect()
}

/// State after flying for `steps` steps.
pub fn fly_to_end(
    vehicle: &mut FlightVehicle,
    start: SpatialComponent,
    commands: ControlCommands,
    environment: &Environment,
    steps: usize,
) -> SpatialComponent {
    fly(vehicle, start, commands, environment, steps)
        .last()
        .map(|output| output.state)
        .unwrap_or(start)
}
