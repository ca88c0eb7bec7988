use bevy::prelude::*;

use crate::components::{ControlCommands, SpatialComponent};
use crate::resources::{EnvironmentResource, PhysicsConfig};
use crate::vehicles::{FlightVehicle, StepOutput};

/// Output of the most recent fixed step for an entity.
#[derive(Component, Debug, Clone)]
pub struct LastStep(pub StepOutput);

#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub struct FlightDynamicsSet;

/// Steps every entity carrying a `FlightVehicle`, a `SpatialComponent` and
/// `ControlCommands` on the fixed schedule.
#[derive(Default)]
pub struct FlightDynamicsPlugin {
    pub config: PhysicsConfig,
}

impl FlightDynamicsPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config)
            .init_resource::<EnvironmentResource>()
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep))
            .add_systems(FixedUpdate, flight_dynamics_system.in_set(FlightDynamicsSet));
    }
}

pub fn flight_dynamics_system(
    mut commands: Commands,
    mut query: Query<(
        Entity,
        &mut FlightVehicle,
        &mut SpatialComponent,
        &ControlCommands,
    )>,
    environment: Res<EnvironmentResource>,
    time: Res<Time<Fixed>>,
) {
    let dt = time.delta_secs_f64();
    for (entity, mut vehicle, mut spatial, controls) in query.iter_mut() {
        let output = vehicle.step(&spatial, controls, environment.environment(), dt);
        *spatial = output.state;
        commands.entity(entity).insert(LastStep(output));
    }
}
