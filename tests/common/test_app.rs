use bevy::prelude::*;
use flyer_core::{
    components::{ControlCommands, SpatialComponent},
    plugins::FlightDynamicsPlugin,
    resources::PhysicsConfig,
    vehicles::FlightVehicle,
};
use std::time::Duration;

/// A bevy app with the flight dynamics plugin whose fixed schedule is
/// stepped by hand.
pub struct TestApp {
    pub app: App,
    timestep: f64,
}

impl TestApp {
    pub fn new(config: PhysicsConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(FlightDynamicsPlugin::with_config(config));
        Self {
            app,
            timestep: config.timestep,
        }
    }

    pub fn spawn(&mut self, vehicle: FlightVehicle, state: SpatialComponent) -> Entity {
        self.app
            .world_mut()
            .spawn((vehicle, state, ControlCommands::default()))
            .id()
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .advance_by(Duration::from_secs_f64(self.timestep));
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.app.world().get::<T>(entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<Mut<'_, T>> {
        self.app.world_mut().get_mut::<T>(entity)
    }
}
