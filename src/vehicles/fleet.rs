use rayon::prelude::*;

use super::vehicle::{FlightVehicle, StepOutput};
use crate::components::{ControlCommands, SpatialComponent};
use crate::resources::Environment;
use crate::utils::SimError;

/// A vehicle with the kinematic state and commands it is flown with.
#[derive(Debug)]
pub struct FleetMember {
    pub vehicle: FlightVehicle,
    pub state: SpatialComponent,
    pub commands: ControlCommands,
}

/// Independent vehicles stepped in parallel, one worker per vehicle.
#[derive(Debug, Default)]
pub struct Fleet {
    members: Vec<FleetMember>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vehicle and returns its index.
    pub fn push(&mut self, vehicle: FlightVehicle, state: SpatialComponent) -> usize {
        self.members.push(FleetMember {
            vehicle,
            state,
            commands: ControlCommands::default(),
        });
        self.members.len() - 1
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[FleetMember] {
        &self.members
    }

    pub fn member_mut(&mut self, index: usize) -> Option<&mut FleetMember> {
        self.members.get_mut(index)
    }

    pub fn set_commands(&mut self, index: usize, commands: ControlCommands) -> Result<(), SimError> {
        let count = self.members.len();
        let member = self.members.get_mut(index).ok_or_else(|| {
            SimError::VehicleError(format!("no vehicle at index {} (fleet of {})", index, count))
        })?;
        member.commands = commands;
        Ok(())
    }

    /// Steps every vehicle once and stores the new states. Outputs are in
    /// insertion order.
    pub fn step_all(&mut self, environment: &Environment, dt: f64) -> Vec<StepOutput> {
        self.members
            .par_iter_mut()
            .map(|member| {
                let output = member
                    .vehicle
                    .step(&member.state, &member.commands, environment, dt);
                member.state = output.state;
                output
            })
            .collect()
    }
}
