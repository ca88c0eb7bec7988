use crate::components::{
    AirframeConfig, ControlCommands, ControlSurface, ControlSurfaces, MultiRotorLayout,
    Propeller, SurfaceLayout,
};
use crate::systems::{equivalent_deflections, mix_quad, mix_surface_commands};

/// Owned actuation state of an airframe.
#[derive(Debug, Clone)]
pub enum Airframe {
    FixedWing {
        layout: SurfaceLayout,
        surfaces: Vec<ControlSurface>,
    },
    MultiRotor {
        layout: MultiRotorLayout,
        thrust_offset: f64,
    },
}

impl Airframe {
    pub fn new(config: &AirframeConfig) -> Self {
        match config {
            AirframeConfig::FixedWing(fixed_wing) => Airframe::FixedWing {
                layout: fixed_wing.layout,
                surfaces: fixed_wing
                    .surfaces
                    .iter()
                    .cloned()
                    .map(ControlSurface::new)
                    .collect(),
            },
            AirframeConfig::MultiRotor(multi_rotor) => Airframe::MultiRotor {
                layout: multi_rotor.layout,
                thrust_offset: multi_rotor.thrust_offset,
            },
        }
    }

    pub fn surfaces(&self) -> &[ControlSurface] {
        match self {
            Airframe::FixedWing { surfaces, .. } => surfaces,
            Airframe::MultiRotor { .. } => &[],
        }
    }

    pub fn surface_layout(&self) -> Option<SurfaceLayout> {
        match self {
            Airframe::FixedWing { layout, .. } => Some(*layout),
            Airframe::MultiRotor { .. } => None,
        }
    }

    /// Routes the commands to surfaces and propellers and steps their
    /// actuators. Returns the equivalent deflections and the individual
    /// surface deflections (rad).
    ///
    /// Fixed wing propellers all follow the throttle; multirotor propellers
    /// receive the mixed commands in PX4 order.
    pub fn actuate(
        &mut self,
        commands: &ControlCommands,
        propellers: &mut [Propeller],
        dt: f64,
    ) -> (ControlSurfaces, Vec<f64>) {
        let commands = commands.clamped();
        match self {
            Airframe::FixedWing { layout, surfaces } => {
                let surface_commands = mix_surface_commands(*layout, &commands);
                let deflections: Vec<f64> = surfaces
                    .iter_mut()
                    .zip(surface_commands)
                    .map(|(surface, command)| surface.apply_command(command, dt))
                    .collect();

                for propeller in propellers.iter_mut() {
                    propeller.apply_command(commands.thrust, dt);
                }

                (equivalent_deflections(*layout, &deflections), deflections)
            }
            Airframe::MultiRotor {
                layout,
                thrust_offset,
            } => {
                let propeller_commands = mix_quad(*layout, *thrust_offset, &commands);
                for (propeller, command) in propellers.iter_mut().zip(propeller_commands) {
                    propeller.apply_command(command, dt);
                }
                (ControlSurfaces::default(), Vec::new())
            }
        }
    }
}
