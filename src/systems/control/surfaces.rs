use crate::components::{ControlCommands, ControlSurfaces, SurfaceLayout};
use crate::utils::rad_to_deg;

/// Maps pitch, roll and yaw commands onto the individual surfaces of a layout.
///
/// The result follows the surface order of the layout:
/// * Standard: elevator, left aileron, right aileron, rudder
/// * FlyingWing: left elevon, right elevon
/// * VTail: left aileron, right aileron, left ruddervator, right ruddervator
pub fn mix_surface_commands(layout: SurfaceLayout, commands: &ControlCommands) -> Vec<f64> {
    let c = commands.clamped();
    match layout {
        SurfaceLayout::Standard => vec![c.pitch, c.roll, -c.roll, c.yaw],
        SurfaceLayout::FlyingWing => vec![0.5 * (c.pitch + c.roll), 0.5 * (c.pitch - c.roll)],
        SurfaceLayout::VTail => vec![
            c.roll,
            -c.roll,
            0.5 * (c.pitch + c.yaw),
            0.5 * (c.pitch - c.yaw),
        ],
    }
}

/// Recovers the equivalent elevator, aileron and rudder deflections from the
/// surface deflections, given in the same order as [`mix_surface_commands`].
pub fn equivalent_deflections(layout: SurfaceLayout, deflections: &[f64]) -> ControlSurfaces {
    let d = |i: usize| deflections.get(i).copied().unwrap_or(0.0);
    match layout {
        SurfaceLayout::Standard => ControlSurfaces {
            elevator: d(0),
            aileron: 0.5 * (d(1) - d(2)),
            rudder: d(3),
        },
        SurfaceLayout::FlyingWing => ControlSurfaces {
            elevator: d(1) + d(0),
            aileron: d(0) - d(1),
            rudder: 0.0,
        },
        SurfaceLayout::VTail => ControlSurfaces {
            elevator: d(3) + d(2),
            aileron: 0.5 * (d(0) - d(1)),
            rudder: d(2) - d(3),
        },
    }
}

/// Surface angles for display, in degrees. Right ailerons are mirrored.
pub fn surface_animation_angles(layout: SurfaceLayout, deflections: &[f64], scalar: f64) -> Vec<f64> {
    deflections
        .iter()
        .enumerate()
        .map(|(i, deflection)| {
            let mirrored = match layout {
                SurfaceLayout::Standard => i == 2,
                SurfaceLayout::VTail => i == 1,
                SurfaceLayout::FlyingWing => false,
            };
            let angle = rad_to_deg(*deflection) * scalar;
            if mirrored {
                -angle
            } else {
                angle
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_mixing() {
        let commands = ControlCommands::new(0.5, 0.2, -0.3, 0.0);
        let surfaces = mix_surface_commands(SurfaceLayout::Standard, &commands);
        assert_eq!(surfaces, vec![0.5, 0.2, -0.2, -0.3]);

        let equivalent = equivalent_deflections(SurfaceLayout::Standard, &surfaces);
        assert_relative_eq!(equivalent.elevator, 0.5);
        assert_relative_eq!(equivalent.aileron, 0.2);
        assert_relative_eq!(equivalent.rudder, -0.3);
    }

    #[test]
    fn test_flying_wing_mixing() {
        let commands = ControlCommands::new(0.4, 0.2, 0.9, 0.0);
        let surfaces = mix_surface_commands(SurfaceLayout::FlyingWing, &commands);
        assert_relative_eq!(surfaces[0], 0.3);
        assert_relative_eq!(surfaces[1], 0.1);

        let equivalent = equivalent_deflections(SurfaceLayout::FlyingWing, &surfaces);
        assert_relative_eq!(equivalent.elevator, 0.4);
        assert_relative_eq!(equivalent.aileron, 0.2);
        assert_eq!(equivalent.rudder, 0.0);
    }

    #[test]
    fn test_v_tail_mixing() {
        let commands = ControlCommands::new(0.4, 0.1, 0.2, 0.0);
        let surfaces = mix_surface_commands(SurfaceLayout::VTail, &commands);
        let equivalent = equivalent_deflections(SurfaceLayout::VTail, &surfaces);
        assert_relative_eq!(equivalent.elevator, 0.4);
        assert_relative_eq!(equivalent.aileron, 0.1);
        assert_relative_eq!(equivalent.rudder, 0.2);
    }

    #[test]
    fn test_commands_are_clamped() {
        let commands = ControlCommands::new(3.0, 0.0, 0.0, 0.0);
        let surfaces = mix_surface_commands(SurfaceLayout::Standard, &commands);
        assert_eq!(surfaces[0], 1.0);
    }

    #[test]
    fn test_animation_mirrors_right_aileron() {
        let angles = surface_animation_angles(SurfaceLayout::Standard, &[0.0, 0.1, -0.1, 0.0], 1.0);
        assert_relative_eq!(angles[1], angles[2]);
        assert_relative_eq!(angles[1], rad_to_deg(0.1));
    }
}
