use nalgebra::{Matrix4, Vector4};

use crate::components::{ControlCommands, MultiRotorLayout};

/// Mixing matrix mapping (pitch, roll, yaw, thrust) to propellers 1 to 4.
///
/// PX4 numbering. Cross: 1 front right, 2 rear left, 3 front left, 4 rear
/// right. Plus: 1 right, 2 left, 3 front, 4 back. Propellers 1 and 2 spin
/// counter-clockwise seen from above. In both layouts a positive pitch command
/// speeds up the front propellers.
pub fn mixing_matrix(layout: MultiRotorLayout) -> Matrix4<f64> {
    match layout {
        MultiRotorLayout::Cross => Matrix4::new(
            1.0, -1.0, 1.0, 1.0, //
            -1.0, 1.0, 1.0, 1.0, //
            1.0, 1.0, -1.0, 1.0, //
            -1.0, -1.0, -1.0, 1.0,
        ),
        MultiRotorLayout::Plus => Matrix4::new(
            0.0, -1.0, 1.0, 1.0, //
            0.0, 1.0, 1.0, 1.0, //
            1.0, 0.0, -1.0, 1.0, //
            -1.0, 0.0, -1.0, 1.0,
        ),
    }
}

/// Normalised propeller commands in [0, 1].
///
/// `thrust_offset` is the idle command every propeller receives; the mixed
/// commands are scaled into the range left above it.
pub fn mix_quad(
    layout: MultiRotorLayout,
    thrust_offset: f64,
    commands: &ControlCommands,
) -> [f64; 4] {
    let c = commands.clamped();
    let input = Vector4::new(c.pitch, c.roll, c.yaw, c.thrust);
    let mixed = Vector4::repeat(thrust_offset)
        + 0.25 * mixing_matrix(layout) * input * (1.0 - thrust_offset);
    [
        mixed.x.clamp(0.0, 1.0),
        mixed.y.clamp(0.0, 1.0),
        mixed.z.clamp(0.0, 1.0),
        mixed.w.clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_offset_only() {
        for layout in [MultiRotorLayout::Cross, MultiRotorLayout::Plus] {
            let commands = mix_quad(layout, 0.3, &ControlCommands::default());
            for command in commands {
                assert_relative_eq!(command, 0.3);
            }
        }
    }

    #[test]
    fn test_full_thrust() {
        let commands = mix_quad(
            MultiRotorLayout::Cross,
            0.0,
            &ControlCommands::new(0.0, 0.0, 0.0, 1.0),
        );
        assert_eq!(commands, [0.25; 4]);
    }

    #[test]
    fn test_cross_pitch_speeds_up_front() {
        let commands = mix_quad(
            MultiRotorLayout::Cross,
            0.2,
            &ControlCommands::new(0.5, 0.0, 0.0, 0.5),
        );
        // Front props 1 and 3
        assert!(commands[0] > commands[1]);
        assert!(commands[2] > commands[3]);
        assert_relative_eq!(commands[0], commands[2]);
    }

    #[test]
    fn test_plus_pitch_speeds_up_front() {
        let commands = mix_quad(
            MultiRotorLayout::Plus,
            0.2,
            &ControlCommands::new(0.5, 0.0, 0.0, 0.5),
        );
        assert!(commands[2] > commands[3]);
        assert_relative_eq!(commands[0], commands[1]);
    }

    #[test]
    fn test_plus_roll_ignores_front_and_back() {
        let commands = mix_quad(
            MultiRotorLayout::Plus,
            0.0,
            &ControlCommands::new(0.0, 1.0, 0.0, 0.0),
        );
        assert_eq!(commands[0], 0.0);
        assert_relative_eq!(commands[1], 0.25);
        assert_eq!(commands[2], 0.0);
        assert_eq!(commands[3], 0.0);
    }
}
