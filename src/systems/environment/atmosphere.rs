use crate::components::{AtmosphereState, DrydenTurbulence, SpatialComponent};
use crate::resources::Environment;
use crate::utils::remove_numerical_errors;

/// Air conditions at the vehicle for this step.
///
/// The ambient wind doubles as the low altitude reference wind. When a
/// turbulence model is present its body-frame gusts, driven by the airspeed
/// relative to the ambient wind, are rotated to the world frame and added.
pub fn calculate_atmosphere(
    environment: &Environment,
    turbulence: Option<&mut DrydenTurbulence>,
    spatial: &SpatialComponent,
    dt: f64,
) -> AtmosphereState {
    let ambient = remove_numerical_errors(&environment.wind);
    let mut atmosphere = AtmosphereState::new(ambient, environment.density);

    if let Some(dryden) = turbulence {
        let airspeed = (spatial.velocity - ambient).norm();
        let gust_body = dryden.body_frame_turbulence(
            dt,
            airspeed,
            spatial.altitude(),
            atmosphere.reference_wind_speed(),
        );
        atmosphere.wind += spatial.attitude * gust_body;
    }

    atmosphere
}
