use approx::assert_relative_eq;
use flyer_core::{components::SpatialComponent, vehicles::StepOutput};
use nalgebra::Vector3;

/// Assert that every quantity in a spatial component is finite
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(
        spatial.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        spatial.position
    );
    assert!(
        spatial.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        spatial.velocity
    );
    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        spatial.angular_velocity
    );
    assert_relative_eq!(spatial.attitude.quaternion().norm(), 1.0, epsilon = 1e-9);
}

#[track_caller]
pub fn assert_output_valid(output: &StepOutput) {
    assert_spatial_valid(&output.state);
    assert!(output.forces.force.iter().all(|x| x.is_finite()));
    assert!(output.forces.moment.iter().all(|x| x.is_finite()));
    assert!(output.air_data.alpha.is_finite());
    assert!(output.air_data.beta.is_finite());
    for propeller in &output.propellers {
        assert!(propeller.omega.is_finite() && propeller.thrust.is_finite());
    }
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
