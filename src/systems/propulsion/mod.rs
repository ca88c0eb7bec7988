mod propeller;

pub use propeller::{calculate_propeller_forces_moments, PropellerInputs};
