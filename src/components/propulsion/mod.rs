mod propeller;
mod table;

pub use propeller::{Propeller, PropellerConfig, PropellerState, RotationDirection};
pub use table::{PropellerTable, PropellerTableRow};
