#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_output_valid, assert_spatial_valid, assert_vector_eq};
pub use fixtures::*;
pub use test_app::TestApp;
