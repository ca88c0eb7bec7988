mod atmosphere;

pub use atmosphere::calculate_atmosphere;
