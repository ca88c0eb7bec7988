mod dryden;

pub use dryden::{
    dryden_rms_intensities, dryden_scale_lengths, DrydenConfig, DrydenTurbulence,
};
