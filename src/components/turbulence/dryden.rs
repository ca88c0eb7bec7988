//! Dryden wind turbulence (MIL-F-8785C, low altitude).
//!
//! Each axis passes band-limited white noise through a shaping filter built
//! from trapezoidal integrators. The filters work in imperial units; the public
//! interface takes and returns SI units.

use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_2_PI, PI};

use crate::utils::{
    ft_to_m, is_nearly_zero, m_to_ft, Integrator, RngManager, DEFAULT_DRYDEN_SAMPLE_TIME,
};

const SQRT_3: f64 = 1.732_050_807_568_877_2;
const MIN_ALTITUDE_FT: f64 = 10.0;
const MAX_ALTITUDE_FT: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrydenConfig {
    /// Master seed for the per-axis noise streams
    pub seed: u64,
    /// Noise sample interval and integrator sub-step [s]
    pub sample_time: f64,
}

impl Default for DrydenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sample_time: DEFAULT_DRYDEN_SAMPLE_TIME,
        }
    }
}

/// Scale lengths (Lu, Lv, Lw) in feet for an altitude in feet.
/// Below 10 ft all lengths are zero.
pub fn dryden_scale_lengths(altitude_ft: f64) -> Vector3<f64> {
    if altitude_ft < MIN_ALTITUDE_FT || altitude_ft.is_nan() {
        return Vector3::zeros();
    }
    let h = altitude_ft.clamp(MIN_ALTITUDE_FT, MAX_ALTITUDE_FT);
    let l_uv = h / (0.177 + 0.000823 * h).powf(1.2);
    Vector3::new(l_uv, l_uv, h)
}

/// RMS intensities (σu, σv, σw) in ft/s from altitude [ft] and the wind speed
/// at 20 ft [ft/s].
pub fn dryden_rms_intensities(altitude_ft: f64, wind_speed_20ft: f64) -> Vector3<f64> {
    let h = altitude_ft.clamp(0.0, MAX_ALTITUDE_FT);
    let sigma_w = 0.1 * wind_speed_20ft;
    let sigma_uv = sigma_w / (0.177 + 0.000823 * h).powf(0.4);
    Vector3::new(sigma_uv, sigma_uv, sigma_w)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterOrder {
    /// Hu(s), one integrator
    First,
    /// Hv(s) and Hw(s), two cascaded integrators
    Second,
}

#[derive(Debug, Clone)]
struct ShapingFilter {
    order: FilterOrder,
    first: Integrator,
    second: Integrator,
    rng: ChaCha8Rng,
}

impl ShapingFilter {
    fn new(order: FilterOrder, rng: ChaCha8Rng, sample_time: f64) -> Self {
        Self {
            order,
            first: Integrator::with_dt_min(0.0, sample_time),
            second: Integrator::with_dt_min(0.0, sample_time),
            rng,
        }
    }

    /// One filter step in imperial units. `noise_gain` is sqrt(π/Ts).
    fn step(&mut self, dt: f64, airspeed: f64, length: f64, sigma: f64, noise_gain: f64) -> f64 {
        let white: f64 = self.rng.sample(StandardNormal);
        let noise = noise_gain * white;
        let l_over_va = if is_nearly_zero(airspeed) {
            f64::MAX
        } else {
            length / airspeed
        };

        let output = match self.order {
            FilterOrder::First => {
                let feedback = (l_over_va * FRAC_2_PI).sqrt() * noise;
                let w = (feedback - self.first.state()) / l_over_va;
                sigma * self.first.integrate(dt, w)
            }
            FilterOrder::Second => {
                let feedback = (l_over_va / PI).sqrt() * noise;
                let w1 = (feedback - self.first.state()) / l_over_va;
                let p1 = self.first.integrate(dt, w1);
                let cross_feed = SQRT_3 * (l_over_va * w1);
                let w2 = (p1 + cross_feed - self.second.state()) / l_over_va;
                sigma * self.second.integrate(dt, w2)
            }
        };

        if output.is_nan() || is_nearly_zero(output) {
            0.0
        } else {
            output
        }
    }
}

/// Three-axis Dryden gust generator with its own seeded noise streams.
#[derive(Debug, Clone)]
pub struct DrydenTurbulence {
    config: DrydenConfig,
    u: ShapingFilter,
    v: ShapingFilter,
    w: ShapingFilter,
}

impl DrydenTurbulence {
    pub fn new(config: DrydenConfig) -> Self {
        let streams = RngManager::new(config.seed);
        let ts = config.sample_time;
        Self {
            config,
            u: ShapingFilter::new(FilterOrder::First, streams.get_rng("dryden_u"), ts),
            v: ShapingFilter::new(FilterOrder::Second, streams.get_rng("dryden_v"), ts),
            w: ShapingFilter::new(FilterOrder::Second, streams.get_rng("dryden_w"), ts),
        }
    }

    pub fn config(&self) -> &DrydenConfig {
        &self.config
    }

    /// Turbulence velocity in the body frame [m/s].
    ///
    /// # Arguments
    /// * `dt` - Step length [s]
    /// * `airspeed` - True airspeed [m/s]
    /// * `altitude` - Height above ground [m]
    /// * `wind_speed` - Reference low altitude wind speed [m/s]
    pub fn body_frame_turbulence(
        &mut self,
        dt: f64,
        airspeed: f64,
        altitude: f64,
        wind_speed: f64,
    ) -> Vector3<f64> {
        let altitude_ft = m_to_ft(altitude);
        let lengths = dryden_scale_lengths(altitude_ft);
        if lengths.iter().all(|l| *l == 0.0) {
            return Vector3::zeros();
        }

        let airspeed_fts = if airspeed.is_nan() { 0.0 } else { m_to_ft(airspeed) };
        let sigmas = dryden_rms_intensities(altitude_ft, m_to_ft(wind_speed));
        let noise_gain = (PI / self.config.sample_time).sqrt();

        Vector3::new(
            self.u.step(dt, airspeed_fts, lengths.x, sigmas.x, noise_gain),
            self.v.step(dt, airspeed_fts, lengths.y, sigmas.y, noise_gain),
            self.w.step(dt, airspeed_fts, lengths.z, sigmas.z, noise_gain),
        )
        .map(ft_to_m)
    }
}
