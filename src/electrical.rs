//! Electrical terminal model: lossy parallel-plate capacitor
//!
//! The piezo layer seen from its electrodes is modeled as an ideal
//! capacitive susceptance in parallel with a dielectric-loss conductance,
//! Y = jωC + ωC·tanδ.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Vacuum permittivity in F/m
pub const EPS0: f64 = 8.8541878128e-12;

/// Sinusoidal voltage drive
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SinDrive {
    /// RMS voltage in V
    pub v_rms: f64,
    /// Drive frequency in Hz
    pub f_hz: f64,
}

impl SinDrive {
    /// Create a sinusoidal drive from RMS voltage and frequency
    pub fn new(v_rms: f64, f_hz: f64) -> Self {
        Self { v_rms, f_hz }
    }

    /// Peak voltage (RMS × √2)
    pub fn v_peak(&self) -> f64 {
        self.v_rms * std::f64::consts::SQRT_2
    }

    /// Angular frequency in rad/s
    pub fn omega(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.f_hz
    }
}

/// Parallel-plate capacitance in F; 0 for a non-positive dielectric
/// thickness (no plates, no capacitor)
pub fn parallel_plate_capacitance(eps_r: f64, area: f64, t_pzt: f64, area_ratio: f64) -> f64 {
    if t_pzt <= 0.0 {
        return 0.0;
    }
    EPS0 * eps_r * (area * area_ratio) / t_pzt
}

/// Admittance of a lossy capacitor at angular frequency ω:
/// Y = jωC + ωC·tanδ
pub fn dielectric_admittance(c: f64, omega: f64, tan_delta: f64) -> Complex64 {
    Complex64::new(omega * c * tan_delta, omega * c)
}

/// RMS terminal current magnitude |Y|·V_rms drawn by the lossy capacitive
/// load under sinusoidal drive
pub fn terminal_rms_current(v_rms: f64, omega: f64, c: f64, tan_delta: f64) -> f64 {
    dielectric_admittance(c, omega, tan_delta).norm() * v_rms
}
