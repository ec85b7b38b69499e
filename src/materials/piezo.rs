//! Piezoelectric material properties

use serde::{Deserialize, Serialize};

/// Piezoelectric material for the active layer.
///
/// Carries both elastic and electrical properties. The laminate stack
/// currently reuses the substrate stiffness for the piezo layer in its
/// bending computations, so `e` and `nu` here are informational until
/// that simplification is lifted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PiezoMaterial {
    /// Young's modulus in Pa
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density in kg/m³
    pub rho: f64,
    /// Relative permittivity
    pub eps_r: f64,
    /// Transverse piezoelectric coefficient d31 in m/V
    pub d31: f64,
    /// Dielectric loss tangent
    pub tan_delta: f64,
}

impl PiezoMaterial {
    /// Create a new piezoelectric material
    pub fn new(e: f64, nu: f64, rho: f64, eps_r: f64, d31: f64, tan_delta: f64) -> Self {
        Self {
            e,
            nu,
            rho,
            eps_r,
            d31,
            tan_delta,
        }
    }

    /// Typical thin-film PZT values
    pub fn pzt() -> Self {
        Self {
            e: 60e9,
            nu: 0.31,
            rho: 7500.0,
            eps_r: 1200.0,
            d31: -180e-12,
            tan_delta: 0.02,
        }
    }
}
