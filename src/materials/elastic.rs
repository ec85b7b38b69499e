//! Isotropic elastic material properties

use serde::{Deserialize, Serialize};

/// Isotropic elastic material for the passive (substrate) layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElasticMaterial {
    /// Young's modulus in Pa
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Density in kg/m³
    pub rho: f64,
}

impl ElasticMaterial {
    /// Create a new isotropic elastic material
    pub fn new(e: f64, nu: f64, rho: f64) -> Self {
        Self { e, nu, rho }
    }

    /// Single-crystal silicon (typical MEMS substrate values)
    pub fn silicon() -> Self {
        Self {
            e: 170e9,
            nu: 0.28,
            rho: 2330.0,
        }
    }

    /// Reduced (plane-stress) stiffness Q = E / (1 - nu²)
    pub fn reduced_stiffness(&self) -> f64 {
        self.e / (1.0 - self.nu * self.nu)
    }
}
