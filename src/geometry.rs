//! Plate geometry

use serde::{Deserialize, Serialize};

/// Rectangular diaphragm (a x b); thickness is handled by the laminate stack
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RectPlate {
    /// Edge length in x, in m
    pub a: f64,
    /// Edge length in y, in m
    pub b: f64,
}

impl RectPlate {
    /// Create a rectangular plate with edge lengths a and b
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Create a square plate with edge length a
    pub fn square(a: f64) -> Self {
        Self { a, b: a }
    }

    /// Plan area in m²
    pub fn area(&self) -> f64 {
        self.a * self.b
    }
}
