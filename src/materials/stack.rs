//! Unimorph laminate stack (passive base + optional piezo layer)

use serde::{Deserialize, Serialize};

use crate::materials::{ElasticMaterial, PiezoMaterial};

/// Laminate cross-section of a unimorph diaphragm.
///
/// The through-thickness coordinate z is measured from the bottom of the
/// base layer: the base layer occupies [0, t_base], the piezo layer
/// [t_base, t_base + t_pzt]. All derived quantities are per unit width.
///
/// The piezo layer's reduced stiffness is taken equal to the base layer's
/// in the neutral-axis and bending-stiffness computations. This is a known
/// modeling shortcut kept on purpose; using the piezo layer's own modulus
/// is a possible extension that has not been implemented.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stack {
    /// Passive substrate layer
    pub base: ElasticMaterial,
    /// Substrate thickness in m
    pub t_base: f64,
    /// Active piezo layer, if present
    pub piezo: Option<PiezoMaterial>,
    /// Piezo layer thickness in m (0 if absent)
    pub t_pzt: f64,
    /// Electrode coverage ratio in (0, 1]
    pub elec_area_ratio: f64,
}

impl Stack {
    /// Create a unimorph stack (base + piezo)
    pub fn unimorph(
        base: ElasticMaterial,
        t_base: f64,
        piezo: PiezoMaterial,
        t_pzt: f64,
        elec_area_ratio: f64,
    ) -> Self {
        Self {
            base,
            t_base,
            piezo: Some(piezo),
            t_pzt,
            elec_area_ratio,
        }
    }

    /// Create a bare elastic plate with no active layer
    pub fn bare(base: ElasticMaterial, t_base: f64) -> Self {
        Self {
            base,
            t_base,
            piezo: None,
            t_pzt: 0.0,
            elec_area_ratio: 1.0,
        }
    }

    /// True if an active piezo layer with positive thickness is present
    pub fn has_active_piezo(&self) -> bool {
        self.piezo.is_some() && self.t_pzt > 0.0
    }

    /// Total laminate thickness in m
    pub fn t_total(&self) -> f64 {
        if self.piezo.is_some() {
            self.t_base + self.t_pzt
        } else {
            self.t_base
        }
    }

    /// Mass per unit area in kg/m²
    pub fn areal_mass(&self) -> f64 {
        let mut m = self.base.rho * self.t_base;
        if let Some(piezo) = &self.piezo {
            if piezo.rho > 0.0 {
                m += piezo.rho * self.t_pzt;
            }
        }
        m
    }

    /// Neutral-axis position z0 measured from the bottom of the base layer.
    ///
    /// Stiffness-weighted centroid of the layers, with the piezo layer's
    /// reduced stiffness taken equal to the base layer's.
    pub fn neutral_axis_z0(&self) -> f64 {
        let qb = self.base.reduced_stiffness();
        let zb = 0.5 * self.t_base;

        let mut num = qb * self.t_base * zb;
        let mut den = qb * self.t_base;

        if self.has_active_piezo() {
            let qp = qb;
            let zp = self.t_base + 0.5 * self.t_pzt;
            num += qp * self.t_pzt * zp;
            den += qp * self.t_pzt;
        }

        num / den
    }

    /// Bending stiffness per unit width in N·m, about the neutral axis
    /// (parallel-axis theorem over the present layers)
    pub fn d_plate(&self) -> f64 {
        let z0 = self.neutral_axis_z0();
        let qb = self.base.reduced_stiffness();
        let zb = 0.5 * self.t_base;

        let mut d = qb * (self.t_base.powi(3) / 12.0 + self.t_base * (zb - z0).powi(2));

        if self.has_active_piezo() {
            let qp = qb;
            let zp = self.t_base + 0.5 * self.t_pzt;
            d += qp * (self.t_pzt.powi(3) / 12.0 + self.t_pzt * (zp - z0).powi(2));
        }

        d
    }

    /// Free in-plane strain of the piezo layer under peak voltage `v_peak`
    /// applied across its thickness; 0 if no active layer
    pub fn piezo_eigenstrain(&self, v_peak: f64) -> f64 {
        match &self.piezo {
            Some(piezo) if self.t_pzt > 0.0 => piezo.d31 * (v_peak / self.t_pzt),
            _ => 0.0,
        }
    }

    /// Piezo-induced bending moment per unit width in N, under peak voltage
    /// `v_peak`; 0 if no active layer.
    ///
    /// Scaled linearly by the electrode area ratio to account for partial
    /// electrode coverage.
    pub fn piezo_bending_moment_per_width(&self, v_peak: f64) -> f64 {
        if !self.has_active_piezo() {
            return 0.0;
        }

        let z0 = self.neutral_axis_z0();
        let eps0 = self.piezo_eigenstrain(v_peak);

        let qp = self.base.reduced_stiffness();
        let zp = self.t_base + 0.5 * self.t_pzt;

        qp * eps0 * self.t_pzt * (zp - z0) * self.elec_area_ratio
    }
}
