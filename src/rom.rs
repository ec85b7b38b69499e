//! Reduced-order model of a rectangular piezoelectric unimorph plate
//!
//! Composes the laminate stack, thin-plate modal frequencies, and the lossy
//! capacitor terminal model into a single frequency-response operation:
//! center displacement magnitude and RMS terminal current for a sinusoidal
//! drive.
//!
//! Modal normalization is simplified (unit modal mass); the shape factor
//! K_W is a one-point calibration knob that absorbs mode-shape, boundary
//! condition, and normalization mismatches against a reference (FEM or
//! measured) center displacement.

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::electrical::{parallel_plate_capacitance, terminal_rms_current, SinDrive};
use crate::error::{RomError, RomResult};
use crate::geometry::RectPlate;
use crate::materials::Stack;
use crate::physics::{center_mode_shape, modal_angular_frequency, DEFAULT_CLAMP_CORRECTION};

/// Mode shapes whose center value falls below this threshold contribute
/// nothing and are skipped
const CENTER_SHAPE_EPS: f64 = 1e-12;

/// Half-wave count pair (m, n) identifying a simply-supported rectangular
/// plate eigenmode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mode {
    /// Half-wave count along x
    pub m: u32,
    /// Half-wave count along y
    pub n: u32,
}

impl Mode {
    /// Create a mode from its half-wave counts
    pub fn new(m: u32, n: u32) -> Self {
        Self { m, n }
    }

    /// Default superposition set: (1,1), (2,1), (1,2), (2,2)
    pub fn default_set() -> Vec<Mode> {
        vec![
            Mode::new(1, 1),
            Mode::new(2, 1),
            Mode::new(1, 2),
            Mode::new(2, 2),
        ]
    }
}

/// Clamp-corrected natural frequency of one mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModalFrequency {
    /// The mode this frequency belongs to
    pub mode: Mode,
    /// Natural frequency in Hz
    pub f_hz: f64,
}

/// One point of the electromechanical frequency response
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrfPoint {
    /// Center displacement magnitude in m
    pub uz_center: f64,
    /// RMS terminal current in A
    pub i_rms: f64,
}

/// Reduced-order model of a rectangular unimorph plate.
///
/// Immutable after construction; every operation is a pure read over the
/// configuration plus call-supplied drive parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectPlateROM {
    /// Plate geometry
    pub plate: RectPlate,
    /// Laminate cross-section
    pub stack: Stack,
    /// Modes superposed in the FRF, in a fixed order
    pub modes: Vec<Mode>,
    /// Shape factor converting the curvature scale to a center displacement
    /// scale; calibrate once against a reference
    pub k_w: f64,
    /// Simply-supported to clamped frequency correction
    pub clamp_correction: f64,
}

impl RectPlateROM {
    /// Default shape factor before calibration
    pub const DEFAULT_SHAPE_FACTOR: f64 = 8.0;

    /// Create a ROM with an explicit mode list.
    ///
    /// Fails if the shape factor is not positive.
    pub fn new(plate: RectPlate, stack: Stack, modes: Vec<Mode>, k_w: f64) -> RomResult<Self> {
        if k_w <= 0.0 {
            return Err(RomError::InvalidShapeFactor(k_w));
        }
        Ok(Self {
            plate,
            stack,
            modes,
            k_w,
            clamp_correction: DEFAULT_CLAMP_CORRECTION,
        })
    }

    /// Create a ROM with the default mode set
    pub fn with_default_modes(plate: RectPlate, stack: Stack, k_w: f64) -> RomResult<Self> {
        Self::new(plate, stack, Mode::default_set(), k_w)
    }

    /// Override the clamp correction factor.
    ///
    /// Fails if the factor is not positive.
    pub fn with_clamp_correction(mut self, clamp_correction: f64) -> RomResult<Self> {
        if clamp_correction <= 0.0 {
            return Err(RomError::InvalidCorrectionFactor(clamp_correction));
        }
        self.clamp_correction = clamp_correction;
        Ok(self)
    }

    /// Clamp-corrected modal angular frequency of one mode in rad/s
    fn modal_omega(&self, d: f64, m_areal: f64, mode: Mode) -> f64 {
        self.clamp_correction
            * modal_angular_frequency(d, m_areal, self.plate.a, self.plate.b, mode.m, mode.n)
    }

    /// Clamp-corrected natural frequencies in Hz, in mode-list order
    pub fn modal_frequencies(&self) -> Vec<ModalFrequency> {
        let d = self.stack.d_plate();
        let m_areal = self.stack.areal_mass();

        self.modes
            .iter()
            .map(|&mode| ModalFrequency {
                mode,
                f_hz: self.modal_omega(d, m_areal, mode) / (2.0 * PI),
            })
            .collect()
    }

    /// Terminal capacitance in F; 0 without an active piezo layer
    pub fn capacitance(&self) -> f64 {
        match &self.stack.piezo {
            Some(piezo) if self.stack.t_pzt > 0.0 => parallel_plate_capacitance(
                piezo.eps_r,
                self.plate.area(),
                self.stack.t_pzt,
                self.stack.elec_area_ratio,
            ),
            _ => 0.0,
        }
    }

    /// Center displacement magnitude and RMS terminal current for a
    /// sinusoidal drive at `f_hz` with uniform modal damping ratio `zeta`.
    ///
    /// The electrical branch is always evaluated; the mechanical branch
    /// degrades to zero displacement without an active piezo layer or with
    /// non-positive bending stiffness.
    pub fn frf_center_displacement_and_current(
        &self,
        v_rms: f64,
        f_hz: f64,
        zeta: f64,
    ) -> FrfPoint {
        self.frf_with_shape_factor(self.k_w, v_rms, f_hz, zeta)
    }

    /// FRF at a drive point described by a [`SinDrive`]
    pub fn frf_response(&self, drive: &SinDrive, zeta: f64) -> FrfPoint {
        self.frf_center_displacement_and_current(drive.v_rms, drive.f_hz, zeta)
    }

    /// Shape factor that makes the ROM reproduce a reference center
    /// displacement `uz_ref` (FEM or measurement) at the given drive point.
    ///
    /// Fails if the unit-shape-factor response is zero there (no active
    /// piezo layer, or drive/mode combination with no center response).
    pub fn calibrated_shape_factor(
        &self,
        uz_ref: f64,
        v_rms: f64,
        f_hz: f64,
        zeta: f64,
    ) -> RomResult<f64> {
        let unit = self.frf_with_shape_factor(1.0, v_rms, f_hz, zeta);
        if unit.uz_center == 0.0 {
            return Err(RomError::InvalidInput(
                "cannot calibrate K_W: ROM center displacement is zero at the reference drive"
                    .to_string(),
            ));
        }
        Ok(uz_ref / unit.uz_center)
    }

    fn frf_with_shape_factor(&self, k_w: f64, v_rms: f64, f_hz: f64, zeta: f64) -> FrfPoint {
        let omega = 2.0 * PI * f_hz;

        // Electrical branch (terminal V-I), independent of the mechanics
        let c = self.capacitance();
        let tan_delta = self.stack.piezo.map_or(0.0, |p| p.tan_delta);
        let i_rms = terminal_rms_current(v_rms, omega, c, tan_delta);

        // Mechanical branch (center uz)
        if !self.stack.has_active_piezo() {
            return FrfPoint {
                uz_center: 0.0,
                i_rms,
            };
        }

        let d = self.stack.d_plate();
        if d <= 0.0 {
            return FrfPoint {
                uz_center: 0.0,
                i_rms,
            };
        }

        let v_peak = v_rms * std::f64::consts::SQRT_2;

        // Piezo-induced bending moment per width -> curvature -> center
        // displacement scale. Displacement scales proportionally with K_W.
        let m0 = self.stack.piezo_bending_moment_per_width(v_peak);
        let kappa = m0 / d;
        let w_scale = k_w * kappa * self.plate.a.powi(2);

        let m_areal = self.stack.areal_mass();

        // Modal superposition at the plate center (x = a/2, y = b/2)
        let mut uz = Complex64::new(0.0, 0.0);
        for &mode in &self.modes {
            let phi_c = center_mode_shape(mode.m, mode.n);
            if phi_c.abs() < CENTER_SHAPE_EPS {
                continue;
            }

            let w_mn = self.modal_omega(d, m_areal, mode);

            // Unit-normalized SDOF frequency response with damping
            let h = Complex64::new(w_mn * w_mn - omega * omega, 2.0 * zeta * w_mn * omega).inv();
            uz += h * (w_scale * phi_c);
        }

        FrfPoint {
            uz_center: uz.norm(),
            i_rms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{ElasticMaterial, PiezoMaterial};
    use approx::assert_relative_eq;

    fn test_rom(k_w: f64) -> RectPlateROM {
        let plate = RectPlate::square(1.5e-3);
        let stack = Stack::unimorph(
            ElasticMaterial::new(170e9, 0.28, 2330.0),
            8e-6,
            PiezoMaterial::new(60e9, 0.31, 7500.0, 1200.0, -180e-12, 0.02),
            2e-6,
            1.0,
        );
        RectPlateROM::with_default_modes(plate, stack, k_w).unwrap()
    }

    fn bare_rom() -> RectPlateROM {
        let plate = RectPlate::square(1.5e-3);
        let stack = Stack::bare(ElasticMaterial::new(170e9, 0.28, 2330.0), 8e-6);
        RectPlateROM::with_default_modes(plate, stack, 8.0).unwrap()
    }

    #[test]
    fn test_construction_rejects_nonpositive_shape_factor() {
        let plate = RectPlate::square(1.5e-3);
        let stack = Stack::bare(ElasticMaterial::silicon(), 8e-6);
        assert!(RectPlateROM::with_default_modes(plate, stack, 0.0).is_err());
        assert!(RectPlateROM::with_default_modes(plate, stack, -1.0).is_err());
    }

    #[test]
    fn test_clamp_correction_must_be_positive() {
        assert!(test_rom(8.0).with_clamp_correction(0.0).is_err());
        assert!(test_rom(8.0).with_clamp_correction(1.4).is_ok());
    }

    #[test]
    fn test_modal_frequencies_ordering_and_order() {
        let rom = test_rom(8.0);
        let freqs = rom.modal_frequencies();
        assert_eq!(freqs.len(), 4);
        // Output follows the mode-list order
        assert_eq!(freqs[0].mode, Mode::new(1, 1));
        assert_eq!(freqs[3].mode, Mode::new(2, 2));
        // Larger combined mode metric, strictly larger frequency
        assert!(freqs[0].f_hz < freqs[1].f_hz);
        assert!(freqs[1].f_hz < freqs[3].f_hz);
        // Square plate: (2,1) and (1,2) are degenerate
        assert_relative_eq!(freqs[1].f_hz, freqs[2].f_hz, max_relative = 1e-12);
    }

    #[test]
    fn test_clamp_correction_scales_frequencies() {
        let rom = test_rom(8.0);
        let corrected = rom.clone().with_clamp_correction(1.0).unwrap();
        let f_default = rom.modal_frequencies()[0].f_hz;
        let f_ss = corrected.modal_frequencies()[0].f_hz;
        assert_relative_eq!(f_default, 1.25 * f_ss, max_relative = 1e-12);
    }

    #[test]
    fn test_capacitance_matches_parallel_plate_formula() {
        let rom = test_rom(8.0);
        let expected = crate::electrical::parallel_plate_capacitance(
            1200.0,
            1.5e-3 * 1.5e-3,
            2e-6,
            1.0,
        );
        assert_relative_eq!(rom.capacitance(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_bare_plate_is_fully_degenerate() {
        let rom = bare_rom();
        assert_eq!(rom.capacitance(), 0.0);
        let p = rom.frf_center_displacement_and_current(10.0, 48e3, 0.02);
        assert_eq!(p.uz_center, 0.0);
        assert_eq!(p.i_rms, 0.0);
    }

    #[test]
    fn test_displacement_linear_in_shape_factor_current_invariant() {
        let p1 = test_rom(1.0).frf_center_displacement_and_current(10.0, 48e3, 0.02);
        let p2 = test_rom(2.0).frf_center_displacement_and_current(10.0, 48e3, 0.02);
        assert_relative_eq!(p2.uz_center / p1.uz_center, 2.0, max_relative = 1e-2);
        assert_relative_eq!(p1.i_rms, p2.i_rms, max_relative = 1e-6);
    }

    #[test]
    fn test_even_modes_do_not_move_the_center() {
        let rom = test_rom(8.0);
        let only_odd = RectPlateROM::new(
            rom.plate,
            rom.stack,
            vec![Mode::new(1, 1)],
            rom.k_w,
        )
        .unwrap();
        // Default set is (1,1) plus three even-count modes whose center
        // shape vanishes; the response must match the (1,1)-only ROM
        let full = rom.frf_center_displacement_and_current(10.0, 48e3, 0.02);
        let odd = only_odd.frf_center_displacement_and_current(10.0, 48e3, 0.02);
        assert_relative_eq!(full.uz_center, odd.uz_center, max_relative = 1e-12);
    }

    #[test]
    fn test_response_peaks_near_fundamental() {
        let rom = test_rom(8.0);
        let f0 = rom.modal_frequencies()[0].f_hz;
        let at_res = rom.frf_center_displacement_and_current(10.0, f0, 0.02);
        let off_res = rom.frf_center_displacement_and_current(10.0, f0 * 0.3, 0.02);
        assert!(at_res.uz_center > off_res.uz_center);
    }

    #[test]
    fn test_frf_response_matches_scalar_entry_point() {
        let rom = test_rom(8.0);
        let drive = SinDrive::new(10.0, 48e3);
        let a = rom.frf_response(&drive, 0.02);
        let b = rom.frf_center_displacement_and_current(10.0, 48e3, 0.02);
        assert_relative_eq!(a.uz_center, b.uz_center, max_relative = 1e-12);
        assert_relative_eq!(a.i_rms, b.i_rms, max_relative = 1e-12);
    }

    #[test]
    fn test_calibration_round_trip() {
        let rom = test_rom(RectPlateROM::DEFAULT_SHAPE_FACTOR);
        let uz_ref = 1.0e-9;
        let k_w = rom.calibrated_shape_factor(uz_ref, 10.0, 48e3, 0.02).unwrap();
        assert!(k_w > 0.0);
        let calibrated = test_rom(k_w);
        let p = calibrated.frf_center_displacement_and_current(10.0, 48e3, 0.02);
        assert_relative_eq!(p.uz_center, uz_ref, max_relative = 1e-9);
    }

    #[test]
    fn test_calibration_fails_for_degenerate_rom() {
        let rom = bare_rom();
        assert!(rom.calibrated_shape_factor(1e-9, 10.0, 48e3, 0.02).is_err());
    }
}
