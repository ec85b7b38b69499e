//! piezo-rom - a schematic electromechanical reduced-order model
//!
//! This library models a rectangular piezoelectric unimorph diaphragm
//! without finite elements, answering:
//! - Modal frequencies of the laminated plate (clamp-corrected)
//! - Electrical terminal behavior under sinusoidal drive (capacitance,
//!   admittance, RMS current)
//! - Frequency response of center displacement by modal superposition
//!
//! An independent ferroelectric hysteresis generator produces closed P-E
//! loops for nonlinear displacement visualizations.
//!
//! All operations are pure functions over immutable inputs; sweeps are the
//! caller's loop over single-point calls.
//!
//! ## Example
//! ```rust
//! use piezo_rom::prelude::*;
//!
//! let plate = RectPlate::square(1.5e-3);
//! let stack = Stack::unimorph(
//!     ElasticMaterial::silicon(),
//!     8e-6,
//!     PiezoMaterial::pzt(),
//!     2e-6,
//!     1.0,
//! );
//! let rom = RectPlateROM::with_default_modes(plate, stack, 8.0).unwrap();
//!
//! for mf in rom.modal_frequencies() {
//!     println!("({}, {}): {:.0} Hz", mf.mode.m, mf.mode.n, mf.f_hz);
//! }
//!
//! let point = rom.frf_center_displacement_and_current(10.0, 48e3, 0.02);
//! assert!(point.uz_center > 0.0);
//! assert!(point.i_rms > 0.0);
//! ```

pub mod electrical;
pub mod error;
pub mod ferroelectric;
pub mod geometry;
pub mod materials;
pub mod physics;
pub mod rom;

// Re-export common types
pub mod prelude {
    pub use crate::electrical::SinDrive;
    pub use crate::error::{RomError, RomResult};
    pub use crate::ferroelectric::{Branches, HysteresisLoop, HysteresisParams};
    pub use crate::geometry::RectPlate;
    pub use crate::materials::{ElasticMaterial, PiezoMaterial, Stack};
    pub use crate::rom::{FrfPoint, ModalFrequency, Mode, RectPlateROM};
}
