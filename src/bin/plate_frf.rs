//! Demo: modal table and electromechanical FRF sweep for a Si + PZT
//! unimorph diaphragm.
//!
//! Run with: cargo run --bin plate-frf
//! Set RUST_LOG=info for per-sweep progress.

use anyhow::Result;
use log::info;

use piezo_rom::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let plate = RectPlate::square(1.5e-3);
    let si = ElasticMaterial::silicon();
    let pzt = PiezoMaterial::pzt();
    let stack = Stack::unimorph(si, 8e-6, pzt, 2e-6, 0.8);

    let modes = vec![
        Mode::new(1, 1),
        Mode::new(2, 1),
        Mode::new(1, 2),
        Mode::new(2, 2),
        Mode::new(3, 1),
        Mode::new(1, 3),
    ];
    let rom = RectPlateROM::new(plate, stack, modes, RectPlateROM::DEFAULT_SHAPE_FACTOR)?;

    println!("Modal frequencies [Hz] (approx, clamped-corrected):");
    for mf in rom.modal_frequencies() {
        println!("  ({}, {}): {:.0} Hz", mf.mode.m, mf.mode.n, mf.f_hz);
    }
    println!("Terminal capacitance: {:.3e} F", rom.capacitance());

    // FRF sweep 1 kHz .. 200 kHz
    let v_rms = 10.0;
    let zeta = 0.02;
    let n_points = 400;
    let (f_lo, f_hi) = (1e3, 200e3);

    info!("sweeping {n_points} points from {f_lo} Hz to {f_hi} Hz");

    let mut peak = FrfPoint {
        uz_center: 0.0,
        i_rms: 0.0,
    };
    let mut f_peak = f_lo;
    for i in 0..n_points {
        let f = f_lo + (f_hi - f_lo) * i as f64 / (n_points - 1) as f64;
        let p = rom.frf_center_displacement_and_current(v_rms, f, zeta);
        if p.uz_center > peak.uz_center {
            peak = p;
            f_peak = f;
        }
    }

    println!(
        "Peak uz (rough) at f = {f_peak:.0} Hz : uz_peak = {:.3e} m",
        peak.uz_center
    );
    println!("At that f, terminal current (RMS): I = {:.3e} A", peak.i_rms);
    println!("Peak point as JSON: {}", serde_json::to_string(&peak)?);

    Ok(())
}
