//! Benchmarks for the FRF sweep and hysteresis loop construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use piezo_rom::ferroelectric::closed_loop;
use piezo_rom::prelude::*;

fn bench_rom() -> RectPlateROM {
    let plate = RectPlate::square(1.5e-3);
    let stack = Stack::unimorph(
        ElasticMaterial::silicon(),
        8e-6,
        PiezoMaterial::pzt(),
        2e-6,
        1.0,
    );
    RectPlateROM::with_default_modes(plate, stack, 8.0).unwrap()
}

fn bench_frf_sweep(c: &mut Criterion) {
    let rom = bench_rom();

    c.bench_function("frf_sweep_400_points", |b| {
        b.iter(|| {
            let mut peak = 0.0_f64;
            for i in 0..400 {
                let f = 1e3 + (200e3 - 1e3) * i as f64 / 399.0;
                let p = rom.frf_center_displacement_and_current(
                    black_box(10.0),
                    black_box(f),
                    black_box(0.02),
                );
                peak = peak.max(p.uz_center);
            }
            peak
        })
    });
}

fn bench_hysteresis_loop(c: &mut Criterion) {
    let sweep: Vec<f64> = (0..2001)
        .map(|i| -20e6 + 40e6 * i as f64 / 2000.0)
        .collect();
    let params = HysteresisParams::new(5e6, 42.0, 30.0);

    c.bench_function("closed_loop_2001_samples", |b| {
        b.iter(|| closed_loop(black_box(&sweep), black_box(&params)).unwrap())
    });
}

criterion_group!(benches, bench_frf_sweep, bench_hysteresis_loop);
criterion_main!(benches);
