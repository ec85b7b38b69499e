//! Ferroelectric P-E hysteresis generator
//!
//! Schematic tanh-branch hysteresis for driving nonlinear displacement
//! visualizations. This is not a rigorous material model: the smoothing
//! field Es is solved so that the rising branch reproduces a target remnant
//! polarization at zero field, and the branch endpoints are symmetrized for
//! a clean closed loop.
//!
//! Every function is pure; no state persists between calls. Field values
//! are in V/m, polarization in µC/cm².

use serde::{Deserialize, Serialize};

use crate::error::{RomError, RomResult};

/// Shape parameters for a closed hysteresis loop
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HysteresisParams {
    /// Coercive field in V/m
    pub ec: f64,
    /// Saturation polarization in µC/cm²
    pub pm: f64,
    /// Target remnant polarization in µC/cm²
    pub pr_target: f64,
    /// Smoothing field in V/m; solved from `pr_target` when absent
    pub es: Option<f64>,
    /// Number of points in each vertical jump segment closing the loop
    pub n_jump: usize,
}

impl HysteresisParams {
    /// Default number of jump points at the sweep ends
    pub const DEFAULT_N_JUMP: usize = 120;

    /// Create loop parameters; Es is solved from the target remnant
    /// polarization
    pub fn new(ec: f64, pm: f64, pr_target: f64) -> Self {
        Self {
            ec,
            pm,
            pr_target,
            es: None,
            n_jump: Self::DEFAULT_N_JUMP,
        }
    }

    /// Supply an explicit smoothing field instead of solving for one
    pub fn with_smoothing_field(mut self, es: f64) -> Self {
        self.es = Some(es);
        self
    }

    /// Override the number of jump points
    pub fn with_jump_points(mut self, n_jump: usize) -> Self {
        self.n_jump = n_jump;
        self
    }
}

/// Rising and falling polarization branches over a field sweep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branches {
    /// Rising branch P_up(E) in µC/cm², one value per sweep sample
    pub rising: Vec<f64>,
    /// Falling branch P_down(E) in µC/cm², one value per sweep sample
    pub falling: Vec<f64>,
}

/// Closed hysteresis loop over a field sweep.
///
/// Produced fresh by each call; the loop sequences concatenate the rising
/// branch, a jump at the sweep maximum, the reversed falling branch, and a
/// closing jump at the sweep minimum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HysteresisLoop {
    /// Rising branch P_up(E) in µC/cm²
    pub rising: Vec<f64>,
    /// Falling branch P_down(E) in µC/cm²
    pub falling: Vec<f64>,
    /// Field values of the closed-loop path in V/m
    pub loop_field: Vec<f64>,
    /// Polarization values of the closed-loop path in µC/cm²
    pub loop_polarization: Vec<f64>,
    /// Smoothing field used (solved or supplied) in V/m
    pub es: f64,
    /// Rising-branch polarization at the sweep sample nearest E = 0
    pub pr_rising: f64,
    /// Falling-branch polarization at the sweep sample nearest E = 0
    pub pr_falling: f64,
}

/// Solve the smoothing field Es such that tanh(Ec/Es) = Pr_target/Pm.
///
/// Closed form via the inverse hyperbolic tangent; fails when
/// |Pr_target| >= Pm since no real solution exists.
pub fn solve_smoothing_field(pm: f64, pr_target: f64, ec: f64) -> RomResult<f64> {
    let r = pr_target / pm;
    if r.abs() >= 1.0 {
        return Err(RomError::NoSmoothingSolution { pm, pr_target });
    }
    // arctanh(r) = 0.5 ln((1+r)/(1-r))
    let arctanh_r = 0.5 * ((1.0 + r) / (1.0 - r)).ln();
    Ok(ec / arctanh_r)
}

/// Rising and falling branches over a field sweep:
///
/// P_up(E) = Pm·tanh((E + Ec)/Es), P_down(E) = Pm·tanh((E - Ec)/Es)
///
/// The positive and negative portions of each branch are rescaled so both
/// branches saturate at the same levels (the average of their extremes),
/// keeping the loop endpoints visually symmetric.
pub fn branches(sweep: &[f64], ec: f64, es: f64, pm: f64) -> RomResult<Branches> {
    if sweep.is_empty() {
        return Err(RomError::InvalidSweep("field sweep must not be empty".to_string()));
    }

    let p_up: Vec<f64> = sweep.iter().map(|&e| pm * ((e + ec) / es).tanh()).collect();
    let p_dn: Vec<f64> = sweep.iter().map(|&e| pm * ((e - ec) / es).tanh()).collect();

    let p_pos = 0.5 * (max_of(&p_up) + max_of(&p_dn));
    let p_neg = 0.5 * (min_of(&p_up) + min_of(&p_dn));

    Ok(Branches {
        rising: symmetrize(p_up, p_pos, p_neg),
        falling: symmetrize(p_dn, p_pos, p_neg),
    })
}

/// Construct a closed P-E loop for plotting.
///
/// The smoothing field is solved from the target remnant polarization
/// unless supplied in `params`. Remnant readings are taken at the sweep
/// sample nearest E = 0 (minimum absolute value, first occurrence wins).
pub fn closed_loop(sweep: &[f64], params: &HysteresisParams) -> RomResult<HysteresisLoop> {
    if sweep.is_empty() {
        return Err(RomError::InvalidSweep("field sweep must not be empty".to_string()));
    }

    let es = match params.es {
        Some(es) => es,
        None => solve_smoothing_field(params.pm, params.pr_target, params.ec)?,
    };

    let Branches { rising, falling } = branches(sweep, params.ec, es, params.pm)?;

    let idx0 = nearest_zero_index(sweep);
    let pr_rising = rising[idx0];
    let pr_falling = falling[idx0];

    // Closed path: left->right on the rising branch, jump at the right end,
    // right->left on the falling branch, closing jump at the left end
    let n = sweep.len();
    let n_jump = params.n_jump;
    let mut loop_field = Vec::with_capacity(2 * (n + n_jump));
    let mut loop_polarization = Vec::with_capacity(2 * (n + n_jump));

    loop_field.extend_from_slice(sweep);
    loop_polarization.extend_from_slice(&rising);

    loop_field.extend(std::iter::repeat(sweep[n - 1]).take(n_jump));
    loop_polarization.extend(linspace(rising[n - 1], falling[n - 1], n_jump));

    loop_field.extend(sweep.iter().rev());
    loop_polarization.extend(falling.iter().rev());

    loop_field.extend(std::iter::repeat(sweep[0]).take(n_jump));
    loop_polarization.extend(linspace(falling[0], rising[0], n_jump));

    Ok(HysteresisLoop {
        rising,
        falling,
        loop_field,
        loop_polarization,
        es,
        pr_rising,
        pr_falling,
    })
}

/// Rescale the non-negative entries toward `p_pos` and the negative entries
/// toward `p_neg`, each relative to the branch's own extreme
fn symmetrize(mut p: Vec<f64>, p_pos: f64, p_neg: f64) -> Vec<f64> {
    let pos_max = p.iter().copied().filter(|&v| v >= 0.0).fold(f64::NEG_INFINITY, f64::max);
    let neg_min = p.iter().copied().filter(|&v| v < 0.0).fold(f64::INFINITY, f64::min);

    for v in &mut p {
        if *v >= 0.0 {
            if pos_max > 0.0 {
                *v *= p_pos / pos_max;
            }
        } else if neg_min < 0.0 {
            *v *= p_neg / neg_min;
        }
    }
    p
}

/// Index of the sweep sample with the smallest |E|; ties go to the first
/// occurrence
fn nearest_zero_index(sweep: &[f64]) -> usize {
    let mut best = 0;
    for (i, &e) in sweep.iter().enumerate().skip(1) {
        if e.abs() < sweep[best].abs() {
            best = i;
        }
    }
    best
}

/// `n` evenly spaced values from `start` to `end` inclusive; empty for
/// n = 0, just `start` for n = 1
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
