use std::f64::consts::PI;

use nalgebra::Vector3;
use rayon::prelude::*;

use crate::config::{ConfigErrors, LocomotionConfig};
use crate::params::{GaitParams, Leg};
use crate::trajectory::{EndEffectorState, Trajectory, TrajectorySample};

/// Fraction of one time step within which a grid point is considered to
/// land on `duration`.
const STEP_MARGIN: f64 = 1e-9;

/// Synthesizes the phase-driven gait trajectory for `config`.
///
/// Deterministic and pure: the same config always produces bit-identical
/// output. Fails before producing any sample if the timing fields are
/// invalid.
pub fn synthesize(config: &LocomotionConfig) -> Result<Trajectory, ConfigErrors> {
    config.validate()?;
    let samples = time_grid(config)
        .iter()
        .map(|&t| sample_at(config, t))
        .collect();
    Ok(Trajectory { config: *config, samples })
}

/// Same contract and output as [`synthesize`], with the time grid evaluated
/// in parallel. Samples are independent, so the result is bit-identical to
/// the serial path.
pub fn synthesize_parallel(config: &LocomotionConfig) -> Result<Trajectory, ConfigErrors> {
    config.validate()?;
    let samples = time_grid(config)
        .par_iter()
        .map(|&t| sample_at(config, t))
        .collect();
    Ok(Trajectory { config: *config, samples })
}

/// Discretized times `i * time_step` for `i = 0..=floor(duration/time_step)`.
///
/// The trajectory always ends exactly at `duration`: regular grid points
/// run strictly below it and one final sample at `duration` closes the
/// sequence, absorbing both an exact-multiple last step and a trailing
/// partial one. The cutoff is scaled to the step so the grid stays strictly
/// ascending at any time scale.
fn time_grid(config: &LocomotionConfig) -> Vec<f64> {
    let cutoff = config.duration - config.time_step * STEP_MARGIN;
    let mut times = Vec::with_capacity((config.duration / config.time_step) as usize + 2);
    let mut i: u64 = 0;
    loop {
        let t = i as f64 * config.time_step;
        if t >= cutoff {
            break;
        }
        times.push(t);
        i += 1;
    }
    times.push(config.duration);
    times
}

fn sample_at(config: &LocomotionConfig, t: f64) -> TrajectorySample {
    let params = config.topology.params();
    let progress = t / config.duration;
    let base_pose = base_pose(config, progress);
    let phase = (progress * params.cycles).fract();
    let end_effectors = params
        .legs
        .iter()
        .enumerate()
        .map(|(leg_index, leg)| leg_state(leg_index, leg, params, base_pose.x, phase, progress))
        .collect();
    TrajectorySample { t, base_pose, end_effectors }
}

/// Base position at normalized progress: linear interpolation along x,
/// y held at the start, vertical oscillation per topology.
fn base_pose(config: &LocomotionConfig, progress: f64) -> Vector3<f64> {
    let start = &config.start_position;
    let end = &config.end_position;
    Vector3::new(
        start.x + progress * (end.x - start.x),
        start.y,
        start.z + config.topology.oscillation(progress),
    )
}

fn leg_state(
    leg_index: usize,
    leg: &Leg,
    params: &GaitParams,
    base_x: f64,
    phase: f64,
    progress: f64,
) -> EndEffectorState {
    // phase and shift both live in [0, 1), so one fract() wraps the sum
    let effective = (phase + leg.phase_shift).fract();
    if effective < params.stance_threshold {
        // stance: foot planted on the ground plane, bearing load
        let force = &params.force;
        EndEffectorState {
            leg_index,
            position: Vector3::new(base_x + leg.x_offset, leg.y_offset, 0.0),
            in_contact: true,
            contact_force: Vector3::new(
                force.horizontal_amplitude * (PI * progress).sin(),
                0.0,
                force.vertical_baseline + force.vertical_ripple * (4.0 * PI * progress).sin(),
            ),
        }
    } else {
        // swing: arc over the ground, reaching toward the next stance
        let s = (effective - params.stance_threshold) / (1.0 - params.stance_threshold);
        EndEffectorState {
            leg_index,
            position: Vector3::new(
                base_x + leg.x_offset + params.swing_reach * s,
                leg.y_offset,
                params.swing_amplitude * (PI * s).sin(),
            ),
            in_contact: false,
            contact_force: Vector3::zeros(),
        }
    }
}
