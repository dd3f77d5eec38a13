use std::f64::consts::PI;

use crate::config::RobotTopology;

/// Placement and timing of one leg within the gait cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    /// Forward offset of the foot from the base (m).
    pub x_offset: f64,
    /// Lateral offset of the foot from the base (m).
    pub y_offset: f64,
    /// Shift applied to the gait phase before the stance test, in cycles.
    /// Anti-phase legs carry a shift of 0.5.
    pub phase_shift: f64,
}

/// Ground reaction force profile applied while a leg is in stance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    /// Amplitude of the horizontal force sinusoid (N).
    pub horizontal_amplitude: f64,
    /// Constant vertical load (N). Must exceed `vertical_ripple` so stance
    /// always carries positive vertical force.
    pub vertical_baseline: f64,
    /// Amplitude of the vertical load ripple (N).
    pub vertical_ripple: f64,
}

/// Fixed gait constants for one topology, looked up once per synthesis call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitParams {
    pub legs: &'static [Leg],
    /// Number of full gait cycles over the trajectory.
    pub cycles: f64,
    /// A leg is in stance while its shifted phase is below this value.
    pub stance_threshold: f64,
    /// Peak foot height during swing (m).
    pub swing_amplitude: f64,
    /// Forward reach of the foot over one swing window (m).
    pub swing_reach: f64,
    pub force: ForceParams,
}

const MONOPED: GaitParams = GaitParams {
    legs: &[Leg { x_offset: 0.0, y_offset: 0.0, phase_shift: 0.0 }],
    cycles: 2.0,
    stance_threshold: 0.3,
    swing_amplitude: 0.1,
    swing_reach: 0.1,
    force: ForceParams {
        horizontal_amplitude: 50.0,
        vertical_baseline: 300.0,
        vertical_ripple: 100.0,
    },
};

const BIPED: GaitParams = GaitParams {
    legs: &[
        Leg { x_offset: 0.0, y_offset: 0.1, phase_shift: 0.0 },
        Leg { x_offset: 0.0, y_offset: -0.1, phase_shift: 0.5 },
    ],
    cycles: 4.0,
    stance_threshold: 0.5,
    swing_amplitude: 0.08,
    swing_reach: 0.15,
    force: ForceParams {
        horizontal_amplitude: 25.0,
        vertical_baseline: 200.0,
        vertical_ripple: 50.0,
    },
};

// Trot: diagonal pairs front-left/rear-right and front-right/rear-left
// alternate on the half-cycle.
const QUADRUPED: GaitParams = GaitParams {
    legs: &[
        Leg { x_offset: 0.2, y_offset: 0.15, phase_shift: 0.0 },
        Leg { x_offset: 0.2, y_offset: -0.15, phase_shift: 0.5 },
        Leg { x_offset: -0.2, y_offset: 0.15, phase_shift: 0.5 },
        Leg { x_offset: -0.2, y_offset: -0.15, phase_shift: 0.0 },
    ],
    cycles: 3.0,
    stance_threshold: 0.5,
    swing_amplitude: 0.06,
    swing_reach: 0.0,
    force: ForceParams {
        horizontal_amplitude: 20.0,
        vertical_baseline: 150.0,
        vertical_ripple: 40.0,
    },
};

impl RobotTopology {
    pub fn params(&self) -> &'static GaitParams {
        match self {
            RobotTopology::Monoped => &MONOPED,
            RobotTopology::Biped => &BIPED,
            RobotTopology::Quadruped => &QUADRUPED,
        }
    }

    pub fn leg_count(&self) -> usize {
        self.params().legs.len()
    }

    /// Vertical base oscillation at normalized progress `p` in [0, 1].
    ///
    /// Monoped: one decaying hop. Biped: small bobbing, two full cycles.
    /// Quadruped: bounding, one full cycle.
    pub fn oscillation(&self, p: f64) -> f64 {
        match self {
            RobotTopology::Monoped => 0.3 * (PI * p).sin() * (-0.5 * p).exp(),
            RobotTopology::Biped => 0.05 * (4.0 * PI * p).sin(),
            RobotTopology::Quadruped => 0.15 * (2.0 * PI * p).sin(),
        }
    }
}
