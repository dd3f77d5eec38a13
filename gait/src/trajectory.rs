use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::LocomotionConfig;

/// State of one foot at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndEffectorState {
    /// 0-based leg identity, stable across the whole trajectory.
    pub leg_index: usize,
    pub position: Vector3<f64>,
    /// True while the leg bears load (stance), false while airborne (swing).
    pub in_contact: bool,
    /// Ground reaction force (N). Exactly zero whenever `in_contact` is false.
    pub contact_force: Vector3<f64>,
}

/// One discretized instant of the motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Elapsed time (s), 0 <= t <= duration.
    pub t: f64,
    pub base_pose: Vector3<f64>,
    /// One entry per leg, ordered by `leg_index`.
    pub end_effectors: Vec<EndEffectorState>,
}

/// Complete time-ascending motion trajectory for one locomotion task.
///
/// Owned by the caller; downstream renderers and writers only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub config: LocomotionConfig,
    pub samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn leg_count(&self) -> usize {
        self.config.topology.leg_count()
    }

    /// Sample whose time is closest to `t`.
    ///
    /// Searches the recorded times, so the trailing partial sample on
    /// durations that are not an exact multiple of the step is found too.
    pub fn sample_near(&self, t: f64) -> Option<&TrajectorySample> {
        let i = self.samples.partition_point(|sample| sample.t < t);
        let before = i.checked_sub(1).and_then(|j| self.samples.get(j));
        let after = self.samples.get(i);
        match (before, after) {
            (Some(a), Some(b)) => Some(if t - a.t <= b.t - t { a } else { b }),
            (a, b) => a.or(b),
        }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LocomotionConfig;
    use crate::synthesizer::synthesize;

    #[test]
    fn test_sample_near_trailing_partial_sample() {
        // 1.0 s at 0.3 s ends with a partial sample at t = 1.0; the lookup
        // must return it rather than rounding to the 0.9 grid slot
        let config = LocomotionConfig {
            duration: 1.0,
            ..LocomotionConfig::monoped_hop()
        }
        .with_time_step(0.3);
        let trajectory = synthesize(&config).unwrap();

        assert_eq!(trajectory.sample_near(1.0).unwrap().t, 1.0);
        assert!((trajectory.sample_near(0.9).unwrap().t - 0.9).abs() < 1e-12);
        assert_eq!(trajectory.sample_near(0.0).unwrap().t, 0.0);
        // out-of-range queries clamp to the nearest end
        assert_eq!(trajectory.sample_near(5.0).unwrap().t, 1.0);
        assert_eq!(trajectory.sample_near(-1.0).unwrap().t, 0.0);
    }
}
