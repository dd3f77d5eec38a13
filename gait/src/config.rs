use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default sampling interval for synthesized trajectories (s).
pub const DEFAULT_TIME_STEP: f64 = 0.02;

#[derive(Debug, Error)]
pub enum ConfigErrors {
    #[error("duration must be greater than zero, got {0}")]
    DurationNotPositive(f64),
    #[error("time step must be greater than zero, got {0}")]
    TimeStepNotPositive(f64),
    #[error("time step ({time_step}) cannot be greater than duration ({duration})")]
    TimeStepExceedsDuration { time_step: f64, duration: f64 },
}

/// Leg-count/leg-layout variant of the robot.
///
/// The topology selects the gait parameter table used during synthesis:
/// leg offsets, cycle count, stance threshold, swing and force amplitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotTopology {
    Monoped,
    Biped,
    Quadruped,
}

/// Immutable description of a locomotion task.
///
/// Positions are in meters, times in seconds. The base travels from
/// `start_position` to `end_position` over `duration`, sampled every
/// `time_step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionConfig {
    pub topology: RobotTopology,
    pub start_position: Vector3<f64>,
    pub end_position: Vector3<f64>,
    pub duration: f64,
    pub time_step: f64,
}

impl LocomotionConfig {
    pub fn new(
        topology: RobotTopology,
        start_position: Vector3<f64>,
        end_position: Vector3<f64>,
        duration: f64,
    ) -> Self {
        Self {
            topology,
            start_position,
            end_position,
            duration,
            time_step: DEFAULT_TIME_STEP,
        }
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Checks the timing fields before any sample is produced.
    pub fn validate(&self) -> Result<(), ConfigErrors> {
        if self.duration <= 0.0 {
            return Err(ConfigErrors::DurationNotPositive(self.duration));
        }
        if self.time_step <= 0.0 {
            return Err(ConfigErrors::TimeStepNotPositive(self.time_step));
        }
        if self.time_step > self.duration {
            return Err(ConfigErrors::TimeStepExceedsDuration {
                time_step: self.time_step,
                duration: self.duration,
            });
        }
        Ok(())
    }

    /// Single-leg hop, 1.5 m forward over 2 s.
    pub fn monoped_hop() -> Self {
        Self::new(
            RobotTopology::Monoped,
            Vector3::new(0.0, 0.0, 0.5),
            Vector3::new(1.5, 0.0, 0.5),
            2.0,
        )
    }

    /// Alternating two-leg walk, 2 m forward over 3 s.
    pub fn biped_walk() -> Self {
        Self::new(
            RobotTopology::Biped,
            Vector3::new(0.0, 0.0, 0.87),
            Vector3::new(2.0, 0.0, 0.87),
            3.0,
        )
    }

    /// Diagonal-pair trot, 2.5 m forward over 2.5 s.
    pub fn quadruped_trot() -> Self {
        Self::new(
            RobotTopology::Quadruped,
            Vector3::new(0.0, 0.0, 0.5),
            Vector3::new(2.5, 0.0, 0.5),
            2.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(LocomotionConfig::monoped_hop().validate().is_ok());
        assert!(LocomotionConfig::biped_walk().validate().is_ok());
        assert!(LocomotionConfig::quadruped_trot().validate().is_ok());
    }

    #[test]
    fn test_invalid_duration() {
        let config = LocomotionConfig::monoped_hop();
        let config = LocomotionConfig { duration: 0.0, ..config };
        assert!(matches!(
            config.validate(),
            Err(ConfigErrors::DurationNotPositive(_))
        ));
    }

    #[test]
    fn test_invalid_time_step() {
        let config = LocomotionConfig::biped_walk().with_time_step(-0.01);
        assert!(matches!(
            config.validate(),
            Err(ConfigErrors::TimeStepNotPositive(_))
        ));

        let config = LocomotionConfig::biped_walk().with_time_step(10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigErrors::TimeStepExceedsDuration { .. })
        ));
    }
}
