pub mod config;
pub mod params;
pub mod synthesizer;
pub mod trajectory;

pub mod prelude {
    pub use crate::config::{ConfigErrors, LocomotionConfig, RobotTopology};
    pub use crate::synthesizer::{synthesize, synthesize_parallel};
    pub use crate::trajectory::{EndEffectorState, Trajectory, TrajectorySample};
}

pub use config::{ConfigErrors, LocomotionConfig, RobotTopology};
pub use synthesizer::{synthesize, synthesize_parallel};
pub use trajectory::{EndEffectorState, Trajectory, TrajectorySample};
