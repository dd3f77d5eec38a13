use gait::{LocomotionConfig, synthesize};
use gait_result::{write_csv, write_json};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let trajectory = synthesize(&LocomotionConfig::quadruped_trot())?;
    write_csv(&trajectory, Path::new("quadruped_trot.csv"))?;
    write_json(&trajectory, Path::new("quadruped_trot.json"))?;
    println!(
        "wrote {} samples ({} legs) to quadruped_trot.csv/.json",
        trajectory.len(),
        trajectory.leg_count()
    );
    Ok(())
}
