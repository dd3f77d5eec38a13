//! Export of synthesized trajectories for downstream renderers and plotters.
//!
//! The synthesizer never formats text or touches a display surface; this
//! crate is the output boundary. It only reads `Trajectory` fields.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use csv::Writer;
use gait::Trajectory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportErrors {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Streams a trajectory to a flat CSV file, one row per sample.
///
/// Columns are `t`, `base_x/y/z`, then per leg `ee{i}_x/y/z`,
/// `ee{i}_contact` and `ee{i}_fx/fy/fz`, so a plotting script can read the
/// file without knowing the topology in advance.
pub struct TrajectoryCsvWriter {
    writer: Writer<BufWriter<File>>,
}

impl TrajectoryCsvWriter {
    pub fn create(path: &Path, leg_count: usize) -> Result<Self, ExportErrors> {
        let file = File::create(path)?;
        let mut writer = Writer::from_writer(BufWriter::new(file));

        let mut headers = vec![
            "t".to_string(),
            "base_x".to_string(),
            "base_y".to_string(),
            "base_z".to_string(),
        ];
        for i in 0..leg_count {
            for field in ["x", "y", "z", "contact", "fx", "fy", "fz"] {
                headers.push(format!("ee{i}_{field}"));
            }
        }
        writer.write_record(&headers)?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, trajectory: &Trajectory) -> Result<(), ExportErrors> {
        for sample in trajectory {
            let mut record = vec![
                sample.t.to_string(),
                sample.base_pose.x.to_string(),
                sample.base_pose.y.to_string(),
                sample.base_pose.z.to_string(),
            ];
            for ee in &sample.end_effectors {
                record.push(ee.position.x.to_string());
                record.push(ee.position.y.to_string());
                record.push(ee.position.z.to_string());
                record.push((ee.in_contact as u8).to_string());
                record.push(ee.contact_force.x.to_string());
                record.push(ee.contact_force.y.to_string());
                record.push(ee.contact_force.z.to_string());
            }
            self.writer.write_record(&record)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), ExportErrors> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes `trajectory` to `path` as CSV in one call.
pub fn write_csv(trajectory: &Trajectory, path: &Path) -> Result<(), ExportErrors> {
    let mut writer = TrajectoryCsvWriter::create(path, trajectory.leg_count())?;
    writer.write(trajectory)?;
    writer.finish()
}

/// Serializes the whole trajectory, config included, to a JSON string.
pub fn to_json(trajectory: &Trajectory) -> Result<String, ExportErrors> {
    Ok(serde_json::to_string(trajectory)?)
}

/// Writes the trajectory to `path` as JSON for browser-based renderers.
pub fn write_json(trajectory: &Trajectory, path: &Path) -> Result<(), ExportErrors> {
    let mut file = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut file, trajectory)?;
    file.flush()?;
    Ok(())
}
