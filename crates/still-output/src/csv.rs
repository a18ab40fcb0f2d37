//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectory.csv`
//! - `discharge_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DischargeEventRow, OutputResult, TrajectoryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    trajectory: Writer<File>,
    discharges: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectory = Writer::from_path(dir.join("trajectory.csv"))?;
        trajectory.write_record([
            "step",
            "elapsed_mins",
            "hour_of_day",
            "radiation_w_m2",
            "ambient_c",
            "water_c",
            "glass_c",
            "evaporation_l_per_h",
            "salinity_g_l",
            "volume_l",
            "distillate_l",
            "absorbed_w",
            "lost_w",
            "discharged",
        ])?;

        let mut discharges = Writer::from_path(dir.join("discharge_events.csv"))?;
        discharges.write_record(["step", "hour_of_day", "salinity_g_l", "volume_l"])?;

        Ok(Self {
            trajectory,
            discharges,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectory.write_record(&[
                row.step.to_string(),
                row.elapsed_mins.to_string(),
                row.hour_of_day.to_string(),
                row.radiation_w_m2.to_string(),
                row.ambient_c.to_string(),
                row.water_c.to_string(),
                row.glass_c.to_string(),
                row.evaporation_l_per_h.to_string(),
                row.salinity_g_l.to_string(),
                row.volume_l.to_string(),
                row.distillate_l.to_string(),
                row.absorbed_w.to_string(),
                row.lost_w.to_string(),
                (row.discharged as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_discharge(&mut self, row: &DischargeEventRow) -> OutputResult<()> {
        self.discharges.write_record(&[
            row.step.to_string(),
            row.hour_of_day.to_string(),
            row.salinity_g_l.to_string(),
            row.volume_l.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectory.flush()?;
        self.discharges.flush()?;
        Ok(())
    }
}
