//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `trajectory.parquet`
//! - `discharge_events.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{BooleanBuilder, Float64Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{DischargeEventRow, OutputResult, TrajectoryRow};

fn trajectory_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",                DataType::UInt64,  false),
        Field::new("elapsed_mins",        DataType::UInt64,  false),
        Field::new("hour_of_day",         DataType::Float64, false),
        Field::new("radiation_w_m2",      DataType::Float64, false),
        Field::new("ambient_c",           DataType::Float64, false),
        Field::new("water_c",             DataType::Float64, false),
        Field::new("glass_c",             DataType::Float64, false),
        Field::new("evaporation_l_per_h", DataType::Float64, false),
        Field::new("salinity_g_l",        DataType::Float64, false),
        Field::new("volume_l",            DataType::Float64, false),
        Field::new("distillate_l",        DataType::Float64, false),
        Field::new("absorbed_w",          DataType::Float64, false),
        Field::new("lost_w",              DataType::Float64, false),
        Field::new("discharged",          DataType::Boolean, false),
    ]))
}

fn discharge_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",         DataType::UInt64,  false),
        Field::new("hour_of_day",  DataType::Float64, false),
        Field::new("salinity_g_l", DataType::Float64, false),
        Field::new("volume_l",     DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    trajectory:   Option<ArrowWriter<File>>,
    discharges:   Option<ArrowWriter<File>>,
    traj_schema:  Arc<Schema>,
    event_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let traj_schema = trajectory_schema();
        let event_schema = discharge_schema();

        let traj_file = File::create(dir.join("trajectory.parquet"))?;
        let trajectory = ArrowWriter::try_new(
            traj_file,
            Arc::clone(&traj_schema),
            Some(snappy_props()),
        )?;

        let event_file = File::create(dir.join("discharge_events.parquet"))?;
        let discharges = ArrowWriter::try_new(
            event_file,
            Arc::clone(&event_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            trajectory: Some(trajectory),
            discharges: Some(discharges),
            traj_schema,
            event_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_steps(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.trajectory.as_mut() else {
            return Ok(());
        };

        let mut steps        = UInt64Builder::new();
        let mut elapsed      = UInt64Builder::new();
        let mut hours        = Float64Builder::new();
        let mut radiation    = Float64Builder::new();
        let mut ambient      = Float64Builder::new();
        let mut water        = Float64Builder::new();
        let mut glass        = Float64Builder::new();
        let mut evaporation  = Float64Builder::new();
        let mut salinity     = Float64Builder::new();
        let mut volume       = Float64Builder::new();
        let mut distillate   = Float64Builder::new();
        let mut absorbed     = Float64Builder::new();
        let mut lost         = Float64Builder::new();
        let mut discharged   = BooleanBuilder::new();

        for row in rows {
            steps.append_value(row.step);
            elapsed.append_value(row.elapsed_mins);
            hours.append_value(row.hour_of_day);
            radiation.append_value(row.radiation_w_m2);
            ambient.append_value(row.ambient_c);
            water.append_value(row.water_c);
            glass.append_value(row.glass_c);
            evaporation.append_value(row.evaporation_l_per_h);
            salinity.append_value(row.salinity_g_l);
            volume.append_value(row.volume_l);
            distillate.append_value(row.distillate_l);
            absorbed.append_value(row.absorbed_w);
            lost.append_value(row.lost_w);
            discharged.append_value(row.discharged);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.traj_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(elapsed.finish()),
                Arc::new(hours.finish()),
                Arc::new(radiation.finish()),
                Arc::new(ambient.finish()),
                Arc::new(water.finish()),
                Arc::new(glass.finish()),
                Arc::new(evaporation.finish()),
                Arc::new(salinity.finish()),
                Arc::new(volume.finish()),
                Arc::new(distillate.finish()),
                Arc::new(absorbed.finish()),
                Arc::new(lost.finish()),
                Arc::new(discharged.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_discharge(&mut self, row: &DischargeEventRow) -> OutputResult<()> {
        let Some(writer) = self.discharges.as_mut() else {
            return Ok(());
        };

        let mut steps    = UInt64Builder::new();
        let mut hours    = Float64Builder::new();
        let mut salinity = Float64Builder::new();
        let mut volume   = Float64Builder::new();

        steps.append_value(row.step);
        hours.append_value(row.hour_of_day);
        salinity.append_value(row.salinity_g_l);
        volume.append_value(row.volume_l);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.event_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(hours.finish()),
                Arc::new(salinity.finish()),
                Arc::new(volume.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.trajectory.take() {
            w.close()?;
        }
        if let Some(w) = self.discharges.take() {
            w.close()?;
        }
        Ok(())
    }
}
