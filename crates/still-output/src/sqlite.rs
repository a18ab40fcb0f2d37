//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `trajectory` and `discharge_events`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DischargeEventRow, OutputResult, TrajectoryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trajectory (
                 step                INTEGER PRIMARY KEY,
                 elapsed_mins        INTEGER NOT NULL,
                 hour_of_day         REAL    NOT NULL,
                 radiation_w_m2      REAL    NOT NULL,
                 ambient_c           REAL    NOT NULL,
                 water_c             REAL    NOT NULL,
                 glass_c             REAL    NOT NULL,
                 evaporation_l_per_h REAL    NOT NULL,
                 salinity_g_l        REAL    NOT NULL,
                 volume_l            REAL    NOT NULL,
                 distillate_l        REAL    NOT NULL,
                 absorbed_w          REAL    NOT NULL,
                 lost_w              REAL    NOT NULL,
                 discharged          INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS discharge_events (
                 step         INTEGER PRIMARY KEY,
                 hour_of_day  REAL NOT NULL,
                 salinity_g_l REAL NOT NULL,
                 volume_l     REAL NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_steps(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trajectory \
                 (step, elapsed_mins, hour_of_day, radiation_w_m2, ambient_c, water_c, glass_c, \
                  evaporation_l_per_h, salinity_g_l, volume_l, distillate_l, absorbed_w, lost_w, \
                  discharged) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step,
                    row.elapsed_mins,
                    row.hour_of_day,
                    row.radiation_w_m2,
                    row.ambient_c,
                    row.water_c,
                    row.glass_c,
                    row.evaporation_l_per_h,
                    row.salinity_g_l,
                    row.volume_l,
                    row.distillate_l,
                    row.absorbed_w,
                    row.lost_w,
                    row.discharged as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_discharge(&mut self, row: &DischargeEventRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO discharge_events (step, hour_of_day, salinity_g_l, volume_l) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.step, row.hour_of_day, row.salinity_g_l, row.volume_l],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
