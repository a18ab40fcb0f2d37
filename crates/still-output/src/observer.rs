//! `TrajectoryObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use still_core::Tick;
use still_physics::StepRecord;
use still_sim::SimObserver;

use crate::row::{DischargeEventRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams every step to any [`OutputWriter`] backend
/// (CSV, SQLite, Parquet, …), plus one event row per brine discharge.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TrajectoryObserver<W> {
    fn on_step_end(&mut self, record: &StepRecord) {
        let row = TrajectoryRow::from(record);
        let result = self.writer.write_steps(std::slice::from_ref(&row));
        self.store_err(result);

        if record.discharged {
            let event = DischargeEventRow::from(record);
            let result = self.writer.write_discharge(&event);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
