//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DischargeEventRow, OutputResult, TrajectoryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TrajectoryObserver::take_error`][crate::TrajectoryObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of trajectory rows.
    fn write_steps(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Write one discharge-event row.
    fn write_discharge(&mut self, row: &DischargeEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
