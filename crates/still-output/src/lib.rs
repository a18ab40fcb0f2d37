//! `still-output` — trajectory writers for the solstill simulator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                   |
//! |-----------|---------|-------------------------------------------------|
//! | *(none)*  | CSV     | `trajectory.csv`, `discharge_events.csv`        |
//! | `sqlite`  | SQLite  | `output.db`                                     |
//! | `parquet` | Parquet | `trajectory.parquet`, `discharge_events.parquet`|
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`TrajectoryObserver`], which implements `still_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use still_output::{CsvWriter, TrajectoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrajectoryObserver::new(writer);
//! let trajectory = sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::{DischargeEventRow, TrajectoryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
