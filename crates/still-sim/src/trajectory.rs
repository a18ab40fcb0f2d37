//! The recorded run output.

use still_physics::StepRecord;

/// An ordered sequence of per-step records — the sole contract between the
/// core and any downstream plotting/reporting consumer.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    records: Vec<StepRecord>,
}

impl Trajectory {
    pub fn with_capacity(n: usize) -> Self {
        Self { records: Vec::with_capacity(n) }
    }

    pub(crate) fn push(&mut self, record: StepRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The recorded steps, in tick order.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StepRecord> {
        self.records
    }

    /// Cumulative distillate at the end of the horizon, L.
    pub fn total_distillate_l(&self) -> f64 {
        self.records.last().map_or(0.0, |r| r.distillate_l)
    }

    /// The record with the highest instantaneous evaporation rate.
    pub fn peak_rate(&self) -> Option<&StepRecord> {
        self.records
            .iter()
            .max_by(|a, b| a.evaporation_l_per_h.total_cmp(&b.evaporation_l_per_h))
    }

    /// Number of steps in which a brine discharge fired.
    pub fn discharge_count(&self) -> usize {
        self.records.iter().filter(|r| r.discharged).count()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
