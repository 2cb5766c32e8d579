//! Batch normalization.
//!
//! Runs the [`Normalizer`] over every raw record of a source document in
//! order, single-threaded, and tallies the outcome of each record.

use borderpost_model::{NormalizedCheckpoint, RawCheckpoint};

use crate::normalizer::{Admission, Normalizer};

/// Per-run counts of record outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Raw records evaluated.
    pub evaluated: usize,
    /// Records admitted to the output.
    pub admitted: usize,
    /// Records dropped by the checkpoint-type filter.
    pub wrong_type: usize,
    /// Records dropped by the `condition` gate.
    pub closed: usize,
    /// Admitted records without a local-language title.
    pub unnamed: usize,
    /// Admitted records whose status label was not recognised.
    pub unknown_status: usize,
}

impl NormalizeReport {
    /// Records that were evaluated but not emitted.
    pub fn rejected(&self) -> usize {
        self.wrong_type + self.closed
    }

    /// Admitted records carrying a data-quality warning.
    pub fn warnings(&self) -> usize {
        self.unnamed + self.unknown_status
    }
}

/// Admitted records in input order plus the run report.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub records: Vec<NormalizedCheckpoint>,
    pub report: NormalizeReport,
}

/// Normalize every record of `source`, keeping input order.
pub fn execute_normalization(source: &[RawCheckpoint], normalizer: &Normalizer) -> NormalizedBatch {
    let mut batch = NormalizedBatch {
        records: Vec::with_capacity(source.len()),
        report: NormalizeReport::default(),
    };

    for (idx, raw) in source.iter().enumerate() {
        batch.report.evaluated += 1;
        match normalizer.evaluate(raw) {
            Admission::Admitted(record) => {
                if record.name_ru.is_none() {
                    tracing::warn!(index = idx, id = %raw.id, "Admitted checkpoint has no local title");
                    batch.report.unnamed += 1;
                }
                if record.status.is_none() {
                    tracing::debug!(
                        index = idx,
                        id = %raw.id,
                        status = raw.status_en().unwrap_or("<missing>"),
                        "Unrecognised status label"
                    );
                    batch.report.unknown_status += 1;
                }
                batch.report.admitted += 1;
                batch.records.push(*record);
            }
            Admission::WrongType => {
                tracing::trace!(
                    index = idx,
                    checkpoint_type = raw.checkpoint_type_en().unwrap_or("<missing>"),
                    "Skipping checkpoint of another type"
                );
                batch.report.wrong_type += 1;
            }
            Admission::Closed => {
                tracing::debug!(index = idx, id = %raw.id, "Skipping checkpoint with closed gate");
                batch.report.closed += 1;
            }
        }
    }

    tracing::info!(
        evaluated = batch.report.evaluated,
        admitted = batch.report.admitted,
        wrong_type = batch.report.wrong_type,
        closed = batch.report.closed,
        "Normalized checkpoints"
    );

    batch
}
