//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, SnapshotRow, TurnRow};

/// A sink for recorded rows.
///
/// Errors are surfaced per call; [`RecordingObserver`][crate::RecordingObserver]
/// stores the first one for [`take_error`][crate::RecordingObserver::take_error].
pub trait OutputWriter {
    /// Write one snapshot row.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    /// Write one conversation turn.
    fn write_turn(&mut self, row: &TurnRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
