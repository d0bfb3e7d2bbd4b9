//! `RecordingObserver<W>`: bridges `AgentObserver` to an `OutputWriter`.

use bt_agent::{AgentObserver, ConversationTurn, Snapshot};
use bt_core::Tick;

use crate::row::{SnapshotRow, TurnRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`AgentObserver`] that writes every snapshot and conversation turn to
/// any [`OutputWriter`].
///
/// Observer callbacks have no return value, so the first write error is
/// stored and later writes keep going.  Check it with
/// [`take_error`][Self::take_error] once the run is over.
pub struct RecordingObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RecordingObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush the writer.  Call once after the last update.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> AgentObserver for RecordingObserver<W> {
    fn on_turn(&mut self, _tick: Tick, turn: &ConversationTurn) {
        let result = self.writer.write_turn(&TurnRow::from(turn));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) {
        let result = self.writer.write_snapshot(&SnapshotRow::from_snapshot(tick, snapshot));
        self.store_err(result);
    }
}
