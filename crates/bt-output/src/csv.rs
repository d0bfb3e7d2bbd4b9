//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `conversation.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SnapshotRow, TurnRow};

pub const SNAPSHOT_FILE: &str = "agent_snapshots.csv";
pub const TURN_FILE:     &str = "conversation.csv";

/// Writes a run to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    turns:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write the header rows.
    /// Existing files are truncated.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["tick", "x", "y", "z", "yaw", "animation", "state", "dialogue"])?;

        let mut turns = Writer::from_path(dir.join(TURN_FILE))?;
        turns.write_record(["tick", "intent", "customer_text", "agent_text"])?;

        Ok(Self { snapshots, turns, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.snapshots.write_record([
            row.tick.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.z.to_string(),
            row.yaw.to_string(),
            row.animation.to_string(),
            row.state.to_string(),
            row.dialogue.clone(),
        ])?;
        Ok(())
    }

    fn write_turn(&mut self, row: &TurnRow) -> OutputResult<()> {
        self.turns.write_record([
            row.tick.to_string().as_str(),
            row.intent.as_str(),
            row.customer_text.as_str(),
            row.agent_text.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.turns.flush()?;
        Ok(())
    }
}
