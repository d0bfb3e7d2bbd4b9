//! `bt-output`: recording of teller-agent runs.
//!
//! [`CsvWriter`] creates two files in the output directory:
//!
//! | File                  | Columns                                               |
//! |-----------------------|-------------------------------------------------------|
//! | `agent_snapshots.csv` | `tick,x,y,z,yaw,animation,state,dialogue`             |
//! | `conversation.csv`    | `tick,intent,customer_text,agent_text`                |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`RecordingObserver`], which implements `bt_agent::AgentObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bt_output::{CsvWriter, RecordingObserver};
//!
//! let mut obs = RecordingObserver::new(CsvWriter::new(Path::new("./output"))?);
//! for event in events {
//!     agent.update_observed(&event, &mut obs);
//! }
//! obs.finish();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use row::{SnapshotRow, TurnRow};
pub use writer::OutputWriter;
