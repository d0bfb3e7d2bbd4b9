//! Integration tests for bt-output.

#[cfg(test)]
mod csv_tests {
    use bt_agent::AgentState;
    use bt_core::Animation;
    use bt_dialogue::Intent;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, TURN_FILE};
    use crate::row::{SnapshotRow, TurnRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(tick: u64) -> SnapshotRow {
        SnapshotRow {
            tick,
            x:         1.5,
            y:         0.0,
            z:         -2.0,
            yaw:       0.25,
            animation: Animation::Talking,
            state:     AgentState::Greeting,
            dialogue:  "안녕하세요, 무엇을 도와드릴까요?".into(),
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOT_FILE).exists());
        assert!(dir.path().join(TURN_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("today");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SNAPSHOT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join(SNAPSHOT_FILE)),
            ["tick", "x", "y", "z", "yaw", "animation", "state", "dialogue"]
        );
        assert_eq!(
            headers(&dir.path().join(TURN_FILE)),
            ["tick", "intent", "customer_text", "agent_text"]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&snap_row(4)).unwrap();
        w.write_snapshot(&snap_row(5)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "1.5");
        assert_eq!(&rows[0][3], "-2");
        assert_eq!(&rows[0][5], "talking");
        assert_eq!(&rows[0][6], "greeting");
        assert_eq!(&rows[0][7], "안녕하세요, 무엇을 도와드릴까요?");
        assert_eq!(&rows[1][0], "5");
    }

    #[test]
    fn csv_turn_quotes_commas() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_turn(&TurnRow {
            tick:          7,
            intent:        Intent::AccountOpening,
            customer_text: "통장, 하나 만들래요".into(),
            agent_text:    "네, 도와드리겠습니다.".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TURN_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "account_opening");
        assert_eq!(&rows[0][2], "통장, 하나 만들래요");
        assert_eq!(&rows[0][3], "네, 도와드리겠습니다.");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use bt_agent::{AgentBuilder, AgentObserver, CustomerEvent};
    use bt_core::{AgentConfig, AgentRng, Position, Tick};
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, TURN_FILE};
    use crate::observer::RecordingObserver;
    use crate::row::{SnapshotRow, TurnRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Keeps rows in memory and fails every write after `fail_after`.
    #[derive(Default)]
    struct MemWriter {
        snapshots:  Vec<SnapshotRow>,
        turns:      Vec<TurnRow>,
        fail_after: Option<usize>,
        finished:   u32,
    }

    impl MemWriter {
        fn check(&self) -> OutputResult<()> {
            match self.fail_after {
                Some(n) if self.snapshots.len() + self.turns.len() >= n => {
                    Err(OutputError::Io(io::Error::other("disk full")))
                }
                _ => Ok(()),
            }
        }
    }

    impl OutputWriter for MemWriter {
        fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
            self.check()?;
            self.snapshots.push(row.clone());
            Ok(())
        }
        fn write_turn(&mut self, row: &TurnRow) -> OutputResult<()> {
            self.check()?;
            self.turns.push(row.clone());
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn script() -> Vec<CustomerEvent> {
        vec![
            CustomerEvent::at(Position::new(8.0, 0.0, 0.0)),
            CustomerEvent::at(Position::new(2.0, 0.0, 0.0)),
            CustomerEvent::say("입금하려고요"),
            CustomerEvent::say("감사합니다"),
            CustomerEvent::at(Position::new(9.0, 0.0, 9.0)),
        ]
    }

    #[test]
    fn records_every_update_and_turn() {
        let mut agent = AgentBuilder::new(AgentConfig::default())
            .rng(AgentRng::new(3))
            .build()
            .unwrap();
        let mut obs = RecordingObserver::new(MemWriter::default());
        for e in script() {
            agent.update_observed(&e, &mut obs);
        }
        obs.finish();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.snapshots.len(), 5);
        assert_eq!(w.turns.len(), 2);
        assert_eq!(w.finished, 1);
        let ticks: Vec<u64> = w.snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [0, 1, 2, 3, 4]);
        assert_eq!(w.turns[0].tick, 2);
        assert_eq!(w.turns[1].agent_text, w.snapshots[3].dialogue);
    }

    #[test]
    fn keeps_first_error_and_continues() {
        let mut obs = RecordingObserver::new(MemWriter { fail_after: Some(1), ..MemWriter::default() });
        let mut agent = AgentBuilder::new(AgentConfig::default())
            .rng(AgentRng::new(3))
            .build()
            .unwrap();
        for e in script() {
            agent.update_observed(&e, &mut obs);
        }
        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().snapshots.len(), 1);
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut agent = AgentBuilder::new(AgentConfig::default())
            .rng(AgentRng::new(11))
            .build()
            .unwrap();
        let mut obs = RecordingObserver::new(CsvWriter::new(dir.path()).unwrap());
        for e in script() {
            agent.update_observed(&e, &mut obs);
        }
        obs.finish();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[1][6], "greeting");
        assert_eq!(&rows[2][6], "interacting");

        let mut rdr = csv::Reader::from_path(dir.path().join(TURN_FILE)).unwrap();
        let intents: Vec<String> = rdr.records().map(|r| r.unwrap()[1].to_owned()).collect();
        assert_eq!(intents, ["deposit", "thanks"]);
    }

    #[test]
    fn state_changes_are_not_recorded_separately() {
        let mut obs = RecordingObserver::new(MemWriter::default());
        obs.on_state_change(Tick(0), bt_agent::AgentState::Idle, bt_agent::AgentState::Greeting);
        assert!(obs.into_writer().snapshots.is_empty());
    }
}
