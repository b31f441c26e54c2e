//! Integration tests for roam-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{TickSummaryRow, VisitorSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> VisitorSnapshotRow {
        VisitorSnapshotRow {
            agent_id,
            tick,
            x:     agent_id as f32,
            z:     -1.0,
            state: "walking",
            speed: 1.25,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            sim_secs:    tick as f64 / 100.0,
            transitions: tick,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("visitor_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("visitor_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "x", "z", "state", "speed"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "sim_secs", "transitions"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("visitor_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][4], "walking");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");    // tick
        assert_eq!(&read_rows[0][1], "0.03"); // 3 ticks at 100 Hz
        assert_eq!(&read_rows[0][2], "3");    // transitions
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use glam::Vec3;
        use roam_behavior::InterestPoint;
        use roam_core::SimConfig;
        use roam_rooms::{DoorwayNav, RoomGraphBuilder};
        use roam_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let mut b = RoomGraphBuilder::new();
        b.add_room(-10.0, 10.0, -10.0, 10.0);
        let nav = DoorwayNav::new(b.build().unwrap());

        let config = SimConfig {
            tick_hz:               100,
            total_ticks:           600,
            seed:                  1,
            output_interval_ticks: 200,
        };

        let mut sim = SimBuilder::new(config.clone(), nav)
            .points(vec![InterestPoint::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X, 1.0)])
            .spawn(Vec3::new(-3.0, 0.0, 0.0))
            .spawn(Vec3::new(-3.0, 0.0, 3.0))
            .spawn(Vec3::new(3.0, 0.0, -3.0))
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 200 → snapshots at ticks 0, 200, 400
        // (3 ticks × 3 visitors = 9 rows).
        let mut rdr = csv::Reader::from_path(dir.path().join("visitor_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(
            rows.len(),
            9,
            "expected 3 ticks × 3 visitors = 9 snapshot rows, got {}",
            rows.len()
        );

        // Every state cell must be one of the six labels.
        for row in &rows {
            assert!(matches!(
                &row[4],
                "idle" | "walking" | "observing" | "fleeing" | "knocked_out" | "grabbed"
            ));
        }

        // One summary row per tick.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 600);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{TickSummaryRow, VisitorSnapshotRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            VisitorSnapshotRow { agent_id: 0, tick: 1, x: 0.5, z: 0.0, state: "idle", speed: 0.0 },
            VisitorSnapshotRow { agent_id: 1, tick: 1, x: 1.5, z: 2.0, state: "walking", speed: 1.3 },
            VisitorSnapshotRow { agent_id: 2, tick: 1, x: -4.0, z: 6.0, state: "fleeing", speed: 1.4 },
        ];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM visitor_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_state_stored_as_text() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[VisitorSnapshotRow {
            agent_id: 0, tick: 0, x: 0.0, z: 0.0, state: "knocked_out", speed: 0.0,
        }])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let state: String = conn
            .query_row(
                "SELECT state FROM visitor_snapshots WHERE agent_id = 0",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(state, "knocked_out");
    }

    #[test]
    fn sqlite_tick_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick: 7,
            sim_secs: 0.07,
            transitions: 2,
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (tick, secs, transitions): (i64, f64, i64) = conn
            .query_row(
                "SELECT tick, sim_secs, transitions FROM tick_summaries WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
            )
            .unwrap();
        assert_eq!(tick, 7);
        assert!((secs - 0.07).abs() < 1e-9);
        assert_eq!(transitions, 2);
    }
}
