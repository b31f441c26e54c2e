//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use roam_behavior::Visitor;
use roam_core::math::flat_len;
use roam_core::{SimConfig, Tick};
use roam_motor::{BodyPose, PointBody};
use roam_sim::SimObserver;

use crate::row::{TickSummaryRow, VisitorSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes visitor snapshots and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    tick_hz:    u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick-to-seconds conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_hz:    config.tick_hz,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn sim_secs(&self, tick: Tick) -> f64 {
        tick.0 as f64 / self.tick_hz as f64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, transitions: usize) {
        let row = TickSummaryRow {
            tick:        tick.0,
            sim_secs:    self.sim_secs(tick),
            transitions: transitions as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, visitors: &[Visitor], bodies: &[PointBody]) {
        let rows: Vec<VisitorSnapshotRow> = visitors
            .iter()
            .zip(bodies)
            .map(|(visitor, body)| VisitorSnapshotRow {
                agent_id: visitor.id().0,
                tick:     tick.0,
                x:        body.position.x,
                z:        body.position.z,
                state:    visitor.state().label(),
                speed:    flat_len(body.horizontal_velocity()),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
