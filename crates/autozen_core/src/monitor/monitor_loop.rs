//! Monitoring loop worker and lifecycle handle.
//!
//! # Responsibility
//! - Run evaluate-and-apply cycles on a dedicated background thread.
//! - Expose start/stop/recompute controls to the host.
//!
//! # Invariants
//! - The worker owns its own database connection; the editor side uses a
//!   separate connection and SQLite serializes access between them.
//! - `current` mode lives inside the worker thread; every change to it
//!   flows through `ModeController::apply`.
//! - Stopping drops the provider subscription before joining the worker,
//!   so no callback outlives the loop.

use super::provider::{PositionProvider, SampleSink, Subscription};
use super::{MonitorConfig, MonitorError};
use crate::geofence::evaluate::evaluate;
use crate::model::position::Position;
use crate::repo::zone_repo::{SqliteZoneRepository, ZoneRepository};
use crate::service::mode_controller::{ModeController, ModeSetter, SetModeError};
use log::{error, info};
use rusqlite::Connection;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Lifecycle state of the monitoring loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Starting,
    Running,
}

const STATE_STOPPED: u8 = 0;
const STATE_STARTING: u8 = 1;
const STATE_RUNNING: u8 = 2;

/// Events consumed by the worker, in arrival order.
pub(crate) enum LoopEvent {
    Sample(Position),
    Recompute,
    Stop,
}

/// Control handle for a started monitoring loop.
///
/// Dropping the handle stops the loop.
pub struct MonitorHandle {
    tx: Sender<LoopEvent>,
    state: Arc<AtomicU8>,
    subscription: Option<Box<dyn Subscription>>,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for MonitorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorHandle")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl MonitorHandle {
    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        match self.state.load(Ordering::SeqCst) {
            STATE_STARTING => LoopState::Starting,
            STATE_RUNNING => LoopState::Running,
            _ => LoopState::Stopped,
        }
    }

    /// Re-evaluates the last seen sample immediately.
    ///
    /// The editor fires this after zone edits so the device mode reflects
    /// the change without waiting for the next sample. No-op while no
    /// sample has arrived yet, or after the loop stopped.
    pub fn recompute_now(&self) {
        let _ = self.tx.send(LoopEvent::Recompute);
    }

    /// Stops the loop: cancels the position subscription, signals the
    /// worker, and waits for it to finish. Idempotent.
    pub fn stop(&mut self) {
        // Cancel the subscription first so no sample can arrive after the
        // worker drains its channel.
        self.subscription = None;
        let _ = self.tx.send(LoopEvent::Stop);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts the monitoring loop.
///
/// Registers the position subscription first; if the provider denies it
/// (missing location access) the loop never leaves `Stopped` and the error
/// is returned. The worker thread takes ownership of `conn` and reads the
/// zone set fresh on every cycle.
pub fn start<P, S>(
    config: MonitorConfig,
    provider: &mut P,
    setter: S,
    conn: Connection,
) -> Result<MonitorHandle, MonitorError>
where
    P: PositionProvider + ?Sized,
    S: ModeSetter + Send + 'static,
{
    let state = Arc::new(AtomicU8::new(STATE_STARTING));
    info!(
        "event=monitor_start module=monitor status=start min_interval_ms={}",
        config.min_update_interval.as_millis()
    );

    let (tx, rx) = channel();
    let subscription = match provider.subscribe(&config, SampleSink::new(tx.clone())) {
        Ok(subscription) => subscription,
        Err(err) => {
            state.store(STATE_STOPPED, Ordering::SeqCst);
            error!("event=monitor_start module=monitor status=error error={err}");
            return Err(err.into());
        }
    };

    let worker_state = Arc::clone(&state);
    let worker = std::thread::spawn(move || run_loop(rx, conn, setter, worker_state));

    Ok(MonitorHandle {
        tx,
        state,
        subscription: Some(subscription),
        worker: Some(worker),
    })
}

fn run_loop<S: ModeSetter>(
    rx: Receiver<LoopEvent>,
    conn: Connection,
    setter: S,
    state: Arc<AtomicU8>,
) {
    let mut controller = ModeController::new(setter);
    let mut last_sample: Option<Position> = None;

    state.store(STATE_RUNNING, Ordering::SeqCst);
    info!("event=monitor_start module=monitor status=ok");

    while let Ok(event) = rx.recv() {
        let position = match event {
            LoopEvent::Sample(sample) => {
                last_sample = Some(sample);
                sample
            }
            LoopEvent::Recompute => match last_sample {
                Some(sample) => sample,
                None => continue,
            },
            LoopEvent::Stop => break,
        };

        let repo = SqliteZoneRepository::new(&conn);
        let zones = match repo.list_zones() {
            Ok(zones) => zones,
            Err(err) => {
                // One failed read is not fatal; wait for the next sample.
                error!("event=cycle_skip module=monitor status=error error={err}");
                continue;
            }
        };

        let decision = evaluate(&position, &zones);
        if let Err(err @ SetModeError::PermissionDenied) = controller.apply(&decision) {
            error!("event=monitor_halt module=monitor status=error error={err}");
            break;
        }
    }

    state.store(STATE_STOPPED, Ordering::SeqCst);
    info!("event=monitor_stop module=monitor status=ok");
}
