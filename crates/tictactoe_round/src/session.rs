//! Async driver owning one [`RoundController`].
//!
//! A single task applies every tap and performs every reset, so the
//! controller is never touched from two places at once and needs no lock.
//! While a round is resolved the task holds one pending [`Sleep`]; the reset
//! runs only if that sleep completes. Shutting the session down drops the
//! sleep, leaving the last round resolved and firing nothing.

use crate::controller::{Lifecycle, RoundController, TapOutcome};
use crate::observer::RoundObserver;
use crate::settings::RoundSettings;
use crate::GameState;
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Sleep, sleep};
use tracing::{debug, error, info, instrument, warn};

/// Board and lifecycle at a point in the session's command stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current board.
    pub state: GameState,
    /// Whether taps are being applied.
    pub lifecycle: Lifecycle,
}

#[derive(Debug)]
enum Command {
    Tap { row: usize, col: usize },
    Snapshot(oneshot::Sender<Snapshot>),
    Shutdown,
}

/// Entry point for running rounds on a background task.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundSession;

impl RoundSession {
    /// Spawns a session task on the current tokio runtime.
    #[instrument(skip(observer))]
    pub fn spawn<O>(observer: O, settings: RoundSettings) -> SessionHandle<O>
    where
        O: RoundObserver + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = RoundController::new(observer);
        let task = tokio::spawn(run(controller, rx, *settings.reset_delay()));
        info!("Round session started");
        SessionHandle {
            commands: tx,
            task: Some(task),
        }
    }
}

/// Handle to a running session.
///
/// Dropping the handle aborts the task; any pending reset is discarded.
#[derive(Debug)]
pub struct SessionHandle<O> {
    commands: mpsc::UnboundedSender<Command>,
    task: Option<JoinHandle<RoundController<O>>>,
}

impl<O> SessionHandle<O> {
    /// Queues a tap on `(row, col)`. Never blocks.
    ///
    /// Returns `false` if the session has stopped.
    #[instrument(skip(self))]
    pub fn tap(&self, row: usize, col: usize) -> bool {
        self.send(Command::Tap { row, col })
    }

    /// Board and lifecycle after every previously queued tap has been handled.
    ///
    /// Returns `None` if the session has stopped.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Option<Snapshot> {
        let (tx, rx) = oneshot::channel();
        if !self.send(Command::Snapshot(tx)) {
            return None;
        }
        rx.await.ok()
    }

    /// Stops the session and returns its controller.
    ///
    /// A pending reset is cancelled without touching the board. Safe to call
    /// more than once, and after the task has already finished; later calls
    /// return `None`.
    #[instrument(skip(self))]
    pub async fn shutdown(&mut self) -> Option<RoundController<O>> {
        let task = self.task.take()?;
        // A closed channel means the task is already on its way out.
        let _ = self.commands.send(Command::Shutdown);
        match task.await {
            Ok(controller) => {
                info!(lifecycle = ?controller.lifecycle(), "Round session stopped");
                Some(controller)
            }
            Err(e) => {
                error!(error = %e, "Round session task failed");
                None
            }
        }
    }

    fn send(&self, command: Command) -> bool {
        match self.commands.send(command) {
            Ok(()) => true,
            Err(e) => {
                warn!(command = ?e.0, "Round session is not running");
                false
            }
        }
    }
}

impl<O> Drop for SessionHandle<O> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Aborting round session task");
            task.abort();
        }
    }
}

async fn run<O: RoundObserver>(
    mut controller: RoundController<O>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    reset_delay: Duration,
) -> RoundController<O> {
    let mut pending_reset: Option<Pin<Box<Sleep>>> = None;

    loop {
        tokio::select! {
            // A due reset runs before any tap queued at the same instant.
            biased;

            () = wait_for_reset(&mut pending_reset) => {
                pending_reset = None;
                controller.reset();
            }
            command = commands.recv() => match command {
                Some(Command::Tap { row, col }) => {
                    if let TapOutcome::Resolved(result) = controller.on_cell_tapped(row, col) {
                        debug!(%result, delay_ms = reset_delay.as_millis() as u64, "Reset scheduled");
                        pending_reset = Some(Box::pin(sleep(reset_delay)));
                    }
                }
                Some(Command::Snapshot(reply)) => {
                    let snapshot = Snapshot {
                        state: *controller.state(),
                        lifecycle: controller.lifecycle(),
                    };
                    // The requester may have given up waiting.
                    let _ = reply.send(snapshot);
                }
                Some(Command::Shutdown) | None => {
                    if pending_reset.take().is_some() {
                        info!("Pending reset cancelled");
                    }
                    break;
                }
            },
        }
    }

    controller
}

async fn wait_for_reset(pending: &mut Option<Pin<Box<Sleep>>>) {
    match pending {
        Some(delay) => delay.as_mut().await,
        None => std::future::pending().await,
    }
}
