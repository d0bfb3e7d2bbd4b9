//! Single-writer worker thread for shells that accept concurrent callers.
//!
//! The controller mutates its fields without locks, so all updates for one
//! agent must be serialized.  `AgentWorker` moves the controller onto its own
//! thread and feeds it from a channel: any number of [`AgentHandle`]s may
//! send events, and each gets back the snapshot for its own event.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::{AgentController, AgentError, AgentObserver, AgentResult, CustomerEvent, NoopObserver, Snapshot};

enum Request {
    Update(CustomerEvent, Sender<Snapshot>),
    Shutdown,
}

// ── AgentHandle ───────────────────────────────────────────────────────────────

/// Cloneable sender side of an [`AgentWorker`].
#[derive(Clone)]
pub struct AgentHandle {
    tx: Sender<Request>,
}

impl AgentHandle {
    /// Queue `event` and wait for its snapshot.
    ///
    /// Fails with [`AgentError::WorkerGone`] once the worker has stopped.
    pub fn update(&self, event: CustomerEvent) -> AgentResult<Snapshot> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.tx
            .send(Request::Update(event, reply_tx))
            .map_err(|_| AgentError::WorkerGone)?;
        reply_rx.recv().map_err(|_| AgentError::WorkerGone)
    }
}

// ── AgentWorker ───────────────────────────────────────────────────────────────

/// Owns an [`AgentController`] on a dedicated thread.
pub struct AgentWorker<O: AgentObserver + Send + 'static = NoopObserver> {
    tx:   Sender<Request>,
    join: JoinHandle<(AgentController, O)>,
}

impl AgentWorker<NoopObserver> {
    /// Start a worker with no observer.
    pub fn spawn(controller: AgentController) -> AgentResult<Self> {
        Self::spawn_with_observer(controller, NoopObserver)
    }
}

impl<O: AgentObserver + Send + 'static> AgentWorker<O> {
    /// Start a worker that reports every update to `observer`.
    pub fn spawn_with_observer(controller: AgentController, observer: O) -> AgentResult<Self> {
        let (tx, rx) = mpsc::channel();
        let join = thread::Builder::new()
            .name("teller-agent".into())
            .spawn(move || run(controller, observer, rx))
            .map_err(AgentError::Spawn)?;
        Ok(Self { tx, join })
    }

    /// A new handle for submitting events.
    pub fn handle(&self) -> AgentHandle {
        AgentHandle { tx: self.tx.clone() }
    }

    /// Stop accepting events and return the controller and observer.
    ///
    /// Events already queued ahead of the shutdown request are still
    /// processed.  Outstanding handles fail with `WorkerGone` afterwards.
    pub fn shutdown(self) -> AgentResult<(AgentController, O)> {
        // A send error means the thread already exited; join reports why.
        let _ = self.tx.send(Request::Shutdown);
        self.join.join().map_err(|_| AgentError::WorkerPanicked)
    }
}

fn run<O: AgentObserver>(
    mut controller: AgentController,
    mut observer:   O,
    rx:             Receiver<Request>,
) -> (AgentController, O) {
    while let Ok(request) = rx.recv() {
        match request {
            Request::Update(event, reply) => {
                let snapshot = controller.update_observed(&event, &mut observer);
                if reply.send(snapshot).is_err() {
                    tracing::debug!(tick = controller.tick().0, "caller dropped before reply");
                }
            }
            Request::Shutdown => break,
        }
    }
    (controller, observer)
}
