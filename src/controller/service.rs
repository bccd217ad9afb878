//! Async front end for [`PreferenceController`].
//!
//! A single tokio task owns the controller. Callers send commands over an
//! `mpsc` channel and await a `oneshot` reply; commands are handled one at a
//! time in arrival order, so a commit and a restore never interleave. Every
//! store or process call runs under `spawn_blocking` with the controller moved
//! onto the blocking pool and handed back when the call returns, which keeps
//! all mutation on the owning task.
//!
//! After each command the owning task publishes a [`Snapshot`] on a `watch`
//! channel for whatever presents the state.

use menubar_layout::DensityLevel;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};

use super::{CommitReport, ControllerError, Phase, PreferenceController, Snapshot};
use crate::prefs::PreferenceStore;
use crate::refresh::{Refresh, RefreshOutcome};

const COMMAND_BUFFER: usize = 16;

/// Errors returned by [`PreferenceService`] calls.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The owning task has exited and can no longer take commands.
    #[error("Preference controller has stopped")]
    Stopped,

    /// The controller rejected the command.
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

enum Command {
    Load(oneshot::Sender<Snapshot>),
    SetSpacing(DensityLevel, oneshot::Sender<Snapshot>),
    SetPadding(DensityLevel, oneshot::Sender<Snapshot>),
    MarkDirty(oneshot::Sender<Snapshot>),
    Commit(oneshot::Sender<Result<CommitReport, ControllerError>>),
    Restore(oneshot::Sender<Result<RefreshOutcome, ControllerError>>),
}

/// Cloneable handle to a controller running on its own task.
#[derive(Debug, Clone)]
pub struct PreferenceService {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl PreferenceService {
    /// Moves `controller` onto a new task and returns a handle to it.
    ///
    /// Must be called from within a tokio runtime. The task exits once every
    /// handle has been dropped.
    pub fn spawn<S, F>(controller: PreferenceController<S, F>) -> Self
    where
        S: PreferenceStore + 'static,
        F: Refresh + 'static,
    {
        let (commands, inbox) = mpsc::channel(COMMAND_BUFFER);
        let (publisher, snapshots) = watch::channel(controller.snapshot());
        tokio::spawn(run(controller, inbox, publisher));
        Self {
            commands,
            snapshots,
        }
    }

    /// Re-reads both levels from the store, discarding unsaved edits.
    ///
    /// The returned snapshot is the state right after the load, including
    /// whether the store answered.
    pub async fn load(&self) -> Result<Snapshot, ServiceError> {
        self.request(Command::Load).await
    }

    /// Sets the spacing level and marks the state dirty.
    pub async fn set_spacing(&self, level: DensityLevel) -> Result<Snapshot, ServiceError> {
        self.request(|reply| Command::SetSpacing(level, reply)).await
    }

    /// Sets the selection padding level and marks the state dirty.
    pub async fn set_padding(&self, level: DensityLevel) -> Result<Snapshot, ServiceError> {
        self.request(|reply| Command::SetPadding(level, reply)).await
    }

    /// Flags the current levels as unsaved.
    pub async fn mark_dirty(&self) -> Result<Snapshot, ServiceError> {
        self.request(Command::MarkDirty).await
    }

    /// Commits the current levels and refreshes the menu bar.
    pub async fn commit(&self) -> Result<CommitReport, ServiceError> {
        Ok(self.request(Command::Commit).await??)
    }

    /// Deletes both keys and refreshes the menu bar.
    pub async fn restore_defaults(&self) -> Result<RefreshOutcome, ServiceError> {
        Ok(self.request(Command::Restore).await??)
    }

    /// Returns the most recently published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        *self.snapshots.borrow()
    }

    /// Returns a receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, ServiceError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| ServiceError::Stopped)?;
        response.await.map_err(|_| ServiceError::Stopped)
    }
}

async fn run<S, F>(
    mut controller: PreferenceController<S, F>,
    mut inbox: mpsc::Receiver<Command>,
    publisher: watch::Sender<Snapshot>,
) where
    S: PreferenceStore + 'static,
    F: Refresh + 'static,
{
    while let Some(command) = inbox.recv().await {
        match command {
            Command::Load(reply) => {
                let Some((c, snapshot)) = blocking(controller, |c| {
                    c.load_current_settings();
                    c.snapshot()
                })
                .await
                else {
                    return;
                };
                controller = c;
                let _ = reply.send(snapshot);
            }
            Command::SetSpacing(level, reply) => {
                controller.set_spacing(level);
                let _ = reply.send(controller.snapshot());
            }
            Command::SetPadding(level, reply) => {
                controller.set_padding(level);
                let _ = reply.send(controller.snapshot());
            }
            Command::MarkDirty(reply) => {
                controller.mark_dirty();
                let _ = reply.send(controller.snapshot());
            }
            Command::Commit(reply) => {
                if controller.is_dirty() {
                    publisher.send_modify(|s| s.phase = Phase::Committing);
                }
                let Some((c, result)) = blocking(controller, |c| {
                    let levels = c.levels();
                    c.commit(levels)
                })
                .await
                else {
                    return;
                };
                controller = c;
                let _ = reply.send(result);
            }
            Command::Restore(reply) => {
                publisher.send_modify(|s| s.phase = Phase::RestoringDefaults);
                let Some((c, result)) = blocking(controller, |c| c.restore_defaults()).await
                else {
                    return;
                };
                controller = c;
                let _ = reply.send(result);
            }
        }
        publisher.send_replace(controller.snapshot());
    }
    tracing::debug!("preference service stopped: all handles dropped");
}

/// Runs `op` on the blocking pool and hands the controller back.
///
/// `None` means the blocking task panicked and the controller is gone.
async fn blocking<C, T>(
    mut controller: C,
    op: impl FnOnce(&mut C) -> T + Send + 'static,
) -> Option<(C, T)>
where
    C: Send + 'static,
    T: Send + 'static,
{
    let joined = tokio::task::spawn_blocking(move || {
        let output = op(&mut controller);
        (controller, output)
    })
    .await;
    match joined {
        Ok(pair) => Some(pair),
        Err(e) => {
            tracing::error!("preference controller task failed: {}", e);
            None
        }
    }
}
