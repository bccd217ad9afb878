//! Menu bar refresh after the density keys change.
//!
//! The soft step posts a notification on every known channel the menu bar
//! host may listen on. Delivery cannot be observed, so once the notifier has
//! been invoked the refresh is assumed to have worked. Only when the notifier
//! cannot be launched at all does the protocol restart the menu bar host by
//! name and let launchd bring it back. A failed restart is logged and
//! otherwise ignored: the preference is already persisted and applies at the
//! next login regardless.
//!
//! `notifyutil -p` posts Darwin notify(3) names, not
//! `NSDistributedNotificationCenter` notifications. Hosts that only observe
//! distributed notifications will not see these posts and will pick the change
//! up at the next restart or login instead. `[refresh] notify_command` is
//! invoked as `<command> -p <channel>`, so a helper that reposts each channel
//! through the distributed center can be swapped in without code changes.

use crate::config::schema::RefreshConfig;
use crate::process::CommandRunner;
use serde::Serialize;

/// Result of one refresh attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RefreshOutcome {
    /// Notifications were posted; their effect is not verified.
    SoftAssumed {
        /// Number of channels the notifier accepted.
        channels: usize,
    },
    /// The notifier was unavailable and the menu bar host was restarted.
    HardRestarted,
    /// The notifier was unavailable and the restart failed too.
    HardFailed {
        /// Why the restart failed.
        reason: String,
    },
}

/// Something that can refresh the menu bar after a preference change.
pub trait Refresh: Send {
    /// Attempts a refresh. Never fails; the outcome is informational.
    fn refresh(&self) -> RefreshOutcome;
}

/// Notification broadcast with a `killall` fallback.
#[derive(Debug, Clone)]
pub struct RefreshProtocol<R> {
    runner: R,
    config: RefreshConfig,
}

impl<R: CommandRunner> RefreshProtocol<R> {
    /// Creates a protocol issuing commands through `runner`.
    pub fn new(runner: R, config: RefreshConfig) -> Self {
        Self { runner, config }
    }

    /// Posts every channel independently, returning how many were posted.
    fn broadcast(&self) -> usize {
        let mut posted = 0;
        for channel in &self.config.channels {
            match self
                .runner
                .run(&self.config.notify_command, &["-p", channel.as_str()])
            {
                Ok(output) => {
                    if !output.success() {
                        tracing::debug!(
                            "notifier exited with {:?} for {}",
                            output.code,
                            channel
                        );
                    }
                    tracing::debug!("posted notification: {}", channel);
                    posted += 1;
                }
                Err(e) => {
                    tracing::debug!("could not post {}: {}", channel, e);
                }
            }
        }
        posted
    }

    fn restart_host(&self) -> RefreshOutcome {
        let process = self.config.process_name.as_str();
        match self.runner.run(&self.config.killall_command, &[process]) {
            Ok(output) if output.success() => {
                tracing::info!("restarted {}", process);
                RefreshOutcome::HardRestarted
            }
            Ok(output) => {
                let reason = match output.code {
                    Some(code) => format!("killall exited with status {}", code),
                    None => "killall terminated by signal".to_string(),
                };
                tracing::warn!("failed to restart {}: {}", process, reason);
                RefreshOutcome::HardFailed { reason }
            }
            Err(e) => {
                tracing::warn!("failed to restart {}: {}", process, e);
                RefreshOutcome::HardFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

impl<R: CommandRunner> Refresh for RefreshProtocol<R> {
    fn refresh(&self) -> RefreshOutcome {
        tracing::info!("attempting graceful menu bar refresh");
        let posted = self.broadcast();
        if posted > 0 {
            return RefreshOutcome::SoftAssumed { channels: posted };
        }
        tracing::warn!(
            "graceful refresh unavailable, falling back to killall {}",
            self.config.process_name
        );
        self.restart_host()
    }
}
