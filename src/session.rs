//! Logout request, the slowest but most reliable way to apply new densities.

use crate::process::CommandRunner;

const LOGOUT_SCRIPT: &str = "tell application \"System Events\" to log out";

/// Asks the session to log out through `osascript`.
///
/// Fire-and-forget: the result is logged and never returned. Callers are
/// expected to have obtained an explicit confirmation first.
pub fn request_logout<R: CommandRunner>(runner: &R, osascript_command: &str) {
    tracing::info!("requesting user logout to apply changes");
    match runner.run(osascript_command, &["-e", LOGOUT_SCRIPT]) {
        Ok(output) if output.success() => tracing::debug!("logout requested"),
        Ok(output) => tracing::warn!("logout request exited with {:?}", output.code),
        Err(e) => tracing::warn!("could not request logout: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::{Reply, ScriptedRunner};

    #[test]
    fn sends_system_events_logout() {
        let runner = ScriptedRunner::succeeding();
        request_logout(&runner, "/usr/bin/osascript");
        assert_eq!(
            runner.calls(),
            vec![vec![
                "/usr/bin/osascript",
                "-e",
                "tell application \"System Events\" to log out"
            ]]
        );
    }

    #[test]
    fn failures_are_swallowed() {
        let runner = ScriptedRunner::unavailable();
        request_logout(&runner, "/usr/bin/osascript");

        let runner = ScriptedRunner::succeeding();
        runner.push(Reply::Exit(1, ""));
        request_logout(&runner, "/usr/bin/osascript");
        assert_eq!(runner.calls().len(), 1);
    }
}
