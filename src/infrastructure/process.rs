use crate::domain::{
    launcher::ProcessLauncher,
    models::{LaunchOutcome, LaunchSpec},
};
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tokio::sync::oneshot;

/// Spawns launches as tokio child processes with detached stdio so nothing
/// the child prints can land on the TUI.
#[derive(Debug, Clone, Default)]
pub struct TokioLauncher {
    before: Option<String>,
    after: Option<String>,
}

impl TokioLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `before` is chained in front of every shell launch with `&&`; `after`
    /// runs detached once a shell launch has exited.
    #[must_use]
    pub fn with_hooks(before: Option<String>, after: Option<String>) -> Self {
        Self { before, after }
    }

    fn build(&self, spec: &LaunchSpec) -> Command {
        let mut cmd = match spec {
            LaunchSpec::Shell(script) => {
                let script = match &self.before {
                    Some(before) => format!("{before} && {script}"),
                    None => script.clone(),
                };
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(script);
                cmd
            }
            LaunchSpec::Exec { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        };
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        // The launch leads its own process group so terminate reaches
        // everything the shell forked.
        #[cfg(unix)]
        cmd.process_group(0);
        cmd
    }

    fn run_after_hook(&self) {
        if let Some(after) = self.after.clone() {
            tokio::spawn(async move {
                let result = Command::new("sh")
                    .arg("-c")
                    .arg(&after)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .await;
                if let Err(e) = result {
                    tracing::debug!("after-launch hook failed: {e}");
                }
            });
        }
    }
}

/// Kills the child and every process in its group.
#[cfg(unix)]
fn kill_tree(child: &mut Child) -> std::io::Result<()> {
    let Some(pid) = child.id() else {
        return Ok(());
    };
    let pgid = libc::pid_t::try_from(pid)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    // SAFETY: killpg takes plain integers; pgid is a group this launcher created.
    if unsafe { libc::killpg(pgid, libc::SIGKILL) } == 0 {
        return Ok(());
    }
    tracing::debug!(pgid, "killpg failed: {}", std::io::Error::last_os_error());
    child.start_kill()
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) -> std::io::Result<()> {
    child.start_kill()
}

fn outcome_from_status(status: std::io::Result<ExitStatus>) -> LaunchOutcome {
    match status {
        Ok(status) => match status.code() {
            Some(code) => LaunchOutcome::Exited(code),
            None => LaunchOutcome::Signalled,
        },
        Err(e) => LaunchOutcome::SpawnFailed(format!("lost track of child: {e}")),
    }
}

#[async_trait]
impl ProcessLauncher for TokioLauncher {
    async fn run(&self, spec: LaunchSpec, mut terminate: oneshot::Receiver<()>) -> LaunchOutcome {
        let mut child = match self.build(&spec).spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!(command = %spec, "spawn failed: {e}");
                return LaunchOutcome::SpawnFailed(e.to_string());
            }
        };
        tracing::info!(command = %spec, pid = ?child.id(), "launched");

        let outcome = tokio::select! {
            status = child.wait() => outcome_from_status(status),
            _ = &mut terminate => {
                if let Err(e) = kill_tree(&mut child) {
                    tracing::debug!(command = %spec, "kill failed: {e}");
                }
                // Reap so the shutdown path knows the child is gone.
                let _ = child.wait().await;
                LaunchOutcome::Terminated
            }
        };

        if matches!(spec, LaunchSpec::Shell(_)) && outcome != LaunchOutcome::Terminated {
            self.run_after_hook();
        }

        tracing::info!(command = %spec, "finished: {}", outcome.describe());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_exit_code_is_reported() {
        let launcher = TokioLauncher::new();
        let (_tx, rx) = oneshot::channel();
        let outcome = launcher.run(LaunchSpec::Shell("exit 3".into()), rx).await;
        assert_eq!(outcome, LaunchOutcome::Exited(3));
    }

    #[tokio::test]
    async fn test_before_hook_is_chained() {
        let launcher = TokioLauncher::with_hooks(Some("false".into()), None);
        let (_tx, rx) = oneshot::channel();
        let outcome = launcher.run(LaunchSpec::Shell("true".into()), rx).await;
        assert_eq!(outcome, LaunchOutcome::Exited(1));
    }

    #[tokio::test]
    async fn test_missing_program_fails_to_spawn() {
        let launcher = TokioLauncher::new();
        let (_tx, rx) = oneshot::channel();
        let spec = LaunchSpec::Exec {
            program: "/definitely/not/a/real/program".into(),
            args: vec![],
        };
        let outcome = launcher.run(spec, rx).await;
        assert!(matches!(outcome, LaunchOutcome::SpawnFailed(_)));
    }

    #[tokio::test]
    async fn test_terminate_kills_child() {
        let launcher = TokioLauncher::new();
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            launcher
                .run(
                    LaunchSpec::Exec {
                        program: "sleep".into(),
                        args: vec!["30".into()],
                    },
                    rx,
                )
                .await
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(()).unwrap();

        let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("launch did not stop")
            .unwrap();
        assert_eq!(outcome, LaunchOutcome::Terminated);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_terminate_reaches_forked_descendants() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("still-running");
        // The before hook forces a compound script, so sh forks instead of exec'ing.
        let launcher = TokioLauncher::with_hooks(Some("true".into()), None);
        let script = format!("sh -c 'sleep 1 && touch {}'", marker.display());

        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move { launcher.run(LaunchSpec::Shell(script), rx).await });

        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send(()).unwrap();
        let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("launch did not stop")
            .unwrap();
        assert_eq!(outcome, LaunchOutcome::Terminated);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(!marker.exists(), "a forked child outlived terminate");
    }
}
