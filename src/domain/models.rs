use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One launchable item on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "name")]
    pub display_name: String,
    pub command: String,
    #[serde(rename = "icon", default)]
    pub icon_ref: String,
}

impl CatalogEntry {
    pub fn new(
        display_name: impl Into<String>,
        command: impl Into<String>,
        icon_ref: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            command: command.into(),
            icon_ref: icon_ref.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LaunchId(pub u64);

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchSpec {
    /// Run through `sh -c`.
    Shell(String),
    /// Run directly, no shell involved.
    Exec { program: String, args: Vec<String> },
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchSpec::Shell(cmd) => write!(f, "{cmd}"),
            LaunchSpec::Exec { program, args } => {
                write!(f, "{program}")?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Exited(i32),
    /// Killed by a signal we did not send.
    Signalled,
    /// Stopped on request during shutdown.
    Terminated,
    SpawnFailed(String),
}

impl LaunchOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        match self {
            LaunchOutcome::Exited(code) => *code != 0,
            LaunchOutcome::Signalled | LaunchOutcome::SpawnFailed(_) => true,
            LaunchOutcome::Terminated => false,
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            LaunchOutcome::Exited(0) => "exited normally".to_string(),
            LaunchOutcome::Exited(code) => format!("exited with code {code}"),
            LaunchOutcome::Signalled => "terminated abnormally".to_string(),
            LaunchOutcome::Terminated => "was stopped".to_string(),
            LaunchOutcome::SpawnFailed(err) => format!("could not be started: {err}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    Catalog(String),
    Installed,
}

/// A rendered element of the shelf grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub entry: CatalogEntry,
    pub icon: PathBuf,
    pub source: EntrySource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    SignOut,
    Reboot,
    Shutdown,
    Update,
}

impl SystemAction {
    #[must_use]
    pub fn all() -> &'static [SystemAction] {
        &[
            SystemAction::SignOut,
            SystemAction::Reboot,
            SystemAction::Shutdown,
            SystemAction::Update,
        ]
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SystemAction::SignOut => "Sign Out",
            SystemAction::Reboot => "Reboot",
            SystemAction::Shutdown => "Shutdown",
            SystemAction::Update => "Update System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SystemStats {
    pub cpu_percent: f32,
    pub mem_used_mb: u64,
    pub mem_total_mb: u64,
    pub disk_used: String,
    pub disk_total: String,
}

impl fmt::Display for SystemStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU {:.1}% | RAM {} MB / {} MB | Disk {} / {}",
            self.cpu_percent, self.mem_used_mb, self.mem_total_mb, self.disk_used, self.disk_total
        )
    }
}
