use crate::domain::models::{CatalogEntry, LaunchOutcome, LaunchSpec, SystemStats};
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::oneshot;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Runs `spec` to completion. A message (or a dropped sender) on
    /// `terminate` asks for the child to be killed; the call still returns
    /// only once the child has been reaped.
    async fn run(&self, spec: LaunchSpec, terminate: oneshot::Receiver<()>) -> LaunchOutcome;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DesktopEntryScanner: Send + Sync {
    // Installed applications whose name contains `query` (case-insensitive)
    async fn scan(&self, query: &str) -> Result<Vec<CatalogEntry>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait IconResolver: Send + Sync {
    fn resolve(&self, icon_ref: &str) -> PathBuf;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsProbe: Send + Sync {
    async fn sample(&self) -> Result<SystemStats>;
}

/// Everything the runtime needs to talk to the outside world.
#[derive(Clone)]
pub struct Collaborators {
    pub launcher: std::sync::Arc<dyn ProcessLauncher>,
    pub scanner: std::sync::Arc<dyn DesktopEntryScanner>,
    pub icons: std::sync::Arc<dyn IconResolver>,
    pub stats: std::sync::Arc<dyn StatsProbe>,
}
