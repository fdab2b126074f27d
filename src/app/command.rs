use crate::domain::models::{LaunchId, LaunchSpec};
use std::path::PathBuf;
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum Command {
    Launch {
        id: LaunchId,
        spec: LaunchSpec,
        terminate: oneshot::Receiver<()>,
    },
    ScanInstalled(String),
    RefreshStats,
    CheckInstall {
        marker: PathBuf,
        installer: Option<String>,
    },
    ListBackgrounds(PathBuf),
    SaveBackground {
        state_file: PathBuf,
        image: PathBuf,
    },
}
