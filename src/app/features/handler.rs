use crate::app::{action::Action, command::Command, persistence};
use crate::config::VERSION_LABEL;
use crate::domain::launcher::Collaborators;
use crate::domain::models::{EntrySource, GridCell};
use anyhow::Result;
use tokio::sync::mpsc;

/// Runs a command on its own task; the result comes back as an `Action`.
pub fn handle_command(
    command: Command,
    collaborators: &Collaborators,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Launch {
            id,
            spec,
            terminate,
        } => {
            let launcher = collaborators.launcher.clone();
            tokio::spawn(async move {
                let outcome = launcher.run(spec, terminate).await;
                let _ = tx.send(Action::LaunchFinished(id, outcome)).await;
            });
        }
        Command::ScanInstalled(query) => {
            let scanner = collaborators.scanner.clone();
            let icons = collaborators.icons.clone();
            tokio::spawn(async move {
                match scanner.scan(&query).await {
                    Ok(entries) => {
                        // Icon lookup walks directories synchronously.
                        let resolved = tokio::task::spawn_blocking(move || {
                            entries
                                .into_iter()
                                .map(|entry| GridCell {
                                    icon: icons.resolve(&entry.icon_ref),
                                    entry,
                                    source: EntrySource::Installed,
                                })
                                .collect::<Vec<_>>()
                        })
                        .await;
                        match resolved {
                            Ok(cells) => {
                                let _ = tx.send(Action::InstalledAppsFound(query, cells)).await;
                            }
                            Err(e) => tracing::warn!(query, "icon resolution failed: {e}"),
                        }
                    }
                    Err(e) => tracing::warn!(query, "desktop entry scan failed: {e:#}"),
                }
            });
        }
        Command::RefreshStats => {
            let stats = collaborators.stats.clone();
            tokio::spawn(async move {
                match stats.sample().await {
                    Ok(sample) => {
                        let _ = tx.send(Action::StatsUpdated(sample)).await;
                    }
                    Err(e) => tracing::debug!("stats probe failed: {e:#}"),
                }
            });
        }
        Command::CheckInstall { marker, installer } => {
            tokio::spawn(async move {
                if tokio::fs::try_exists(&marker).await.unwrap_or(false) {
                    let _ = tx.send(Action::SplashFinished).await;
                    return;
                }

                tracing::info!(marker = %marker.display(), "first run, writing install marker");
                if let Some(parent) = marker.parent() {
                    if let Err(e) = tokio::fs::create_dir_all(parent).await {
                        tracing::warn!("cannot create {}: {e}", parent.display());
                    }
                }
                if let Err(e) = tokio::fs::write(&marker, format!("{VERSION_LABEL}\n")).await {
                    tracing::warn!("cannot write install marker: {e}");
                }
                let _ = tx.send(Action::InstallerRequired(installer)).await;
            });
        }
        Command::ListBackgrounds(dir) => {
            tokio::spawn(async move {
                let choices = match persistence::list_backgrounds(&dir).await {
                    Ok(choices) => choices,
                    Err(e) => {
                        tracing::warn!("no backgrounds available: {e:#}");
                        Vec::new()
                    }
                };
                let _ = tx.send(Action::BackgroundsListed(choices)).await;
            });
        }
        Command::SaveBackground { state_file, image } => {
            tokio::spawn(async move {
                let result = persistence::save_background(&state_file, &image)
                    .await
                    .map(|()| image)
                    .map_err(|e| format!("{e:#}"));
                let _ = tx.send(Action::BackgroundSaved(result)).await;
            });
        }
    }
    Ok(())
}
