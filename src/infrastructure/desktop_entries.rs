use crate::domain::{launcher::DesktopEntryScanner, models::CatalogEntry};
use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::StreamExt;
use std::path::PathBuf;

const MAX_CONCURRENT_READS: usize = 32;

/// Scans a directory of freedesktop `.desktop` files.
#[derive(Debug, Clone)]
pub struct FsDesktopScanner {
    dir: PathBuf,
}

impl FsDesktopScanner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn desktop_files(&self) -> Result<Vec<PathBuf>> {
        let mut dir = tokio::fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("cannot read {}", self.dir.display()))?;

        let mut files = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "desktop") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

async fn read_entry(path: PathBuf) -> Option<CatalogEntry> {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => parse_desktop_entry(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), "skipping unreadable desktop file: {e}");
            None
        }
    }
}

/// Pulls `Name=`, `Exec=` and `Icon=` out of a desktop file by line prefix.
/// The first occurrence of each key wins, so localized names and action
/// sections further down cannot override the main entry.
pub fn parse_desktop_entry(content: &str) -> Option<CatalogEntry> {
    let mut name = None;
    let mut exec = None;
    let mut icon = None;

    for line in content.lines() {
        let line = line.trim();
        if let Some(v) = line.strip_prefix("Name=") {
            name.get_or_insert_with(|| v.trim().to_string());
        } else if let Some(v) = line.strip_prefix("Exec=") {
            exec.get_or_insert_with(|| strip_field_codes(v));
        } else if let Some(v) = line.strip_prefix("Icon=") {
            icon.get_or_insert_with(|| v.trim().to_string());
        } else if line == "NoDisplay=true" || line == "Hidden=true" {
            return None;
        }
    }

    let name = name.filter(|n| !n.is_empty())?;
    let exec = exec.filter(|e| !e.is_empty())?;
    Some(CatalogEntry::new(name, exec, icon.unwrap_or_default()))
}

/// Drops `%f`, `%U` and friends; `%%` becomes a literal percent sign.
fn strip_field_codes(exec: &str) -> String {
    exec.split_whitespace()
        .filter(|token| !(token.len() == 2 && token.starts_with('%') && *token != "%%"))
        .map(|token| token.replace("%%", "%"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl DesktopEntryScanner for FsDesktopScanner {
    async fn scan(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let needle = query.to_lowercase();
        let files = self.desktop_files().await?;

        let parsed = futures::stream::iter(files)
            .map(read_entry)
            .buffered(MAX_CONCURRENT_READS)
            .collect::<Vec<Option<CatalogEntry>>>()
            .await;

        Ok(parsed
            .into_iter()
            .flatten()
            .filter(|entry| entry.display_name.to_lowercase().contains(&needle))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIREFOX: &str = "[Desktop Entry]\n\
        Name=Firefox\n\
        Name[de]=Feuerfuchs\n\
        Exec=/usr/lib/firefox/firefox %u\n\
        Icon=firefox\n\
        \n\
        [Desktop Action new-window]\n\
        Name=New Window\n\
        Exec=/usr/lib/firefox/firefox --new-window %u\n";

    #[test]
    fn test_parse_takes_first_keys() {
        let entry = parse_desktop_entry(FIREFOX).unwrap();
        assert_eq!(entry.display_name, "Firefox");
        assert_eq!(entry.command, "/usr/lib/firefox/firefox");
        assert_eq!(entry.icon_ref, "firefox");
    }

    #[test]
    fn test_parse_skips_incomplete_and_hidden() {
        assert!(parse_desktop_entry("[Desktop Entry]\nName=Nothing\n").is_none());
        assert!(parse_desktop_entry("Name=A\nExec=a\nNoDisplay=true\n").is_none());
    }

    #[test]
    fn test_field_codes() {
        assert_eq!(strip_field_codes("vlc --started-from-file %U"), "vlc --started-from-file");
        assert_eq!(strip_field_codes("printf 100%%"), "printf 100%");
    }

    #[tokio::test]
    async fn test_scan_filters_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("firefox.desktop"), FIREFOX).unwrap();
        std::fs::write(
            dir.path().join("vlc.desktop"),
            "[Desktop Entry]\nName=VLC media player\nExec=vlc %U\nIcon=vlc\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "Name=VLC\nExec=nope\n").unwrap();

        let scanner = FsDesktopScanner::new(dir.path());
        let hits = scanner.scan("vlc").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_name, "VLC media player");
        assert_eq!(hits[0].command, "vlc");
    }

    #[tokio::test]
    async fn test_scan_runs_on_spawned_task() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..(MAX_CONCURRENT_READS + 8) {
            std::fs::write(
                dir.path().join(format!("tool{i:02}.desktop")),
                format!("[Desktop Entry]\nName=Tool {i:02}\nExec=tool{i}\nIcon=tool\n"),
            )
            .unwrap();
        }
        std::fs::write(dir.path().join("broken.desktop"), "[Desktop Entry]\n").unwrap();

        let scanner: std::sync::Arc<dyn DesktopEntryScanner> =
            std::sync::Arc::new(FsDesktopScanner::new(dir.path()));
        let hits = tokio::spawn(async move { scanner.scan("TOOL 0").await })
            .await
            .unwrap()
            .unwrap();

        let names: Vec<_> = hits.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "Tool 00");
        assert_eq!(names[9], "Tool 09");
    }

    #[tokio::test]
    async fn test_scan_missing_dir_is_error() {
        let scanner = FsDesktopScanner::new("/no/such/applications/dir");
        assert!(scanner.scan("x").await.is_err());
    }
}
