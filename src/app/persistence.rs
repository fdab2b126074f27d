use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Reads the saved background. Anything unusable is logged and ignored.
pub fn load_background(state_file: &Path) -> Option<PathBuf> {
    let content = match std::fs::read_to_string(state_file) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %state_file.display(), "no saved background: {e}");
            return None;
        }
    };

    let line = content.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return None;
    }

    let path = PathBuf::from(line);
    if path.is_file() {
        Some(path)
    } else {
        tracing::warn!(path = %path.display(), "saved background no longer exists");
        None
    }
}

/// Overwrites the state file with `image` as its only line.
pub async fn save_background(state_file: &Path, image: &Path) -> Result<()> {
    if let Some(parent) = state_file.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }
    tokio::fs::write(state_file, format!("{}\n", image.display()))
        .await
        .with_context(|| format!("cannot write {}", state_file.display()))
}

/// Image files directly inside `dir`, sorted by path.
pub async fn list_backgrounds(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("cannot read {}", dir.display()))?;

    let mut images = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if is_image && path.is_file() {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("dunes.png");
        std::fs::write(&image, b"png").unwrap();
        let state_file = dir.path().join("state").join("background.txt");

        save_background(&state_file, &image).await.unwrap();
        assert_eq!(load_background(&state_file), Some(image.clone()));

        // Overwritten, not appended.
        let other = dir.path().join("forest.jpg");
        std::fs::write(&other, b"jpg").unwrap();
        save_background(&state_file, &other).await.unwrap();
        assert_eq!(std::fs::read_to_string(&state_file).unwrap().lines().count(), 1);
        assert_eq!(load_background(&state_file), Some(other));
    }

    #[test]
    fn test_missing_or_stale_background_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let state_file = dir.path().join("background.txt");
        assert_eq!(load_background(&state_file), None);

        std::fs::write(&state_file, "/no/such/image.png\n").unwrap();
        assert_eq!(load_background(&state_file), None);
    }

    #[tokio::test]
    async fn test_lists_only_images() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.jpeg"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("folder.png")).unwrap();

        let images = list_backgrounds(dir.path()).await.unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.jpeg"]);
    }
}
