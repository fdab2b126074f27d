use crate::domain::{catalog::Catalog, launcher::IconResolver};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// Theme subdirectories probed under each search dir after its top level.
const THEME_SUBDIRS: &[&str] = &["hicolor/scalable/apps", "hicolor/48x48/apps"];

#[derive(Debug, Clone)]
pub struct FsIconResolver {
    search_dirs: Vec<PathBuf>,
    default: PathBuf,
}

impl FsIconResolver {
    pub fn new(search_dirs: Vec<PathBuf>, default: impl Into<PathBuf>) -> Self {
        Self {
            search_dirs,
            default: default.into(),
        }
    }

    fn find_in(dir: &Path, icon_ref: &str) -> Option<PathBuf> {
        let entries = std::fs::read_dir(dir).ok()?;
        let mut hits: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.file_stem().is_some_and(|s| s == icon_ref))
            .collect();
        hits.sort();
        hits.into_iter().next()
    }
}

impl IconResolver for FsIconResolver {
    fn resolve(&self, icon_ref: &str) -> PathBuf {
        if icon_ref.is_empty() {
            return self.default.clone();
        }

        let direct = Path::new(icon_ref);
        if direct.is_file() {
            return direct.to_path_buf();
        }

        for dir in &self.search_dirs {
            if let Some(hit) = Self::find_in(dir, icon_ref) {
                return hit;
            }
            for sub in THEME_SUBDIRS {
                if let Some(hit) = Self::find_in(&dir.join(sub), icon_ref) {
                    return hit;
                }
            }
        }

        tracing::debug!(icon = icon_ref, "icon not found, using default");
        self.default.clone()
    }
}

/// Icon paths for every catalog entry, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconCache {
    paths: HashMap<String, PathBuf>,
}

impl IconCache {
    pub fn build(catalog: &Catalog, resolver: &dyn IconResolver) -> Self {
        let mut paths = HashMap::new();
        for category in catalog.as_categories() {
            for entry in &category.entries {
                paths
                    .entry(entry.icon_ref.clone())
                    .or_insert_with(|| resolver.resolve(&entry.icon_ref));
            }
        }
        Self { paths }
    }

    #[must_use]
    pub fn get(&self, icon_ref: &str) -> PathBuf {
        self.paths
            .get(icon_ref)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(icon_ref))
    }
}
