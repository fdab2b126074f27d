use super::models::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

/// Read-only mapping from category name to its ordered entries.
///
/// Built once from configuration before the first render and shared behind an
/// `Arc` afterwards. Categories keep the order they were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        let mut merged: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if let Some(existing) = merged.iter_mut().find(|c| c.name == category.name) {
                tracing::warn!(
                    category = %category.name,
                    "category declared twice, merging entries"
                );
                existing.entries.extend(category.entries);
            } else {
                merged.push(category);
            }
        }

        for category in &merged {
            let mut seen = HashSet::new();
            for entry in &category.entries {
                if !seen.insert(entry.display_name.as_str()) {
                    tracing::warn!(
                        category = %category.name,
                        entry = %entry.display_name,
                        "duplicate display name within category"
                    );
                }
            }
        }

        Self { categories: merged }
    }

    /// Entries of `category` in declaration order. Unknown categories yield an
    /// empty slice.
    #[must_use]
    pub fn lookup(&self, category: &str) -> &[CatalogEntry] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map_or(&[], |c| c.entries.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.entries.is_empty())
    }

    /// Case-insensitive substring match on display names across every
    /// category, in category order then entry order.
    #[must_use]
    pub fn search(&self, text: &str) -> Vec<(&str, &CatalogEntry)> {
        let needle = text.to_lowercase();
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c.name.as_str(), e)))
            .filter(|(_, e)| e.display_name.to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn as_categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Category {
                name: "Music".to_string(),
                entries: vec![CatalogEntry::new("VLC", "/usr/bin/vlc", "vlc")],
            },
            Category {
                name: "Gaming".to_string(),
                entries: vec![
                    CatalogEntry::new("Steam", "steam", "steam"),
                    CatalogEntry::new("RetroArch", "retroarch", "retroarch"),
                ],
            },
        ])
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = sample();
        let names: Vec<_> = catalog
            .lookup("Gaming")
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Steam", "RetroArch"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(sample().lookup("Nope").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = sample();
        let hits = catalog.search("vlc");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, "Music");
        assert_eq!(hits[0].1.display_name, "VLC");

        assert_eq!(catalog.search("A").len(), 2);
    }

    #[test]
    fn test_duplicate_categories_are_merged() {
        let catalog = Catalog::new(vec![
            Category {
                name: "Tools".to_string(),
                entries: vec![CatalogEntry::new("Kate", "kate", "")],
            },
            Category {
                name: "Tools".to_string(),
                entries: vec![CatalogEntry::new("OBS", "obs", "")],
            },
        ]);
        assert_eq!(catalog.category_count(), 1);
        assert_eq!(catalog.lookup("Tools").len(), 2);
    }
}
