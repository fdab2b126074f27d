use crate::domain::catalog::{Catalog, Category};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CATALOG: &str = include_str!("../assets/catalog.toml");

pub const VERSION_LABEL: &str = concat!("shelf v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub applications_dir: PathBuf,
    pub grid: GridConfig,
    pub icons: IconConfig,
    pub launch: LaunchConfig,
    pub privileged: PrivilegedConfig,
    pub background: BackgroundConfig,
    pub stats: StatsConfig,
    pub splash: SplashConfig,
    pub catalog: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub search_dirs: Vec<PathBuf>,
    pub default: PathBuf,
}

/// Hooks wrapped around every catalog launch, e.g. switching compositor
/// workspaces before the program opens and after it closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LaunchConfig {
    pub before: Option<String>,
    pub after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivilegedConfig {
    pub helper: String,
    pub sign_out: Vec<String>,
    pub reboot: Vec<String>,
    pub shutdown: Vec<String>,
    pub update: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub directory: PathBuf,
    pub state_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub interval_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub enabled: bool,
    pub step: u16,
    pub install_marker: Option<PathBuf>,
    pub installer_command: Option<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    catalog: Vec<Category>,
}

fn default_categories() -> Vec<Category> {
    match toml::from_str::<CatalogFile>(DEFAULT_CATALOG) {
        Ok(file) => file.catalog,
        Err(e) => {
            tracing::error!("built-in catalog is malformed: {e}");
            Vec::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            applications_dir: PathBuf::from("/usr/share/applications"),
            grid: GridConfig::default(),
            icons: IconConfig::default(),
            launch: LaunchConfig::default(),
            privileged: PrivilegedConfig::default(),
            background: BackgroundConfig::default(),
            stats: StatsConfig::default(),
            splash: SplashConfig::default(),
            catalog: default_categories(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { columns: 5 }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        let mut search_dirs = vec![
            PathBuf::from("/usr/share/icons"),
            PathBuf::from("/usr/share/pixmaps"),
            PathBuf::from("/usr/local/share/icons"),
        ];
        if let Some(home) = home::home_dir() {
            search_dirs.push(home.join(".local").join("share").join("icons"));
        }
        Self {
            search_dirs,
            default: PathBuf::from("/usr/share/icons/hicolor/48x48/apps/application-x-executable.png"),
        }
    }
}

impl Default for PrivilegedConfig {
    fn default() -> Self {
        Self {
            helper: "pkexec".to_string(),
            sign_out: vec![
                "gnome-session-quit".to_string(),
                "--no-prompt".to_string(),
            ],
            reboot: vec!["systemctl".to_string(), "reboot".to_string()],
            shutdown: vec!["systemctl".to_string(), "poweroff".to_string()],
            update: vec!["pacman".to_string(), "-Syu".to_string(), "--noconfirm".to_string()],
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let base = data_dir();
        Self {
            directory: base.join("backgrounds"),
            state_file: base.join("background.txt"),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { interval_secs: 1 }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step: 5,
            install_marker: None,
            installer_command: None,
        }
    }
}

fn data_dir() -> PathBuf {
    home::home_dir().map_or_else(
        || PathBuf::from(".shelf"),
        |mut path| {
            path.push(".local");
            path.push("share");
            path.push("shelf");
            path
        },
    )
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("shelf");
        path.push("config.toml");
        path
    })
}

pub fn get_log_dir() -> PathBuf {
    home::home_dir().map_or_else(
        || PathBuf::from(".shelf"),
        |mut path| {
            path.push(".local");
            path.push("state");
            path.push("shelf");
            path
        },
    )
}

impl Config {
    /// Loads `path` if given, otherwise the per-user config file. A missing
    /// file yields the defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match get_config_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        if config.grid.columns == 0 {
            tracing::warn!("grid.columns = 0 is not usable, falling back to 5");
            config.grid.columns = GridConfig::default().columns;
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn build_catalog(&self) -> Catalog {
        Catalog::new(self.catalog.clone())
    }

    #[must_use]
    pub fn system_argv(&self, action: crate::domain::models::SystemAction) -> &[String] {
        use crate::domain::models::SystemAction;
        match action {
            SystemAction::SignOut => &self.privileged.sign_out,
            SystemAction::Reboot => &self.privileged.reboot,
            SystemAction::Shutdown => &self.privileged.shutdown,
            SystemAction::Update => &self.privileged.update,
        }
    }
}
