use crate::domain::models::SystemStats;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    pub clock_text: String,
    pub stats_text: String,
    pub background_text: Option<String>,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            clock_text: " --:--:-- ".to_string(),
            stats_text: " Loading stats... ".to_string(),
            background_text: None,
        }
    }
}

impl HeaderState {
    pub fn set_clock(&mut self, now: DateTime<Local>) {
        self.clock_text = now.format(" %a %d %b  %H:%M:%S ").to_string();
    }

    pub fn set_stats(&mut self, stats: &SystemStats) {
        self.stats_text = format!(" {stats} ");
    }

    pub fn set_background(&mut self, path: &std::path::Path) {
        self.background_text = path
            .file_name()
            .map(|name| format!(" {} ", name.to_string_lossy()));
    }
}
