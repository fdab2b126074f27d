// Nerd Font code points used across the UI.

pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const SHELF: &str = "\u{f0ad2}";
pub const CLOCK: &str = "\u{f0954}";
pub const STATS: &str = "\u{f04c5}";
pub const IMAGE: &str = "\u{f021f}";
pub const APP: &str = "\u{f03d7}";
pub const INSTALLED: &str = "\u{f01da}";
pub const SEARCH: &str = "\u{f0349}";
pub const POWER: &str = "\u{f0425}";
