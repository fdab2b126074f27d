use super::palette::Palette;
use ratatui::style::Color;

// Deep blue, gold and teal.
pub const APEX: Palette = Palette {
    base: Color::Rgb(8, 28, 46),
    mantle: Color::Rgb(12, 38, 62),
    crust: Color::Rgb(4, 16, 28),
    text: Color::Rgb(236, 239, 244),
    subtext0: Color::Rgb(186, 196, 210),
    subtext1: Color::Rgb(212, 220, 230),
    surface0: Color::Rgb(0, 62, 104),
    surface1: Color::Rgb(0, 86, 143),
    surface2: Color::Rgb(40, 108, 160),
    overlay0: Color::Rgb(110, 130, 150),
    gold: Color::Rgb(255, 215, 0),
    teal: Color::Rgb(0, 128, 128),
    green: Color::Rgb(120, 200, 120),
    yellow: Color::Rgb(240, 200, 90),
    red: Color::Rgb(220, 80, 80),
};
