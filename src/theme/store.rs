use ratatui::style::Color;

use super::types::Theme;

/// What: Return the application palette.
///
/// Output:
/// - Catppuccin Mocha based colors.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(30, 30, 46),        // #1e1e2e
        mantle: Color::Rgb(24, 24, 37),      // #181825
        surface1: Color::Rgb(69, 71, 90),    // #45475a
        overlay1: Color::Rgb(127, 132, 156), // #7f849c
        text: Color::Rgb(205, 214, 244),     // #cdd6f4
        subtext0: Color::Rgb(166, 173, 200), // #a6adc8
        sapphire: Color::Rgb(116, 199, 236), // #74c7ec
        mauve: Color::Rgb(203, 166, 247),    // #cba6f7
        green: Color::Rgb(166, 227, 161),    // #a6e3a1
        yellow: Color::Rgb(249, 226, 175),   // #f9e2af
        red: Color::Rgb(243, 139, 168),      // #f38ba8
        peach: Color::Rgb(250, 179, 135),    // #fab387
        blue: Color::Rgb(137, 180, 250),     // #89b4fa
        lavender: Color::Rgb(180, 190, 254), // #b4befe
    }
}
