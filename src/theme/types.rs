use ratatui::style::Color;

/// Application palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for captions and hints.
    pub subtext0: Color,
    /// Accent for focused borders and the question pane.
    pub sapphire: Color,
    /// Medium confidence accent.
    pub mauve: Color,
    /// High safety / success accent.
    pub green: Color,
    /// Moderate safety / disclaimer accent.
    pub yellow: Color,
    /// Low safety / error accent.
    pub red: Color,
    /// Low confidence and warning-list accent.
    pub peach: Color,
    /// High confidence accent.
    pub blue: Color,
    /// Accent for headings and the sources chip.
    pub lavender: Color,
}

/// User settings parsed from `settings.conf`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Service root, if set in the file.
    pub api_url: Option<String>,
    /// Whole-request timeout in seconds; `0` keeps the transport default.
    pub request_timeout_secs: u64,
}
