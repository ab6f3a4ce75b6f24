//! Theme configuration for the transcript view.
//!
//! Centralizes all color and style definitions. Line colors follow the
//! classic demo look: prompts blue, commands green, output gray.

use ratatui::style::{Color, Modifier, Style};

use crate::script::LineKind;

/// Colors for the transcript and chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Prompt lines (`$ `).
    pub prompt: Color,
    /// Command lines typed by the simulated user.
    pub command: Color,
    /// Program output lines.
    pub output: Color,
    /// Cursor glyph color (drawn reversed).
    pub cursor: Color,
    /// Footer hints and other chrome.
    pub chrome: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// The classic demo look - blue prompt, green command, gray output.
    pub fn classic() -> Self {
        Self {
            prompt: Color::Blue,
            command: Color::Green,
            output: Color::Gray,
            cursor: Color::Gray,
            chrome: Color::DarkGray,
        }
    }

    /// Single-color theme for monochrome terminals.
    pub fn mono() -> Self {
        Self {
            prompt: Color::White,
            command: Color::White,
            output: Color::Gray,
            cursor: Color::White,
            chrome: Color::DarkGray,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            prompt: Color::LightCyan,
            command: Color::Cyan,
            output: Color::Gray,
            cursor: Color::Cyan,
            chrome: Color::DarkGray,
        }
    }

    /// Look up a theme by its config/CLI name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "mono" => Some(Self::mono()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Names accepted by [`by_name`](Self::by_name), for error messages.
    pub const NAMES: &'static [&'static str] = &["classic", "mono", "ocean"];

    // Style helpers

    /// Style for a transcript line of the given kind.
    pub fn kind_style(&self, kind: LineKind) -> Style {
        let color = match kind {
            LineKind::Prompt => self.prompt,
            LineKind::Command => self.command,
            LineKind::Output => self.output,
        };
        Style::default().fg(color)
    }

    /// Style for the cursor glyph: reversed block, like a real terminal.
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::REVERSED)
    }

    /// Style for footer hints.
    pub fn chrome_style(&self) -> Style {
        Style::default().fg(self.chrome)
    }
}
