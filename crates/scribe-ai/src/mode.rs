//! Palette modes: which transformation a completion request asks for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The transformation requested from the completion endpoint. Sent on the
/// wire as the lowercase `option` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Fix,
    Improve,
    Chart,
    Zap,
    Continue,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Fix,
        Mode::Improve,
        Mode::Chart,
        Mode::Zap,
        Mode::Continue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Fix => "fix",
            Mode::Improve => "improve",
            Mode::Chart => "chart",
            Mode::Zap => "zap",
            Mode::Continue => "continue",
        }
    }

    /// Human-readable label for display in the command palette.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Fix => "Fix grammar",
            Mode::Improve => "Improve writing",
            Mode::Chart => "Generate chart",
            Mode::Zap => "Ask AI",
            Mode::Continue => "Continue writing",
        }
    }

    /// Chart completions are parsed as data instead of spliced as text.
    pub fn is_chart(self) -> bool {
        self == Mode::Chart
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0:?}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// An entry in the command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteCommand {
    pub mode: Mode,
    pub label: &'static str,
}

/// Commands listed in the palette while no completion is displayed.
/// `zap` is reached through the free-form input instead.
pub fn palette_commands() -> Vec<PaletteCommand> {
    [Mode::Improve, Mode::Fix, Mode::Chart, Mode::Continue]
        .into_iter()
        .map(|mode| PaletteCommand {
            mode,
            label: mode.label(),
        })
        .collect()
}
