// Wed Feb 4 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported target programs. The abbreviations and per-build labels are
/// opaque identifiers to the ingestion core; they only drive resource
/// naming and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    Gta3,
    GtaVc,
    GtaSa,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Gta3, Game::GtaVc, Game::GtaSa];

    pub fn abbr(self) -> &'static str {
        match self {
            Game::Gta3 => "3",
            Game::GtaVc => "VC",
            Game::GtaSa => "SA",
        }
    }

    pub fn abbr_lower(self) -> &'static str {
        match self {
            Game::Gta3 => "3",
            Game::GtaVc => "vc",
            Game::GtaSa => "sa",
        }
    }

    /// Per-build labels in version-slot order. Slot 0 is the base build and
    /// must always be present in the database.
    pub fn version_names(self) -> &'static [&'static str] {
        match self {
            Game::Gta3 => &["10en", "11en", "steam"],
            Game::GtaVc => &["10en", "11en", "steam"],
            Game::GtaSa => &["10us", "10eu", "11us", "11eu", "sr2", "sr2lv"],
        }
    }

    pub fn version_count(self) -> usize {
        self.version_names().len()
    }

    pub fn from_abbr(s: &str) -> Option<Game> {
        match s.to_lowercase().as_str() {
            "3" | "iii" | "gta3" => Some(Game::Gta3),
            "vc" | "gtavc" => Some(Game::GtaVc),
            "sa" | "gtasa" => Some(Game::GtaSa),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GTA {}", self.abbr())
    }
}
