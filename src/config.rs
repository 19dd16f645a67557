// Fri Feb 6 2026 - Alex

use crate::game::Game;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SDK root; the database lives under `<sdk_dir>/database/`.
    pub sdk_dir: PathBuf,
    pub games: Vec<Game>,
    /// Directory for per-game text reports; none means no reports.
    pub report_dir: Option<PathBuf>,
    pub enable_verbose_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sdk_dir: PathBuf::from("sdk"),
            games: Game::ALL.to_vec(),
            report_dir: None,
            enable_verbose_output: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sdk_dir(mut self, sdk_dir: PathBuf) -> Self {
        self.sdk_dir = sdk_dir;
        self
    }

    pub fn with_games(mut self, games: Vec<Game>) -> Self {
        self.games = games;
        self
    }

    pub fn with_report_dir(mut self, report_dir: PathBuf) -> Self {
        self.report_dir = Some(report_dir);
        self
    }

    pub fn with_verbose_output(mut self, verbose: bool) -> Self {
        self.enable_verbose_output = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.games.is_empty() {
            return Err("At least one game must be selected".to_string());
        }
        if self.sdk_dir.as_os_str().is_empty() {
            return Err("sdk_dir must be set".to_string());
        }
        Ok(())
    }
}
