// Wed Feb 4 2026 - Alex

use crate::game::Game;
use std::path::{Path, PathBuf};

/// Database directory layout. One directory per game under `database/`,
/// with `enums/` and `structs/` JSON trees plus one CSV per category per
/// build, e.g. `plugin-sdk.sa.variables.10us.csv`.
pub struct Paths;

impl Paths {
    pub fn database_dir(sdk_dir: &Path, game: Game) -> PathBuf {
        sdk_dir.join("database").join(game.abbr_lower())
    }

    pub fn enums_dir(sdk_dir: &Path, game: Game) -> PathBuf {
        Self::database_dir(sdk_dir, game).join("enums")
    }

    pub fn structs_dir(sdk_dir: &Path, game: Game) -> PathBuf {
        Self::database_dir(sdk_dir, game).join("structs")
    }

    pub fn variables_csv(sdk_dir: &Path, game: Game, version_name: &str) -> PathBuf {
        Self::database_dir(sdk_dir, game).join(format!(
            "plugin-sdk.{}.variables.{}.csv",
            game.abbr_lower(),
            version_name
        ))
    }

    pub fn functions_csv(sdk_dir: &Path, game: Game, version_name: &str) -> PathBuf {
        Self::database_dir(sdk_dir, game).join(format!(
            "plugin-sdk.{}.functions.{}.csv",
            game.abbr_lower(),
            version_name
        ))
    }
}
