// Fri Feb 6 2026 - Alex

use crate::config::Config;
use crate::emit::SourceEmitter;
use crate::game::Game;
use crate::model::ModuleRegistry;
use crate::paths::Paths;
use crate::reader::{functions, json, variables, ReaderError};
use crate::resolve::link_parents;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Totals across one full run, summed over all selected games.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub games: usize,
    pub modules: usize,
    pub enums: usize,
    pub structs: usize,
    pub variables: usize,
    pub functions: usize,
    pub warnings: usize,
}

/// Drives the full pipeline per game: structured JSON descriptions, then
/// the per-build variable and function tables, then cross-reference
/// linking, then every registered emitter.
pub struct Generator {
    config: Config,
    emitters: Vec<Box<dyn SourceEmitter>>,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            emitters: Vec::new(),
        }
    }

    pub fn add_emitter(&mut self, emitter: Box<dyn SourceEmitter>) {
        self.emitters.push(emitter);
    }

    pub fn run(&mut self) -> Result<RunStats> {
        self.config
            .validate()
            .map_err(|message| anyhow::anyhow!(message))?;

        let mut stats = RunStats::default();
        for game in self.config.games.clone() {
            log::info!("loading database for {}", game);
            let registry = self.read_game(game)?;
            accumulate(&mut stats, &registry);
            for emitter in &mut self.emitters {
                emitter
                    .emit(game, &registry)
                    .with_context(|| format!("emitting output for {}", game))?;
            }
            stats.games += 1;
        }
        Ok(stats)
    }

    /// Load one game's database into a fresh registry.
    fn read_game(&self, game: Game) -> Result<ModuleRegistry> {
        let mut registry = ModuleRegistry::new();
        let sdk_dir = &self.config.sdk_dir;

        // a bad description file costs only that file, never the run
        for path in sorted_json_files(&Paths::enums_dir(sdk_dir, game))? {
            if let Err(e) = read_json_file(&path, |data| json::read_enum(&mut registry, data)) {
                log::warn!("skipping enum file {}: {}", path.display(), e);
            }
        }
        for path in sorted_json_files(&Paths::structs_dir(sdk_dir, game))? {
            if let Err(e) = read_json_file(&path, |data| json::read_struct(&mut registry, data)) {
                log::warn!("skipping struct file {}: {}", path.display(), e);
            }
        }

        let version_count = game.version_count();
        for (slot, version_name) in game.version_names().iter().enumerate() {
            let path = Paths::variables_csv(sdk_dir, game, version_name);
            match fs::read_to_string(&path) {
                Ok(content) if slot == 0 => {
                    variables::read_base(&mut registry, &content, version_count)
                }
                Ok(content) => variables::read_diff(&mut registry, &content, slot),
                Err(e) if slot == 0 => {
                    // without the base table there is nothing to diff against
                    log::error!("cannot open {}: {}", path.display(), e);
                    break;
                }
                Err(_) => log::debug!("no variable table for build '{}'", version_name),
            }
        }
        for (slot, version_name) in game.version_names().iter().enumerate() {
            let path = Paths::functions_csv(sdk_dir, game, version_name);
            match fs::read_to_string(&path) {
                Ok(content) if slot == 0 => {
                    functions::read_base(&mut registry, &content, version_count)
                }
                Ok(content) => functions::read_diff(&mut registry, &content, slot),
                Err(e) if slot == 0 => {
                    log::error!("cannot open {}: {}", path.display(), e);
                    break;
                }
                Err(_) => log::debug!("no function table for build '{}'", version_name),
            }
        }

        link_parents(&mut registry);
        Ok(registry)
    }
}

fn accumulate(stats: &mut RunStats, registry: &ModuleRegistry) {
    stats.modules += registry.len();
    for module in registry.iter() {
        stats.enums += module.enums.len();
        stats.structs += module.structs.len();
        stats.variables += module.variable_count();
        stats.functions += module.function_count();
        stats.warnings += module.warnings.len();
    }
}

fn read_json_file<F>(path: &Path, read: F) -> Result<(), ReaderError>
where
    F: FnOnce(&str) -> Result<(), ReaderError>,
{
    let data = fs::read_to_string(path)?;
    read(&data)
}

/// All `.json` files under `dir`, recursively, in a deterministic order.
/// A missing directory is an empty database section, not an error.
fn sorted_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    collect_json_files(dir, &mut files)
        .with_context(|| format!("listing {}", dir.display()))?;
    files.sort();
    Ok(files)
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::SummaryEmitter;
    use std::fs;

    fn write_database(root: &Path) {
        let db = root.join("database").join("3");
        fs::create_dir_all(db.join("enums").join("weapon")).unwrap();
        fs::create_dir_all(db.join("structs").join("entity")).unwrap();

        fs::write(
            db.join("enums").join("weapon").join("eWeaponType.json"),
            r#"{
                "module": "weapon",
                "name": "eWeaponType",
                "width": 4,
                "members": [ { "name": "WEAPON_UNARMED", "value": 0 } ]
            }"#,
        )
        .unwrap();

        fs::write(
            db.join("structs").join("entity").join("CEntity.json"),
            r#"{
                "module": "entity",
                "name": "CEntity",
                "kind": "class",
                "size": 364,
                "vtableAddress": 1234,
                "members": [
                    { "name": "vtable", "offset": 0, "size": 4 },
                    { "name": "m_nFlags", "type": "int", "offset": 4, "size": 4 }
                ]
            }"#,
        )
        .unwrap();
        fs::write(
            db.join("structs").join("entity").join("CPed.json"),
            r#"{
                "module": "entity",
                "name": "CPed",
                "kind": "class",
                "members": [
                    { "name": "baseclass_0", "type": "CEntity", "offset": 0, "size": 364 }
                ]
            }"#,
        )
        .unwrap();

        fs::write(
            db.join("plugin-sdk.3.variables.10en.csv"),
            "0x1000,entity,?ms_count@CEntity@@2HA,CEntity::ms_count,int,,4,,,0\n",
        )
        .unwrap();
        fs::write(db.join("plugin-sdk.3.variables.11en.csv"), "0x1000,0x2000,\n").unwrap();

        fs::write(
            db.join("plugin-sdk.3.functions.10en.csv"),
            "0x3000,entity,?Render@CEntity@@UAEXXZ,CEntity::Render(),void (CEntity::*)(),thiscall,void,CEntity*:this,0,,,1,0\n",
        )
        .unwrap();
    }

    #[test]
    fn test_full_pipeline_on_disk() {
        let root = std::env::temp_dir().join(format!("sdkgen-run-{}", std::process::id()));
        fs::remove_dir_all(&root).ok();
        write_database(&root);

        let config = Config::new()
            .with_sdk_dir(root.clone())
            .with_games(vec![Game::Gta3]);
        let mut generator = Generator::new(config);
        generator.add_emitter(Box::new(SummaryEmitter::new(None)));

        let stats = generator.run().unwrap();
        assert_eq!(stats.games, 1);
        assert_eq!(stats.modules, 2);
        assert_eq!(stats.enums, 1);
        assert_eq!(stats.structs, 2);
        assert_eq!(stats.variables, 1);
        assert_eq!(stats.functions, 1);
        assert_eq!(stats.warnings, 0);

        // cross-reference details need a second read of the same database
        let config = Config::new()
            .with_sdk_dir(root.clone())
            .with_games(vec![Game::Gta3]);
        let registry = Generator::new(config).read_game(Game::Gta3).unwrap();
        let entity = registry.by_name("entity").unwrap();

        let ped = entity.structs.iter().find(|s| s.name == "CPed").unwrap();
        let parent_key = ped.parent.expect("parent should be linked");
        assert_eq!(registry.structure(parent_key).unwrap().name, "CEntity");

        let base = entity.structs.iter().find(|s| s.name == "CEntity").unwrap();
        assert!(base.members[0].ignore);
        assert_eq!(base.variables[0].versions.get(1).unwrap().address, 0x2000);
        assert!(base.functions[0].is_virtual);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_malformed_description_costs_only_that_file() {
        let root = std::env::temp_dir().join(format!("sdkgen-badjson-{}", std::process::id()));
        fs::remove_dir_all(&root).ok();
        write_database(&root);
        let db = root.join("database").join("3");
        fs::write(db.join("enums").join("weapon").join("broken.json"), "{ not json").unwrap();
        fs::write(db.join("structs").join("entity").join("AAA.json"), "[1, 2").unwrap();

        let config = Config::new()
            .with_sdk_dir(root.clone())
            .with_games(vec![Game::Gta3]);
        let stats = Generator::new(config).run().unwrap();
        // everything well-formed still loads
        assert_eq!(stats.enums, 1);
        assert_eq!(stats.structs, 2);
        assert_eq!(stats.functions, 1);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_missing_database_is_empty_not_fatal() {
        let root = std::env::temp_dir().join(format!("sdkgen-empty-{}", std::process::id()));
        fs::remove_dir_all(&root).ok();
        fs::create_dir_all(&root).unwrap();

        let config = Config::new()
            .with_sdk_dir(root.clone())
            .with_games(vec![Game::GtaVc]);
        let stats = Generator::new(config).run().unwrap();
        assert_eq!(stats.games, 1);
        assert_eq!(stats.modules, 0);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config::new().with_games(Vec::new());
        assert!(Generator::new(config).run().is_err());
    }
}
