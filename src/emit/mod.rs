// Fri Feb 6 2026 - Alex

use crate::game::Game;
use crate::model::ModuleRegistry;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Consumer of a fully loaded and cross-referenced symbol model. One call
/// per game, after parent linking; implementations decide what to render.
pub trait SourceEmitter {
    fn emit(&mut self, game: Game, registry: &ModuleRegistry) -> std::io::Result<()>;
}

/// Emitter that logs per-module totals and, when a report directory is
/// configured, writes a plain-text summary per game.
pub struct SummaryEmitter {
    report_dir: Option<PathBuf>,
}

impl SummaryEmitter {
    pub fn new(report_dir: Option<PathBuf>) -> Self {
        Self { report_dir }
    }

    fn write_report(&self, game: Game, registry: &ModuleRegistry) -> std::io::Result<()> {
        let dir = match &self.report_dir {
            Some(dir) => dir,
            None => return Ok(()),
        };
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("report.{}.txt", game.abbr_lower()));
        let mut file = File::create(path)?;

        writeln!(file, "Symbol Report - {}", game)?;
        writeln!(file, "====================")?;
        writeln!(file)?;

        for module in registry.iter() {
            writeln!(file, "Module {} :", module.name)?;
            writeln!(file, "  enums:     {}", module.enums.len())?;
            writeln!(file, "  structs:   {}", module.structs.len())?;
            writeln!(file, "  variables: {}", module.variable_count())?;
            writeln!(file, "  functions: {}", module.function_count())?;
            if !module.warnings.is_empty() {
                writeln!(file, "  warnings:")?;
                for warning in &module.warnings {
                    writeln!(file, "    - {}", warning)?;
                }
            }
            writeln!(file)?;
        }
        Ok(())
    }
}

impl SourceEmitter for SummaryEmitter {
    fn emit(&mut self, game: Game, registry: &ModuleRegistry) -> std::io::Result<()> {
        for module in registry.iter() {
            log::info!(
                "{}: module '{}' has {} enums, {} structs, {} variables, {} functions",
                game,
                module.name,
                module.enums.len(),
                module.structs.len(),
                module.variable_count(),
                module.function_count()
            );
            for warning in &module.warnings {
                log::warn!("{}: {}", game, warning);
            }
        }
        self.write_report(game, registry)
    }
}
