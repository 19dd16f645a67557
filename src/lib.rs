// Fri Feb 6 2026 - Alex

#![allow(dead_code)]

pub mod config;
pub mod emit;
pub mod game;
pub mod generator;
pub mod model;
pub mod paths;
pub mod reader;
pub mod resolve;
pub mod utils;

pub use config::Config;
pub use emit::{SourceEmitter, SummaryEmitter};
pub use game::Game;
pub use generator::{Generator, RunStats};
pub use model::{Module, ModuleRegistry};
pub use paths::Paths;
