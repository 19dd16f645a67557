// Fri Feb 6 2026 - Alex

use clap::Parser;
use colored::Colorize;
use gta_sdk_generator::{
    config::Config,
    emit::SummaryEmitter,
    game::Game,
    generator::Generator,
    utils::logging,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "GTA SDK symbol database generator", long_about = None)]
struct Args {
    /// SDK root containing the database/ directory
    #[arg(short, long, default_value = "sdk")]
    sdk_dir: PathBuf,

    /// Games to process (3, vc, sa); all of them when omitted
    #[arg(short, long)]
    game: Vec<String>,

    /// Directory for per-game text reports
    #[arg(long)]
    report_dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    println!("{}", "GTA SDK Symbol Database Generator".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let games = match select_games(&args.game) {
        Ok(games) => games,
        Err(bad) => {
            eprintln!("{} Unknown game '{}'", "[!]".red(), bad);
            std::process::exit(1);
        }
    };

    let mut config = Config::new()
        .with_sdk_dir(args.sdk_dir.clone())
        .with_games(games)
        .with_verbose_output(args.verbose);
    if let Some(report_dir) = args.report_dir.clone() {
        config = config.with_report_dir(report_dir);
    }

    println!("{} Database: {}", "[*]".blue(), args.sdk_dir.display());
    for game in &config.games {
        println!("{} Selected: {}", "[*]".blue(), game);
    }
    println!();

    let start_time = Instant::now();

    let mut generator = Generator::new(config.clone());
    generator.add_emitter(Box::new(SummaryEmitter::new(config.report_dir.clone())));

    let stats = match generator.run() {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("{} Generation failed: {:#}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let elapsed = start_time.elapsed();

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!("{} Processed {} game(s) in {:.2}s", "[+]".green(), stats.games, elapsed.as_secs_f64());
    println!("{} Modules: {}", "[+]".green(), stats.modules);
    println!("{} Enums: {}", "[+]".green(), stats.enums);
    println!("{} Structs: {}", "[+]".green(), stats.structs);
    println!("{} Variables: {}", "[+]".green(), stats.variables);
    println!("{} Functions: {}", "[+]".green(), stats.functions);
    if stats.warnings > 0 {
        println!("{} Warnings: {}", "[!]".yellow(), stats.warnings);
    }
}

fn select_games(requested: &[String]) -> Result<Vec<Game>, String> {
    if requested.is_empty() {
        return Ok(Game::ALL.to_vec());
    }
    let mut games = Vec::new();
    for name in requested {
        match Game::from_abbr(name) {
            Some(game) => games.push(game),
            None => return Err(name.clone()),
        }
    }
    Ok(games)
}
