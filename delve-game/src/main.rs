//! Delve - a console dungeon crawl against an autonomous pursuer.
//!
//! The player collects gold and escapes through an exit; the bot hunts the
//! player using the bounded-visibility pipeline from `delve-bot`. Turns
//! strictly alternate: one player command, one bot action.

mod agent;
mod command;
mod config;
mod error;
mod game;
mod map;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use delve_bot::Bot;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use command::Command;
use config::GameConfig;
use error::Result;
use game::{CommandOutcome, Game, GameResult};
use map::Dungeon;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("delve_game=info".parse().unwrap()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let config = if args.len() > 1 && !args[1].starts_with("--") {
        let config_path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", config_path);
        GameConfig::load(config_path)?
    } else if Path::new("delve.toml").exists() {
        info!("Loading configuration from delve.toml");
        GameConfig::load(Path::new("delve.toml"))?
    } else {
        GameConfig::default()
    };

    // A --map argument skips the menu entirely.
    let fixed_map = args
        .iter()
        .position(|a| a == "--map")
        .and_then(|i| args.get(i + 1))
        .cloned()
        .or_else(|| config.maps.fixed.clone());

    info!("Delve v{}", env!("CARGO_PKG_VERSION"));

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    let map = match fixed_map {
        Some(path) => Dungeon::load_or_default(Path::new(&path)),
        None => choose_map(&config.maps.dir, &mut input),
    };

    let mut rng = StdRng::from_os_rng();
    let bot = Bot::new(config.bot.clone());
    let mut game = Game::new(map, bot, &mut rng)?;

    println!("Type HELLO, GOLD, PICKUP, LOOK, MOVE <N|S|E|W> or QUIT.");
    run(&mut game, &mut input)
}

/// List the map files in the maps directory and let the player pick one.
/// Any failure falls back to the built-in map.
fn choose_map(dir: &str, input: &mut impl BufRead) -> Dungeon {
    let maps = list_maps(dir);
    if maps.is_empty() {
        warn!("No maps found in {dir:?}, using default map");
        return Dungeon::default_labyrinth();
    }

    println!("--- MAPS ---");
    for path in &maps {
        if let Some(name) = path.file_name() {
            println!("{}", name.to_string_lossy());
        }
    }
    println!("Please select a map.");

    match read_line(input) {
        Some(choice) if !choice.is_empty() => {
            Dungeon::load_or_default(&Path::new(dir).join(choice))
        }
        _ => {
            warn!("No selection, using default map");
            Dungeon::default_labyrinth()
        }
    }
}

fn list_maps(dir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut maps: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    maps.sort();
    maps
}

/// The main gameplay loop: strictly alternating player and bot turns.
fn run(game: &mut Game, input: &mut impl BufRead) -> Result<()> {
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = read_line(input) else {
            println!("LOSE");
            return Ok(());
        };

        let Some(command) = Command::parse(&line) else {
            println!("Invalid");
            continue;
        };

        match game.player_turn(command) {
            CommandOutcome::Message(response) => println!("{response}"),
            CommandOutcome::GameOver(result) => {
                announce(result);
                return Ok(());
            }
        }

        if let Some(result) = game.bot_turn()? {
            println!("The bot caught you!");
            announce(result);
            return Ok(());
        }
    }
}

fn announce(result: GameResult) {
    match result {
        GameResult::Won => println!("WIN - You won the game!"),
        GameResult::Lost => println!("LOSE"),
    }
}

fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            warn!("Failed to read input: {e}");
            None
        }
    }
}
