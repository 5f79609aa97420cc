//! Binary entrypoint for the Castlequest CLI.
//!
//! Commands:
//! - `play [--seed <n>] [--journal <path>]` - start a game on this terminal (default)
//! - `init` - write a starter `config.toml`
//! - `map` - print every castle room with its exits
//!
//! See the library crate docs for module-level details: `castlequest::`.
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};

use castlequest::adventure::{
    Castle, GameSession, Journal, RandomSource, SeededRandom, TerminalConsole, ThreadRandom,
};
use castlequest::config::Config;

#[derive(Parser)]
#[command(name = "castlequest")]
#[command(about = "Rescue the Queen from the dragon's castle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game
    Play {
        /// Seed for reproducible combat rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Journal file, overriding the configured one
        #[arg(short, long)]
        journal: Option<String>,
    },
    /// Write a default configuration file
    Init,
    /// Print the castle map
    Map,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        journal: None,
    });

    match command {
        Commands::Play { seed, journal } => {
            let config_present = Path::new(&cli.config).exists();
            let mut config = if config_present {
                Config::load(&cli.config)?
            } else {
                Config::default()
            };
            init_logging(&Some(config.clone()), cli.verbose);
            if !config_present {
                warn!("Config file {} not found; using defaults", cli.config);
            }
            if let Some(seed) = seed {
                config.game.seed = Some(seed);
            }
            if let Some(journal) = journal {
                config.game.journal_file = journal;
            }
            config.validate()?;
            play(&config)?;
        }
        Commands::Init => {
            init_logging(&None, cli.verbose);
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote default configuration to {}", cli.config);
        }
        Commands::Map => {
            init_logging(&None, cli.verbose);
            print_map();
        }
    }

    Ok(())
}

fn play(config: &Config) -> Result<()> {
    info!("Starting Castlequest v{}", env!("CARGO_PKG_VERSION"));
    let journal = Journal::create(&config.game.journal_file)?;
    if let Some(path) = journal.path() {
        info!("Journal file: {}", path.display());
    }
    let rng: Box<dyn RandomSource> = match config.game.seed {
        Some(seed) => {
            debug!("using seeded rolls ({})", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    };
    let mut game = GameSession::with_backpack_capacity(
        TerminalConsole::new(),
        rng,
        journal,
        config.game.backpack_capacity,
    );
    let ending = game.play()?;
    info!("Game over: {:?}", ending);
    Ok(())
}

fn print_map() {
    let castle = Castle::build();
    for (_, room) in castle.graph.iter() {
        let lock = match room.key_item {
            Some(key) if room.locked => format!(" (locked, needs {})", key),
            _ => String::new(),
        };
        println!("{}{}", room.description, lock);
        for direction in room.exit_directions() {
            if let Some(target) = room.exit(direction) {
                println!("  {} -> {}", direction, castle.graph.room(target).description);
            }
        }
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    builder.format(|fmt, record| {
        let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
    });
    // The game owns the terminal, so a configured log file replaces stderr
    if let Some(file) = config.as_ref().and_then(|cfg| cfg.logging.file.as_ref()) {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
        {
            Ok(f) => {
                builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {} (logging to stderr)", file, e),
        }
    }
    let _ = builder.try_init();
}
