//! Wordle Universe - CLI
//!
//! Plays a word game against a hidden target and reports which dictionary words
//! remain possible after every guess.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use rand::seq::IndexedRandom;
use wordle_universe::{
    commands::{ReplayConfig, SweepConfig, replay, run_play_stdio, run_sweep},
    core::Word,
    game::GameSimulator,
    output::{print_replay_result, print_sweep_statistics},
    universe::MaskPolicy,
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_universe",
    about = "Word game simulator that tracks every word still consistent with the feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Target word (random dictionary word if omitted)
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Mask policy: filtered (default) or condensed
    #[arg(short, long, global = true, default_value = "filtered")]
    policy: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: read guesses from stdin (default)
    Play,

    /// Play a fixed list of guesses against the target
    Replay {
        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Always list the remaining words
        #[arg(short = 'l', long)]
        list: bool,
    },

    /// Play the same guesses against every dictionary word as target
    Sweep {
        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Limit number of targets
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS).context("embedded dictionary is malformed")?,
        path => load_from_file(path).with_context(|| format!("cannot load dictionary {path}"))?,
    };

    if words.is_empty() {
        bail!("dictionary {wordlist} contains no words");
    }
    info!("dictionary: {} words ({wordlist})", words.len());
    Ok(words)
}

/// Resolve the target from --target, or pick one at random
fn choose_target(target: Option<&str>, dictionary: &[Word]) -> Result<Word> {
    match target {
        Some(text) => Word::new(text).with_context(|| format!("invalid target word {text:?}")),
        None => {
            let word = dictionary
                .choose(&mut rand::rng())
                .copied()
                .context("cannot pick a target from an empty dictionary")?;
            info!("picked a random target");
            Ok(word)
        }
    }
}

fn parse_guesses(guesses: &[String]) -> Result<Vec<Word>> {
    guesses
        .iter()
        .map(|g| Word::new(g).with_context(|| format!("invalid guess {g:?}")))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    let policy = MaskPolicy::from_name(&cli.policy);
    info!("mask policy: {}", policy.name());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let target = choose_target(cli.target.as_deref(), &dictionary)?;
            run_play_command(target, &dictionary, policy)
        }
        Commands::Replay { guesses, list } => {
            let target = choose_target(cli.target.as_deref(), &dictionary)?;
            run_replay_command(target, guesses, list, &dictionary, policy)
        }
        Commands::Sweep {
            guesses,
            limit,
            quiet,
        } => run_sweep_command(&guesses, limit, quiet, &dictionary, policy),
    }
}

fn run_play_command(target: Word, dictionary: &[Word], policy: MaskPolicy) -> Result<()> {
    let mut game = GameSimulator::new(target, dictionary).with_policy(policy);
    run_play_stdio(&mut game).context("interactive session failed")
}

fn run_replay_command(
    target: Word,
    guesses: Vec<String>,
    list: bool,
    dictionary: &[Word],
    policy: MaskPolicy,
) -> Result<()> {
    let mut config = ReplayConfig::new(target, guesses);
    config.policy = policy;

    let result = replay(config, dictionary);
    print_replay_result(&result, list).context("cannot write replay report")
}

fn run_sweep_command(
    guesses: &[String],
    limit: Option<usize>,
    quiet: bool,
    dictionary: &[Word],
    policy: MaskPolicy,
) -> Result<()> {
    let mut config = SweepConfig::new(parse_guesses(guesses)?);
    config.limit = limit;
    config.policy = policy;
    config.show_progress = !quiet;

    println!("\n{}", "═".repeat(70));
    println!(" Candidate Universe Sweep ");
    println!("{}", "═".repeat(70));
    let targets = limit.unwrap_or(dictionary.len()).min(dictionary.len());
    println!("\nSweeping {targets} possible targets");
    println!("Mask policy: {}", policy.name());
    println!();

    let stats = run_sweep(dictionary, &config);
    print_sweep_statistics(&stats);
    Ok(())
}
