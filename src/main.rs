// word-scramble - play in the terminal, one word per line

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use word_scramble::core::DEFAULT_LANGUAGE;
use word_scramble::dictionary::{WordList, WordSet};
use word_scramble::game::{RoundView, SubmitOutcome, WordScramble, WordScrambleBuilder};

const NEW_ROUND_COMMAND: &str = ":new";
const QUIT_COMMAND: &str = ":quit";

#[derive(Parser)]
#[command(name = "word-scramble")]
#[command(about = "Find the words hidden in a random root word")]
#[command(version)]
struct Cli {
    /// Newline-separated root words (defaults to the bundled list)
    #[arg(long, value_name = "PATH")]
    words: Option<PathBuf>,

    /// Newline-separated dictionary (defaults to the bundled English list)
    #[arg(long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Language tag for spell checking
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for reproducible root words
    #[arg(long)]
    seed: Option<u64>,

    /// Log debug output
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let mut game = build_game(&cli)?;
    let seed = game.seed();
    info!("Seed {seed} (pass --seed {seed} to replay these rounds)");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(
        stdout,
        "Type a word and press enter. {NEW_ROUND_COMMAND} starts a new game, {QUIT_COMMAND} exits."
    )?;
    render(&mut stdout, &game.view())?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        match line.trim() {
            QUIT_COMMAND => break,
            NEW_ROUND_COMMAND => game.start_round()?,
            input => {
                if let SubmitOutcome::Rejected(error) = game.submit(input) {
                    writeln!(stdout, "\n{}\n  {}", error.title(), error.message())?;
                    game.dismiss_alert();
                }
            }
        }

        render(&mut stdout, &game.view())?;
    }

    info!("Final score: {}", game.session().score());
    Ok(())
}

fn build_game(cli: &Cli) -> Result<WordScramble> {
    let mut builder = WordScrambleBuilder::new().language(cli.language.clone());

    if let Some(path) = &cli.words {
        debug!("Loading root words from {}", path.display());
        builder = builder.word_list(WordList::load(path)?);
    }
    if let Some(path) = &cli.dictionary {
        debug!("Loading dictionary from {}", path.display());
        builder = builder.spell_checker(WordSet::load(cli.language.clone(), path)?);
    }
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }

    Ok(builder.build()?)
}

fn render(out: &mut impl Write, view: &RoundView) -> io::Result<()> {
    writeln!(out, "\n== {} ==", view.root_word.to_uppercase())?;
    for accepted in &view.accepted {
        writeln!(out, "  ({}) {}", accepted.letter_count, accepted.word)?;
    }
    writeln!(out, "Words Entered: {}", view.score)?;
    write!(out, "> ")?;
    out.flush()
}
