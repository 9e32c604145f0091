use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use wordle::console::Console;
use wordle::{Dictionary, Session};

/// Guess the mystery word, as many rounds as you like.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Word list to draw secrets from, one word per line.
    ///
    /// Only words of 3 to 6 ASCII letters are used. If not passed, the bundled word list is used.
    #[clap(short, long)]
    words: Option<PathBuf>,

    /// Seed for picking secrets.
    ///
    /// By default, secrets are picked using OS randomness.
    #[clap(long)]
    seed: Option<u64>,

    /// Log diagnostics to stderr. Pass more than once for more detail.
    ///
    /// RUST_LOG takes precedence when set.
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into())),
        )
        .with_writer(io::stderr)
        .init();

    let loaded;
    let dictionary = match &args.words {
        Some(path) => {
            loaded = Dictionary::load(path).context("could not set up the game")?;
            &loaded
        }
        None => Dictionary::bundled(),
    };
    for (length, count) in dictionary.lengths() {
        tracing::debug!(length, count, "words available");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(dictionary, Console::new(stdin.lock(), stdout.lock()));
    session.run(&mut rng).context("game ended unexpectedly")?;
    Ok(())
}
