//! The `memverse drill` command.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use memverse_core::library::{find_passage, load_libraries};
use memverse_core::{IndexSource, Session, SessionState};

use crate::config::load_config_from;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
const CONTINUE_PROMPT: &str = "Press Enter to continue or type 'quit' to end.";

/// Arguments for a drill, as given on the command line.
#[derive(Debug, Default)]
pub struct DrillArgs {
    pub reference: Option<String>,
    pub text: Option<String>,
    pub passage: Option<String>,
    pub library: Option<PathBuf>,
    pub seed: Option<u64>,
    pub words_per_step: Option<usize>,
    pub auto: bool,
    pub config: Option<PathBuf>,
}

/// Loop settings once config and flags are merged.
#[derive(Debug, Clone, Copy)]
pub struct DrillOptions {
    pub words_per_step: usize,
    pub clear_screen: bool,
    pub auto: bool,
}

/// How a drill ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillEnd {
    /// Every word was hidden.
    Completed,
    /// The user typed `quit`.
    Quit,
    /// Input ran out before the passage was fully hidden.
    EndOfInput,
}

pub fn execute(args: DrillArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let words_per_step = args.words_per_step.unwrap_or(config.words_per_step);
    anyhow::ensure!(words_per_step >= 1, "words-per-step must be at least 1");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let mut session = match &args.passage {
        Some(id) => {
            let library_path = args.library.clone().unwrap_or(config.library.clone());
            let libraries = load_libraries(&library_path)?;
            let passage = find_passage(&libraries, id).with_context(|| {
                format!("passage '{id}' not found in {}", library_path.display())
            })?;
            passage.session()?
        }
        None => {
            let reference = match args.reference {
                Some(r) => r,
                None => prompt_line(&mut input, &mut output, "Enter scripture reference:")?,
            };
            let text = match args.text {
                Some(t) => t,
                None => prompt_line(&mut input, &mut output, "Enter scripture text:")?,
            };
            Session::new(&reference, &text)?
        }
    };

    let options = DrillOptions {
        words_per_step,
        clear_screen: config.clear_screen && io::stdout().is_terminal(),
        auto: args.auto,
    };

    let end = match args.seed.or(config.seed) {
        Some(seed) => {
            tracing::debug!(seed, "using seeded generator");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            run_drill(&mut session, &mut rng, &mut input, &mut output, options)?
        }
        None => {
            let mut rng = rand::thread_rng();
            run_drill(&mut session, &mut rng, &mut input, &mut output, options)?
        }
    };

    tracing::debug!(
        hidden = session.hidden_count(),
        total = session.total_words(),
        ?end,
        "drill finished"
    );

    Ok(())
}

/// Drive a session until it completes, the user quits, or input runs out.
pub fn run_drill<S, R, W>(
    session: &mut Session,
    source: &mut S,
    input: &mut R,
    output: &mut W,
    options: DrillOptions,
) -> Result<DrillEnd>
where
    S: IndexSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut rounds = 0usize;
    let mut wasted_draws = 0usize;

    while session.state() == SessionState::Active {
        show(session, output, options)?;

        if !options.auto {
            writeln!(output, "{}", progress_line(session))?;
            writeln!(output, "{CONTINUE_PROMPT}")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(DrillEnd::EndOfInput);
            }
            if line.trim().eq_ignore_ascii_case("quit") {
                return Ok(DrillEnd::Quit);
            }
        }

        rounds += 1;
        for _ in 0..options.words_per_step {
            if !session.mask_next_word(source).made_progress() {
                wasted_draws += 1;
            }
        }
    }

    tracing::debug!(rounds, wasted_draws, "passage fully hidden");
    show(session, output, options)?;
    writeln!(output, "All words hidden.")?;
    Ok(DrillEnd::Completed)
}

/// e.g. `Hidden 2/6 words (33%)`.
fn progress_line(session: &Session) -> String {
    format!(
        "Hidden {}/{} words ({:.0}%)",
        session.hidden_count(),
        session.total_words(),
        session.progress() * 100.0
    )
}

fn show<W: Write>(session: &Session, output: &mut W, options: DrillOptions) -> io::Result<()> {
    if options.clear_screen {
        write!(output, "{CLEAR_SCREEN}")?;
    }
    writeln!(output, "{}\n", session.render())
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    writeln!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    anyhow::ensure!(read > 0, "no input for: {prompt}");
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
