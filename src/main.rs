use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use srparse::notation::{load_script, parse_tagged_sentence};
use srparse::output::{write_state, write_transitions};
use srparse::structs::{Cli, Commands, LegalArgs, ReplayArgs};
use srparse::{replay, replay_unchecked, LegalityPolicy, Result, State, TransitionRegistry};

/// `RUST_LOG` overrides the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Replay(args) => run_replay(&args),
        Commands::Legal(args) => run_legal(&args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_replay(args: &ReplayArgs) -> Result<()> {
    let sentence = parse_tagged_sentence(&args.sentence)?;
    let transitions = load_script(&args.transitions)?;
    let policy = LegalityPolicy::from(&args.policy);
    info!(tokens = sentence.len(), transitions = transitions.len(), "replaying script");

    let initial = State::initial(sentence);
    let state = if args.unchecked {
        replay_unchecked(&initial, &transitions)?
    } else {
        replay(&initial, &transitions, &policy)?
    };
    if !state.is_terminal() {
        eprintln!(
            "Warning: script ended at position {} with {} trees on the stack",
            state.token_position(),
            state.stack().len()
        );
    }

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_state(&mut writer, &state)?;
    writer.flush()?;
    Ok(())
}

fn run_legal(args: &LegalArgs) -> Result<()> {
    let sentence = parse_tagged_sentence(&args.sentence)?;
    let policy = LegalityPolicy::from(&args.policy);
    let prefix = match &args.transitions {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    let state = replay(&State::initial(sentence), &prefix, &policy)?;

    let registry = TransitionRegistry::from_labels(&args.labels, &args.root_label);
    let legal = registry.legal_transitions(&state, &policy);
    debug!(candidates = registry.len(), legal = legal.len(), "listing legal transitions");

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_transitions(&mut writer, &legal)?;
    Ok(())
}
