use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::io;
use std::process::ExitCode;
use word_guess::cli::{CliInterface, Cli, display_text_stats, parse_cli, summary_message};
use word_guess::game_state::{GameInterface, SessionSummary, game_loop};
use word_guess::logging::init_logging;
use word_guess::text::analyze;
use word_guess::tui::TuiInterface;
use word_guess::wordbank::{WordBank, load_wordbank_from_file};
use word_guess::{GameError, Result};

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.tui);

    match run(&cli) {
        Ok(summary) => {
            log::info!(
                "session ended ({:?}) after {} rounds, {} solved, score {}",
                summary.end,
                summary.rounds_played,
                summary.rounds_solved,
                summary.final_score
            );
            // The full-screen UI is gone by now; leave the result on the normal screen
            if cli.tui {
                println!("{}", summary_message(&summary));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SessionSummary> {
    let bank = build_wordbank(cli)?;
    println!("Loaded {} candidate words.", bank.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        Box::new(TuiInterface::new()?)
    } else {
        Box::new(CliInterface::new(io::stdin().lock(), io::stdout()))
    };
    Ok(game_loop(&bank, interface.as_mut(), &mut rng))
}

fn build_wordbank(cli: &Cli) -> Result<WordBank> {
    let path = match (&cli.words, &cli.input) {
        (Some(words), _) => return load_wordbank_from_file(words),
        (None, Some(input)) => input,
        (None, None) => return Err(GameError::MissingInput),
    };
    let text = fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.clone(),
        source,
    })?;

    let stats = analyze(&text, cli.top)?;
    display_text_stats(&mut io::stdout().lock(), &stats)?;
    WordBank::new(stats.top_words())
}
