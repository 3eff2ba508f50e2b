use crate::game_state::{
    GameInterface, QUIT_SENTINEL, RoundState, SessionEnd, SessionSummary, UserAction,
};
use crate::text::{DEFAULT_TOP_N, TextStats};
use crate::{debug_log, info_log};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Word guessing game built from the most frequent nouns of a text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file to analyse for candidate words
    #[arg(required_unless_present = "words")]
    pub input: Option<PathBuf>,

    /// Newline-delimited list of candidate words (skips text analysis)
    #[arg(short = 'w', long = "words")]
    pub words: Option<PathBuf>,

    /// Number of most frequent nouns used as candidate words
    #[arg(short = 'n', long = "top", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Seed for target word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal UI
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// How many nouns are shown in the analysis preview.
const NOUN_PREVIEW: usize = 20;

pub enum GuessInput {
    Valid(char),
    Invalid(&'static str),
    Quit,
}

/// Validates one line of player input as a single-character guess.
pub fn parse_guess(line: &str) -> GuessInput {
    let input = line.trim();
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => GuessInput::Invalid("Please enter a letter."),
        (Some(_), Some(_)) => GuessInput::Invalid("Please enter exactly one character."),
        (Some(QUIT_SENTINEL), None) => GuessInput::Quit,
        (Some(c), None) if c.is_control() => {
            GuessInput::Invalid("That character cannot be guessed.")
        }
        (Some(c), None) => GuessInput::Valid(c),
    }
}

/// Prints the text analysis summary shown before the first round.
pub fn display_text_stats<W: Write>(out: &mut W, stats: &TextStats) -> std::io::Result<()> {
    writeln!(
        out,
        "\nTotal tokens: {} ({} unique)",
        stats.token_count, stats.unique_token_count
    )?;
    writeln!(out, "The Lexical Diversity is: {:.2}", stats.lexical_diversity)?;
    let preview: Vec<&str> = stats
        .nouns
        .iter()
        .take(NOUN_PREVIEW)
        .map(String::as_str)
        .collect();
    writeln!(out, "First {} nouns: {}", preview.len(), preview.join(", "))?;
    writeln!(out, "Tokens: {}", stats.processed_tokens.len())?;
    writeln!(out, "Nouns: {}", stats.nouns.len())?;
    let common: Vec<String> = stats
        .ranked
        .iter()
        .map(|(word, count)| format!("{word} ({count})"))
        .collect();
    writeln!(out, "Most common words: {}", common.join(", "))?;
    Ok(())
}

/// One-line report of a finished session.
pub fn summary_message(summary: &SessionSummary) -> String {
    let ending = match summary.end {
        SessionEnd::Quit => "Ending game",
        SessionEnd::OutOfPoints => "Game over",
    };
    format!(
        "{ending}. Final score: {} ({} of {} rounds solved)",
        summary.final_score, summary.rounds_solved, summary.rounds_played
    )
}

/// Line-oriented console front-end.
///
/// Reads one guess per line from `reader` and writes feedback to `writer`.
/// End of input counts as a quit.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn say(&mut self, message: std::fmt::Arguments) {
        if let Err(e) = self.writer.write_fmt(message).and_then(|()| self.writer.flush()) {
            debug_log!("CliInterface - write failed: {}", e);
        }
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_round_start(&mut self, round: &RoundState, score: i64) {
        self.say(format_args!(
            "\nLet's play a word guessing game!\nCurrent score: {score}\n{}\n",
            round.display()
        ));
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        self.say(format_args!("Guess a letter ('{QUIT_SENTINEL}' to quit): "));
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                info_log!("read_guess() - end of input, quitting");
                return Some(UserAction::Quit);
            }
            Ok(_) => {}
            Err(e) => {
                info_log!("read_guess() - read failed ({}), quitting", e);
                return Some(UserAction::Quit);
            }
        }

        match parse_guess(&line) {
            GuessInput::Valid(c) => Some(UserAction::Guess(c)),
            GuessInput::Quit => Some(UserAction::Quit),
            GuessInput::Invalid(reason) => {
                self.say(format_args!("{reason}\n"));
                None
            }
        }
    }

    fn display_correct(&mut self, round: &RoundState, score: i64) {
        self.say(format_args!("Right! Score is: {score}\n{}\n", round.display()));
    }

    fn display_incorrect(&mut self, round: &RoundState, score: i64) {
        self.say(format_args!(
            "Sorry, guess again. Score is: {score}\n{}\n",
            round.display()
        ));
    }

    fn display_solved(&mut self, round: &RoundState, score: i64) {
        self.say(format_args!(
            "You solved it! The word was '{}'.\nCurrent score: {score}\n",
            round.target()
        ));
    }

    fn display_game_over(&mut self, score: i64) {
        self.say(format_args!("Game over\nCurrent score: {score}\n"));
    }

    fn display_exit_message(&mut self, score: i64) {
        self.say(format_args!("Ending game\nCurrent score: {score}\n"));
    }
}
