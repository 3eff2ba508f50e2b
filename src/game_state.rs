use crate::wordbank::WordBank;
use crate::{debug_log, info_log};
use rand::Rng;

/// Score every session starts with.
pub const INITIAL_SCORE: i64 = 5;

/// The session ends once the score falls below this value.
pub const SCORE_FLOOR: i64 = 0;

/// Symbol shown for a position that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// Input that ends the whole session.
pub const QUIT_SENTINEL: char = '!';

/// One play-through of guessing a single target word.
///
/// `revealed` runs parallel to `target`: a slot flips to `true` the first time
/// its letter is guessed and never flips back, so a revealed slot can never be
/// scored twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Vec<char>,
    revealed: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter uncovered `revealed` previously hidden positions.
    Correct { revealed: usize },
    /// The letter is absent, or every occurrence is already revealed.
    Incorrect,
}

impl RoundState {
    /// Whitespace inside the target cannot be typed as a guess, so those
    /// slots start out revealed.
    pub fn new(target: &str) -> Self {
        let target: Vec<char> = target.chars().collect();
        let revealed = target.iter().map(|c| c.is_whitespace()).collect();
        Self { target, revealed }
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Player-visible sequence: each slot is either the placeholder or the
    /// target character at that position.
    pub fn revealed_chars(&self) -> Vec<char> {
        self.target
            .iter()
            .zip(&self.revealed)
            .map(|(&c, &shown)| if shown { c } else { PLACEHOLDER })
            .collect()
    }

    /// Revealed sequence with a space between slots, e.g. `o _ a _ _ e`.
    pub fn display(&self) -> String {
        self.revealed_chars()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn hidden_count(&self) -> usize {
        self.revealed.iter().filter(|shown| !**shown).count()
    }

    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(|&shown| shown)
    }

    /// Reveals every still-hidden occurrence of `guess` at once.
    ///
    /// Comparison ignores case.
    pub fn apply_guess(&mut self, guess: char) -> GuessOutcome {
        let mut revealed = 0;
        for (slot, shown) in self.target.iter().zip(self.revealed.iter_mut()) {
            if !*shown && chars_match(*slot, guess) {
                *shown = true;
                revealed += 1;
            }
        }
        if revealed > 0 {
            GuessOutcome::Correct { revealed }
        } else {
            GuessOutcome::Incorrect
        }
    }
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Score and counters for one run of the program, threaded through each round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: i64,
    rounds_played: u32,
    rounds_solved: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_score(INITIAL_SCORE)
    }

    pub fn with_score(score: i64) -> Self {
        Self {
            score,
            rounds_played: 0,
            rounds_solved: 0,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn rounds_solved(&self) -> u32 {
        self.rounds_solved
    }

    pub fn start_round<R: Rng + ?Sized>(&mut self, bank: &WordBank, rng: &mut R) -> RoundState {
        self.rounds_played += 1;
        let target = bank.choose(rng);
        debug_log!("start_round() - round {} target '{}'", self.rounds_played, target);
        RoundState::new(target)
    }

    /// Applies a guess to the round and adjusts the score: +1 when it reveals
    /// anything, -1 otherwise.
    pub fn guess(&mut self, round: &mut RoundState, letter: char) -> GuessOutcome {
        let outcome = round.apply_guess(letter);
        match outcome {
            GuessOutcome::Correct { .. } => self.score += 1,
            GuessOutcome::Incorrect => self.score -= 1,
        }
        if round.is_solved() {
            self.rounds_solved += 1;
        }
        outcome
    }

    pub fn is_out_of_points(&self) -> bool {
        self.score < SCORE_FLOOR
    }

    fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            final_score: self.score,
            rounds_played: self.rounds_played,
            rounds_solved: self.rounds_solved,
            end,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    OutOfPoints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_score: i64,
    pub rounds_played: u32,
    pub rounds_solved: u32,
    pub end: SessionEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    Quit,
}

/// Engine states. `Quit` and `OutOfPoints` are terminal.
#[derive(Debug)]
enum GameState {
    AwaitingRound,
    RoundInProgress(RoundState),
    RoundSolved(RoundState),
    OutOfPoints,
    Quit,
}

/// Front-end seam: the console and the terminal UI both implement this.
pub trait GameInterface {
    fn display_round_start(&mut self, round: &RoundState, score: i64);
    /// Returns `None` when the input was rejected; the engine asks again
    /// without touching the score.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_correct(&mut self, round: &RoundState, score: i64);
    fn display_incorrect(&mut self, round: &RoundState, score: i64);
    fn display_solved(&mut self, round: &RoundState, score: i64);
    fn display_game_over(&mut self, score: i64);
    fn display_exit_message(&mut self, score: i64);
}

/// Runs rounds until the player quits or the score drops below the floor.
pub fn game_loop<I, R>(bank: &WordBank, interface: &mut I, rng: &mut R) -> SessionSummary
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut session = Session::new();
    let mut state = GameState::AwaitingRound;
    info_log!("game_loop() - starting with {} candidate words", bank.len());

    loop {
        state = match state {
            GameState::AwaitingRound => {
                let round = session.start_round(bank, rng);
                interface.display_round_start(&round, session.score());
                GameState::RoundInProgress(round)
            }
            GameState::RoundInProgress(mut round) => match interface.read_guess() {
                None => GameState::RoundInProgress(round),
                Some(UserAction::Quit) => GameState::Quit,
                Some(UserAction::Guess(letter)) => {
                    let outcome = session.guess(&mut round, letter);
                    debug_log!(
                        "game_loop() - guess '{}' -> {:?}, score {}",
                        letter,
                        outcome,
                        session.score()
                    );
                    match outcome {
                        GuessOutcome::Correct { .. } => {
                            interface.display_correct(&round, session.score());
                        }
                        GuessOutcome::Incorrect => {
                            interface.display_incorrect(&round, session.score());
                        }
                    }
                    if round.is_solved() {
                        GameState::RoundSolved(round)
                    } else if session.is_out_of_points() {
                        GameState::OutOfPoints
                    } else {
                        GameState::RoundInProgress(round)
                    }
                }
            },
            GameState::RoundSolved(round) => {
                interface.display_solved(&round, session.score());
                GameState::AwaitingRound
            }
            GameState::OutOfPoints => {
                info_log!("game_loop() - out of points at {}", session.score());
                interface.display_game_over(session.score());
                return session.summary(SessionEnd::OutOfPoints);
            }
            GameState::Quit => {
                info_log!("game_loop() - quit with score {}", session.score());
                interface.display_exit_message(session.score());
                return session.summary(SessionEnd::Quit);
            }
        };
    }
}
