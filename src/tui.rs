//! TUI (Terminal User Interface) module for the word guessing game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `AwaitingGuess` → `AwaitingGuess` after every guess
//! - `AwaitingGuess` → `RoundSolved` → (any key) → `AwaitingGuess` for the next round
//! - Terminal states: `GameOver`, `Exiting`

use crate::game_state::{GameInterface, PLACEHOLDER, QUIT_SENTINEL, RoundState, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_HISTORY_DISPLAY: usize = 12;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const HIDDEN_TILE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const REVEALED_TILE: Style = Style::new().fg(Color::Black).bg(Color::Green);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    AwaitingGuess,
    RoundSolved,
    GameOver,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuessResult {
    Right,
    Wrong,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    revealed: &'a [char],
    score: i64,
    round: u32,
    history: &'a [(char, GuessResult)],
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
}

#[derive(Debug, PartialEq, Eq)]
enum KeyInput {
    Action(UserAction),
    Rejected(&'static str),
    Ignored,
}

/// Maps a key press while a guess is awaited.
fn classify_key(key: KeyEvent) -> KeyInput {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    // Raw mode swallows SIGINT, so Ctrl-C quits explicitly
    if ctrl && key.code == KeyCode::Char('c') {
        return KeyInput::Action(UserAction::Quit);
    }
    if ctrl || key.modifiers.contains(KeyModifiers::ALT) {
        return KeyInput::Ignored;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char(QUIT_SENTINEL) => KeyInput::Action(UserAction::Quit),
        KeyCode::Char(c) if c.is_control() || c.is_whitespace() || c == '\u{FFFD}' => {
            KeyInput::Rejected("That character cannot be guessed.")
        }
        KeyCode::Char(c) => {
            info_log!("classify_key() - Guess '{}'", c);
            KeyInput::Action(UserAction::Guess(c))
        }
        _ => KeyInput::Ignored,
    }
}

/// Full-screen front-end. Restores the terminal on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    revealed: Vec<char>,
    score: i64,
    round: u32,
    history: Vec<(char, GuessResult)>,
    pending_guess: Option<char>,
    state: TuiState,
    message: String,
    error_message: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            revealed: Vec::new(),
            score: 0,
            round: 0,
            history: Vec::new(),
            pending_guess: None,
            state: TuiState::AwaitingGuess,
            message: String::new(),
            error_message: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            revealed: &self.revealed,
            score: self.score,
            round: self.round,
            history: &self.history,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Word
                Constraint::Min(6),    // Guesses + messages
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.round, ctx.score);
        Self::render_word(f, chunks[1], ctx.revealed);
        Self::render_info(f, chunks[2], ctx);
        Self::render_instructions(f, chunks[3], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, round: u32, score: i64) {
        let title = Paragraph::new(format!("WORD GUESS   Round {round}   Score {score}"))
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_word(f: &mut Frame, area: Rect, revealed: &[char]) {
        let mut spans = vec![Span::raw("  ")];
        for &c in revealed {
            let style = if c == PLACEHOLDER {
                HIDDEN_TILE
            } else {
                REVEALED_TILE
            };
            spans.push(Span::styled(format!(" {c} "), style));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
            .block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if !ctx.history.is_empty() {
            let skip = ctx.history.len().saturating_sub(MAX_HISTORY_DISPLAY);
            let mut spans = vec![Span::styled("Guesses: ", HEADER_STYLE)];
            for &(c, result) in ctx.history.iter().skip(skip) {
                let style = match result {
                    GuessResult::Right => SUCCESS_STYLE,
                    GuessResult::Wrong => ERROR_STYLE,
                };
                spans.push(Span::styled(format!("{c} "), style));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            let style = match ctx.state {
                TuiState::RoundSolved => SUCCESS_STYLE,
                _ => MESSAGE_STYLE,
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::AwaitingGuess => "Type a character to guess | !/ESC: Quit",
            TuiState::RoundSolved => "Press any key for the next round",
            TuiState::GameOver => "Press any key to exit",
            TuiState::Exiting => "Press any key to exit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Blocks until a key press arrives.
    fn next_key(&mut self) -> Result<KeyEvent, io::Error> {
        loop {
            if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                Event::Resize(_, _) => self.draw_or_log(),
                other => {
                    debug_log!("next_key() - Ignoring event: {:?}", other);
                }
            }
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match classify_key(key) {
            KeyInput::Action(action) => Some(action),
            KeyInput::Rejected(reason) => {
                self.error_message = reason.to_string();
                None
            }
            KeyInput::Ignored => {
                debug_log!("handle_guess_key() - Ignoring key: {:?}", key);
                None
            }
        }
    }

    fn wait_for_key(&mut self) {
        if let Err(e) = self.next_key() {
            debug_log!("wait_for_key() - Input error: {}", e);
        }
    }

    fn record(&mut self, round: &RoundState, score: i64, result: GuessResult) {
        self.revealed = round.revealed_chars();
        self.score = score;
        if let Some(c) = self.pending_guess.take() {
            self.history.push((c, result));
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_round_start(&mut self, round: &RoundState, score: i64) {
        self.round += 1;
        self.revealed = round.revealed_chars();
        self.score = score;
        self.history.clear();
        self.state = TuiState::AwaitingGuess;
        self.message = format!("New word with {} characters. Guess away!", round.len());
        self.error_message.clear();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        if self.draw().is_err() {
            info_log!("read_guess() - Draw failed, quitting");
            return Some(UserAction::Quit);
        }
        let key = match self.next_key() {
            Ok(key) => key,
            Err(e) => {
                info_log!("read_guess() - Input error ({}), quitting", e);
                return Some(UserAction::Quit);
            }
        };
        let action = self.handle_guess_key(key);
        if let Some(UserAction::Guess(c)) = action {
            self.pending_guess = Some(c);
        }
        action
    }

    fn display_correct(&mut self, round: &RoundState, score: i64) {
        self.record(round, score, GuessResult::Right);
        self.message = format!("Right! Score is: {score}");
        self.draw_or_log();
    }

    fn display_incorrect(&mut self, round: &RoundState, score: i64) {
        self.record(round, score, GuessResult::Wrong);
        self.message = format!("Sorry, guess again. Score is: {score}");
        self.draw_or_log();
    }

    fn display_solved(&mut self, round: &RoundState, score: i64) {
        self.state = TuiState::RoundSolved;
        self.revealed = round.revealed_chars();
        self.score = score;
        self.message = format!("✓ You solved it! The word was '{}'.", round.target());
        self.draw_or_log();
        self.wait_for_key();
    }

    fn display_game_over(&mut self, score: i64) {
        self.state = TuiState::GameOver;
        self.score = score;
        self.message = format!("Game over. Final score: {score}");
        self.draw_or_log();
        self.wait_for_key();
    }

    fn display_exit_message(&mut self, score: i64) {
        self.state = TuiState::Exiting;
        self.score = score;
        self.message = format!("Ending game. Final score: {score}");
        self.draw_or_log();
        self.wait_for_key();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
