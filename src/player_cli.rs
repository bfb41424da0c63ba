#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::{common::MoveError, game::GameSession};
use rand::rngs::SmallRng;

use crate::player::Agent;

/// Parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based column index.
    Column(isize),
    Quit,
}

/// Parse a 1-based column number or `q`/`quit`.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Some(Command::Quit);
    }
    let n: isize = input.parse().ok()?;
    Some(Command::Column(n - 1))
}

/// Render the board and status line.
pub fn render_session<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", session.board())?;
    writeln!(out, "{}", session.status())
}

/// List the committed moves, one per line, with 1-based columns.
pub fn render_history<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let history = session.history();
    writeln!(out, "{} moves", history.len())?;
    for mv in history.entries() {
        writeln!(out, "{:>3}. {} -> column {}", mv.seq, mv.player, mv.col + 1)?;
    }
    Ok(())
}

/// Human player typing column numbers in the terminal.
pub struct CliAgent<R, W> {
    input: R,
    output: W,
}

impl CliAgent<StdinLock<'static>, Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for CliAgent<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> CliAgent<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, session: &GameSession) -> io::Result<Option<isize>> {
        render_session(&mut self.output, session)?;
        loop {
            write!(self.output, "column (1-{}, q to quit)> ", session.board().cols())?;
            self.output.flush()?;
            let mut buf = String::new();
            if self.input.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            match parse_command(&buf) {
                Some(Command::Column(col)) => return Ok(Some(col)),
                Some(Command::Quit) => return Ok(None),
                None => writeln!(self.output, "Invalid input '{}'", buf.trim())?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for CliAgent<R, W> {
    fn select_column(&mut self, _rng: &mut SmallRng, session: &GameSession) -> Option<isize> {
        match self.prompt(session) {
            Ok(col) => col,
            Err(e) => {
                log::warn!("input error: {}", e);
                None
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }

    fn handle_rejection(&mut self, _column: isize, reason: MoveError) {
        let _ = writeln!(self.output, "{}, try again", reason);
    }
}
