//! Interactive session: reads commands, drives one game, prints results.

use crate::command::{self, Command};
use crate::{RewindConfig, render};
use anyhow::Result;
use rewind_tictactoe::Game;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop the session.
    Quit,
}

/// One game plus the display settings used to show it.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    config: RewindConfig,
}

impl Session {
    /// Creates a session on a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: RewindConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one input line and returns the text to show for it.
    ///
    /// Rejected moves and parse errors are reported in the text; the game is
    /// left unchanged in that case.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> (Flow, String) {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Unparsable input");
                return (Flow::Continue, format!("{}. Type 'help' for commands.", e));
            }
        };

        let result = match command {
            Command::Move(cell) => self.game.make_move(cell),
            Command::Jump(n) => self.game.jump_to(n),
            Command::Reset => {
                self.game.reset();
                Ok(())
            }
            Command::Status | Command::History => Ok(()),
            Command::Help => return (Flow::Continue, command::help()),
            Command::Quit => return (Flow::Quit, String::new()),
        };

        let mut out = String::new();
        if let Err(e) = result {
            warn!(error = %e, ?command, "Command rejected");
            out.push_str(&format!("{}\n\n", e));
        }
        if command != Command::History {
            out.push_str(&render::board(&self.game, &self.config));
        }
        if command == Command::History || *self.config.show_history() {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&render::history(&self.game));
        }
        (Flow::Continue, out)
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Session started");
        writeln!(output, "{}\n", render::board(&self.game, &self.config))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (flow, text) = self.handle_line(&line);
            if flow == Flow::Quit {
                break;
            }
            writeln!(output, "{}\n", text)?;
        }

        info!(move_count = *self.game.status().move_count(), "Session ended");
        Ok(())
    }
}
