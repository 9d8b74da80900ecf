//! REPL Module
//!
//! Line-oriented command loop: read a line, resolve its first word to a
//! [`Command`], run it, print any error on a single line, repeat.

mod commands;
mod input;

pub use commands::{Command, Context, Outcome};
pub use input::clean_input;

use std::io::Write;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::client::{Fetcher, HttpTransport, Transport};
use crate::session::Session;

/// Prompt printed before every line is read.
pub const PROMPT: &str = "Pokedex > ";

/// Interactive session bound to one fetcher.
pub struct Repl<T = HttpTransport> {
    fetcher: Fetcher<T>,
    session: Session,
    rng: Box<dyn RngCore + Send>,
}

impl<T: Transport> Repl<T> {
    pub fn new(fetcher: Fetcher<T>) -> Self {
        Self {
            fetcher,
            session: Session::new(),
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    /// Replaces the random source used for catch rolls.
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handles one input line. Command failures are written to `out` and
    /// never returned; only a failure to write `out` itself is.
    pub async fn handle_line<W: Write>(
        &mut self,
        line: &str,
        out: &mut W,
    ) -> std::io::Result<Outcome> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Outcome::Continue);
        };

        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unknown command")?;
            return Ok(Outcome::Continue);
        };

        debug!(command = command.name(), ?args, "dispatching");
        let mut ctx = Context {
            fetcher: &self.fetcher,
            session: &mut self.session,
            rng: self.rng.as_mut(),
            out,
        };

        match command.execute(&mut ctx, args).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                writeln!(ctx.out, "Error: {}", err)?;
                Ok(Outcome::Continue)
            }
        }
    }

    /// Runs the loop until `exit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            if self.handle_line(&line, &mut *out).await? == Outcome::Exit {
                break;
            }
        }
        Ok(())
    }
}
