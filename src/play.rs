//! Interactive yes/no generation loop

use std::io::{BufRead, Write};

use rand::Rng;

use crate::core::{Catalog, HistoryCap};
use crate::error::AppError;
use crate::session::Session;

pub(crate) const PROMPT: &str = "Generate creature type? (yes/no) ";
pub(crate) const INVALID_INPUT: &str = "Invalid input. Please enter 'yes' or 'no'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Invalid,
}

fn parse_answer(line: &str) -> Answer {
    match line.trim().to_lowercase().as_str() {
        "yes" | "y" => Answer::Yes,
        "no" | "n" => Answer::No,
        _ => Answer::Invalid,
    }
}

/// How a play loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlayOutcome {
    pub(crate) generated: usize,
    /// The player answered no and the history was cleared
    pub(crate) cleared: bool,
}

/// Hooks the loop calls after each change to the session
pub(crate) trait SessionSink {
    fn recorded(&mut self, session: &Session) -> Result<(), AppError>;
    fn cleared(&mut self, session: &Session) -> Result<(), AppError>;
}

pub(crate) struct PlayLoop<'a, R: ?Sized> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) cap: HistoryCap,
    pub(crate) rng: &'a mut R,
}

impl<R: Rng + ?Sized> PlayLoop<'_, R> {
    /// Prompt until the player says no or input ends.
    ///
    /// EOF leaves the history as it is; only an explicit "no" clears it.
    pub(crate) fn run<I: BufRead, W: Write, S: SessionSink>(
        &mut self,
        mut input: I,
        out: &mut W,
        session: &mut Session,
        sink: &mut S,
    ) -> Result<PlayOutcome, AppError> {
        self.catalog.ensure_non_empty()?;

        let mut outcome = PlayOutcome {
            generated: 0,
            cleared: false,
        };
        let mut line = String::new();

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match parse_answer(&line) {
                Answer::Yes => {
                    let creature = self.catalog.choose(&mut *self.rng)?;
                    writeln!(out, "{creature}")?;
                    session.record(creature, self.cap);
                    sink.recorded(session)?;
                    outcome.generated += 1;
                    tracing::info!(
                        session = %session.name,
                        history = ?session.history.entries(),
                        "generated {creature}"
                    );
                }
                Answer::No => {
                    session.reset();
                    sink.cleared(session)?;
                    outcome.cleared = true;
                    tracing::info!(session = %session.name, "history reset");
                    break;
                }
                Answer::Invalid => writeln!(out, "{INVALID_INPUT}")?,
            }
        }

        Ok(outcome)
    }
}
