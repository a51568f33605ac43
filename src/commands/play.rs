//! Interactive console mode
//!
//! Suggests a probe, reads the player's response and narrows the candidates
//! until the secret is found or the game is abandoned.

use crate::core::{Directive, Word};
use crate::output::{format_letters, word_rows};
use crate::solver::{GuessAdvisor, Recommendation, Scenario, Session, TurnOutcome};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// How a console game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Solved { word: Word, moves: usize },
    Contradiction { moves: usize },
    GameOver { moves: usize },
    /// Input closed before the game finished
    EndOfInput,
}

enum Turn {
    Next,
    End(GameEnd),
}

/// Run a console game over `input`/`output`
///
/// Prompts for the word length unless one is given.
///
/// # Errors
///
/// Returns an error if `word_length` is out of range or on I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    advisor: &GuessAdvisor,
    word_length: Option<usize>,
    mut input: R,
    mut output: W,
) -> Result<GameEnd> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, "{}", "  Jotto Solver - Interactive Mode".bright_green().bold())?;
    writeln!(output, "{}\n", "═".repeat(60).bright_cyan())?;

    let session = match word_length {
        Some(length) => Session::new(dictionary, length).context("Invalid word length")?,
        None => match prompt_session(dictionary, &mut input, &mut output)? {
            Some(session) => session,
            None => return Ok(GameEnd::EndOfInput),
        },
    };

    writeln!(output, "Reply with the number of matching letters, or one of:")?;
    writeln!(output, "  guess <word>     play a different word")?;
    writeln!(output, "  list             show the remaining words")?;
    writeln!(output, "  remaining        show kept and removed letters")?;
    writeln!(output, "  keep <letters>   force letters in")?;
    writeln!(output, "  remove <letters> force letters out")?;
    writeln!(output, "  unknown          drop the word, outcome unknown")?;
    writeln!(output, "  new              suggest another word")?;
    writeln!(output, "  game over        stop playing")?;
    writeln!(output, "\n{} candidate words", session.remaining())?;

    let game = GameSession {
        session,
        advisor,
        input: &mut input,
        output: &mut output,
        skip: FxHashSet::default(),
        moves: 0,
    };
    let end = game.play()?;

    match &end {
        GameEnd::Solved { moves, .. } | GameEnd::GameOver { moves } => {
            writeln!(output, "\nCongratulations. Total moves: {moves}")?;
        }
        GameEnd::Contradiction { moves } => {
            writeln!(output, "\nGame ended after {moves} moves without an answer")?;
        }
        GameEnd::EndOfInput => {}
    }
    Ok(end)
}

/// Ask for a word length until a valid one is entered
fn prompt_session<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Session>> {
    loop {
        writeln!(output, "How many letters is the Jotto word?")?;
        let Some(line) = read_response(input, output)? else {
            return Ok(None);
        };

        match line.parse::<usize>().map(|length| Session::new(dictionary, length)) {
            Ok(Ok(session)) => return Ok(Some(session)),
            _ => writeln!(output, "That did not work. Please enter a number between 2 and 15")?,
        }
    }
}

/// Read one trimmed line; `None` once input is exhausted
fn read_response<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<String>> {
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Console game driver
struct GameSession<'a, R, W> {
    session: Session,
    advisor: &'a GuessAdvisor,
    input: R,
    output: W,
    /// Probes rejected with "new" since the last observation
    skip: FxHashSet<Word>,
    moves: usize,
}

impl<R: BufRead, W: Write> GameSession<'_, R, W> {
    fn play(mut self) -> io::Result<GameEnd> {
        loop {
            let Some(recommendation) = self.next_probe()? else {
                return self.contradiction();
            };

            if let Turn::End(end) = self.take_turn(recommendation)? {
                return Ok(end);
            }
        }
    }

    /// Recommend a probe, cycling back through skipped words when none is fresh
    fn next_probe(&mut self) -> io::Result<Option<Recommendation>> {
        if let Some(recommendation) = self.advisor.recommend(&self.session, &self.skip) {
            return Ok(Some(recommendation));
        }
        if self.skip.is_empty() {
            return Ok(None);
        }

        writeln!(self.output, "No new words left, starting over with skipped ones")?;
        self.skip.clear();
        Ok(self.advisor.recommend(&self.session, &self.skip))
    }

    fn take_turn(&mut self, recommendation: Recommendation) -> io::Result<Turn> {
        let mut probe = recommendation.word;
        self.show_probe(&probe, Some(recommendation.score))?;

        loop {
            let Some(line) = read_response(&mut self.input, &mut self.output)? else {
                return Ok(Turn::End(GameEnd::EndOfInput));
            };

            let directive = match Directive::parse(&line, self.session.word_length()) {
                Ok(directive) => directive,
                Err(err) => {
                    self.warn(&err)?;
                    continue;
                }
            };

            match directive {
                Directive::Matches(matches) => match self.session.observe(&probe, matches) {
                    Ok(outcome) => {
                        self.moves += 1;
                        self.skip.clear();
                        return self.conclude(outcome);
                    }
                    Err(err) => self.warn(&err)?,
                },
                Directive::Substitute(text) => match self.session.substitute(&text) {
                    Ok(word) => {
                        probe = word;
                        self.show_probe(&probe, None)?;
                    }
                    Err(err) => self.warn(&format!("Invalid guess: {err}"))?,
                },
                Directive::List => self.show_candidates()?,
                Directive::Status => self.show_status()?,
                Directive::Exclude(letters) => match self.session.force_exclude(letters) {
                    Ok(outcome) => return self.conclude(outcome),
                    Err(err) => self.warn(&err)?,
                },
                Directive::Keep(letters) => match self.session.force_keep(letters) {
                    Ok(outcome) => return self.conclude(outcome),
                    Err(err) => self.warn(&err)?,
                },
                Directive::Unknown => {
                    let outcome = self.session.discard(&probe);
                    return self.conclude(outcome);
                }
                Directive::New => {
                    self.skip.insert(probe);
                    return Ok(Turn::Next);
                }
                Directive::GameOver => {
                    return Ok(Turn::End(GameEnd::GameOver { moves: self.moves }));
                }
            }
        }
    }

    fn conclude(&mut self, outcome: TurnOutcome) -> io::Result<Turn> {
        match outcome {
            TurnOutcome::Continue { remaining } => {
                writeln!(self.output, "Words left: {remaining}")?;
                Ok(Turn::Next)
            }
            TurnOutcome::Solved(word) => {
                writeln!(
                    self.output,
                    "\n{} {}",
                    "🎉 Solved:".bright_green().bold(),
                    word.text().to_uppercase().bright_white().bold()
                )?;
                Ok(Turn::End(GameEnd::Solved {
                    word,
                    moves: self.moves,
                }))
            }
            TurnOutcome::Contradiction => self.contradiction().map(Turn::End),
        }
    }

    fn contradiction(&mut self) -> io::Result<GameEnd> {
        writeln!(
            self.output,
            "\n{}",
            "❌ No candidates remain! Some responses were inconsistent."
                .red()
                .bold()
        )?;
        Ok(GameEnd::Contradiction { moves: self.moves })
    }

    fn show_probe(&mut self, probe: &Word, score: Option<usize>) -> io::Result<()> {
        writeln!(self.output, "\n{}", "─".repeat(60).cyan())?;
        write!(
            self.output,
            "Guess the word: {}",
            probe.text().to_uppercase().bright_yellow().bold()
        )?;
        match score {
            Some(score) => {
                let label = match self.advisor.config().scenario {
                    Scenario::Worst => format!("(at most {score} left)"),
                    Scenario::Average => format!("(about {score} left on average)"),
                };
                writeln!(self.output, " {}", label.bright_black())?;
            }
            None => writeln!(self.output)?,
        }
        writeln!(self.output, "How many matches?")
    }

    fn show_candidates(&mut self) -> io::Result<()> {
        writeln!(self.output, "Remaining words")?;
        for row in word_rows(&self.session.candidates().sorted(), 8) {
            writeln!(self.output, "  {row}")?;
        }
        Ok(())
    }

    fn show_status(&mut self) -> io::Result<()> {
        let classification = self.session.classification();
        writeln!(self.output, "Keep letters:   {}", format_letters(classification.kept))?;
        writeln!(
            self.output,
            "Remove letters: {}",
            format_letters(classification.removed)
        )?;
        writeln!(
            self.output,
            "Undecided:      {}",
            format_letters(classification.ambiguous())
        )?;
        writeln!(self.output, "Words left: {}", self.session.remaining())
    }

    fn warn(&mut self, message: &dyn Display) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {message}. Enter a number between 0 and {} or type \"game over\".",
            "✗".red(),
            self.session.word_length()
        )
    }
}
