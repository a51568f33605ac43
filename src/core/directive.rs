//! Turn protocol vocabulary
//!
//! Parses one console line into a `Directive`. Anything outside the fixed
//! vocabulary comes back as `InvalidInput` so the caller can re-prompt.

use super::error::InvalidInput;
use super::letters::LetterSet;

/// A response to a probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// The probe shared this many letters with the secret
    Matches(usize),
    /// Play this word instead of the suggested probe
    Substitute(String),
    /// Print remaining candidates
    List,
    /// Print kept/removed letters and candidate count
    Status,
    /// Force-exclude these letters
    Exclude(LetterSet),
    /// Force-include these letters
    Keep(LetterSet),
    /// Outcome of the probe is unknown; drop it
    Unknown,
    /// Suggest a different probe without new information
    New,
    /// End the session
    GameOver,
}

impl Directive {
    /// Parse a line typed in response to a probe of length `word_length`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown commands, missing or non-letter
    /// arguments, and match counts outside `0..=word_length`.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Directive;
    ///
    /// assert_eq!(Directive::parse("3", 5), Ok(Directive::Matches(3)));
    /// assert_eq!(Directive::parse("list", 5), Ok(Directive::List));
    /// assert!(Directive::parse("6", 5).is_err());
    /// ```
    pub fn parse(input: &str, word_length: usize) -> Result<Self, InvalidInput> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InvalidInput::Empty);
        }

        let lowered = input.to_ascii_lowercase();
        let mut parts = lowered.split_whitespace();
        let command = parts.next().ok_or(InvalidInput::Empty)?;
        let argument = parts.next();

        match command {
            "list" => Ok(Self::List),
            "remaining" | "status" => Ok(Self::Status),
            "unknown" => Ok(Self::Unknown),
            "new" => Ok(Self::New),
            "quit" | "exit" => Ok(Self::GameOver),
            "game" if argument == Some("over") => Ok(Self::GameOver),
            "guess" => argument
                .map(|word| Self::Substitute(word.to_string()))
                .ok_or(InvalidInput::MissingArgument { command: "guess" }),
            "remove" => {
                let limit = (LetterSet::ALPHABET_SIZE - word_length).saturating_sub(1);
                letters_argument(argument, "remove", limit).map(Self::Exclude)
            }
            "keep" => letters_argument(argument, "keep", word_length).map(Self::Keep),
            _ => parse_match_count(command, word_length),
        }
    }
}

/// Letter argument of `keep`/`remove`
///
/// The limit applies to the typed length, so repeated letters count every
/// time they are typed.
fn letters_argument(
    argument: Option<&str>,
    command: &'static str,
    limit: usize,
) -> Result<LetterSet, InvalidInput> {
    let text = argument.ok_or(InvalidInput::MissingArgument { command })?;
    let letters =
        LetterSet::from_letters(text).ok_or_else(|| InvalidInput::NotLetters(text.to_string()))?;

    if text.len() > limit {
        return Err(InvalidInput::TooManyLetters {
            given: text.len(),
            limit,
        });
    }
    Ok(letters)
}

fn parse_match_count(text: &str, word_length: usize) -> Result<Directive, InvalidInput> {
    let count: usize = text
        .parse()
        .map_err(|_| InvalidInput::Unrecognized(text.to_string()))?;

    if count > word_length {
        return Err(InvalidInput::MatchCountOutOfRange { word_length });
    }
    Ok(Directive::Matches(count))
}
