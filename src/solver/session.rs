//! Solver session state
//!
//! A `Session` owns the candidate set, the guess history and a handle to the
//! dictionary. It is a plain value: cloning it yields an independent snapshot
//! that the advisor can mutate freely.

use super::candidates::CandidateStore;
use super::classifier::LetterClassification;
use super::deducer::trim_letters;
use crate::core::error::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::core::{Guess, LetterSet, SessionError, Word};
use crate::wordlists::Dictionary;
use log::{debug, info};

/// What the candidate set looks like after a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Candidates remain; keep playing
    Continue { remaining: usize },
    /// The last probe matched every letter and nothing else fits
    Solved(Word),
    /// No candidate is consistent with the observations
    Contradiction,
}

/// One game of Jotto in progress
#[derive(Debug, Clone)]
pub struct Session {
    word_length: usize,
    dictionary: Dictionary,
    store: CandidateStore,
    history: Vec<Guess>,
}

impl Session {
    /// Start a session over the `word_length`-letter words of `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidWordLength` unless `word_length` is in
    /// `2..=15`.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::solver::Session;
    /// use jotto_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_lines(["cat", "dog", "crane"]);
    /// let session = Session::new(&dictionary, 3).unwrap();
    /// assert_eq!(session.remaining(), 2);
    ///
    /// assert!(Session::new(&dictionary, 1).is_err());
    /// ```
    pub fn new(dictionary: &Dictionary, word_length: usize) -> Result<Self, SessionError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word_length) {
            return Err(SessionError::InvalidWordLength(word_length));
        }

        let mut store = CandidateStore::new(dictionary.iter().cloned());
        store.restrict_to_length(word_length);
        info!(
            "Session started: {word_length} letters, {} candidates",
            store.len()
        );

        Ok(Self {
            word_length,
            dictionary: dictionary.clone(),
            store,
            history: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.store.len()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn classification(&self) -> LetterClassification {
        self.store.classification()
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether `word` has already been played this session
    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.history.iter().any(|guess| &guess.word == word)
    }

    /// Filter by a response, record it, and run deduction
    ///
    /// This is the unvalidated primitive used by both live turns and
    /// simulation. The caller guarantees `matches <= word_length` and that
    /// `word` has `word_length` letters.
    pub fn pick_word(&mut self, word: &Word, matches: usize) {
        let before = self.store.len();
        self.store.eliminate_by_matches(word, matches);
        let filtered = self.store.len();

        self.history.push(Guess::new(word.clone(), matches));
        let deduced = trim_letters(&mut self.store, &self.history, self.word_length);

        debug!(
            "{word} ({matches}): {before} -> {filtered} by matches, -{deduced} by deduction"
        );
    }

    /// Record a live response to `word`
    ///
    /// Validates the observation, applies it, then drops `word` itself
    /// from the candidates since it has now been played. A full match only
    /// counts as solved if `word` was still a candidate.
    ///
    /// # Errors
    ///
    /// Returns `MatchCountOutOfRange` or `WrongLength` without touching state.
    pub fn observe(&mut self, word: &Word, matches: usize) -> Result<TurnOutcome, SessionError> {
        if matches > self.word_length {
            return Err(SessionError::MatchCountOutOfRange {
                given: matches,
                word_length: self.word_length,
            });
        }
        self.check_length(word)?;

        let was_candidate = self.store.contains(word);
        self.pick_word(word, matches);
        self.store.discard(word);

        let solved = was_candidate && matches == self.word_length;
        Ok(self.outcome(solved.then_some(word)))
    }

    /// Validate a player-chosen probe
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord`, `WrongLength` or `NotInDictionary`.
    pub fn substitute(&self, text: &str) -> Result<Word, SessionError> {
        let word = Word::new(text)?;
        self.check_length(&word)?;
        if !self.dictionary.contains(&word) {
            return Err(SessionError::NotInDictionary(word.text().to_string()));
        }
        Ok(word)
    }

    /// Drop a probe whose outcome is unknown
    pub fn discard(&mut self, word: &Word) -> TurnOutcome {
        self.store.discard(word);
        self.outcome(None)
    }

    /// Force every candidate to contain all of `letters`
    ///
    /// # Errors
    ///
    /// Returns `TooManyLetters` if more than `word_length` distinct letters
    /// are given. The console parser also limits the typed length.
    pub fn force_keep(&mut self, letters: LetterSet) -> Result<TurnOutcome, SessionError> {
        let limit = self.word_length;
        if letters.len() > limit {
            return Err(SessionError::TooManyLetters {
                given: letters.len(),
                limit,
            });
        }

        self.store.keep_letters(letters);
        trim_letters(&mut self.store, &self.history, self.word_length);
        debug!("Forced keep {{{letters}}}: {} remaining", self.store.len());
        Ok(self.outcome(None))
    }

    /// Force every candidate to avoid all of `letters`
    ///
    /// # Errors
    ///
    /// Returns `TooManyLetters` unless fewer than `26 - word_length` distinct
    /// letters are given.
    pub fn force_exclude(&mut self, letters: LetterSet) -> Result<TurnOutcome, SessionError> {
        let limit = LetterSet::ALPHABET_SIZE - self.word_length - 1;
        if letters.len() > limit {
            return Err(SessionError::TooManyLetters {
                given: letters.len(),
                limit,
            });
        }

        self.store.exclude_letters(letters);
        trim_letters(&mut self.store, &self.history, self.word_length);
        debug!("Forced exclude {{{letters}}}: {} remaining", self.store.len());
        Ok(self.outcome(None))
    }

    /// Start over with the full dictionary and an empty history
    pub fn reset(&mut self) {
        let mut store = CandidateStore::new(self.dictionary.iter().cloned());
        store.restrict_to_length(self.word_length);
        self.store = store;
        self.history.clear();
        info!("Session reset: {} candidates", self.store.len());
    }

    fn check_length(&self, word: &Word) -> Result<(), SessionError> {
        if word.len() == self.word_length {
            Ok(())
        } else {
            Err(SessionError::WrongLength {
                word: word.text().to_string(),
                expected: self.word_length,
            })
        }
    }

    fn outcome(&self, full_match: Option<&Word>) -> TurnOutcome {
        match (self.store.len(), full_match) {
            (0, Some(word)) => TurnOutcome::Solved(word.clone()),
            (0, None) => TurnOutcome::Contradiction,
            (remaining, _) => TurnOutcome::Continue { remaining },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_lines(["cat", "dog", "rat", "bat", "stone", "notes"])
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts(session: &Session) -> Vec<&str> {
        session
            .candidates()
            .sorted()
            .into_iter()
            .map(Word::text)
            .collect()
    }

    #[test]
    fn new_restricts_to_word_length() {
        let session = Session::new(&dictionary(), 3).unwrap();
        assert_eq!(texts(&session), ["bat", "cat", "dog", "rat"]);
        assert!(session.history().is_empty());
    }

    #[test]
    fn new_rejects_bad_lengths() {
        for length in [0, 1, 16, 40] {
            assert_eq!(
                Session::new(&dictionary(), length).unwrap_err(),
                SessionError::InvalidWordLength(length)
            );
        }
        assert!(Session::new(&dictionary(), 2).is_ok());
        assert!(Session::new(&dictionary(), 15).is_ok());
    }

    #[test]
    fn cat_rat_scenario() {
        let mut session = Session::new(&dictionary(), 3).unwrap();
        let secret = word("rat");

        session.pick_word(&word("cat"), 1);
        assert_eq!(texts(&session), ["bat", "cat", "rat"]);

        // A live observation also drops the played word
        let mut live = Session::new(&dictionary(), 3).unwrap();
        let outcome = live.observe(&word("cat"), word("cat").matches(&secret)).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue { remaining: 2 });
        assert!(!live.candidates().contains(&word("cat")));

        // "bat" shares a,t with "rat"
        let outcome = live.observe(&word("bat"), word("bat").matches(&secret)).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue { remaining: 1 });
        assert_eq!(texts(&live), ["rat"]);
    }

    #[test]
    fn full_match_with_nothing_left_is_solved() {
        let mut session = Session::new(&dictionary(), 3).unwrap();
        session.observe(&word("dog"), 0).unwrap();
        session.observe(&word("cat"), 2).unwrap();
        session.observe(&word("bat"), 2).unwrap();

        let outcome = session.observe(&word("rat"), 3).unwrap();
        assert_eq!(outcome, TurnOutcome::Solved(word("rat")));
    }

    #[test]
    fn full_match_on_eliminated_word_is_a_contradiction() {
        let mut session = Session::new(&Dictionary::from_lines(["cat", "dog"]), 3).unwrap();
        session.observe(&word("dog"), 0).unwrap();

        let dog = session.substitute("dog").unwrap();
        let outcome = session.observe(&dog, 3).unwrap();
        assert_eq!(outcome, TurnOutcome::Contradiction);
    }

    #[test]
    fn full_match_with_anagram_left_continues() {
        let mut session = Session::new(&dictionary(), 5).unwrap();
        let outcome = session.observe(&word("stone"), 5).unwrap();
        assert_eq!(outcome, TurnOutcome::Continue { remaining: 1 });
        assert_eq!(texts(&session), ["notes"]);
    }

    #[test]
    fn inconsistent_observations_are_a_contradiction() {
        let mut session = Session::new(&dictionary(), 3).unwrap();
        session.observe(&word("cat"), 0).unwrap();
        let outcome = session.observe(&word("dog"), 0).unwrap();
        assert_eq!(outcome, TurnOutcome::Contradiction);
    }

    #[test]
    fn invalid_observations_leave_state_untouched() {
        let mut session = Session::new(&dictionary(), 3).unwrap();

        assert_eq!(
            session.observe(&word("cat"), 4),
            Err(SessionError::MatchCountOutOfRange {
                given: 4,
                word_length: 3
            })
        );
        assert!(matches!(
            session.observe(&word("stone"), 1),
            Err(SessionError::WrongLength { .. })
        ));
        assert_eq!(session.remaining(), 4);
        assert!(session.history().is_empty());
    }

    #[test]
    fn substitute_validates_word() {
        let session = Session::new(&dictionary(), 3).unwrap();

        assert_eq!(session.substitute("DOG").unwrap(), word("dog"));
        assert!(matches!(
            session.substitute("pig"),
            Err(SessionError::NotInDictionary(_))
        ));
        assert!(matches!(
            session.substitute("stone"),
            Err(SessionError::WrongLength { .. })
        ));
        assert!(matches!(
            session.substitute("too"),
            Err(SessionError::InvalidWord(_))
        ));
    }

    #[test]
    fn substitute_accepts_played_or_eliminated_words() {
        let mut session = Session::new(&dictionary(), 3).unwrap();
        session.observe(&word("cat"), 0).unwrap();
        assert!(session.substitute("cat").is_ok());
    }

    #[test]
    fn force_keep_and_exclude_check_limits() {
        let mut session = Session::new(&dictionary(), 3).unwrap();

        assert_eq!(
            session.force_keep(LetterSet::from_letters("abcd").unwrap()),
            Err(SessionError::TooManyLetters { given: 4, limit: 3 })
        );
        // 26 - 3 = 23 letters would leave too few to spell a word
        let too_many = LetterSet::from_letters("abcdefghijklmnopqrstuvw").unwrap();
        assert_eq!(
            session.force_exclude(too_many),
            Err(SessionError::TooManyLetters { given: 23, limit: 22 })
        );
        assert_eq!(session.remaining(), 4);

        let outcome = session.force_keep(LetterSet::from_letters("at").unwrap());
        assert_eq!(outcome, Ok(TurnOutcome::Continue { remaining: 3 }));

        let outcome = session.force_exclude(LetterSet::from_letters("bc").unwrap());
        assert_eq!(outcome, Ok(TurnOutcome::Continue { remaining: 1 }));
        assert_eq!(texts(&session), ["rat"]);
    }

    #[test]
    fn discard_can_exhaust() {
        let mut session = Session::new(&Dictionary::from_lines(["cat"]), 3).unwrap();
        assert_eq!(session.discard(&word("cat")), TurnOutcome::Contradiction);
    }

    #[test]
    fn clones_are_independent_snapshots() {
        let session = Session::new(&dictionary(), 3).unwrap();
        let mut snapshot = session.clone();
        snapshot.pick_word(&word("cat"), 0);

        assert_eq!(snapshot.remaining(), 1);
        assert_eq!(session.remaining(), 4);
        assert!(session.history().is_empty());
    }

    #[test]
    fn reset_restores_everything() {
        let mut session = Session::new(&dictionary(), 3).unwrap();
        session.observe(&word("cat"), 0).unwrap();
        session.reset();

        assert_eq!(session.remaining(), 4);
        assert!(session.history().is_empty());
        assert!(!session.has_guessed(&word("cat")));
    }

    #[test]
    fn has_guessed_tracks_history() {
        let mut session = Session::new(&dictionary(), 3).unwrap();
        session.pick_word(&word("dog"), 0);
        assert!(session.has_guessed(&word("dog")));
        assert!(!session.has_guessed(&word("cat")));
    }
}
