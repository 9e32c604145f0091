use std::{borrow::Cow, fmt};

pub mod console;
pub mod dictionary;
mod error;
pub mod hard_mode;
pub mod leaderboard;
pub mod round;
pub mod session;

pub use dictionary::Dictionary;
pub use error::Error;
pub use hard_mode::{HardMode, LetterSet, Violation};
pub use leaderboard::{Leaderboard, RoundRecord};
pub use round::{GuessError, Round, State};
pub use session::Session;

/// The shortest secret a round can be played with.
pub const MIN_LEN: usize = 3;
/// The longest secret a round can be played with.
pub const MAX_LEN: usize = 6;

/// Returns true if `word` is non-empty and made up only of lowercase ASCII letters.
pub fn is_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|c| c.is_ascii_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Correctness {
    /// Green
    Hit(u8),
    /// Yellow
    Present,
    /// Gray
    Absent,
}

impl Correctness {
    /// Claims the leftmost unused occurrence of `letter` in `answer`, if there is one.
    fn is_present(letter: u8, answer: &[u8], used: &mut [bool]) -> bool {
        answer.iter().zip(used.iter_mut()).any(|(&a, used)| {
            if a == letter && !*used {
                *used = true;
                return true;
            }
            false
        })
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Correctness::Hit(_))
    }
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Correctness::Hit(c) => write!(f, "{}", c as char),
            Correctness::Present => f.write_str("*"),
            Correctness::Absent => f.write_str("_"),
        }
    }
}

/// The per-position evaluation of a guess against the answer.
///
/// Renders as the guessed letter for every hit, `*` for letters that are elsewhere in the answer,
/// and `_` for letters with no remaining occurrence in the answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Correctness>);

impl Feedback {
    /// Scores `guess` against `answer`.
    ///
    /// Hits are assigned first. Every other guessed letter then claims the leftmost occurrence of
    /// that letter in the answer that is neither a hit nor already claimed, so a letter never earns
    /// more hits and presents than the answer has copies of it.
    ///
    /// Both words must be lowercase ASCII and of the same length.
    pub fn compute(answer: &str, guess: &str) -> Self {
        assert_eq!(answer.len(), guess.len());
        let answer = answer.as_bytes();
        let guess = guess.as_bytes();
        let mut c = vec![Correctness::Absent; guess.len()];
        let mut used = vec![false; answer.len()];

        // Find all correct letters
        for (((&answer, &guess), c), used) in answer
            .iter()
            .zip(guess)
            .zip(c.iter_mut())
            .zip(used.iter_mut())
        {
            if answer == guess {
                *c = Correctness::Hit(guess);
                *used = true;
            }
        }
        // Check the remaining letters left to right against what is left of the answer
        for (&guess, c) in guess.iter().zip(c.iter_mut()) {
            if *c == Correctness::Absent && Correctness::is_present(guess, answer, &mut used) {
                *c = Correctness::Present;
            }
        }

        Feedback(c)
    }

    pub fn cells(&self) -> &[Correctness] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_win(&self) -> bool {
        self.0.iter().all(Correctness::is_hit)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// A scored guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess<'a> {
    pub word: Cow<'a, str>,
    pub mask: Feedback,
}

impl Guess<'_> {
    /// Check if the guess would be possible to observe when `word` is the correct answer.
    pub fn matches(&self, word: &str) -> bool {
        word.len() == self.word.len() && Feedback::compute(word, &self.word) == self.mask
    }
}

#[cfg(test)]
macro_rules! mask {
    (P) => {$crate::Correctness::Present};
    (A) => {$crate::Correctness::Absent};
    ($c:literal) => {$crate::Correctness::Hit($c as u8)};
    ($($c:tt)+) => {vec![
        $(mask!($c)),+
    ]}
}
