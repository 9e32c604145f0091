//! Hard mode: every guess must agree with what earlier feedback revealed.
//!
//! Three kinds of constraint are tracked:
//!
//!  - letters the answer is known to contain, which every guess must use;
//!  - letters known to be in a specific position, which every guess must keep there;
//!  - letters known to be absent from the answer, which no guess may use.
//!
//! A letter is only ruled out when none of its copies in a guess were marked. Guessing `error`
//! against `crane` marks the first `r` as a hit and the other two as absent, which says nothing
//! about `r` being missing from the answer.

use crate::{Correctness, Feedback};
use std::fmt;
use thiserror::Error;

/// A set of lowercase ASCII letters.
///
/// Iteration is in alphabetical order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const fn new() -> Self {
        LetterSet(0)
    }

    fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "{:?} is not a letter", letter);
        1 << (letter - b'a')
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    pub fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    pub fn is_disjoint(&self, other: &LetterSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(char::from)).finish()
    }
}

/// Why a guess was not admitted in hard mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("letter {0} is not in the word")]
    Forbidden(char),

    #[error("letter {0} must be in your guess")]
    Missing(char),

    /// `position` counts from zero; it is shown to the player counting from one.
    #[error("letter {letter} must be in position {}", .position + 1)]
    Misplaced { letter: char, position: usize },
}

/// The constraints accumulated over one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardMode {
    required_positions: Vec<Option<u8>>,
    required_letters: LetterSet,
    forbidden_letters: LetterSet,
}

impl HardMode {
    /// No constraints, for a round with secrets of `length` letters.
    pub fn new(length: usize) -> Self {
        Self {
            required_positions: vec![None; length],
            required_letters: LetterSet::new(),
            forbidden_letters: LetterSet::new(),
        }
    }

    /// Checks `guess` against every constraint seen so far.
    ///
    /// Forbidden letters are checked first, then required letters, then required positions. Within
    /// each class letters are visited alphabetically and positions left to right, and the first
    /// violation is reported.
    pub fn admits(&self, guess: &str) -> Result<(), Violation> {
        let guess = guess.as_bytes();

        if let Some(letter) = self
            .forbidden_letters
            .iter()
            .find(|letter| guess.contains(letter))
        {
            return Err(Violation::Forbidden(letter as char));
        }

        if let Some(letter) = self
            .required_letters
            .iter()
            .find(|letter| !guess.contains(letter))
        {
            return Err(Violation::Missing(letter as char));
        }

        for (position, (&g, &required)) in guess.iter().zip(&self.required_positions).enumerate() {
            match required {
                Some(letter) if letter != g => {
                    return Err(Violation::Misplaced {
                        letter: letter as char,
                        position,
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Folds the feedback for an admitted `guess` into the constraints.
    pub fn update(&mut self, guess: &str, feedback: &Feedback) {
        let word = guess.as_bytes();
        debug_assert_eq!(word.len(), feedback.len());
        debug_assert_eq!(word.len(), self.required_positions.len());

        for (position, (&letter, &mark)) in word.iter().zip(feedback.cells()).enumerate() {
            match mark {
                Correctness::Hit(c) => {
                    debug_assert!(
                        !matches!(self.required_positions[position], Some(p) if p != c),
                        "position {} was already known to hold a different letter",
                        position
                    );
                    self.required_positions[position] = Some(c);
                    self.required_letters.insert(c);
                }
                Correctness::Present => self.required_letters.insert(letter),
                Correctness::Absent => {
                    let marked = word
                        .iter()
                        .zip(feedback.cells())
                        .any(|(&l, &m)| l == letter && m != Correctness::Absent);
                    if !marked {
                        self.forbidden_letters.insert(letter);
                    }
                }
            }
        }
    }

    pub fn required_positions(&self) -> &[Option<u8>] {
        &self.required_positions
    }

    pub fn required_letters(&self) -> LetterSet {
        self.required_letters
    }

    pub fn forbidden_letters(&self) -> LetterSet {
        self.forbidden_letters
    }
}
