use crate::console::Console;
use crate::{is_word, Dictionary, Error, Feedback, Guess, HardMode, Violation};
use rand::Rng;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Why a guess was turned away without costing an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// Wrong length, or not made of letters.
    #[error("Please type in a valid word.")]
    InvalidShape,

    #[error(transparent)]
    HardMode(#[from] Violation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingGuess,
    Terminated,
}

/// One game: a secret and the guesses made at it so far.
#[derive(Debug, Clone)]
pub struct Round {
    secret: String,
    hard_mode: Option<HardMode>,
    attempts: usize,
    history: Vec<Guess<'static>>,
    state: State,
}

impl Round {
    pub fn new(secret: impl Into<String>, hard_mode: bool) -> Self {
        let secret = secret.into();
        debug_assert!(is_word(&secret));
        Self {
            hard_mode: hard_mode.then(|| HardMode::new(secret.len())),
            secret,
            attempts: 0,
            history: Vec::new(),
            state: State::AwaitingGuess,
        }
    }

    /// Starts a round with a secret of `length` letters picked at random from `dictionary`.
    pub fn start<R: Rng + ?Sized>(
        dictionary: &Dictionary,
        length: usize,
        hard_mode: bool,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let secret = dictionary.choose(length, rng)?;
        Ok(Self::new(secret, hard_mode))
    }

    /// Scores one line of player input.
    ///
    /// The input is trimmed and lowercased first. Input that is not a word of the right length,
    /// or that hard mode rejects, does not count as an attempt.
    pub fn submit(&mut self, input: &str) -> Result<&Guess<'static>, GuessError> {
        debug_assert_eq!(self.state, State::AwaitingGuess);
        let guess = input.trim().to_ascii_lowercase();
        if guess.len() != self.secret.len() || !is_word(&guess) {
            return Err(GuessError::InvalidShape);
        }
        if let Some(hard_mode) = &self.hard_mode {
            hard_mode.admits(&guess)?;
        }

        let mask = Feedback::compute(&self.secret, &guess);
        self.attempts += 1;
        if let Some(hard_mode) = &mut self.hard_mode {
            hard_mode.update(&guess, &mask);
        }
        if guess == self.secret {
            self.state = State::Terminated;
        }
        self.history.push(Guess {
            word: Cow::Owned(guess),
            mask,
        });
        Ok(&self.history[self.history.len() - 1])
    }

    pub fn length(&self) -> usize {
        self.secret.len()
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_hard_mode(&self) -> bool {
        self.hard_mode.is_some()
    }

    pub fn hard_mode(&self) -> Option<&HardMode> {
        self.hard_mode.as_ref()
    }

    /// Every scored guess, oldest first.
    pub fn history(&self) -> &[Guess<'static>] {
        &self.history
    }
}

/// Plays a round on the console until the secret is guessed, and returns the finished round.
pub fn run_round<R, W, G>(
    console: &mut Console<R, W>,
    dictionary: &Dictionary,
    length: usize,
    hard_mode: bool,
    rng: &mut G,
) -> Result<Round, Error>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut round = Round::start(dictionary, length, hard_mode, rng)?;
    while round.state() == State::AwaitingGuess {
        let input = console.prompt("Type your guess: ")?;
        match round.submit(&input) {
            Ok(guess) => {
                console.say("")?;
                if hard_mode {
                    console.say(format_args!("{} ({})", guess.mask, guess.word))?;
                } else {
                    console.say(&guess.mask)?;
                }
                console.say("")?;
            }
            Err(e) => {
                debug!(error = %e, "guess rejected");
                console.say(e)?;
            }
        }
    }
    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::{run_round, GuessError, Round, State};
    use crate::console::Console;
    use crate::{Dictionary, Error, Violation};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn solved_first_try() {
        let mut round = Round::new("cat", false);
        assert_eq!(round.submit("cat").unwrap().mask.to_string(), "cat");
        assert_eq!(round.state(), State::Terminated);
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn input_is_normalized() {
        let mut round = Round::new("crane", false);
        let guess = round.submit("  CrAtE\n").unwrap();
        assert_eq!(guess.word, "crate");
        assert_eq!(guess.mask.to_string(), "cra_e");
        assert_eq!(round.state(), State::AwaitingGuess);
    }

    #[test]
    fn bad_shapes_are_free() {
        let mut round = Round::new("crane", false);
        for input in ["", "cran", "cranes", "cr4ne", "cr-ne", "crâne"] {
            assert_eq!(round.submit(input).unwrap_err(), GuessError::InvalidShape, "{:?}", input);
        }
        assert_eq!(round.attempts(), 0);
        // not a real word, but the right shape
        round.submit("zzzzz").unwrap();
        assert_eq!(round.attempts(), 1);
        assert!(round.history().iter().all(|g| g.matches("crane")));
    }

    #[test]
    fn hard_mode_rejections_are_free() {
        let mut round = Round::new("crane", true);
        assert_eq!(round.submit("stole").unwrap().mask.to_string(), "____e");
        assert_eq!(
            round.submit("tribe").unwrap_err(),
            GuessError::HardMode(Violation::Forbidden('t'))
        );
        assert_eq!(
            round.submit("pinch").unwrap_err(),
            GuessError::HardMode(Violation::Missing('e'))
        );
        assert_eq!(round.attempts(), 1);
        round.submit("crane").unwrap();
        assert_eq!(round.attempts(), 2);
        assert_eq!(round.state(), State::Terminated);
        assert!(round.hard_mode().is_some());
    }

    #[test]
    fn easy_mode_allows_anything_shaped_right() {
        let mut round = Round::new("crane", false);
        round.submit("stole").unwrap();
        round.submit("stole").unwrap();
        assert_eq!(round.attempts(), 2);
        assert!(!round.is_hard_mode());
    }

    #[test]
    fn start_needs_words() {
        let d = Dictionary::from_words(["cat"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Round::start(&d, 4, false, &mut rng),
            Err(Error::NoWordsOfLength(4))
        ));
        let round = Round::start(&d, 3, true, &mut rng).unwrap();
        assert_eq!(round.secret(), "cat");
        assert_eq!(round.length(), 3);
    }

    fn play(input: &str, hard_mode: bool) -> (Result<usize, Error>, String) {
        let d = Dictionary::from_words(["crane"]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut console = Console::new(Cursor::new(input), Vec::new());
        let result = run_round(&mut console, &d, 5, hard_mode, &mut rng).map(|r| r.attempts());
        let (_, output) = console.into_inner();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn console_round() {
        let (attempts, output) = play("abcde x crate crane\n", false);
        assert_eq!(attempts.unwrap(), 3);
        assert_eq!(
            output,
            "Type your guess: \n*_*_e\n\n\
             Type your guess: Please type in a valid word.\n\
             Type your guess: \ncra_e\n\n\
             Type your guess: \ncrane\n\n"
        );
    }

    #[test]
    fn console_round_hard_mode() {
        let (attempts, output) = play("crate\nstole\ncrane\n", true);
        assert_eq!(attempts.unwrap(), 2);
        assert!(output.contains("\ncra_e (crate)\n\n"));
        assert!(output.contains("letter t is not in the word\n"));
        assert!(output.contains("\ncrane (crane)\n\n"));
    }

    #[test]
    fn console_round_input_closed() {
        let (attempts, _) = play("crate\n", false);
        assert!(matches!(attempts, Err(Error::InputClosed)));
    }
}
