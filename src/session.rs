use crate::console::Console;
use crate::leaderboard::Attempts;
use crate::round::run_round;
use crate::{Dictionary, Error, Leaderboard, RoundRecord, MAX_LEN, MIN_LEN};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

const WELCOME: &str = "\
Welcome to Wordle! Your objective is to guess the mystery word in the
least amount of guesses. Play as many games as you'd like! At the end,
a leaderboard will display your best games by the number of guesses you used
to get the mystery word! (UNLIMITED GUESSES)
";

const GUIDE: &str = "\
After inputting each guess, you will see symbols on each letter position
of your word that says how close your guess is to the solution:

\"_\" means that the letter is not found in the solution.
\"*\" means that the letter is found in the solution but in a different position.
If the letter shows up in the result, it is in the correct position.
NOTE: a letter marked \"*\" may still appear more than once in the word. Good luck!
";

/// Rounds played back to back against one dictionary, and the leaderboard they build up.
pub struct Session<'d, R, W> {
    dictionary: &'d Dictionary,
    console: Console<R, W>,
    leaderboard: Leaderboard,
    games: usize,
}

impl<'d, R: BufRead, W: Write> Session<'d, R, W> {
    pub fn new(dictionary: &'d Dictionary, console: Console<R, W>) -> Self {
        Self {
            dictionary,
            console,
            leaderboard: Leaderboard::new(),
            games: 0,
        }
    }

    /// Plays rounds until the player stops or input runs out, then prints the leaderboard.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), Error> {
        match self.play(rng) {
            Ok(()) => {}
            Err(Error::InputClosed) => {
                info!("input closed");
                self.console.say("")?;
            }
            Err(e) => return Err(e),
        }
        self.leaderboard.render(self.console.output())?;
        Ok(())
    }

    fn play<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<(), Error> {
        self.console.say(WELCOME)?;
        loop {
            let length = self.prompt_length()?;
            let hard_mode = self.console.confirm("Play in hard mode? (y/n): ")?;

            self.games += 1;
            info!(game = self.games, length, hard_mode, "round started");
            self.console.say(GUIDE)?;
            let round = run_round(&mut self.console, self.dictionary, length, hard_mode, rng)?;
            info!(game = self.games, attempts = round.attempts(), "round finished");

            self.console.say(format_args!(
                "Congratulations! You got the word in {}!",
                Attempts(round.attempts())
            ))?;
            self.leaderboard.record(RoundRecord {
                game: self.games,
                length,
                hard_mode,
                secret: round.secret().to_owned(),
                attempts: round.attempts(),
            });

            if !self.console.confirm("Play another round? (y/n): ")? {
                return Ok(());
            }
        }
    }

    /// Asks for a word length until the player names one the dictionary has words for.
    fn prompt_length(&mut self) -> Result<usize, Error> {
        let question = format!(
            "How long would you like the word solution to be? Choose between {} and {}: ",
            MIN_LEN, MAX_LEN
        );
        loop {
            let answer = self.console.prompt(&question)?;
            let length = match answer.parse::<usize>() {
                Ok(length) => length,
                Err(_) => {
                    self.console.say("Please type in a number.")?;
                    continue;
                }
            };
            if !(MIN_LEN..=MAX_LEN).contains(&length) {
                self.console.say(format_args!(
                    "Please type a number between {} and {}",
                    MIN_LEN, MAX_LEN
                ))?;
                continue;
            }
            if self.dictionary.words(length).is_empty() {
                self.console.say(format_args!(
                    "Sorry, {}.",
                    Error::NoWordsOfLength(length)
                ))?;
                continue;
            }
            return Ok(length);
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn games(&self) -> usize {
        self.games
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
