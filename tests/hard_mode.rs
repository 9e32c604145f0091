use proptest::prelude::*;
use wordle::{Correctness, Feedback, HardMode, Violation};

fn word(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(b'a'..=b'f', len)
        .prop_map(|bytes| String::from_utf8(bytes).expect("ascii"))
}

/// An answer and a run of guesses at it, all of one length.
fn game() -> impl Strategy<Value = (String, Vec<String>)> {
    (3usize..=6).prop_flat_map(|len| (word(len), proptest::collection::vec(word(len), 1..12)))
}

/// Does `guess` agree with everything a scored guess revealed?
fn consistent(guess: &str, prev: &str, feedback: &Feedback) -> bool {
    let guess = guess.as_bytes();
    prev.bytes()
        .zip(feedback.cells())
        .enumerate()
        .all(|(i, (letter, &mark))| match mark {
            Correctness::Hit(c) => guess[i] == c,
            Correctness::Present => guess.contains(&letter),
            Correctness::Absent => {
                let marked = prev
                    .bytes()
                    .zip(feedback.cells())
                    .any(|(l, &m)| l == letter && m != Correctness::Absent);
                marked || !guess.contains(&letter)
            }
        })
}

#[test]
fn rejects_forbidden_letter_first() {
    let mut hm = HardMode::new(5);
    let feedback = Feedback::compute("wxyzb", "abcde");
    assert_eq!(feedback.to_string(), "_*___");
    hm.update("abcde", &feedback);
    assert_eq!(hm.admits("catch"), Err(Violation::Forbidden('a')));
    assert_eq!(
        hm.admits("catch").unwrap_err().to_string(),
        "letter a is not in the word"
    );
}

#[test]
fn misplaced_reports_one_based_position() {
    let mut hm = HardMode::new(4);
    hm.update("seed", &Feedback::compute("seed", "seed"));
    assert_eq!(
        hm.admits("sede"),
        Err(Violation::Misplaced {
            letter: 'e',
            position: 2
        })
    );
    assert_eq!(
        hm.admits("sede").unwrap_err().to_string(),
        "letter e must be in position 3"
    );
}

proptest! {
    #[test]
    fn answer_is_always_admitted((answer, guesses) in game()) {
        let mut hm = HardMode::new(answer.len());
        for guess in &guesses {
            if hm.admits(guess).is_ok() {
                hm.update(guess, &Feedback::compute(&answer, guess));
            }
            prop_assert_eq!(hm.admits(&answer), Ok(()));
        }
    }

    #[test]
    fn admitted_guesses_agree_with_history((answer, guesses) in game()) {
        let mut hm = HardMode::new(answer.len());
        let mut history: Vec<(String, Feedback)> = Vec::new();
        for guess in guesses {
            if hm.admits(&guess).is_err() {
                continue;
            }
            for (prev, feedback) in &history {
                prop_assert!(
                    consistent(&guess, prev, feedback),
                    "{} admitted after {} scored {}",
                    guess,
                    prev,
                    feedback
                );
                // the history itself was produced against this answer
                prop_assert_eq!(&Feedback::compute(&answer, prev), feedback);
            }
            let feedback = Feedback::compute(&answer, &guess);
            hm.update(&guess, &feedback);
            history.push((guess, feedback));
        }
    }

    #[test]
    fn repeating_a_guess_only_trips_on_its_absent_letters((answer, guesses) in game()) {
        let mut hm = HardMode::new(answer.len());
        for guess in &guesses {
            if hm.admits(guess).is_err() {
                continue;
            }
            let feedback = Feedback::compute(&answer, guess);
            hm.update(guess, &feedback);
            match hm.admits(guess) {
                Ok(()) => {}
                Err(Violation::Forbidden(c)) => {
                    let absent = guess
                        .bytes()
                        .zip(feedback.cells())
                        .any(|(l, &m)| l == c as u8 && m == Correctness::Absent);
                    prop_assert!(absent, "{} forbidden but not absent in {}", c, guess);
                }
                Err(other) => prop_assert!(false, "{} rejected with {}", guess, other),
            }
        }
    }

    #[test]
    fn required_and_forbidden_stay_disjoint((answer, guesses) in game()) {
        let mut hm = HardMode::new(answer.len());
        for guess in &guesses {
            if hm.admits(guess).is_ok() {
                hm.update(guess, &Feedback::compute(&answer, guess));
            }
            prop_assert!(hm.required_letters().is_disjoint(&hm.forbidden_letters()));
            prop_assert!(hm.forbidden_letters().iter().all(|l| !answer.as_bytes().contains(&l)));
            for (i, required) in hm.required_positions().iter().enumerate() {
                if let Some(letter) = *required {
                    prop_assert_eq!(answer.as_bytes()[i], letter);
                    prop_assert!(hm.required_letters().contains(letter));
                }
            }
        }
    }
}
