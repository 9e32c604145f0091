use crate::{Error, MAX_LEN, MIN_LEN};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Legal secrets, bucketed by length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeMap<usize, Vec<String>>,
}

impl Dictionary {
    /// The word list compiled into the binary.
    pub fn bundled() -> &'static Self {
        static BUNDLED: Lazy<Dictionary> = Lazy::new(|| {
            Dictionary::from_words(
                BUNDLED_WORDS
                    .values()
                    .flat_map(|words| words.iter().copied()),
            )
        });
        &BUNDLED
    }

    /// Reads a word list with one word per line.
    ///
    /// Lines that are not a word of an allowed length are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let unavailable = |source| Error::WordListUnavailable {
            path: path.to_owned(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(unavailable)?;
        if dictionary.is_empty() {
            return Err(Error::EmptyWordList {
                path: path.to_owned(),
            });
        }
        info!(
            path = %path.display(),
            words = dictionary.len(),
            "loaded word list"
        );
        Ok(dictionary)
    }

    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut dictionary = Self::default();
        let mut skipped = 0;
        for line in reader.lines() {
            if !dictionary.insert(&line?) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            debug!(skipped, "skipped lines that are not words");
        }
        Ok(dictionary)
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Adds `word` in lowercase if it is between `MIN_LEN` and `MAX_LEN` ASCII letters long.
    ///
    /// Returns whether the word was added.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if !(MIN_LEN..=MAX_LEN).contains(&word.len())
            || !word.bytes().all(|c| c.is_ascii_alphabetic())
        {
            return false;
        }
        self.words
            .entry(word.len())
            .or_default()
            .push(word.to_ascii_lowercase());
        true
    }

    /// All words of the given length, in the order they were added.
    pub fn words(&self, length: usize) -> &[String] {
        self.words.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Picks a word of the given length uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<&str, Error> {
        self.words(length)
            .choose(rng)
            .map(String::as_str)
            .ok_or(Error::NoWordsOfLength(length))
    }

    /// The number of words of each length, shortest first.
    pub fn lengths(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.words.iter().map(|(&len, words)| (len, words.len()))
    }

    pub fn len(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
