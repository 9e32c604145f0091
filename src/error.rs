use crate::{MAX_LEN, MIN_LEN};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The word list could not be opened or read.
    #[error("could not read word list '{}'", .path.display())]
    WordListUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list was readable but held no usable word.
    #[error(
        "word list '{}' has no words between {} and {} letters long",
        .path.display(),
        MIN_LEN,
        MAX_LEN
    )]
    EmptyWordList { path: PathBuf },

    #[error("there are no words of length {0}")]
    NoWordsOfLength(usize),

    /// Standard input reached end-of-file while waiting for the player.
    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}
