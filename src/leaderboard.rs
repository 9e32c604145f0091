use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// A finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub game: usize,
    pub length: usize,
    pub hard_mode: bool,
    pub secret: String,
    pub attempts: usize,
}

impl fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game #{} w/ length {}", self.game, self.length)?;
        if self.hard_mode {
            f.write_str(" (hard)")?;
        }
        Ok(())
    }
}

/// `1 attempt`, `2 attempts`, ...
pub struct Attempts(pub usize);

impl fmt::Display for Attempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = if self.0 == 1 { "" } else { "s" };
        write!(f, "{} attempt{}", self.0, s)
    }
}

/// Finished rounds grouped by how many attempts they took, fewest first.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    by_attempts: BTreeMap<usize, Vec<RoundRecord>>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: RoundRecord) {
        self.by_attempts
            .entry(record.attempts)
            .or_default()
            .push(record);
    }

    /// Attempt counts in ascending order, each with its rounds in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[RoundRecord])> + '_ {
        self.by_attempts
            .iter()
            .map(|(&attempts, records)| (attempts, records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.by_attempts.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_attempts.is_empty()
    }

    pub fn render<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(w, "No games completed.");
        }
        writeln!(w, "Leaderboard:")?;
        for (attempts, records) in self.iter() {
            let games: Vec<_> = records.iter().map(RoundRecord::to_string).collect();
            writeln!(w, "[{}]: {}", games.join(", "), Attempts(attempts))?;
        }
        Ok(())
    }
}
