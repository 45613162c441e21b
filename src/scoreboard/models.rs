use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable identity of a live game: the exact (home, away) team pair.
///
/// Equality and hashing cover the pair only, never the mutable score or
/// start time, so a key stays valid as a map key for the whole life of
/// the game it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameKey {
    pub home: String,
    pub away: String,
}

impl GameKey {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        GameKey {
            home: home.into(),
            away: away.into(),
        }
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Mutable record for one game in the live set.
///
/// `started_at` and `seq` are fixed at creation; only the score pair
/// moves, and only forward.
#[derive(Debug, Clone)]
pub struct LiveGame {
    pub key: GameKey,
    pub home_score: u32,
    pub away_score: u32,
    pub started_at: DateTime<Utc>,
    /// Creation sequence number, strictly increasing per board. Breaks
    /// ranking ties when two games share a start timestamp at the
    /// clock's resolution.
    pub seq: u64,
}

impl LiveGame {
    pub fn total_score(&self) -> u32 {
        self.home_score + self.away_score
    }

    /// Ranking key: higher sorts first in the summary.
    pub fn rank_key(&self) -> (u32, DateTime<Utc>, u64) {
        (self.total_score(), self.started_at, self.seq)
    }
}

/// One row of the summary: a display-ready snapshot of a live game at
/// the moment of the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub home_team: String,
    pub home_score: u32,
    pub away_team: String,
    pub away_score: u32,
    pub started_at: DateTime<Utc>,
}

impl From<&LiveGame> for GameSnapshot {
    fn from(game: &LiveGame) -> Self {
        GameSnapshot {
            home_team: game.key.home.clone(),
            home_score: game.home_score,
            away_team: game.key.away.clone(),
            away_score: game.away_score,
            started_at: game.started_at,
        }
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home: &str, away: &str, hs: u32, aws: u32, seq: u64) -> LiveGame {
        LiveGame {
            key: GameKey::new(home, away),
            home_score: hs,
            away_score: aws,
            started_at: Utc::now(),
            seq,
        }
    }

    #[test]
    fn test_total_score() {
        assert_eq!(game("Spain", "Brazil", 10, 2, 0).total_score(), 12);
        assert_eq!(game("Germany", "France", 0, 0, 1).total_score(), 0);
    }

    #[test]
    fn test_snapshot_display_format() {
        let snap = GameSnapshot::from(&game("Mexico", "Canada", 0, 5, 0));
        assert_eq!(snap.to_string(), "Mexico 0 - Canada 5");
    }

    #[test]
    fn test_key_equality_ignores_scores() {
        let a = game("Uruguay", "Italy", 0, 0, 0);
        let b = game("Uruguay", "Italy", 6, 6, 3);
        assert_eq!(a.key, b.key);
    }

    #[test]
    fn test_rank_key_breaks_timestamp_ties_by_seq() {
        let ts = Utc::now();
        let mut a = game("Uruguay", "Italy", 6, 6, 4);
        let mut b = game("Spain", "Brazil", 10, 2, 2);
        a.started_at = ts;
        b.started_at = ts;
        assert!(a.rank_key() > b.rank_key());
    }
}
