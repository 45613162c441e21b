use thiserror::Error;

use super::models::GameKey;

/// Typed failures surfaced by the scoreboard. Every error is detected
/// before any state mutation, so a failed call leaves the board exactly
/// as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// A team name was empty (whitespace-only counts as empty).
    #[error("team name must not be empty")]
    EmptyTeamName,

    /// Home and away resolved to the same team.
    #[error("'{0}' cannot play against itself")]
    SameTeam(String),

    /// The team is already part of a live game and cannot start another.
    #[error("'{0}' is already playing a live game")]
    TeamAlreadyPlaying(String),

    /// No live game matches the given identity (never started, or
    /// already finished).
    #[error("no live game for {0}")]
    GameNotFound(GameKey),

    /// An update tried to move a score backwards on at least one side.
    #[error("score for {key} cannot go backwards ({current_home}-{current_away} -> {new_home}-{new_away})")]
    ScoreRegression {
        key: GameKey,
        current_home: u32,
        current_away: u32,
        new_home: u32,
        new_away: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let key = GameKey::new("Mexico", "Canada");
        assert_eq!(
            ScoreboardError::GameNotFound(key.clone()).to_string(),
            "no live game for Mexico vs Canada"
        );
        let err = ScoreboardError::ScoreRegression {
            key,
            current_home: 2,
            current_away: 1,
            new_home: 1,
            new_away: 1,
        };
        assert_eq!(
            err.to_string(),
            "score for Mexico vs Canada cannot go backwards (2-1 -> 1-1)"
        );
    }
}
