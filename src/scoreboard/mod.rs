pub mod error;
pub mod models;

pub use error::ScoreboardError;
pub use models::{GameKey, GameSnapshot, LiveGame};

use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Everything behind the lock: the live set plus the playing-team index
/// used to enforce one live game per team.
#[derive(Debug, Default)]
struct BoardState {
    games: HashMap<GameKey, LiveGame>,
    playing: HashSet<String>,
    next_seq: u64,
}

/// Thread-safe registry of live games (single shared state with mutex).
///
/// The handle is cheap to clone and share across tasks; all operations
/// serialize on one lock, which is plenty for a live set of tens of
/// games.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    state: Arc<Mutex<BoardState>>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new game with score 0-0 and start time = now.
    ///
    /// Returns the key under which the game is tracked; the same key is
    /// later passed to `update_score` and `finish_game`.
    pub fn start_game(&self, home: &str, away: &str) -> Result<GameKey, ScoreboardError> {
        let home = home.trim();
        let away = away.trim();
        if home.is_empty() || away.is_empty() {
            return Err(ScoreboardError::EmptyTeamName);
        }
        if home == away {
            return Err(ScoreboardError::SameTeam(home.to_string()));
        }

        let mut state = self.state.lock().unwrap();
        for team in [home, away] {
            if state.playing.contains(team) {
                return Err(ScoreboardError::TeamAlreadyPlaying(team.to_string()));
            }
        }

        let key = GameKey::new(home, away);
        let seq = state.next_seq;
        state.next_seq += 1;
        state.playing.insert(home.to_string());
        state.playing.insert(away.to_string());
        state.games.insert(
            key.clone(),
            LiveGame {
                key: key.clone(),
                home_score: 0,
                away_score: 0,
                started_at: Utc::now(),
                seq,
            },
        );

        info!("Game started: {}", key);
        Ok(key)
    }

    /// Replace both scores of a live game.
    ///
    /// Each side is checked independently against its current value; a
    /// regression on either side rejects the whole call and leaves both
    /// scores untouched.
    pub fn update_score(
        &self,
        key: &GameKey,
        new_home: u32,
        new_away: u32,
    ) -> Result<(), ScoreboardError> {
        let mut state = self.state.lock().unwrap();
        let game = state
            .games
            .get_mut(key)
            .ok_or_else(|| ScoreboardError::GameNotFound(key.clone()))?;

        if new_home < game.home_score || new_away < game.away_score {
            return Err(ScoreboardError::ScoreRegression {
                key: key.clone(),
                current_home: game.home_score,
                current_away: game.away_score,
                new_home,
                new_away,
            });
        }

        game.home_score = new_home;
        game.away_score = new_away;
        info!("Score updated: {} {}-{}", key, new_home, new_away);
        Ok(())
    }

    /// Remove a game from the live set, freeing both teams to start a
    /// new game. Removal is final; further calls against the same key
    /// fail with `GameNotFound`.
    pub fn finish_game(&self, key: &GameKey) -> Result<(), ScoreboardError> {
        let mut state = self.state.lock().unwrap();
        let game = state
            .games
            .remove(key)
            .ok_or_else(|| ScoreboardError::GameNotFound(key.clone()))?;
        state.playing.remove(&game.key.home);
        state.playing.remove(&game.key.away);
        info!(
            "Game finished: {} (final {}-{})",
            key, game.home_score, game.away_score
        );
        Ok(())
    }

    /// Ordered snapshot of all live games: total score descending, then
    /// start time descending, then creation sequence descending. Never
    /// mutates state; returns an empty vec when no games are live.
    pub fn summary(&self) -> Vec<GameSnapshot> {
        let state = self.state.lock().unwrap();
        let mut games: Vec<&LiveGame> = state.games.values().collect();
        games.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
        games.into_iter().map(GameSnapshot::from).collect()
    }

    /// Whether the team is currently part of a live game.
    #[allow(dead_code)]
    pub fn is_playing(&self, team: &str) -> bool {
        self.state.lock().unwrap().playing.contains(team)
    }

    /// Number of live games.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().games.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every live game and free all teams.
    pub fn reset(&self) {
        let mut state = self.state.lock().unwrap();
        let dropped = state.games.len();
        state.games.clear();
        state.playing.clear();
        if dropped > 0 {
            info!("Scoreboard reset ({} live games dropped)", dropped);
        }
    }
}
