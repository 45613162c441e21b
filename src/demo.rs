use std::time::Duration;
use tracing::{info, warn};

use crate::scoreboard::{GameKey, Scoreboard};

/// One scripted feed action against the board.
#[derive(Debug, Clone, Copy)]
enum Step {
    Start(&'static str, &'static str),
    Score(&'static str, &'static str, u32, u32),
    Finish(&'static str, &'static str),
}

/// Replay of the classic World Cup afternoon: five games started in
/// order, scores trickling in, then full-time whistles.
const SCRIPT: &[Step] = &[
    Step::Start("Mexico", "Canada"),
    Step::Start("Spain", "Brazil"),
    Step::Start("Germany", "France"),
    Step::Start("Uruguay", "Italy"),
    Step::Start("Argentina", "Australia"),
    Step::Score("Mexico", "Canada", 0, 1),
    Step::Score("Spain", "Brazil", 3, 0),
    Step::Score("Germany", "France", 1, 0),
    Step::Score("Uruguay", "Italy", 2, 2),
    Step::Score("Argentina", "Australia", 1, 0),
    Step::Score("Mexico", "Canada", 0, 3),
    Step::Score("Spain", "Brazil", 7, 1),
    Step::Score("Germany", "France", 2, 1),
    Step::Score("Uruguay", "Italy", 4, 4),
    Step::Score("Argentina", "Australia", 2, 1),
    Step::Score("Mexico", "Canada", 0, 5),
    Step::Score("Spain", "Brazil", 10, 2),
    Step::Score("Germany", "France", 2, 2),
    Step::Score("Uruguay", "Italy", 6, 6),
    Step::Score("Argentina", "Australia", 3, 1),
    Step::Finish("Germany", "France"),
    Step::Finish("Mexico", "Canada"),
    Step::Finish("Argentina", "Australia"),
    Step::Finish("Spain", "Brazil"),
    Step::Finish("Uruguay", "Italy"),
];

/// Spawns a background task that replays the scripted feed against the
/// board at the given tick interval, looping forever. Failed steps are
/// logged and skipped so an operator poking the API alongside the demo
/// cannot wedge the feed.
pub fn start_demo_feed(board: Scoreboard, tick: Duration) {
    tokio::spawn(async move {
        info!("Demo feed started ({} steps, tick={:?})", SCRIPT.len(), tick);
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            for step in SCRIPT {
                interval.tick().await;
                if let Err(e) = apply_step(&board, step) {
                    warn!("Demo step {:?} skipped: {}", step, e);
                }
            }
            interval.tick().await;
            info!("Demo cycle complete ({} live games left), restarting", board.len());
            board.reset();
        }
    });
}

fn apply_step(board: &Scoreboard, step: &Step) -> anyhow::Result<()> {
    match *step {
        Step::Start(home, away) => {
            board.start_game(home, away)?;
        }
        Step::Score(home, away, hs, aws) => {
            board.update_score(&GameKey::new(home, away), hs, aws)?;
        }
        Step::Finish(home, away) => {
            board.finish_game(&GameKey::new(home, away))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replays_cleanly_on_fresh_board() {
        let board = Scoreboard::new();
        for step in SCRIPT {
            apply_step(&board, step).unwrap();
        }
        // Every started game was finished.
        assert!(board.is_empty());
    }

    #[test]
    fn test_script_reaches_canonical_leaderboard() {
        let board = Scoreboard::new();
        for step in SCRIPT {
            if matches!(*step, Step::Finish(..)) {
                break;
            }
            apply_step(&board, step).unwrap();
        }
        let order: Vec<String> = board
            .summary()
            .iter()
            .map(|snap| snap.to_string())
            .collect();
        assert_eq!(
            order,
            vec![
                "Uruguay 6 - Italy 6",
                "Spain 10 - Brazil 2",
                "Mexico 0 - Canada 5",
                "Argentina 3 - Australia 1",
                "Germany 2 - France 2",
            ]
        );
    }
}
