use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::scoreboard::{GameKey, Scoreboard, ScoreboardError};

#[derive(Clone)]
pub struct AppState {
    pub board: Scoreboard,
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/summary", get(summary_handler))
        .route("/api/summary/text", get(summary_text_handler))
        .route("/api/games", post(start_game_handler))
        .route("/api/games/score", post(update_score_handler))
        .route("/api/games/finish", post(finish_game_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub home_team: String,
    pub away_team: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScoreRequest {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

/// Map a scoreboard rejection onto an HTTP status.
fn status_for(err: &ScoreboardError) -> StatusCode {
    match err {
        ScoreboardError::EmptyTeamName | ScoreboardError::SameTeam(_) => StatusCode::BAD_REQUEST,
        ScoreboardError::TeamAlreadyPlaying(_) => StatusCode::CONFLICT,
        ScoreboardError::GameNotFound(_) => StatusCode::NOT_FOUND,
        ScoreboardError::ScoreRegression { .. } => StatusCode::CONFLICT,
    }
}

fn reject(err: ScoreboardError) -> (StatusCode, String) {
    (status_for(&err), err.to_string())
}

async fn index_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/summary
async fn summary_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.board.summary())
}

/// GET /api/summary/text — one line per game, leaderboard order.
async fn summary_text_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let lines: Vec<String> = state
        .board
        .summary()
        .iter()
        .map(|snap| snap.to_string())
        .collect();
    lines.join("\n")
}

/// POST /api/games
async fn start_game_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartGameRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .board
        .start_game(&req.home_team, &req.away_team)
        .map(|key| (StatusCode::CREATED, Json(key)))
        .map_err(reject)
}

/// POST /api/games/score
async fn update_score_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateScoreRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let key = GameKey::new(req.home_team, req.away_team);
    state
        .board
        .update_score(&key, req.home_score, req.away_score)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(reject)
}

/// POST /api/games/finish
async fn finish_game_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartGameRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let key = GameKey::new(req.home_team, req.away_team);
    state
        .board
        .finish_game(&key)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(reject)
}

/// Embedded single-file leaderboard page.
const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Live Scoreboard</title>
<style>
  :root { --bg: #0f1117; --card: #1a1d27; --border: #2a2d3a; --accent: #6c63ff; --text: #e0e0e0; --muted: #8888aa; }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  .status-dot { width: 10px; height: 10px; border-radius: 50%; background: #00c896; display: inline-block; animation: pulse 1.5s infinite; }
  @keyframes pulse { 0%,100% { opacity: 1; } 50% { opacity: .3; } }
  main { padding: 1.5rem 2rem; }
  .panel { background: var(--card); border: 1px solid var(--border); border-radius: 10px; overflow: hidden; max-width: 640px; margin: 0 auto; }
  .panel-header { padding: .9rem 1.2rem; border-bottom: 1px solid var(--border); font-weight: 600; }
  table { width: 100%; border-collapse: collapse; }
  th { padding: .7rem 1rem; text-align: left; font-size: .75rem; text-transform: uppercase; color: var(--muted); border-bottom: 1px solid var(--border); }
  td { padding: .65rem 1rem; font-size: .95rem; border-bottom: 1px solid #1e2130; }
  tr:last-child td { border-bottom: none; }
  .rank { color: var(--muted); width: 2.5rem; }
  .score { font-weight: 700; color: var(--accent); }
  .empty { color: var(--muted); text-align: center; padding: 2rem; font-size: .9rem; }
</style>
</head>
<body>
<header>
  <span class="status-dot"></span>
  <h1>Live Scoreboard</h1>
  <span style="margin-left:auto;color:var(--muted);font-size:.8rem;" id="last-updated"></span>
</header>
<main>
  <div class="panel">
    <div class="panel-header">Leaderboard</div>
    <table>
      <thead><tr><th class="rank">#</th><th>Home</th><th>Score</th><th>Away</th></tr></thead>
      <tbody id="summary-tbody"><tr><td colspan="4" class="empty">Loading…</td></tr></tbody>
    </table>
  </div>
</main>
<script>
async function loadSummary() {
  const r = await fetch('/api/summary');
  if (!r.ok) return;
  const games = await r.json();
  const tbody = document.getElementById('summary-tbody');
  if (!games.length) { tbody.innerHTML = '<tr><td colspan="4" class="empty">No live games</td></tr>'; return; }
  tbody.innerHTML = games.map((g, i) => `<tr>
    <td class="rank">${i + 1}</td>
    <td>${g.home_team}</td>
    <td class="score">${g.home_score} – ${g.away_score}</td>
    <td>${g.away_team}</td>
  </tr>`).join('');
  document.getElementById('last-updated').textContent = 'Updated ' + new Date().toLocaleTimeString();
}
loadSummary();
setInterval(loadSummary, 2000);
</script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ScoreboardError::EmptyTeamName),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ScoreboardError::TeamAlreadyPlaying("Mexico".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&ScoreboardError::GameNotFound(GameKey::new("A", "B"))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ScoreboardError::ScoreRegression {
                key: GameKey::new("A", "B"),
                current_home: 1,
                current_away: 0,
                new_home: 0,
                new_away: 0,
            }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_update_request_parses() {
        let req: UpdateScoreRequest = serde_json::from_str(
            r#"{"home_team":"Spain","away_team":"Brazil","home_score":10,"away_score":2}"#,
        )
        .unwrap();
        assert_eq!(req.home_team, "Spain");
        assert_eq!(req.away_score, 2);
    }
}
