use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::espn::ScheduleQuery;
use crate::favorites::FavoritesStore;
use crate::model::{Game, Team};
use crate::scoreboard::{sort_games_by_date, Scoreboard};

#[derive(Clone)]
pub struct AppState {
    pub scoreboard: Arc<Scoreboard>,
    pub favorites: FavoritesStore,
}

/// Build the Axum router for the scoreboard API and the embedded page.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/scoreboard", get(scoreboard_handler))
        .route("/api/games", get(games_handler))
        .route("/api/leagues/:id", get(league_handler))
        .route("/api/teams/:internal_id", get(team_handler))
        .route("/api/favorites", get(favorites_handler))
        .route("/api/favorites/teams/:internal_id", post(toggle_team_handler))
        .route("/api/favorites/leagues/:id", post(toggle_league_handler))
        .route("/api/favorites/migrate", post(migrate_favorites_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn index_handler() -> impl IntoResponse {
    Html(SCOREBOARD_HTML)
}

/// GET /api/scoreboard?week=3&year=2025 — full snapshot, rosters refreshed.
async fn scoreboard_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScheduleQuery>,
) -> impl IntoResponse {
    Json(state.scoreboard.scoreboard_data(query).await)
}

/// GET /api/games — games refreshed, rosters served from cache.
async fn games_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScheduleQuery>,
) -> impl IntoResponse {
    Json(state.scoreboard.games_data(query).await)
}

/// GET /api/leagues/{id}
async fn league_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let data = state.scoreboard.games_data(ScheduleQuery::default()).await;
    data.league(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("unknown league: {id}")))
}

#[derive(Serialize)]
struct TeamView {
    league: String,
    team: Team,
    games: Vec<Game>,
}

/// GET /api/teams/{internal_id} — a team and its games, by internal id.
async fn team_handler(
    State(state): State<Arc<AppState>>,
    Path(internal_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let data = state.scoreboard.games_data(ScheduleQuery::default()).await;
    let (league, team) = data
        .team_by_internal_id(&internal_id)
        .ok_or((StatusCode::NOT_FOUND, format!("unknown team: {internal_id}")))?;

    let mut games: Vec<Game> = league
        .games_for_team(&team.id)
        .into_iter()
        .cloned()
        .collect();
    sort_games_by_date(&mut games);

    Ok(Json(TeamView {
        league: league.id.clone(),
        team: team.clone(),
        games,
    }))
}

/// GET /api/favorites
async fn favorites_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .favorites
        .load()
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// POST /api/favorites/teams/{internal_id}
async fn toggle_team_handler(
    State(state): State<Arc<AppState>>,
    Path(internal_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .favorites
        .toggle_team(&internal_id)
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// POST /api/favorites/leagues/{id}
async fn toggle_league_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .favorites
        .toggle_league(&id)
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// POST /api/favorites/migrate — one-time translation of pre-scheme ids,
/// keyed off the current rosters.
async fn migrate_favorites_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let data = state.scoreboard.games_data(ScheduleQuery::default()).await;
    state
        .favorites
        .migrate(&data.leagues)
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// Embedded single-file scoreboard page (HTML + CSS + JS).
const SCOREBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Scorehub</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --live: #00c896;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  main { padding: 1.5rem 2rem; display: grid; gap: 1.5rem; }
  .league { background: var(--card); border: 1px solid var(--border); border-radius: 10px; overflow: hidden; }
  .league-header { padding: .9rem 1.2rem; border-bottom: 1px solid var(--border); font-weight: 600; display: flex; justify-content: space-between; align-items: center; }
  .league-header .meta { color: var(--muted); font-size: .8rem; font-weight: 400; }
  .games { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: .8rem; padding: 1rem 1.2rem; }
  .game { border: 1px solid var(--border); border-radius: 8px; padding: .8rem; }
  .row { display: flex; justify-content: space-between; align-items: center; padding: .15rem 0; }
  .team-name { font-size: .9rem; }
  .score { font-weight: 700; }
  .status { margin-top: .4rem; font-size: .75rem; color: var(--muted); display: flex; justify-content: space-between; }
  .status .live { color: var(--live); font-weight: 600; }
  .fav { cursor: pointer; color: var(--muted); background: none; border: none; font-size: .9rem; }
  .fav.on { color: #ffce4f; }
  .empty { color: var(--muted); text-align: center; padding: 1.5rem; font-size: .9rem; }
</style>
</head>
<body>
<header>
  <h1>Scorehub</h1>
  <span style="margin-left:auto;color:var(--muted);font-size:.8rem;" id="last-updated"></span>
</header>
<main id="leagues"></main>
<script>
let favorites = { teams: [], leagues: [] };

async function loadFavorites() {
  const r = await fetch('/api/favorites');
  if (r.ok) favorites = await r.json();
}

async function toggleFavorite(internalId) {
  const r = await fetch('/api/favorites/teams/' + internalId, { method: 'POST' });
  if (r.ok) { favorites = await r.json(); loadGames(); }
}

function gameCard(leagueId, g) {
  const rows = [[g.away_team, g.away_score], [g.home_team, g.home_score]].map(([t, score]) => {
    const internalId = leagueId + '-' + t.id;
    const on = favorites.teams.includes(internalId) ? ' on' : '';
    return `<div class="row">
      <span class="team-name" style="border-left:3px solid ${t.primary_color};padding-left:.4rem;">
        ${t.city} ${t.name}
        <button class="fav${on}" onclick="toggleFavorite('${internalId}')">&#9733;</button>
      </span>
      <span class="score">${score}</span>
    </div>`;
  }).join('');
  const when = g.status === 'live'
    ? `<span class="live">${[g.quarter, g.period].filter(Boolean).join(' ')}</span>`
    : g.status === 'final' ? (g.time || 'Final')
    : (g.date ? new Date(g.date).toLocaleString() : 'Scheduled');
  return `<div class="game">${rows}
    <div class="status"><span>${when}</span>${g.venue ? `<span>${g.venue}</span>` : ''}</div>
  </div>`;
}

function renderLeague(league) {
  const meta = [league.season, league.current_week != null ? 'Week ' + league.current_week : null]
    .filter(Boolean).join(' · ');
  const games = league.games.length
    ? `<div class="games">${league.games.map(g => gameCard(league.id, g)).join('')}</div>`
    : '<div class="empty">No games today</div>';
  return `<section class="league">
    <div class="league-header"><span>${league.name}</span><span class="meta">${meta}</span></div>
    ${games}
  </section>`;
}

async function loadGames() {
  const r = await fetch('/api/games');
  if (!r.ok) return;
  const data = await r.json();
  document.getElementById('leagues').innerHTML = data.leagues.map(renderLeague).join('');
  document.getElementById('last-updated').textContent = 'Updated ' + data.last_updated;
}

(async () => { await loadFavorites(); await loadGames(); })();
setInterval(loadGames, 30000);
</script>
</body>
</html>"#;
