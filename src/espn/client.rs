use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use url::Url;

use super::divisions::{
    baseball_division_for_abbreviation, football_division, soccer_conference,
};
use super::status::{format_live_display, normalize_status};
use super::wire::{
    RosterResponse, ScoreboardResponse, TeamDetailResponse, WireCompetitor, WireEvent, WireTeam,
    WireTeamDetail,
};
use crate::model::{
    BaseballTeamStats, FootballTeamStats, Game, LeagueKind, SoccerTeamStats, Sport, SubRecord,
    Team, TeamStats,
};

const DEFAULT_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports";
const DEFAULT_PRIMARY_COLOR: &str = "#6B7280";
const DEFAULT_SECONDARY_COLOR: &str = "#9CA3AF";

/// Typed provider failure. `Malformed` is caught at the per-item boundary so
/// one bad record never drops a whole league.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Optional schedule overrides; only the football scoreboard honors them.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ScheduleQuery {
    pub week: Option<u32>,
    pub year: Option<i32>,
}

/// One league's schedule fetch result. `season`/`week` are populated for
/// football only.
#[derive(Debug, Clone, Default)]
pub struct LeagueSchedule {
    pub games: Vec<Game>,
    pub season: Option<String>,
    pub week: Option<u32>,
}

/// Client for the provider's scoreboard, roster, and team-detail resources.
#[derive(Clone)]
pub struct EspnClient {
    http: Client,
    /// Base URL for overriding in tests.
    base_url: String,
    /// Permits for the per-team statistics fan-out.
    stats_concurrency: usize,
}

impl EspnClient {
    pub fn new(
        base_url: Option<&str>,
        timeout: Duration,
        stats_concurrency: usize,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(EspnClient {
            http,
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string(),
            stats_concurrency: stats_concurrency.max(1),
        })
    }

    /// Fetch one league's scoreboard and map it into normalized games.
    ///
    /// Malformed events are logged and skipped individually; a top-level
    /// transport/HTTP failure is returned to the caller, which degrades it to
    /// an empty list.
    pub async fn fetch_schedule(
        &self,
        league: LeagueKind,
        query: ScheduleQuery,
    ) -> Result<LeagueSchedule, ProviderError> {
        let url = self.scoreboard_url(league, query, None)?;
        let mut raw: ScoreboardResponse = self.get(&url).await?;

        if league == LeagueKind::Nfl && query.week.is_none() && query.year.is_none() {
            // An Off Season response carries no usable week; ask explicitly
            // for the preseason schedule instead.
            let season_type = nfl_season_type(&raw);
            if season_type.unwrap_or(4) == 4 {
                let retry_url = self.scoreboard_url(league, query, Some(1))?;
                match self.get::<ScoreboardResponse>(&retry_url).await {
                    Ok(retry) if nfl_season_type(&retry).is_some() => raw = retry,
                    Ok(_) => {}
                    Err(e) => warn!("nfl: preseason retry failed: {e}"),
                }
            }
        }

        let (season, week) = if league == LeagueKind::Nfl {
            nfl_season_label(&raw)
        } else {
            (None, None)
        };

        let mut games = Vec::new();
        for event in raw.events.unwrap_or_default() {
            match map_event(&event, league) {
                Ok(game) => games.push(game),
                Err(e) => warn!("{}: skipping malformed event: {e}", league.id()),
            }
        }
        debug!("{}: {} games", league.id(), games.len());

        Ok(LeagueSchedule { games, season, week })
    }

    /// Fetch one league's full roster, then one detail request per team for
    /// statistics. The fan-out is bounded by a semaphore and joined by index,
    /// so result order matches roster order regardless of completion order.
    /// A failed detail fetch leaves that team with absent statistics.
    pub async fn fetch_roster(&self, league: LeagueKind) -> Result<Vec<Team>, ProviderError> {
        let url = format!("{}/{}/teams", self.base_url, league.api_path());
        let raw: RosterResponse = self.get(&url).await?;

        let entries = raw
            .sports
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|s| s.leagues.unwrap_or_default().into_iter().next())
            .and_then(|l| l.teams)
            .unwrap_or_default();

        let mut teams: Vec<Team> = entries
            .into_iter()
            .filter_map(|e| e.team.as_ref().and_then(map_roster_team))
            .collect();

        let semaphore = Arc::new(Semaphore::new(self.stats_concurrency));
        let detail_futures = teams.iter().map(|team| {
            let semaphore = Arc::clone(&semaphore);
            let team_id = team.id.clone();
            async move {
                let _permit = match semaphore.acquire().await {
                    Ok(p) => p,
                    Err(_) => return None,
                };
                match self.fetch_team_detail(league, &team_id).await {
                    Ok(detail) => detail,
                    Err(e) => {
                        warn!("{}: stats fetch for team {team_id} failed: {e}", league.id());
                        None
                    }
                }
            }
        });
        let details = join_all(detail_futures).await;

        for (team, detail) in teams.iter_mut().zip(details) {
            if let Some(detail) = detail {
                apply_team_detail(team, &detail, league.sport());
            }
        }

        debug!("{}: roster of {} teams", league.id(), teams.len());
        Ok(teams)
    }

    async fn fetch_team_detail(
        &self,
        league: LeagueKind,
        team_id: &str,
    ) -> Result<Option<WireTeamDetail>, ProviderError> {
        let url = format!("{}/{}/teams/{team_id}", self.base_url, league.api_path());
        let raw: TeamDetailResponse = self.get(&url).await?;
        Ok(raw.team)
    }

    fn scoreboard_url(
        &self,
        league: LeagueKind,
        query: ScheduleQuery,
        season_type: Option<u8>,
    ) -> Result<String, ProviderError> {
        let mut url = Url::parse(&format!(
            "{}/{}/scoreboard",
            self.base_url,
            league.api_path()
        ))?;
        if league == LeagueKind::Nfl {
            let mut params: Vec<(&str, String)> = Vec::new();
            if let Some(week) = query.week {
                params.push(("week", week.to_string()));
            }
            if let Some(year) = query.year {
                params.push(("year", year.to_string()));
            }
            if let Some(st) = season_type {
                params.push(("seasontype", st.to_string()));
            }
            if !params.is_empty() {
                url.query_pairs_mut().extend_pairs(params);
            }
        }
        Ok(url.into())
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        debug!("GET {url}");
        let resp = self.http.get(url).send().await.map_err(|e| {
            ProviderError::Transport { url: url.to_string(), source: e }
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status { url: url.to_string(), status });
        }
        resp.json::<T>()
            .await
            .map_err(|e| ProviderError::Parse { url: url.to_string(), source: e })
    }
}

fn nfl_season_type(raw: &ScoreboardResponse) -> Option<u8> {
    raw.leagues
        .as_deref()
        .unwrap_or_default()
        .first()
        .and_then(|l| l.season.as_ref())
        .and_then(|s| s.season_type)
}

fn nfl_season_label(raw: &ScoreboardResponse) -> (Option<String>, Option<u32>) {
    let Some(info) = raw.leagues.as_deref().unwrap_or_default().first() else {
        return (None, None);
    };
    let week = info.week.as_ref().and_then(|w| w.number);
    let season = info.season.as_ref().and_then(|s| {
        let year = s.year?;
        let label = match s.season_type.unwrap_or(2) {
            1 => "Preseason",
            2 => "Regular Season",
            3 => "Postseason",
            _ => "Off Season",
        };
        Some(format!("{year} {label}"))
    });
    (season, week)
}

// ---------------------------------------------------------------------------
// Mapping: wire types → domain model
// ---------------------------------------------------------------------------

/// Map one scoreboard event into a `Game`.
fn map_event(event: &WireEvent, league: LeagueKind) -> Result<Game, ProviderError> {
    let sport = league.sport();
    let id = event
        .id
        .clone()
        .ok_or_else(|| ProviderError::Malformed("event missing id".into()))?;
    let competition = event
        .competitions
        .as_deref()
        .unwrap_or_default()
        .first()
        .ok_or_else(|| ProviderError::Malformed(format!("event {id} has no competition")))?;
    let competitors = competition.competitors.as_deref().unwrap_or_default();

    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"))
        .ok_or_else(|| ProviderError::Malformed(format!("event {id} missing home competitor")))?;
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"))
        .ok_or_else(|| ProviderError::Malformed(format!("event {id} missing away competitor")))?;

    let home_team = map_competitor_team(home, &id)?;
    let away_team = map_competitor_team(away, &id)?;

    let status_block = event.status.clone().unwrap_or_default();
    let status_type = status_block.status_type.clone().unwrap_or_default();
    let name = status_type.name.as_deref().unwrap_or_default();
    let state = status_type.state.as_deref().unwrap_or_default();
    let status = normalize_status(name, state);

    let mut time = None;
    let mut quarter = None;
    let mut period = None;
    match state {
        "in" => {
            let display = format_live_display(
                sport,
                status_block.period.unwrap_or(0),
                status_block.display_clock.as_deref(),
                status_type.short_detail.as_deref(),
                competition.situation.as_ref().and_then(|s| s.outs),
            );
            quarter = display.quarter;
            period = display.period;
        }
        "post" => time = Some("Final".to_string()),
        // "pre": the presentation layer shows the date instead.
        _ => {}
    }

    Ok(Game {
        url: Some(game_url(sport, &id)),
        home_score: parse_score(home),
        away_score: parse_score(away),
        home_team,
        away_team,
        status,
        time,
        quarter,
        period,
        date: event.date.clone(),
        venue: competition
            .venue
            .as_ref()
            .and_then(|v| v.full_name.clone()),
        league: Some(league.id().to_string()),
        id,
    })
}

/// Scores and optional stats default to zero on missing, empty, or
/// non-numeric values.
fn parse_score(competitor: &WireCompetitor) -> u32 {
    competitor
        .score
        .as_deref()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn map_competitor_team(
    competitor: &WireCompetitor,
    event_id: &str,
) -> Result<Team, ProviderError> {
    let wire = competitor.team.as_ref().ok_or_else(|| {
        ProviderError::Malformed(format!("event {event_id} competitor has no team"))
    })?;
    let id = wire.id.clone().or_else(|| competitor.id.clone()).ok_or_else(|| {
        ProviderError::Malformed(format!("event {event_id} competitor team has no id"))
    })?;

    let name = wire.name.clone().unwrap_or_default();
    let display_name = wire.display_name.clone().unwrap_or_else(|| name.clone());
    let record = competitor
        .records
        .as_deref()
        .unwrap_or_default()
        .first()
        .and_then(|r| r.summary.clone());

    Ok(Team {
        id,
        city: derive_city(&display_name, &name),
        name,
        abbreviation: wire.abbreviation.clone().unwrap_or_default(),
        primary_color: wire
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
        secondary_color: wire
            .alternate_color
            .clone()
            .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
        logo: wire.logo_url(),
        record,
        standing_summary: None,
        stats: None,
    })
}

/// City = display name minus the short name, e.g.
/// "Arizona Cardinals" - "Cardinals" → "Arizona".
fn derive_city(display_name: &str, name: &str) -> String {
    if name.is_empty() {
        return display_name.trim().to_string();
    }
    display_name.replacen(name, "", 1).trim().to_string()
}

fn map_roster_team(wire: &WireTeam) -> Option<Team> {
    let id = wire.id.clone()?;
    let name = wire.name.clone().unwrap_or_default();
    let display_name = wire.display_name.clone().unwrap_or_else(|| name.clone());
    let city = wire
        .location
        .clone()
        .unwrap_or_else(|| derive_city(&display_name, &name));

    Some(Team {
        id,
        name,
        city,
        abbreviation: wire.abbreviation.clone().unwrap_or_default(),
        primary_color: wire
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
        secondary_color: wire
            .alternate_color
            .clone()
            .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
        logo: wire.logo_url(),
        record: None,
        standing_summary: None,
        stats: None,
    })
}

/// Merge a team-detail payload into a roster team.
fn apply_team_detail(team: &mut Team, detail: &WireTeamDetail, sport: Sport) {
    team.standing_summary = detail.standing_summary.clone();
    if let Some(total) = detail.record.as_ref().and_then(|r| r.item("total")) {
        team.record = total.summary.clone();
    }
    team.stats = Some(match sport {
        Sport::Football => TeamStats::Football(football_stats(detail)),
        Sport::Baseball => TeamStats::Baseball(baseball_stats(detail, &team.abbreviation)),
        Sport::Soccer => TeamStats::Soccer(soccer_stats(detail)),
    });
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Win percentage rounded to three decimals; computed from counts when the
/// provider does not report one.
fn win_pct(item: Option<&super::wire::WireRecordItem>, wins: u32, games_played: u32) -> f64 {
    let reported = item.and_then(|i| i.stat("winPercent"));
    let pct = reported.unwrap_or_else(|| {
        if games_played == 0 {
            0.0
        } else {
            f64::from(wins) / f64::from(games_played)
        }
    });
    round3(pct)
}

fn sub_record(detail: &WireTeamDetail, record_type: &str) -> Option<SubRecord> {
    detail
        .record
        .as_ref()
        .and_then(|r| r.item(record_type))
        .and_then(|i| i.summary.as_deref())
        .and_then(SubRecord::parse)
}

fn football_stats(detail: &WireTeamDetail) -> FootballTeamStats {
    let total = detail.record.as_ref().and_then(|r| r.item("total"));
    let stat = |name: &str| total.map(|t| t.stat_or_zero(name)).unwrap_or(0.0);

    let wins = stat("wins") as u32;
    let losses = stat("losses") as u32;
    let ties = stat("ties") as u32;
    let games_played = total
        .and_then(|t| t.stat("gamesPlayed"))
        .map(|v| v as u32)
        .unwrap_or(wins + losses + ties);
    let division = detail
        .groups
        .as_ref()
        .and_then(|g| g.id.as_deref())
        .and_then(football_division);

    FootballTeamStats {
        wins,
        losses,
        ties,
        games_played,
        win_pct: win_pct(total, wins, games_played),
        points_for: stat("pointsFor") as u32,
        points_against: stat("pointsAgainst") as u32,
        streak: total.and_then(|t| t.stat("streak")).map(|v| v as i32),
        home: sub_record(detail, "home"),
        road: sub_record(detail, "road"),
        division_record: sub_record(detail, "vsdiv"),
        conference_record: sub_record(detail, "vsconf"),
        division: division.map(|(d, _)| d.to_string()),
        conference: division.map(|(_, c)| c.to_string()),
    }
}

fn baseball_stats(detail: &WireTeamDetail, abbreviation: &str) -> BaseballTeamStats {
    let total = detail.record.as_ref().and_then(|r| r.item("total"));
    let stat = |name: &str| total.map(|t| t.stat_or_zero(name)).unwrap_or(0.0);

    let wins = stat("wins") as u32;
    let losses = stat("losses") as u32;
    let games_played = total
        .and_then(|t| t.stat("gamesPlayed"))
        .map(|v| v as u32)
        .unwrap_or(wins + losses);
    // Group name first; the abbreviation table is the fallback.
    let division = detail
        .groups
        .as_ref()
        .and_then(|g| g.name.clone())
        .or_else(|| baseball_division_for_abbreviation(abbreviation).map(str::to_string));

    BaseballTeamStats {
        wins,
        losses,
        games_played,
        win_pct: win_pct(total, wins, games_played),
        runs_for: stat("pointsFor") as u32,
        runs_against: stat("pointsAgainst") as u32,
        games_behind: stat("gamesBehind"),
        division_games_behind: total.and_then(|t| t.stat("divisionGamesBehind")),
        streak: total.and_then(|t| t.stat("streak")).map(|v| v as i32),
        division,
    }
}

fn soccer_stats(detail: &WireTeamDetail) -> SoccerTeamStats {
    let total = detail.record.as_ref().and_then(|r| r.item("total"));
    let stat = |name: &str| total.map(|t| t.stat_or_zero(name)).unwrap_or(0.0);

    SoccerTeamStats {
        games_played: stat("gamesPlayed") as u32,
        wins: stat("wins") as u32,
        draws: stat("ties") as u32,
        losses: stat("losses") as u32,
        goals_for: stat("pointsFor") as u32,
        goals_against: stat("pointsAgainst") as u32,
        goal_differential: stat("pointDifferential") as i32,
        points: stat("points") as u32,
        rank: total.and_then(|t| t.stat("rank")).map(|v| v as u32),
        conference: detail
            .groups
            .as_ref()
            .and_then(|g| g.id.as_deref())
            .map(|id| soccer_conference(id).to_string()),
    }
}

fn game_url(sport: Sport, id: &str) -> String {
    match sport {
        Sport::Football => format!("https://www.espn.com/nfl/game/_/gameId/{id}"),
        Sport::Soccer => format!("https://www.espn.com/soccer/match/_/gameId/{id}"),
        Sport::Baseball => format!("https://www.espn.com/mlb/game/_/gameId/{id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GameStatus;
    use serde_json::json;

    fn competitor(home_away: &str, score: &str, extra: serde_json::Value) -> serde_json::Value {
        let mut team = json!({
            "id": "22",
            "name": "Cardinals",
            "displayName": "Arizona Cardinals",
            "abbreviation": "ARI",
            "color": "97233F",
            "alternateColor": "000000",
            "logo": "https://a.example/ari.png"
        });
        if let (Some(obj), Some(extra)) = (team.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                obj.insert(k.clone(), v.clone());
            }
        }
        json!({
            "id": "22",
            "homeAway": home_away,
            "score": score,
            "team": team,
            "records": [{ "summary": "4-2" }]
        })
    }

    fn event(status: serde_json::Value, competitors: Vec<serde_json::Value>) -> WireEvent {
        serde_json::from_value(json!({
            "id": "401547403",
            "date": "2025-09-07T17:00Z",
            "status": status,
            "competitions": [{
                "competitors": competitors,
                "venue": { "fullName": "State Farm Stadium" }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_map_live_football_event() {
        let ev = event(
            json!({
                "type": { "name": "STATUS_IN_PROGRESS", "state": "in" },
                "displayClock": "05:12",
                "period": 3
            }),
            vec![competitor("home", "21", json!({})), competitor("away", "17", json!({}))],
        );
        let game = map_event(&ev, LeagueKind::Nfl).unwrap();
        assert_eq!(game.status, GameStatus::Live);
        assert_eq!(game.quarter.as_deref(), Some("Q3"));
        assert_eq!(game.period.as_deref(), Some("05:12"));
        assert_eq!(game.home_score, 21);
        assert_eq!(game.away_score, 17);
        assert_eq!(game.venue.as_deref(), Some("State Farm Stadium"));
        assert_eq!(game.league.as_deref(), Some("nfl"));
        assert_eq!(
            game.url.as_deref(),
            Some("https://www.espn.com/nfl/game/_/gameId/401547403")
        );
        assert_eq!(game.home_team.city, "Arizona");
        assert_eq!(game.home_team.record.as_deref(), Some("4-2"));
        assert!(game.time.is_none());
    }

    #[test]
    fn test_finished_event_gets_final_marker() {
        let ev = event(
            json!({ "type": { "name": "STATUS_FINAL", "state": "post" } }),
            vec![competitor("home", "3", json!({})), competitor("away", "0", json!({}))],
        );
        let game = map_event(&ev, LeagueKind::Epl).unwrap();
        assert_eq!(game.status, GameStatus::Final);
        assert_eq!(game.time.as_deref(), Some("Final"));
        assert!(game.quarter.is_none());
        assert!(game.period.is_none());
        assert_eq!(
            game.url.as_deref(),
            Some("https://www.espn.com/soccer/match/_/gameId/401547403")
        );
    }

    #[test]
    fn test_scheduled_event_has_no_display_fields() {
        let ev = event(
            json!({ "type": { "name": "STATUS_SCHEDULED", "state": "pre" } }),
            vec![competitor("home", "", json!({})), competitor("away", "", json!({}))],
        );
        let game = map_event(&ev, LeagueKind::Mlb).unwrap();
        assert_eq!(game.status, GameStatus::Scheduled);
        assert!(game.time.is_none() && game.quarter.is_none() && game.period.is_none());
        // Missing/empty score strings default to zero.
        assert_eq!(game.home_score, 0);
        assert_eq!(game.away_score, 0);
    }

    #[test]
    fn test_live_baseball_event_uses_short_detail_and_outs() {
        let ev: WireEvent = serde_json::from_value(json!({
            "id": "5",
            "date": "2025-06-01T23:05Z",
            "status": {
                "type": { "name": "STATUS_IN_PROGRESS", "state": "in", "shortDetail": "Top 5th" },
                "period": 5
            },
            "competitions": [{
                "competitors": [
                    competitor("home", "2", json!({})),
                    competitor("away", "1", json!({}))
                ],
                "situation": { "outs": 2 }
            }]
        }))
        .unwrap();
        let game = map_event(&ev, LeagueKind::Mlb).unwrap();
        assert_eq!(game.period.as_deref(), Some("Top 5th - 2 Outs"));
        assert_eq!(
            game.url.as_deref(),
            Some("https://www.espn.com/mlb/game/_/gameId/5")
        );
    }

    #[test]
    fn test_live_soccer_event_formats_half_and_clock() {
        let ev = event(
            json!({
                "type": { "name": "STATUS_IN_PROGRESS", "state": "in" },
                "displayClock": "12:00",
                "period": 2
            }),
            vec![competitor("home", "1", json!({})), competitor("away", "1", json!({}))],
        );
        let game = map_event(&ev, LeagueKind::Mls).unwrap();
        assert_eq!(game.period.as_deref(), Some("2H - 12:00"));
        assert!(game.quarter.is_none());
    }

    #[test]
    fn test_missing_home_competitor_is_malformed() {
        let ev = event(
            json!({ "type": { "name": "STATUS_SCHEDULED", "state": "pre" } }),
            vec![competitor("away", "0", json!({}))],
        );
        let err = map_event(&ev, LeagueKind::Nfl).unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
        assert!(err.to_string().contains("missing home competitor"));
    }

    #[test]
    fn test_missing_colors_fall_back_to_neutral_gray() {
        let bare = json!({
            "id": "9",
            "homeAway": "home",
            "score": "0",
            "team": { "id": "9", "name": "Sounders FC", "displayName": "Seattle Sounders FC" }
        });
        let ev = event(
            json!({ "type": { "name": "STATUS_SCHEDULED", "state": "pre" } }),
            vec![bare, competitor("away", "0", json!({}))],
        );
        let game = map_event(&ev, LeagueKind::Mls).unwrap();
        assert_eq!(game.home_team.primary_color, "#6B7280");
        assert_eq!(game.home_team.secondary_color, "#9CA3AF");
        assert_eq!(game.home_team.city, "Seattle");
    }

    #[test]
    fn test_roster_team_prefers_location_over_subtraction() {
        let wire: WireTeam = serde_json::from_value(json!({
            "id": "17",
            "name": "Yankees",
            "displayName": "New York Yankees",
            "location": "New York",
            "abbreviation": "NYY",
            "logos": [{ "href": "https://a.example/nyy.png" }]
        }))
        .unwrap();
        let team = map_roster_team(&wire).unwrap();
        assert_eq!(team.city, "New York");
        assert_eq!(team.logo.as_deref(), Some("https://a.example/nyy.png"));
        assert!(team.stats.is_none());
    }

    fn detail(value: serde_json::Value) -> WireTeamDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_football_stats_from_detail() {
        let d = detail(json!({
            "standingSummary": "2nd in AFC East",
            "groups": { "id": "4" },
            "record": { "items": [
                { "type": "total", "summary": "11-6", "stats": [
                    { "name": "wins", "value": 11.0 },
                    { "name": "losses", "value": 6.0 },
                    { "name": "ties", "value": 0.0 },
                    { "name": "pointsFor", "value": 451.0 },
                    { "name": "pointsAgainst", "value": 311.0 },
                    { "name": "streak", "value": 3.0 }
                ]},
                { "type": "home", "summary": "6-2" },
                { "type": "road", "summary": "5-4" },
                { "type": "vsdiv", "summary": "4-2" },
                { "type": "vsconf", "summary": "8-4" }
            ]}
        }));
        let stats = football_stats(&d);
        assert_eq!(stats.wins, 11);
        assert_eq!(stats.losses, 6);
        assert_eq!(stats.games_played, 17);
        // 11/17, rounded to three decimals
        approx::assert_relative_eq!(stats.win_pct, 0.647);
        assert_eq!(stats.points_for, 451);
        assert_eq!(stats.streak, Some(3));
        assert_eq!(stats.home, SubRecord::parse("6-2"));
        assert_eq!(stats.conference_record, SubRecord::parse("8-4"));
        assert_eq!(stats.division.as_deref(), Some("AFC East"));
        assert_eq!(stats.conference.as_deref(), Some("AFC"));
    }

    #[test]
    fn test_football_stats_prefer_reported_win_percent() {
        let d = detail(json!({
            "record": { "items": [
                { "type": "total", "summary": "10-7", "stats": [
                    { "name": "wins", "value": 10.0 },
                    { "name": "losses", "value": 7.0 },
                    { "name": "winPercent", "value": 0.5882 }
                ]}
            ]}
        }));
        let stats = football_stats(&d);
        approx::assert_relative_eq!(stats.win_pct, 0.588);
        assert!(stats.division.is_none());
    }

    #[test]
    fn test_baseball_division_falls_back_to_abbreviation_table() {
        let d = detail(json!({
            "record": { "items": [
                { "type": "total", "summary": "94-68", "stats": [
                    { "name": "wins", "value": 94.0 },
                    { "name": "losses", "value": 68.0 },
                    { "name": "gamesBehind", "value": 2.0 }
                ]}
            ]}
        }));
        let stats = baseball_stats(&d, "NYY");
        assert_eq!(stats.division.as_deref(), Some("AL East"));
        approx::assert_relative_eq!(stats.games_behind, 2.0);
        assert_eq!(stats.games_played, 162);
    }

    #[test]
    fn test_baseball_group_name_beats_abbreviation_table() {
        let d = detail(json!({
            "groups": { "id": "1", "name": "American League East" },
            "record": { "items": [] }
        }));
        let stats = baseball_stats(&d, "NYY");
        assert_eq!(stats.division.as_deref(), Some("American League East"));
    }

    #[test]
    fn test_soccer_stats_and_conference_split() {
        let d = detail(json!({
            "groups": { "id": "1" },
            "record": { "items": [
                { "type": "total", "summary": "12-8-4", "stats": [
                    { "name": "gamesPlayed", "value": 24.0 },
                    { "name": "wins", "value": 12.0 },
                    { "name": "ties", "value": 4.0 },
                    { "name": "losses", "value": 8.0 },
                    { "name": "pointsFor", "value": 40.0 },
                    { "name": "pointsAgainst", "value": 44.0 },
                    { "name": "pointDifferential", "value": -4.0 },
                    { "name": "points", "value": 40.0 },
                    { "name": "rank", "value": 5.0 }
                ]}
            ]}
        }));
        let stats = soccer_stats(&d);
        assert_eq!(stats.draws, 4);
        assert_eq!(stats.goal_differential, -4);
        assert_eq!(stats.points, 40);
        assert_eq!(stats.rank, Some(5));
        assert_eq!(stats.conference.as_deref(), Some("Eastern Conference"));
    }

    #[test]
    fn test_detail_merge_sets_record_and_standing_summary() {
        let mut team = Team {
            id: "10".into(),
            name: "Mets".into(),
            city: "New York".into(),
            abbreviation: "NYM".into(),
            primary_color: "#002D72".into(),
            secondary_color: "#FF5910".into(),
            logo: None,
            record: None,
            standing_summary: None,
            stats: None,
        };
        let d = detail(json!({
            "standingSummary": "2nd in NL East",
            "record": { "items": [
                { "type": "total", "summary": "89-73", "stats": [
                    { "name": "wins", "value": 89.0 },
                    { "name": "losses", "value": 73.0 }
                ]}
            ]}
        }));
        apply_team_detail(&mut team, &d, Sport::Baseball);
        assert_eq!(team.record.as_deref(), Some("89-73"));
        assert_eq!(team.standing_summary.as_deref(), Some("2nd in NL East"));
        assert!(matches!(team.stats, Some(TeamStats::Baseball(_))));
    }

    #[test]
    fn test_nfl_season_label_and_week() {
        let raw: ScoreboardResponse = serde_json::from_value(json!({
            "events": [],
            "leagues": [{
                "week": { "number": 3 },
                "season": { "year": 2025, "type": 2 }
            }]
        }))
        .unwrap();
        let (season, week) = nfl_season_label(&raw);
        assert_eq!(season.as_deref(), Some("2025 Regular Season"));
        assert_eq!(week, Some(3));
        assert_eq!(nfl_season_type(&raw), Some(2));

        let empty = ScoreboardResponse::default();
        assert_eq!(nfl_season_label(&empty), (None, None));
        assert_eq!(nfl_season_type(&empty), None);
    }

    #[test]
    fn test_scoreboard_url_query_params_football_only() {
        let client = EspnClient::new(
            Some("https://fake.example/sports"),
            Duration::from_secs(1),
            4,
        )
        .unwrap();
        let url = client
            .scoreboard_url(
                LeagueKind::Nfl,
                ScheduleQuery { week: Some(3), year: Some(2025) },
                None,
            )
            .unwrap();
        assert_eq!(
            url,
            "https://fake.example/sports/football/nfl/scoreboard?week=3&year=2025"
        );

        let url = client
            .scoreboard_url(
                LeagueKind::Epl,
                ScheduleQuery { week: Some(3), year: Some(2025) },
                None,
            )
            .unwrap();
        assert_eq!(url, "https://fake.example/sports/soccer/eng.1/scoreboard");
    }
}
