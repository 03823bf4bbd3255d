//! Aggregation layer: fans out to the provider for all four leagues, joins
//! the results positionally into one `ScoreboardData` snapshot, and owns the
//! roster cache. Every public operation returns a complete snapshot — partial
//! provider failure degrades to empty slices, and an aggregate-level failure
//! (including the deadline firing) yields an all-empty, freshly stamped
//! result rather than an error.

pub mod roster_cache;

pub use roster_cache::{Clock, RosterCache, Rosters, SystemClock};

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use futures_util::future::join_all;
use tracing::{error, warn};

use crate::espn::{LeagueSchedule, ScheduleQuery, SportsDataSource};
use crate::identity::parse_internal_id;
use crate::model::{Game, League, LeagueKind, ScoreboardData, Team};

pub struct Scoreboard {
    source: Arc<dyn SportsDataSource>,
    cache: RosterCache,
    /// Deadline for one whole aggregate operation, so one hung upstream call
    /// cannot stall the snapshot indefinitely.
    deadline: Duration,
}

impl Scoreboard {
    pub fn new(source: Arc<dyn SportsDataSource>, cache: RosterCache, deadline: Duration) -> Self {
        Scoreboard { source, cache, deadline }
    }

    /// Games refreshed, teams served from the cache (refreshing it first when
    /// stale). For frequent polling.
    pub async fn games_data(&self, query: ScheduleQuery) -> ScoreboardData {
        match tokio::time::timeout(self.deadline, self.games_data_inner(query)).await {
            Ok(data) => data,
            Err(_) => {
                error!("games aggregate missed its {:?} deadline", self.deadline);
                empty_scoreboard()
            }
        }
    }

    /// Games and rosters both refreshed in one concurrent batch; the roster
    /// cache is overwritten regardless of staleness. For full/initial loads.
    pub async fn scoreboard_data(&self, query: ScheduleQuery) -> ScoreboardData {
        match tokio::time::timeout(self.deadline, self.scoreboard_data_inner(query)).await {
            Ok(data) => data,
            Err(_) => {
                error!("scoreboard aggregate missed its {:?} deadline", self.deadline);
                empty_scoreboard()
            }
        }
    }

    async fn games_data_inner(&self, query: ScheduleQuery) -> ScoreboardData {
        let (schedules, rosters) = tokio::join!(self.fetch_schedules(query), self.cached_rosters());
        build_scoreboard(schedules, rosters)
    }

    async fn scoreboard_data_inner(&self, query: ScheduleQuery) -> ScoreboardData {
        let (schedules, rosters) = tokio::join!(self.fetch_schedules(query), self.refresh_rosters());
        build_scoreboard(schedules, rosters)
    }

    /// All four schedules concurrently. Results are joined positionally, so
    /// the league order is deterministic regardless of completion order; a
    /// failed league contributes an empty schedule.
    async fn fetch_schedules(&self, query: ScheduleQuery) -> Vec<LeagueSchedule> {
        let futures = LeagueKind::ALL.iter().map(|&league| async move {
            match self.source.schedule(league, query).await {
                Ok(schedule) => schedule,
                Err(e) => {
                    warn!("{}: schedule fetch from {} failed: {e}", league.id(), self.source.name());
                    LeagueSchedule::default()
                }
            }
        });
        join_all(futures).await
    }

    /// Rosters from the cache while fresh; otherwise refetch and replace.
    async fn cached_rosters(&self) -> Rosters {
        if let Some(rosters) = self.cache.fresh().await {
            return rosters;
        }
        self.refresh_rosters().await
    }

    /// Refetch all four rosters concurrently and replace the cache slot.
    /// A league whose fetch fails keeps its stale entry — staleness is
    /// preferred over emptiness for team metadata.
    async fn refresh_rosters(&self) -> Rosters {
        let results = join_all(LeagueKind::ALL.iter().map(|&l| self.source.roster(l))).await;
        let stale = self.cache.any().await;

        let mut rosters = Rosters::default();
        for (league, result) in LeagueKind::ALL.iter().zip(results) {
            match result {
                Ok(teams) => rosters[league.index()] = teams,
                Err(e) => {
                    warn!("{}: roster fetch from {} failed: {e}", league.id(), self.source.name());
                    if let Some(stale) = &stale {
                        rosters[league.index()] = stale[league.index()].clone();
                    }
                }
            }
        }
        self.cache.replace(rosters.clone()).await;
        rosters
    }
}

fn build_scoreboard(schedules: Vec<LeagueSchedule>, rosters: Rosters) -> ScoreboardData {
    let leagues = LeagueKind::ALL
        .iter()
        .zip(schedules)
        .map(|(&kind, schedule)| League {
            id: kind.id().to_string(),
            name: kind.display_name().to_string(),
            sport: kind.sport(),
            teams: rosters[kind.index()].clone(),
            games: schedule.games,
            season: schedule.season,
            current_week: schedule.week,
        })
        .collect();
    ScoreboardData { leagues, last_updated: now_label() }
}

fn empty_scoreboard() -> ScoreboardData {
    ScoreboardData { leagues: Vec::new(), last_updated: now_label() }
}

fn now_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

// ---------------------------------------------------------------------------
// Read accessors over an already-fetched snapshot
// ---------------------------------------------------------------------------

impl ScoreboardData {
    pub fn league(&self, id: &str) -> Option<&League> {
        self.leagues.iter().find(|l| l.id == id)
    }

    /// Resolve an internal team id (`"{league}-{provider}"`) against the
    /// snapshot.
    pub fn team_by_internal_id(&self, internal: &str) -> Option<(&League, &Team)> {
        let (league_id, provider_id) = parse_internal_id(internal)?;
        let league = self.league(league_id)?;
        let team = league.team(provider_id)?;
        Some((league, team))
    }
}

impl League {
    pub fn team(&self, provider_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == provider_id)
    }

    /// Games this team plays in, home or away.
    pub fn games_for_team(&self, provider_id: &str) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| g.home_team.id == provider_id || g.away_team.id == provider_id)
            .collect()
    }
}

/// Sort games by date ascending; ties and missing/unparseable dates compare
/// equal (stable sort keeps their relative order).
pub fn sort_games_by_date(games: &mut [Game]) {
    games.sort_by(|a, b| {
        match (parse_game_date(a.date.as_deref()), parse_game_date(b.date.as_deref())) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        }
    });
}

/// The provider emits minute-precision UTC stamps ("2025-09-07T17:00Z");
/// fall back to full RFC 3339 for safety.
fn parse_game_date(date: Option<&str>) -> Option<DateTime<Utc>> {
    let date = date?;
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|d| d.with_timezone(&Utc))
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%MZ")
                .ok()
                .map(|d| d.and_utc())
        })
}
