use serde::{Deserialize, Serialize};

/// The three sport families the provider serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Soccer,
    Baseball,
}

/// The four supported leagues, in the order every aggregate result uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeagueKind {
    Nfl,
    Mls,
    Epl,
    Mlb,
}

impl LeagueKind {
    /// Deterministic aggregate order: results are joined positionally, so this
    /// array fixes the order regardless of which fetch completes first.
    pub const ALL: [LeagueKind; 4] = [
        LeagueKind::Nfl,
        LeagueKind::Mls,
        LeagueKind::Epl,
        LeagueKind::Mlb,
    ];

    pub fn id(self) -> &'static str {
        match self {
            LeagueKind::Nfl => "nfl",
            LeagueKind::Mls => "mls",
            LeagueKind::Epl => "epl",
            LeagueKind::Mlb => "mlb",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LeagueKind::Nfl => "National Football League",
            LeagueKind::Mls => "Major League Soccer",
            LeagueKind::Epl => "English Premier League",
            LeagueKind::Mlb => "Major League Baseball",
        }
    }

    pub fn sport(self) -> Sport {
        match self {
            LeagueKind::Nfl => Sport::Football,
            LeagueKind::Mls | LeagueKind::Epl => Sport::Soccer,
            LeagueKind::Mlb => Sport::Baseball,
        }
    }

    /// Provider path segment, e.g. `football/nfl` in
    /// `…/apis/site/v2/sports/football/nfl/scoreboard`.
    pub fn api_path(self) -> &'static str {
        match self {
            LeagueKind::Nfl => "football/nfl",
            LeagueKind::Mls => "soccer/usa.1",
            LeagueKind::Epl => "soccer/eng.1",
            LeagueKind::Mlb => "baseball/mlb",
        }
    }

    pub fn from_id(id: &str) -> Option<LeagueKind> {
        match id {
            "nfl" => Some(LeagueKind::Nfl),
            "mls" => Some(LeagueKind::Mls),
            "epl" => Some(LeagueKind::Epl),
            "mlb" => Some(LeagueKind::Mlb),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            LeagueKind::Nfl => 0,
            LeagueKind::Mls => 1,
            LeagueKind::Epl => 2,
            LeagueKind::Mlb => 3,
        }
    }
}

/// Unified game status across all four leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
    Postponed,
    Cancelled,
}

/// A wins-losses(-ties) line parsed from a provider summary like "6-2" or "6-2-1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl SubRecord {
    /// Parse a `"W-L"` or `"W-L-T"` summary. Anything else is `None`.
    pub fn parse(summary: &str) -> Option<SubRecord> {
        let parts: Vec<&str> = summary.trim().split('-').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return None;
        }
        let wins = parts[0].parse().ok()?;
        let losses = parts[1].parse().ok()?;
        let ties = if parts.len() == 3 {
            parts[2].parse().ok()?
        } else {
            0
        };
        Some(SubRecord { wins, losses, ties })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootballTeamStats {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub games_played: u32,
    /// Rounded to three decimals.
    pub win_pct: f64,
    pub points_for: u32,
    pub points_against: u32,
    /// Positive = winning streak, negative = losing streak.
    pub streak: Option<i32>,
    pub home: Option<SubRecord>,
    pub road: Option<SubRecord>,
    pub division_record: Option<SubRecord>,
    pub conference_record: Option<SubRecord>,
    pub division: Option<String>,
    pub conference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseballTeamStats {
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
    /// Rounded to three decimals.
    pub win_pct: f64,
    pub runs_for: u32,
    pub runs_against: u32,
    pub games_behind: f64,
    pub division_games_behind: Option<f64>,
    pub streak: Option<i32>,
    pub division: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoccerTeamStats {
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_differential: i32,
    pub points: u32,
    /// Table position when the provider reports one.
    pub rank: Option<u32>,
    pub conference: Option<String>,
}

/// Per-sport statistics. A tagged union instead of one sparse struct so a
/// missing sport-specific field is unrepresentable rather than silently zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sport", rename_all = "lowercase")]
pub enum TeamStats {
    Football(FootballTeamStats),
    Baseball(BaseballTeamStats),
    Soccer(SoccerTeamStats),
}

/// A sports franchise as fetched from the provider.
///
/// `id` is the provider's team id — stable per provider but unique only
/// within a league. Cross-league uniqueness requires pairing with the league
/// id; see `identity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub city: String,
    pub abbreviation: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub logo: Option<String>,
    /// Overall record summary, e.g. "11-6".
    pub record: Option<String>,
    /// Provider standings blurb, e.g. "1st in NL East".
    pub standing_summary: Option<String>,
    pub stats: Option<TeamStats>,
}

/// A translation wrapper binding a league id and provider id into one
/// collision-free internal id of the form `{leagueId}-{providerId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalTeam {
    pub internal_id: String,
    pub provider_id: String,
    pub league_id: String,
    pub team: Team,
}

/// One scheduled/live/completed contest. Constructed fresh on every fetch and
/// never mutated; the team snapshots are denormalized fetch-time copies, not
/// references into a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: u32,
    pub away_score: u32,
    pub status: GameStatus,
    /// "Final" once the game is over; unset otherwise.
    pub time: Option<String>,
    /// Football only, e.g. "Q3".
    pub quarter: Option<String>,
    /// Live period/clock display, e.g. "2H - 12:00" or "Top 5th - 2 Outs".
    pub period: Option<String>,
    /// Kickoff/first-pitch instant, ISO 8601.
    pub date: Option<String>,
    pub venue: Option<String>,
    pub league: Option<String>,
    /// Canonical link back to the provider's game page.
    pub url: Option<String>,
}

/// A named competition grouping: roster plus schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub sport: Sport,
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
    /// Season label, e.g. "2025 Regular Season" (football only).
    pub season: Option<String>,
    /// Current week number (football only).
    pub current_week: Option<u32>,
}

/// The root aggregate: one immutable snapshot per fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreboardData {
    pub leagues: Vec<League>,
    pub last_updated: String,
}

/// Client-persisted favorites. Teams are internal ids (`"{league}-{provider}"`);
/// leagues are league ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritePreferences {
    pub teams: Vec<String>,
    pub leagues: Vec<String>,
    /// RFC 3339.
    pub last_updated: String,
    /// Transient: set when persisted team ids predate the internal-id scheme.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub needs_migration: bool,
}
