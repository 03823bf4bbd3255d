//! Raw provider wire types — serde shapes for deserializing the scoreboard,
//! roster, and team-detail responses. These map onto the clean domain model
//! in `client.rs`; nothing outside `espn` should touch them.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Scoreboard (schedule) resource
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<WireEvent>>,
    pub leagues: Option<Vec<WireLeagueInfo>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireLeagueInfo {
    pub week: Option<WireWeek>,
    pub season: Option<WireSeason>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireWeek {
    pub number: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireSeason {
    pub year: Option<i32>,
    /// 1 = Preseason, 2 = Regular Season, 3 = Postseason, 4 = Off Season.
    #[serde(rename = "type")]
    pub season_type: Option<u8>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireEvent {
    pub id: Option<String>,
    /// ISO 8601.
    pub date: Option<String>,
    pub status: Option<WireStatus>,
    pub competitions: Option<Vec<WireCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WireStatus {
    #[serde(rename = "type")]
    pub status_type: Option<WireStatusType>,
    /// "12:34" while live.
    pub display_clock: Option<String>,
    pub period: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WireStatusType {
    /// e.g. "STATUS_IN_PROGRESS".
    pub name: Option<String>,
    /// Coarse state: "pre" | "in" | "post".
    pub state: Option<String>,
    /// e.g. "Top 5th", "Final".
    pub short_detail: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireCompetition {
    pub competitors: Option<Vec<WireCompetitor>>,
    pub situation: Option<WireSituation>,
    pub venue: Option<WireVenue>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireSituation {
    pub outs: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WireVenue {
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WireCompetitor {
    pub id: Option<String>,
    /// "home" | "away".
    pub home_away: Option<String>,
    /// Scores arrive as strings.
    pub score: Option<String>,
    pub team: Option<WireTeam>,
    pub records: Option<Vec<WireRecordSummary>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireRecordSummary {
    pub summary: Option<String>,
}

/// Team object as embedded in both scoreboard competitors and roster entries.
/// Scoreboard events carry `logo`; the roster resource nests `logos[].href`
/// and adds `location`.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WireTeam {
    pub id: Option<String>,
    /// Short name, e.g. "Cardinals".
    pub name: Option<String>,
    /// Full name, e.g. "Arizona Cardinals".
    pub display_name: Option<String>,
    /// City/region, roster resource only.
    pub location: Option<String>,
    pub abbreviation: Option<String>,
    pub color: Option<String>,
    pub alternate_color: Option<String>,
    pub logo: Option<String>,
    pub logos: Option<Vec<WireLogo>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WireLogo {
    pub href: Option<String>,
}

// ---------------------------------------------------------------------------
// Roster resource: sports[0].leagues[0].teams[].team
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RosterResponse {
    pub sports: Option<Vec<WireSportNode>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireSportNode {
    pub leagues: Option<Vec<WireLeagueNode>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireLeagueNode {
    pub teams: Option<Vec<WireTeamEntry>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireTeamEntry {
    pub team: Option<WireTeam>,
}

// ---------------------------------------------------------------------------
// Team detail resource: per-team statistics and standings context
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamDetailResponse {
    pub team: Option<WireTeamDetail>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WireTeamDetail {
    pub record: Option<WireRecordBlock>,
    pub groups: Option<WireGroup>,
    /// e.g. "1st in NL East".
    pub standing_summary: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireRecordBlock {
    pub items: Option<Vec<WireRecordItem>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireRecordItem {
    /// "total" | "home" | "road" | "vsdiv" | "vsconf".
    #[serde(rename = "type")]
    pub record_type: Option<String>,
    /// e.g. "11-6" or "11-6-1".
    pub summary: Option<String>,
    pub stats: Option<Vec<WireStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireStat {
    pub name: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireGroup {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl WireRecordItem {
    /// Look up a named stat on this record item, `None` when absent.
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
            .and_then(|s| s.value)
    }

    /// Named stat defaulting to zero — optional numeric fields never error.
    pub fn stat_or_zero(&self, name: &str) -> f64 {
        self.stat(name).unwrap_or(0.0)
    }
}

impl WireRecordBlock {
    pub fn item(&self, record_type: &str) -> Option<&WireRecordItem> {
        self.items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|i| i.record_type.as_deref() == Some(record_type))
    }
}

impl WireTeam {
    /// Preferred logo URL: the flat scoreboard field, else the first roster logo.
    pub fn logo_url(&self) -> Option<String> {
        self.logo.clone().or_else(|| {
            self.logos
                .as_deref()
                .unwrap_or_default()
                .first()
                .and_then(|l| l.href.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_item_stat_lookup_defaults_to_zero() {
        let item: WireRecordItem = serde_json::from_value(serde_json::json!({
            "type": "total",
            "summary": "11-6",
            "stats": [
                { "name": "wins", "value": 11.0 },
                { "name": "losses", "value": 6.0 }
            ]
        }))
        .unwrap();
        assert_eq!(item.stat("wins"), Some(11.0));
        assert_eq!(item.stat("ties"), None);
        assert_eq!(item.stat_or_zero("ties"), 0.0);
    }

    #[test]
    fn test_logo_prefers_flat_field_over_roster_list() {
        let team: WireTeam = serde_json::from_value(serde_json::json!({
            "id": "12",
            "logo": "https://a.example/flat.png",
            "logos": [{ "href": "https://a.example/roster.png" }]
        }))
        .unwrap();
        assert_eq!(team.logo_url().as_deref(), Some("https://a.example/flat.png"));

        let team: WireTeam = serde_json::from_value(serde_json::json!({
            "id": "12",
            "logos": [{ "href": "https://a.example/roster.png" }]
        }))
        .unwrap();
        assert_eq!(team.logo_url().as_deref(), Some("https://a.example/roster.png"));
    }

    #[test]
    fn test_roster_response_shape_parses() {
        let raw: RosterResponse = serde_json::from_value(serde_json::json!({
            "sports": [{
                "leagues": [{
                    "teams": [
                        { "team": { "id": "17", "name": "Yankees", "location": "New York" } }
                    ]
                }]
            }]
        }))
        .unwrap();
        let team = raw.sports.unwrap()[0].leagues.as_ref().unwrap()[0]
            .teams
            .as_ref()
            .unwrap()[0]
            .team
            .clone()
            .unwrap();
        assert_eq!(team.id.as_deref(), Some("17"));
        assert_eq!(team.location.as_deref(), Some("New York"));
    }
}
