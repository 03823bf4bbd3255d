//! Team identity translation.
//!
//! Provider team ids are unique only within a league; the same numeric id can
//! name different franchises in different leagues. The internal id namespaces
//! the provider id with the league id (`"{leagueId}-{providerId}"`) so
//! favorites and lookups never collide across leagues.

use std::collections::HashMap;

use crate::model::{InternalTeam, League, Team};

const SEPARATOR: char = '-';

/// Build the internal id for a (league, provider-id) pair.
pub fn internal_id(league_id: &str, provider_id: &str) -> String {
    format!("{league_id}{SEPARATOR}{provider_id}")
}

/// Split an internal id back into `(league_id, provider_id)`.
///
/// Requires exactly two `-`-separated parts; anything else is not-found.
/// Provider ids are numeric in practice, so the separator never appears in
/// them.
pub fn parse_internal_id(id: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = id.split(SEPARATOR).collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0], parts[1]))
}

/// Wrap a provider team in its internal identity.
pub fn to_internal_team(league_id: &str, team: Team) -> InternalTeam {
    InternalTeam {
        internal_id: internal_id(league_id, &team.id),
        provider_id: team.id.clone(),
        league_id: league_id.to_string(),
        team,
    }
}

/// Provider id → `(league_id, internal_id)` pairs, in league order. A
/// provider id reused across leagues maps to several pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, Vec<(String, String)>>,
}

impl TranslationTable {
    /// Internal id for a provider id within one league.
    pub fn internal_id(&self, provider_id: &str, league_id: &str) -> Option<&str> {
        self.entries
            .get(provider_id)?
            .iter()
            .find(|(league, _)| league == league_id)
            .map(|(_, internal)| internal.as_str())
    }

    /// Translate favorite-team references persisted before the internal-id
    /// scheme existed. A provider id found in several leagues maps to the
    /// first league in table order; ids unknown to every roster are dropped.
    pub fn migrate(&self, old_provider_ids: &[String]) -> Vec<String> {
        old_provider_ids
            .iter()
            .filter_map(|provider_id| {
                self.entries
                    .get(provider_id)
                    .and_then(|leagues| leagues.first())
                    .map(|(_, internal)| internal.clone())
            })
            .collect()
    }
}

/// Build the translation table from every team across every league's current
/// roster. League iteration order is the caller's order, which fixes the
/// migration tie-break for cross-league id collisions.
pub fn build_translation_table(leagues: &[League]) -> TranslationTable {
    let mut entries: HashMap<String, Vec<(String, String)>> = HashMap::new();
    for league in leagues {
        for team in &league.teams {
            entries
                .entry(team.id.clone())
                .or_default()
                .push((league.id.clone(), internal_id(&league.id, &team.id)));
        }
    }
    TranslationTable { entries }
}
