//! Status and clock normalization: maps the provider's fine-grained status
//! vocabulary and per-sport clock/period conventions into the unified model.

use crate::model::{GameStatus, Sport};

/// Map a provider status to the unified enum.
///
/// Lookup order matters: the fine-grained `name` table first, then the coarse
/// three-state `state` code, then Scheduled. Provider vocabularies evolve, so
/// an unrecognized-but-mappable status must still resolve sensibly.
pub fn normalize_status(name: &str, state: &str) -> GameStatus {
    match name {
        "STATUS_SCHEDULED" => GameStatus::Scheduled,
        "STATUS_IN_PROGRESS" | "STATUS_HALFTIME" => GameStatus::Live,
        "STATUS_FINAL" => GameStatus::Final,
        "STATUS_POSTPONED" | "STATUS_DELAYED" => GameStatus::Postponed,
        "STATUS_CANCELLED" => GameStatus::Cancelled,
        // Soccer-specific or alternate spellings seen on the provider
        "STATUS_FULL_TIME" | "STATUS_END" => GameStatus::Final,
        "STATUS_EXTRA_TIME" | "STATUS_PENALTIES" | "STATUS_END_PERIOD"
        | "STATUS_END_REGULATION" => GameStatus::Live,
        _ => match state {
            "in" => GameStatus::Live,
            "post" => GameStatus::Final,
            "pre" => GameStatus::Scheduled,
            _ => GameStatus::Scheduled,
        },
    }
}

/// Human-readable strings for a live game. Both fields stay unset for
/// scheduled games; finished games carry a "Final" time instead (see caller).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveDisplay {
    /// Football only, e.g. "Q3".
    pub quarter: Option<String>,
    /// Period/clock line, e.g. "05:12", "2H - 12:00", "Top 5th - 2 Outs".
    pub period: Option<String>,
}

/// Format the sport-specific live display strings.
pub fn format_live_display(
    sport: Sport,
    period: u32,
    clock: Option<&str>,
    short_detail: Option<&str>,
    outs: Option<u32>,
) -> LiveDisplay {
    match sport {
        Sport::Football => LiveDisplay {
            quarter: Some(format!("Q{period}")),
            period: clock.map(str::to_string),
        },
        Sport::Soccer => {
            let half = match period {
                1 => "1H".to_string(),
                2 => "2H".to_string(),
                3 => "ET1".to_string(),
                4 => "ET2".to_string(),
                n => format!("P{n}"),
            };
            let period = match clock {
                Some(clock) => format!("{half} - {clock}"),
                None => half,
            };
            LiveDisplay { quarter: None, period: Some(period) }
        }
        Sport::Baseball => {
            // The provider's free-text short detail ("Top 5th") beats a
            // synthesized inning label when it is present.
            let base = short_detail
                .map(str::to_string)
                .unwrap_or_else(|| format!("Inning {period}"));
            let period = match outs {
                Some(1) => format!("{base} - 1 Out"),
                Some(n) => format!("{base} - {n} Outs"),
                None => base,
            };
            LiveDisplay { quarter: None, period: Some(period) }
        }
    }
}
