//! Fixed division/conference lookup tables.
//!
//! The provider reports standings groupings differently per sport: football
//! teams carry a numeric group id, baseball teams usually carry a group name
//! (with the abbreviation table as fallback), and soccer uses a binary
//! Eastern/Western split keyed on group id "1".

/// Football: numeric group id → (division, conference). The ids follow the
/// provider's standings groups.
pub fn football_division(group_id: &str) -> Option<(&'static str, &'static str)> {
    match group_id {
        "1" => Some(("NFC East", "NFC")),
        "3" => Some(("NFC West", "NFC")),
        "4" => Some(("AFC East", "AFC")),
        "6" => Some(("AFC West", "AFC")),
        "10" => Some(("NFC North", "NFC")),
        "11" => Some(("NFC South", "NFC")),
        "12" => Some(("AFC North", "AFC")),
        "13" => Some(("AFC South", "AFC")),
        _ => None,
    }
}

/// Baseball: team abbreviation → division, used when the detail payload does
/// not name the group.
pub fn baseball_division_for_abbreviation(abbreviation: &str) -> Option<&'static str> {
    match abbreviation {
        "BAL" | "BOS" | "NYY" | "TB" | "TOR" => Some("AL East"),
        "CWS" | "CHW" | "CLE" | "DET" | "KC" | "MIN" => Some("AL Central"),
        "HOU" | "LAA" | "OAK" | "ATH" | "SEA" | "TEX" => Some("AL West"),
        "ATL" | "MIA" | "NYM" | "PHI" | "WSH" => Some("NL East"),
        "CHC" | "CIN" | "MIL" | "PIT" | "STL" => Some("NL Central"),
        "ARI" | "COL" | "LAD" | "SD" | "SF" => Some("NL West"),
        _ => None,
    }
}

/// Soccer: binary conference split keyed on group id "1".
pub fn soccer_conference(group_id: &str) -> &'static str {
    if group_id == "1" {
        "Eastern Conference"
    } else {
        "Western Conference"
    }
}
