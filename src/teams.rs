//! Selectable teams.
//!
//! Team identity is cosmetic: it is shown on the scoreboard and never
//! feeds into play resolution.

/// Teams offered on the selection menu, alphabetical.
pub const TEAM_NAMES: [&str; 32] = [
    "49ers", "Bears", "Bengals", "Bills", "Broncos", "Browns", "Buccaneers", "Cardinals",
    "Chargers", "Chiefs", "Colts", "Commanders", "Cowboys", "Dolphins", "Eagles", "Falcons",
    "Giants", "Jaguars", "Jets", "Lions", "Packers", "Panthers", "Patriots", "Raiders",
    "Rams", "Ravens", "Saints", "Seahawks", "Steelers", "Texans", "Titans", "Vikings",
];

/// Look up a team by name, ignoring case.
///
/// ```
/// assert_eq!(football_blitz::teams::find_team("packers"), Some("Packers"));
/// assert_eq!(football_blitz::teams::find_team("Sharks"), None);
/// ```
#[must_use]
pub fn find_team(name: &str) -> Option<&'static str> {
    let wanted = name.trim();
    TEAM_NAMES
        .iter()
        .copied()
        .find(|team| team.eq_ignore_ascii_case(wanted))
}
