use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Envelope of the people endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeopleResponse {
    #[serde(default)]
    pub people: Vec<Person>,
}

/// Reference to a person as embedded in rosters and leader boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: i64,
    #[serde(rename = "fullName", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// A player record from the people endpoint. Everything beyond the id is
/// optional upstream; view builders decide which absences are errors and
/// which become display sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "primaryNumber", default)]
    pub primary_number: Option<String>,
    #[serde(rename = "currentAge", default)]
    pub current_age: Option<i64>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<Position>,
    #[serde(rename = "batSide", default)]
    pub bat_side: Option<CodedSide>,
    #[serde(rename = "pitchHand", default)]
    pub pitch_hand: Option<CodedSide>,
    #[serde(rename = "draftYear", default)]
    pub draft_year: Option<i64>,
    /// Present only when the lookup was hydrated with a stats directive.
    #[serde(default)]
    pub stats: Option<Vec<StatsGroup>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub code: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// A coded attribute such as bat side or pitch hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodedSide {
    #[serde(default)]
    pub code: Option<String>,
}

/// One hydrated stats block, e.g. the yearByYear history for one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsGroup {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

/// One season's worth of statistics. Carries a team reference only when the
/// row is attributed to a single team (traded players get per-team rows plus
/// an unattributed combined total).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSplit {
    pub season: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<PersonTeamRef>,
    /// Open-ended stat mapping; the key set differs per group and era.
    #[serde(default)]
    pub stat: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonTeamRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Statistical group selecting which half of a player's record to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum StatGroup {
    Hitting,
    Pitching,
}

impl StatGroup {
    /// Spelling used by the Stats API in hydration directives and
    /// `statGroup` fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatGroup::Hitting => "hitting",
            StatGroup::Pitching => "pitching",
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
