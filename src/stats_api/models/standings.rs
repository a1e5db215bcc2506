use serde::{Deserialize, Serialize};

/// Envelope of the standings endpoint: one record per division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub records: Vec<StandingsRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsRecord {
    pub division: DivisionRef,
    #[serde(rename = "teamRecords", default)]
    pub team_records: Vec<TeamRecord>,
}

/// Reference to a division as embedded in standings payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: TeamRef,
    pub wins: i64,
    pub losses: i64,
    /// Rendered by the API as a string like ".617"
    #[serde(rename = "winningPercentage")]
    pub winning_percentage: String,
    /// "-" for the wild-card leader, otherwise a number rendered as a string
    #[serde(rename = "wildCardGamesBack", default)]
    pub wild_card_games_back: Option<String>,
    #[serde(rename = "divisionGamesBack", default)]
    pub division_games_back: Option<String>,
    /// Rendered by the API as a string like "1"
    #[serde(rename = "divisionRank")]
    pub division_rank: String,
    #[serde(rename = "leagueRecord")]
    pub league_record: LeagueRecord,
    #[serde(rename = "runsScored")]
    pub runs_scored: i64,
    #[serde(rename = "runsAllowed")]
    pub runs_allowed: i64,
    #[serde(default)]
    pub records: RecordSplits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueRecord {
    pub wins: i64,
    pub losses: i64,
    pub pct: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSplits {
    #[serde(rename = "splitRecords", default)]
    pub split_records: Vec<SplitRecord>,
}

/// One split record, e.g. the "lastTen" win-loss line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub wins: i64,
    pub losses: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_record_deserialization() {
        let json = r#"{
            "team": {"id": 141, "name": "Toronto Blue Jays"},
            "wins": 94,
            "losses": 68,
            "winningPercentage": ".580",
            "wildCardGamesBack": "-",
            "divisionGamesBack": "-",
            "divisionRank": "1",
            "leagueRecord": {"wins": 94, "losses": 68, "pct": ".580"},
            "runsScored": 798,
            "runsAllowed": 701,
            "records": {
                "splitRecords": [
                    {"type": "lastTen", "wins": 7, "losses": 3}
                ]
            }
        }"#;

        let record: TeamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.team.id, 141);
        assert_eq!(record.winning_percentage, ".580");
        assert_eq!(record.division_rank, "1");
        assert_eq!(record.wild_card_games_back.as_deref(), Some("-"));
        assert_eq!(record.records.split_records.len(), 1);
        assert_eq!(record.records.split_records[0].record_type, "lastTen");
    }

    #[test]
    fn test_standings_response_defaults() {
        let response: StandingsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.records.is_empty());
    }

    #[test]
    fn test_team_record_without_splits() {
        let json = r#"{
            "team": {"id": 110},
            "wins": 80,
            "losses": 82,
            "winningPercentage": ".494",
            "divisionRank": "4",
            "leagueRecord": {"wins": 80, "losses": 82, "pct": ".494"},
            "runsScored": 700,
            "runsAllowed": 720
        }"#;

        let record: TeamRecord = serde_json::from_str(json).unwrap();
        assert!(record.records.split_records.is_empty());
        assert!(record.wild_card_games_back.is_none());
        assert!(record.team.name.is_none());
    }
}
