//! Display formatting helpers shared by the view-model builders

use serde_json::Value;
use std::collections::HashMap;

use crate::constants::MISSING_STAT;
use crate::error::AppError;
use crate::stats_api::models::{CodedSide, Person};

/// Converts a rank to its ordinal display string: 1 -> "1st", 2 -> "2nd",
/// 3 -> "3rd", everything above gets a plain "th" suffix (including teens,
/// so 11 -> "11th"). Ranks below 1 are invalid.
///
/// # Example
/// ```
/// use mlb_statsboard::stats_api::views::rank_display;
///
/// assert_eq!(rank_display(1).unwrap(), "1st");
/// assert_eq!(rank_display(22).unwrap(), "22th");
/// assert!(rank_display(0).is_err());
/// ```
pub fn rank_display(rank: i64) -> Result<String, AppError> {
    if rank > 3 {
        Ok(format!("{rank}th"))
    } else if rank == 3 {
        Ok(format!("{rank}rd"))
    } else if rank == 2 {
        Ok(format!("{rank}nd"))
    } else if rank == 1 {
        Ok(format!("{rank}st"))
    } else {
        Err(AppError::invalid_rank(rank))
    }
}

/// Lowercases a club name and squashes whitespace, producing the slug used
/// in team URLs and feed paths: "Blue Jays" -> "bluejays".
pub fn team_slug(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalizes the API's height string: unescapes the foot mark and removes
/// spaces, e.g. `6' 2"` -> `6'2"`.
pub fn normalize_height(raw: &str) -> String {
    raw.replace("\\'", "'").replace(' ', "")
}

/// Renders a stat value for display, with the missing-stat placeholder for
/// absent keys.
pub fn stat_display(stats: &HashMap<String, Value>, key: &str) -> String {
    match stats.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => MISSING_STAT.to_string(),
    }
}

/// Reads a stat as a number when the API reported one (counting stats come
/// through as JSON numbers, rate stats as strings).
pub fn stat_number(stats: &HashMap<String, Value>, key: &str) -> Option<f64> {
    match stats.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    }
}

/// Whole-percent share of `count` over `denominator`, rendered with a
/// trailing `%`. When either operand is unavailable the placeholder comes
/// back instead and no division happens.
///
/// # Example
/// ```
/// use mlb_statsboard::stats_api::views::stat_percentage;
///
/// assert_eq!(stat_percentage(Some(25.0), Some(100.0)), "25%");
/// assert_eq!(stat_percentage(Some(25.0), None), "-");
/// ```
pub fn stat_percentage(count: Option<f64>, denominator: Option<f64>) -> String {
    match (count, denominator) {
        (Some(count), Some(denominator)) if denominator != 0.0 => {
            format!("{}%", (count / denominator * 100.0).round() as i64)
        }
        _ => MISSING_STAT.to_string(),
    }
}

/// Renders an optional display value with the missing-stat placeholder.
pub fn display_or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING_STAT.to_string())
}

/// Position abbreviation from a player record. A player without a primary
/// position is an upstream shape error; a position without an abbreviation
/// renders as the placeholder.
pub fn position_abbreviation(person: &Person) -> Result<String, AppError> {
    let position = person.primary_position.as_ref().ok_or_else(|| {
        AppError::api_unexpected_structure(
            format!("Player {} has no primaryPosition", person.id),
            "people",
        )
    })?;
    Ok(display_or_missing(position.abbreviation.clone()))
}

/// Handedness code from a bat-side or pitch-hand attribute. The attribute
/// object itself is required; its code renders as the placeholder when
/// absent.
pub fn hand_code(
    side: Option<&CodedSide>,
    field: &str,
    player_id: i64,
) -> Result<String, AppError> {
    let side = side.ok_or_else(|| {
        AppError::api_unexpected_structure(
            format!("Player {player_id} has no {field}"),
            "people",
        )
    })?;
    Ok(display_or_missing(side.code.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rank_display_low_ranks() {
        assert_eq!(rank_display(1).unwrap(), "1st");
        assert_eq!(rank_display(2).unwrap(), "2nd");
        assert_eq!(rank_display(3).unwrap(), "3rd");
    }

    #[test]
    fn test_rank_display_plain_th_suffix() {
        assert_eq!(rank_display(4).unwrap(), "4th");
        // Teens are not special-cased; the plain suffix rule applies
        assert_eq!(rank_display(11).unwrap(), "11th");
        assert_eq!(rank_display(13).unwrap(), "13th");
        assert_eq!(rank_display(30).unwrap(), "30th");
    }

    #[test]
    fn test_rank_display_rejects_non_positive() {
        assert!(matches!(
            rank_display(0),
            Err(AppError::InvalidRank { rank: 0 })
        ));
        assert!(matches!(
            rank_display(-5),
            Err(AppError::InvalidRank { rank: -5 })
        ));
    }

    #[test]
    fn test_team_slug() {
        assert_eq!(team_slug("Blue Jays"), "bluejays");
        assert_eq!(team_slug("Red Sox"), "redsox");
        assert_eq!(team_slug("Yankees"), "yankees");
    }

    #[test]
    fn test_normalize_height() {
        assert_eq!(normalize_height("6' 2\""), "6'2\"");
        assert_eq!(normalize_height("6\\' 2\""), "6'2\"");
    }

    #[test]
    fn test_stat_display() {
        let stats: HashMap<String, serde_json::Value> = serde_json::from_value(json!({
            "era": "3.11",
            "strikeOuts": 175
        }))
        .unwrap();

        assert_eq!(stat_display(&stats, "era"), "3.11");
        assert_eq!(stat_display(&stats, "strikeOuts"), "175");
        assert_eq!(stat_display(&stats, "homeRunsPer9"), "-");
    }

    #[test]
    fn test_stat_number() {
        let stats: HashMap<String, serde_json::Value> = serde_json::from_value(json!({
            "battersFaced": 650,
            "era": "3.11",
            "note": true
        }))
        .unwrap();

        assert_eq!(stat_number(&stats, "battersFaced"), Some(650.0));
        assert_eq!(stat_number(&stats, "era"), Some(3.11));
        assert_eq!(stat_number(&stats, "note"), None);
        assert_eq!(stat_number(&stats, "missing"), None);
    }

    #[test]
    fn test_stat_percentage() {
        assert_eq!(stat_percentage(Some(25.0), Some(100.0)), "25%");
        assert_eq!(stat_percentage(Some(175.0), Some(650.0)), "27%");
    }

    #[test]
    fn test_stat_percentage_skips_division_on_placeholder() {
        assert_eq!(stat_percentage(Some(25.0), None), "-");
        assert_eq!(stat_percentage(None, Some(100.0)), "-");
        assert_eq!(stat_percentage(None, None), "-");
        assert_eq!(stat_percentage(Some(25.0), Some(0.0)), "-");
    }
}
