//! Plain terminal rendering of the view-models. Thin glue: nothing here
//! reshapes data, it only aligns and colors what the views built.

use crossterm::style::Stylize;

use crate::stats_api::models::StatGroup;
use crate::stats_api::views::{
    CareerRow, CategoryLeaders, DivisionStandings, PlayerProfile, RecentNews, TeamInfo,
    TeamRoster, stat_display,
};

fn section(title: &str) {
    println!();
    println!("{}", title.to_string().bold().cyan());
}

pub fn print_division_standings(division: &DivisionStandings) {
    section(&division.name);
    println!(
        "{}",
        format!(
            "{:<6} {:>4} {:>4} {:>6} {:>5} {:>6} {:>6}",
            "Team", "W", "L", "Pct", "GB", "L10", "DIFF"
        )
        .dark_grey()
    );
    for row in &division.teams {
        println!(
            "{:<6} {:>4} {:>4} {:>6} {:>5} {:>6} {:>+6}",
            row.abbreviation,
            row.wins,
            row.losses,
            row.pct,
            row.games_back,
            row.last_ten,
            row.run_diff
        );
    }
}

pub fn print_team_info(info: &TeamInfo) {
    section(&format!("{} ({})", info.name, info.abbreviation));
    println!("Division:  {} ({})", info.division, info.division_rank);
    println!("Record:    {} / GB {}", info.record, info.games_back);
    println!("Venue:     {}", info.venue);
    println!("Season:    {}", info.season);
}

pub fn print_roster(roster: &TeamRoster) {
    section("Pitchers");
    println!(
        "{}",
        format!(
            "{:<5} {:>3} {:<24} {:>4} {:^3} {:>7} {:>6} {:>5} {:>5} {:>5} {:>5} {:>6} {:>6}",
            "Pos", "#", "Pitcher", "Age", "T", "IP", "ERA", "SO", "BB", "SO%", "BB%", "HR/9",
            "OPS"
        )
        .dark_grey()
    );
    for row in &roster.pitchers {
        let mut name = format!("{} {}", row.first_name, row.last_name);
        if let Some(season) = &row.last_played {
            name.push_str(&format!(" [{season}]"));
        }
        println!(
            "{:<5} {:>3} {:<24} {:>4} {:^3} {:>7} {:>6} {:>5} {:>5} {:>5} {:>5} {:>6} {:>6}",
            row.position,
            row.jersey_number,
            name,
            row.age,
            row.throw_hand,
            row.innings_pitched,
            row.era,
            row.strikeouts,
            row.base_on_balls,
            row.strikeout_pct,
            row.bb_pct,
            row.hr_per_9,
            row.ops
        );
    }

    section("Hitters");
    println!(
        "{}",
        format!(
            "{:<5} {:>3} {:<24} {:>4} {:^3} {:^3} {:>5} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5} {:>5} {:>6} {:>6} {:>6}",
            "Pos", "#", "Hitter", "Age", "B", "T", "PA", "H", "2B", "3B", "HR", "SB", "SO%",
            "BB%", "AVG", "OBP", "OPS"
        )
        .dark_grey()
    );
    for row in &roster.hitters {
        let mut name = format!("{} {}", row.first_name, row.last_name);
        if let Some(season) = &row.last_played {
            name.push_str(&format!(" [{season}]"));
        }
        println!(
            "{:<5} {:>3} {:<24} {:>4} {:^3} {:^3} {:>5} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5} {:>5} {:>6} {:>6} {:>6}",
            row.position,
            row.jersey_number,
            name,
            row.age,
            row.bat_side,
            row.throw_hand,
            row.plate_appearances,
            row.hits,
            row.doubles,
            row.triples,
            row.home_runs,
            row.stolen_bases,
            row.strikeout_pct,
            row.bb_pct,
            row.avg,
            row.obp,
            row.ops
        );
    }
}

pub fn print_player_profile(profile: &PlayerProfile) {
    section(&profile.name);
    println!("Position:  {}", profile.position);
    println!("Bats/Throws: {}/{}", profile.bat_side, profile.pitch_hand);
    println!("Age:       {}", profile.age);
    println!("Height:    {}", profile.height);
    println!("Weight:    {}", profile.weight);
    println!("Drafted:   {}", profile.draft_year);
}

pub fn print_career(rows: &[CareerRow], group: StatGroup) {
    section(&format!("Career ({group})"));
    if rows.is_empty() {
        println!("No major-league history.");
        return;
    }

    let stat_keys: &[(&str, &str)] = match group {
        StatGroup::Pitching => &[
            ("G", "gamesPlayed"),
            ("IP", "inningsPitched"),
            ("ERA", "era"),
            ("SO", "strikeOuts"),
            ("BB", "baseOnBalls"),
            ("WHIP", "whip"),
        ],
        StatGroup::Hitting => &[
            ("G", "gamesPlayed"),
            ("PA", "plateAppearances"),
            ("H", "hits"),
            ("HR", "homeRuns"),
            ("AVG", "avg"),
            ("OPS", "ops"),
        ],
    };

    let mut header = format!("{:<8} {:<24}", "Season", "Team");
    for &(label, _) in stat_keys {
        header.push_str(&format!(" {label:>6}"));
    }
    println!("{}", header.dark_grey());

    for row in rows {
        let mut line = format!(
            "{:<8} {:<24}",
            row.season,
            row.team.as_deref().unwrap_or("-")
        );
        for &(_, key) in stat_keys {
            line.push_str(&format!(" {:>6}", stat_display(&row.stats, key)));
        }
        println!("{line}");
    }
}

pub fn print_leaders(leaders: &CategoryLeaders) {
    section(&format!("League leaders: {}", leaders.category));
    println!(
        "{}",
        format!(
            "{:<5} {:<24} {:<5} {:>8}",
            "Rank", "Player", "Pos", "Value"
        )
        .dark_grey()
    );
    for row in &leaders.rows {
        println!(
            "{:<5} {:<24} {:<5} {:>8}",
            row.rank,
            format!("{} {}", row.first_name, row.last_name),
            row.position,
            row.value
        );
    }
}

pub fn print_news(news: &RecentNews) {
    section("Recent news");
    for story in &news.stories {
        println!("{}  {}", story.date.clone().dark_grey(), story.title);
        if let Some(author) = &story.author {
            println!("          by {author}");
        }
        println!("          {}", story.link.clone().underlined());
    }
}
