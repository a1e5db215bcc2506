//! Typed records for Stats API and news feed payloads.
//!
//! Each endpoint gets its own deserialization target so that every
//! "missing key" failure surfaces in one fallible parse step instead of
//! deep inside a view builder.

pub mod leaders;
pub mod news;
pub mod player;
pub mod roster;
pub mod standings;
pub mod team;

pub use leaders::{Leader, LeaderCategory, LeadersResponse};
pub use news::{NewsChannel, NewsFeed, NewsImage, NewsItem};
pub use player::{
    CodedSide, PeopleResponse, Person, PersonRef, PersonTeamRef, Position, StatGroup, StatSplit,
    StatsGroup,
};
pub use roster::{RosterEntry, RosterResponse};
pub use standings::{
    DivisionRef, LeagueRecord, RecordSplits, SplitRecord, StandingsRecord, StandingsResponse,
    TeamRecord, TeamRef,
};
pub use team::{
    Division, DivisionMembership, DivisionsResponse, LeagueRef, Team, TeamsResponse, VenueRef,
};
