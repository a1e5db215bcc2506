//! The data-aggregation layer: raw Stats API accessors, typed payload
//! models, view-model builders, and the session memoization store.

pub mod api;
pub mod cache;
pub mod models;
pub mod views;
