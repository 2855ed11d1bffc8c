//! # scoutx Ingest
//!
//! Data ingestion for the scoutx similarity engine.
//!
//! Turns an FBref season-stats CSV export into a validated [`Roster`](scoutx_core::Roster):
//! midfielders only, a minimum-minutes floor, progressive rates derived per 90,
//! and sequential player ids. The loader has exactly one data source; a missing
//! file surfaces as an error instead of falling back to synthetic data.

pub mod error;
pub mod loader;

pub use error::{Error, Result};
pub use loader::load_roster;
