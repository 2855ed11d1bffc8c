//! # scoutx API
//!
//! REST serving layer for the scoutx similarity engine.
//!
//! Exposes the trained [`SimilarityModel`](scoutx_core::SimilarityModel) over
//! five endpoints: service health, player listing, player details, and
//! similarity queries by path or JSON body. Wire formats live here; the core
//! deals only in typed values.

pub mod rest;

pub use rest::RestApi;
