//! # scoutx Core
//!
//! Core library for the scoutx player similarity engine.
//!
//! This crate provides the numerical pipeline and the model that owns it:
//!
//! - [`Player`] / [`Roster`] - the in-memory feature table
//! - [`StandardScaler`] - per-feature standardization to zero mean, unit variance
//! - [`SimilarityMatrix`] - pairwise cosine similarity with top-K ranking
//! - [`SimilarityModel`] - roster + matrix trained and queried as one object
//!
//! ## Example
//!
//! ```rust
//! use scoutx_core::{Roster, SimilarityModel};
//!
//! # fn roster_from_somewhere() -> Roster { Roster::default() }
//! let roster: Roster = roster_from_somewhere();
//!
//! let mut model = SimilarityModel::new();
//! if model.train(roster).is_ok() {
//!     // Resolve a name, then rank neighbours by statistical profile.
//!     if let Some(index) = model.find("Rodri").unwrap() {
//!         let similar = model.similar(index, 5).unwrap();
//!         for (row, score) in similar {
//!             println!("{row} scored {score:.3}");
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod model;
pub mod player;
pub mod roster;
pub mod scaler;
pub mod similarity;

pub use error::{Error, Result};
pub use model::{ModelInfo, RankedPlayer, SimilarityModel};
pub use player::{Player, FEATURE_COUNT, FEATURE_NAMES};
pub use roster::Roster;
pub use scaler::StandardScaler;
pub use similarity::SimilarityMatrix;
