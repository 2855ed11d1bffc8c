//! # scoutx
//!
//! An in-memory player similarity engine with a REST query API.
//!
//! scoutx ranks Premier League midfielders by similarity of statistical
//! profile: per-90 rates are standardized to zero mean and unit variance,
//! a pairwise cosine-similarity matrix is computed once at startup, and
//! queries are served read-only from the cached matrix.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install scoutx
//! scoutx --data ./data/premier_league_data_converted.csv --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use scoutx::prelude::*;
//!
//! // Load the roster and train the model once.
//! let roster = load_roster("./data/premier_league_data_converted.csv").unwrap();
//! let mut model = SimilarityModel::new();
//! model.train(roster).unwrap();
//!
//! // Query against the cached matrix.
//! let index = model.find("Rodri").unwrap().expect("player exists");
//! let neighbours = model.similar(index, 5).unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! scoutx is composed of several crates:
//!
//! - [`scoutx-core`](https://docs.rs/scoutx-core) - Feature table, standardization, cosine similarity, ranking
//! - [`scoutx-ingest`](https://docs.rs/scoutx-ingest) - FBref CSV export parsing and filtering
//! - [`scoutx-api`](https://docs.rs/scoutx-api) - REST endpoints
//!
//! ## Features
//!
//! - **Standardized comparison**: per-feature z-scores keep goals and
//!   progressive passes on the same footing
//! - **Exact ranking**: the full pairwise matrix is computed once; queries
//!   are a sorted slice of a cached row
//! - **Deterministic output**: ties break by roster order, so rankings are
//!   reproducible run to run

// Re-export core types
pub use scoutx_core::{
    Error, ModelInfo, Player, RankedPlayer, Result, Roster, SimilarityMatrix, SimilarityModel,
    StandardScaler, FEATURE_COUNT, FEATURE_NAMES,
};

// Re-export ingestion
pub use scoutx_ingest::load_roster;

// Re-export API
pub use scoutx_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_roster, Error, ModelInfo, Player, RankedPlayer, Result, RestApi, Roster,
        SimilarityMatrix, SimilarityModel, StandardScaler, FEATURE_COUNT, FEATURE_NAMES,
    };
}
