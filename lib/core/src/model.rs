use crate::error::{Error, Result};
use crate::player::{Player, FEATURE_COUNT, FEATURE_NAMES};
use crate::roster::Roster;
use crate::scaler::StandardScaler;
use crate::similarity::SimilarityMatrix;
use serde::Serialize;

/// A ranked neighbour: roster row index plus cosine score.
pub type RankedPlayer = (usize, f32);

/// Model summary served by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub status: &'static str,
    pub num_players: usize,
    pub num_features: usize,
    pub features: [&'static str; FEATURE_COUNT],
    pub algorithm: &'static str,
    pub normalization: &'static str,
}

/// The similarity model: a roster plus the matrix trained from it.
///
/// The model owns its state explicitly; nothing is process-global. `train`
/// installs the roster and matrix together, so a reader can never observe a
/// roster paired with a matrix built from a different one. After training the
/// model is read-only and shares safely behind an `Arc` without locking.
#[derive(Debug, Default)]
pub struct SimilarityModel {
    scaler: StandardScaler,
    roster: Option<Roster>,
    matrix: Option<SimilarityMatrix>,
}

impl SimilarityModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.matrix.is_some()
    }

    /// Standardize the roster's features and compute the similarity matrix.
    ///
    /// Fails on fewer than two players or any non-finite feature value; a
    /// failed call leaves the model untrained.
    pub fn train(&mut self, roster: Roster) -> Result<()> {
        roster.validate()?;
        let normalized = self.scaler.fit_transform(&roster.feature_matrix())?;
        self.matrix = Some(SimilarityMatrix::compute(&normalized));
        self.roster = Some(roster);
        Ok(())
    }

    /// The trained roster.
    pub fn roster(&self) -> Result<&Roster> {
        self.roster.as_ref().ok_or(Error::NotTrained)
    }

    /// The trained similarity matrix.
    pub fn matrix(&self) -> Result<&SimilarityMatrix> {
        self.matrix.as_ref().ok_or(Error::NotTrained)
    }

    /// The fitted scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// The player at roster row `index`.
    pub fn player(&self, index: usize) -> Result<&Player> {
        let roster = self.roster()?;
        roster.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: roster.len(),
        })
    }

    /// Top `k` most similar players to the one at `query_index`.
    pub fn similar(&self, query_index: usize, k: usize) -> Result<Vec<RankedPlayer>> {
        self.matrix()?.top_k(query_index, k)
    }

    /// Resolve a player name to a roster row index. A miss is `Ok(None)`,
    /// not an error.
    pub fn find(&self, name: &str) -> Result<Option<usize>> {
        Ok(self.roster()?.find(name))
    }

    /// Model summary for the health endpoint.
    #[must_use]
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            status: if self.is_trained() {
                "trained"
            } else {
                "not_trained"
            },
            num_players: self.roster.as_ref().map_or(0, Roster::len),
            num_features: FEATURE_COUNT,
            features: FEATURE_NAMES,
            algorithm: "Cosine Similarity",
            normalization: "StandardScaler",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, name: &str, features: [f32; FEATURE_COUNT]) -> Player {
        Player {
            player_id: id,
            name: name.to_string(),
            team: "Arsenal".to_string(),
            position: "MF".to_string(),
            age: 25,
            goals: 3,
            assists: 4,
            minutes_played: 1800,
            goals_per_90: features[0],
            assists_per_90: features[1],
            npxg_plus_xag_per_90: features[2],
            progressive_carries_per_90: features[3],
            progressive_passes_per_90: features[4],
            progressive_receives_per_90: features[5],
            total_contributions: features[6] as u32,
        }
    }

    fn trained_model() -> SimilarityModel {
        let roster = Roster::new(vec![
            player(1, "Rodri", [0.1, 0.3, 0.5, 4.0, 9.0, 3.0, 10.0]),
            player(2, "Declan Rice", [0.1, 0.2, 0.4, 3.5, 8.0, 2.5, 8.0]),
            player(3, "Kevin De Bruyne", [0.4, 0.9, 1.1, 3.0, 7.5, 6.0, 25.0]),
        ]);
        let mut model = SimilarityModel::new();
        model.train(roster).unwrap();
        model
    }

    #[test]
    fn test_untrained_queries_fail() {
        let model = SimilarityModel::new();
        assert!(!model.is_trained());
        assert!(matches!(model.similar(0, 5), Err(Error::NotTrained)));
        assert!(matches!(model.find("Rodri"), Err(Error::NotTrained)));
        assert!(matches!(model.player(0), Err(Error::NotTrained)));
        assert_eq!(model.info().status, "not_trained");
    }

    #[test]
    fn test_train_rejects_empty_and_single_row() {
        let mut model = SimilarityModel::new();
        assert!(matches!(
            model.train(Roster::new(vec![])),
            Err(Error::NotEnoughPlayers { actual: 0 })
        ));
        assert!(matches!(
            model.train(Roster::new(vec![player(
                1,
                "Rodri",
                [0.1, 0.3, 0.5, 4.0, 9.0, 3.0, 10.0]
            )])),
            Err(Error::NotEnoughPlayers { actual: 1 })
        ));
        assert!(!model.is_trained());
    }

    #[test]
    fn test_train_rejects_nan_feature() {
        let mut model = SimilarityModel::new();
        let roster = Roster::new(vec![
            player(1, "Rodri", [f32::NAN, 0.3, 0.5, 4.0, 9.0, 3.0, 10.0]),
            player(2, "Declan Rice", [0.1, 0.2, 0.4, 3.5, 8.0, 2.5, 8.0]),
        ]);
        assert!(matches!(
            model.train(roster),
            Err(Error::NonFinite { row: 0, column: 0 })
        ));
    }

    #[test]
    fn test_similar_returns_ranked_neighbours() {
        let model = trained_model();
        let ranked = model.similar(0, 5).unwrap();
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|&(i, _)| i != 0));
        assert!(ranked[0].1 >= ranked[1].1);
        // Rice's profile tracks Rodri's far more closely than De Bruyne's.
        assert_eq!(ranked[0].0, 1);
    }

    #[test]
    fn test_find_then_similar_round_trip() {
        let model = trained_model();
        let index = model.find("declan rice").unwrap().unwrap();
        assert_eq!(index, 1);
        let ranked = model.similar(index, 1).unwrap();
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_find_miss_is_ok_none() {
        let model = trained_model();
        assert_eq!(model.find("Zidane").unwrap(), None);
    }

    #[test]
    fn test_similar_out_of_range() {
        let model = trained_model();
        assert!(matches!(
            model.similar(3, 5),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_info_reports_schema() {
        let model = trained_model();
        let info = model.info();
        assert_eq!(info.status, "trained");
        assert_eq!(info.num_players, 3);
        assert_eq!(info.num_features, FEATURE_COUNT);
        assert_eq!(info.features[0], "goals_per_90");
    }

    #[test]
    fn test_matrix_diagonal_after_training() {
        let model = trained_model();
        let matrix = model.matrix().unwrap();
        for i in 0..matrix.len() {
            assert!((matrix.get(i, i).unwrap() - 1.0).abs() < 1e-5);
        }
    }
}
