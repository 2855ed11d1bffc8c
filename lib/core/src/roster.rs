use crate::error::{Error, Result};
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// An ordered table of players.
///
/// Row position doubles as the index into any similarity matrix trained on
/// this roster: the player at row `i` corresponds to row and column `i` of the
/// matrix. The roster is immutable once built; rebuilding it invalidates a
/// previously trained matrix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Look up a player by id. Ids are assigned at load time and are not
    /// row positions.
    #[must_use]
    pub fn by_id(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// Resolve a player name to a row index.
    ///
    /// Tries a case-insensitive exact match first, then falls back to a
    /// case-insensitive substring match. The fallback returns the first row
    /// containing the query in table order, not the closest name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        let query = name.to_lowercase();
        if let Some(i) = self
            .players
            .iter()
            .position(|p| p.name.to_lowercase() == query)
        {
            return Some(i);
        }
        self.players
            .iter()
            .position(|p| p.name.to_lowercase().contains(&query))
    }

    /// Extract the feature matrix in row order.
    #[must_use]
    pub fn feature_matrix(&self) -> Vec<Vec<f32>> {
        self.players
            .iter()
            .map(|p| p.features().to_vec())
            .collect()
    }

    /// Check the roster is trainable: at least two rows, every feature finite.
    pub fn validate(&self) -> Result<()> {
        if self.players.len() < 2 {
            return Err(Error::NotEnoughPlayers {
                actual: self.players.len(),
            });
        }
        for (row, player) in self.players.iter().enumerate() {
            for (column, value) in player.features().iter().enumerate() {
                if !value.is_finite() {
                    return Err(Error::NonFinite { row, column });
                }
            }
        }
        Ok(())
    }
}
