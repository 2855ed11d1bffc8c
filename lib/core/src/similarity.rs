use crate::error::{Error, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Dense pairwise cosine-similarity matrix.
///
/// Square and symmetric; values clamped to [-1, 1]. Row and column `i`
/// correspond to row `i` of the roster the matrix was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    scores: Vec<f32>,
    n: usize,
}

impl SimilarityMatrix {
    /// Compute the full pairwise cosine-similarity matrix.
    ///
    /// Any pair involving a zero-norm row scores 0.0, the diagonal included:
    /// cosine similarity is undefined there and NaN must not escape. All rows
    /// must share one width; callers feed this from a scaler pass that has
    /// already checked it.
    #[must_use]
    pub fn compute(rows: &[Vec<f32>]) -> Self {
        let n = rows.len();
        let norms: Vec<f32> = rows.iter().map(|r| norm(r)).collect();
        let mut scores = vec![0.0f32; n * n];
        for i in 0..n {
            for j in i..n {
                let score = if norms[i] == 0.0 || norms[j] == 0.0 {
                    0.0
                } else {
                    (dot(&rows[i], &rows[j]) / (norms[i] * norms[j])).clamp(-1.0, 1.0)
                };
                scores[i * n + j] = score;
                scores[j * n + i] = score;
            }
        }
        Self { scores, n }
    }

    /// Matrix dimension (player count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between rows `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<f32> {
        for index in [i, j] {
            if index >= self.n {
                return Err(Error::IndexOutOfRange { index, len: self.n });
            }
        }
        Ok(self.scores[i * self.n + j])
    }

    /// Rank all other rows by similarity to `query_index`.
    ///
    /// Returns up to `k` `(row, score)` pairs in descending score order with
    /// the query row excluded. Equal scores order by ascending row index so
    /// rankings are reproducible. A `k` beyond the number of other rows
    /// returns them all.
    pub fn top_k(&self, query_index: usize, k: usize) -> Result<Vec<(usize, f32)>> {
        if query_index >= self.n {
            return Err(Error::IndexOutOfRange {
                index: query_index,
                len: self.n,
            });
        }
        if k == 0 {
            return Err(Error::InvalidLimit);
        }

        let row = &self.scores[query_index * self.n..(query_index + 1) * self.n];
        let mut ranked: Vec<(usize, f32)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(i, _)| i != query_index)
            .collect();
        ranked.sort_unstable_by_key(|&(i, score)| (Reverse(OrderedFloat(score)), i));
        ranked.truncate(k);
        Ok(ranked)
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(a: &[f32]) -> f32 {
    a.iter().map(|x| x * x).sum::<f32>().sqrt()
}
