//! User-based collaborative filtering recommender.
//!
//! Predicts a user's rating for an item from the rating deviations of
//! similar users. Follows the fit/predict convention: `fit` materializes
//! the rating table once, after which every prediction entry point takes
//! `&self` and is safe to run concurrently.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{RecomendarError, Result};
use crate::neighbors::{select_neighbors, NeighborhoodPolicy};
use crate::store::{ItemId, QueryPair, RatingRecord, RatingStore, UserId};

/// User-based collaborative filtering (UBCF) recommender.
///
/// # Algorithm
///
/// 1. Score every other user who rated the query item with mean-centered
///    cosine similarity over co-rated items
/// 2. Keep the top-K after overlap and similarity filtering
/// 3. Predict `target_avg + Σ sim·(rating − neighbor_avg) / Σ |sim|`
///
/// Prediction is total: when the weighted sum has no mass it degrades
/// through user average, then global average, and always returns a
/// finite number.
///
/// # Examples
///
/// ```
/// use recomendar::prelude::*;
///
/// let training = vec![
///     RatingRecord::new(1, 10, 4.0),
///     RatingRecord::new(2, 10, 5.0),
///     RatingRecord::new(1, 20, 3.0),
///     RatingRecord::new(2, 20, 4.0),
///     RatingRecord::new(3, 10, 2.0),
/// ];
///
/// let mut model = UserBasedRecommender::new();
/// model.fit(&training).unwrap();
///
/// let prediction = model.predict(1, 10);
/// assert!((prediction - 4.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserBasedRecommender {
    /// Neighborhood selection thresholds.
    policy: NeighborhoodPolicy,
    /// Rating table built by `fit`.
    store: RatingStore,
}

impl UserBasedRecommender {
    /// Creates a recommender with the reference policy (`k = 30`,
    /// overlap >= 2, similarity > 0.05).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum neighborhood size.
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.policy.k = k;
        self
    }

    /// Sets the minimum co-rated item count for a candidate neighbor.
    #[must_use]
    pub fn with_min_overlap(mut self, min_overlap: usize) -> Self {
        self.policy.min_overlap = min_overlap;
        self
    }

    /// Sets the similarity threshold; candidates at or below it are dropped.
    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f32) -> Self {
        self.policy.min_similarity = min_similarity;
        self
    }

    /// Builds the rating table from training records. Refitting replaces
    /// any previous table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` if `k == 0` or the similarity
    /// threshold is not finite.
    pub fn fit(&mut self, records: &[RatingRecord]) -> Result<()> {
        if self.policy.k == 0 {
            return Err(RecomendarError::InvalidHyperparameter {
                param: "k".to_string(),
                value: "0".to_string(),
                constraint: "k >= 1".to_string(),
            });
        }
        if !self.policy.min_similarity.is_finite() {
            return Err(RecomendarError::InvalidHyperparameter {
                param: "min_similarity".to_string(),
                value: self.policy.min_similarity.to_string(),
                constraint: "must be finite".to_string(),
            });
        }

        self.store = RatingStore::new();
        self.store.ingest_all(records.iter().copied());
        Ok(())
    }

    /// Predicts the rating `user` would give `item`.
    ///
    /// Fallback tiers: personalized weighted prediction, then the user's
    /// own average when no neighbor carries weight, then the global
    /// average for users absent from the table.
    #[must_use]
    pub fn predict(&self, user: UserId, item: ItemId) -> f32 {
        let global_average = self.store.global_average();

        let target_ratings = match self.store.ratings_of(user) {
            Some(ratings) => ratings,
            None => return global_average,
        };
        let target_average = self.store.user_average(user);

        let neighbors = select_neighbors(&self.store, user, item, &self.policy);

        let mut numerator = 0.0f32;
        let mut denominator = 0.0f32;
        for neighbor in &neighbors {
            // Each neighbor carries its rating of `item`, so every
            // selected neighbor contributes weight to both sums.
            numerator +=
                neighbor.similarity * (neighbor.rating - self.store.user_average(neighbor.user));
            denominator += neighbor.similarity.abs();
        }

        if denominator > 0.0 {
            target_average + numerator / denominator
        } else if target_ratings.is_empty() {
            global_average
        } else {
            target_average
        }
    }

    /// Predicts a batch of queries, output order matching query order.
    ///
    /// Queries run in parallel; the table is immutable during prediction,
    /// so concurrent reads need no locking, and collection by index keeps
    /// results in submission order rather than completion order.
    #[must_use]
    pub fn predict_batch(&self, queries: &[QueryPair]) -> Vec<f32> {
        queries
            .par_iter()
            .map(|query| self.predict(query.user, query.item))
            .collect()
    }

    /// The active neighborhood policy.
    #[must_use]
    pub fn policy(&self) -> &NeighborhoodPolicy {
        &self.policy
    }

    /// The fitted rating table.
    #[must_use]
    pub fn store(&self) -> &RatingStore {
        &self.store
    }
}
