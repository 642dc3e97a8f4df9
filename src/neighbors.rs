//! Top-K neighbor selection for a target `(user, item)` query.
//!
//! Scans every other user who rated the query item, scores them against
//! the target with mean-centered cosine similarity, filters out weak
//! candidates, and keeps the `k` most similar.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::similarity::{centered_overlap, cosine_similarity};
use crate::store::{ItemId, RatingStore, UserId};

/// Selection thresholds for the neighborhood scan.
///
/// These are policy knobs, not mathematical bounds:
/// - `min_overlap` rejects candidates sharing too few co-rated items with
///   the target; sparse overlap produces degenerate correlation signals.
/// - `min_similarity` rejects weak or negative correlations that add
///   noise rather than signal to the weighted prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodPolicy {
    /// Maximum number of neighbors kept per query.
    pub k: usize,
    /// Minimum co-rated item count between candidate and target.
    pub min_overlap: usize,
    /// Candidates with similarity at or below this value are dropped.
    pub min_similarity: f32,
}

impl Default for NeighborhoodPolicy {
    /// Reference deployment values: `k = 30`, at least 2 co-rated items,
    /// similarity strictly above 0.05.
    fn default() -> Self {
        Self {
            k: 30,
            min_overlap: 2,
            min_similarity: 0.05,
        }
    }
}

/// A selected neighbor: a user scored against the query target.
///
/// Carries the neighbor's rating of the query item so prediction never
/// has to look it up again; selection already proved it exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The candidate user.
    pub user: UserId,
    /// Mean-centered cosine similarity to the target user.
    pub similarity: f32,
    /// The candidate's rating of the query item.
    pub rating: f32,
}

/// Selects up to `policy.k` neighbors of `target` for predicting `item`,
/// ordered by similarity descending.
///
/// Candidates are every user other than `target` who rated `item`.
/// Filtering happens in two stages: overlap below `policy.min_overlap`
/// is rejected before scoring, similarity at or below
/// `policy.min_similarity` after. The sort is stable over the store's
/// ascending user order, so equal similarities tie-break by user id and
/// the result is reproducible run-to-run.
///
/// Returns an empty vector when the target is unknown, has no ratings,
/// or no candidate survives the filters.
#[must_use]
pub fn select_neighbors(
    store: &RatingStore,
    target: UserId,
    item: ItemId,
    policy: &NeighborhoodPolicy,
) -> Vec<Neighbor> {
    let target_ratings = match store.ratings_of(target) {
        Some(ratings) if !ratings.is_empty() => ratings,
        _ => return Vec::new(),
    };

    let mut candidates = Vec::new();
    for (user, ratings) in store.iter() {
        if user == target {
            continue;
        }
        let rating = match ratings.get(&item) {
            Some(&rating) => rating,
            None => continue,
        };

        let (centered_target, centered_candidate) = centered_overlap(target_ratings, ratings);
        if centered_target.len() < policy.min_overlap {
            continue;
        }

        let similarity = cosine_similarity(&centered_target, &centered_candidate);
        if similarity <= policy.min_similarity {
            continue;
        }

        candidates.push(Neighbor {
            user,
            similarity,
            rating,
        });
    }

    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    candidates.truncate(policy.k);
    candidates
}
