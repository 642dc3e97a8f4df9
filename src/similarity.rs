//! Mean-centered cosine similarity between users' rating patterns.
//!
//! Two users are compared only over the items both have rated. Each
//! user's own average is subtracted first, so the comparison sees rating
//! *patterns* rather than absolute scales: a harsh grader and a generous
//! one who like the same things still come out similar.

use std::collections::BTreeMap;

use crate::store::ItemId;

/// Mean of a rating map; 0.0 for an empty map.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use recomendar::similarity::mean_rating;
///
/// let ratings: BTreeMap<u32, f32> = [(10, 4.0), (20, 3.0)].into_iter().collect();
/// assert!((mean_rating(&ratings) - 3.5).abs() < 1e-6);
/// assert_eq!(mean_rating(&BTreeMap::new()), 0.0);
/// ```
#[must_use]
pub fn mean_rating(ratings: &BTreeMap<ItemId, f32>) -> f32 {
    if ratings.is_empty() {
        return 0.0;
    }
    ratings.values().sum::<f32>() / ratings.len() as f32
}

/// Builds two parallel mean-centered vectors over the co-rated items of
/// `a` and `b`, pairing preserved (position `i` in both outputs refers to
/// the same item).
///
/// Items rated by only one of the two users are ignored.
#[must_use]
pub fn centered_overlap(
    a: &BTreeMap<ItemId, f32>,
    b: &BTreeMap<ItemId, f32>,
) -> (Vec<f32>, Vec<f32>) {
    let avg_a = mean_rating(a);
    let avg_b = mean_rating(b);

    let mut centered_a = Vec::new();
    let mut centered_b = Vec::new();
    for (item, &rating_a) in a {
        if let Some(&rating_b) = b.get(item) {
            centered_a.push(rating_a - avg_a);
            centered_b.push(rating_b - avg_b);
        }
    }
    (centered_a, centered_b)
}

/// Cosine similarity of two equal-length vectors: `dot / (||a|| * ||b||)`.
///
/// Returns 0.0 when either norm is zero; a vector with no variance over
/// the co-rated set cannot correlate with anything. The result is
/// clamped to `[-1, 1]`: rounding in the norm product can push the raw
/// ratio a hair past the mathematical bound, which would let a perfect
/// match slip through a threshold gate set exactly at 1.0.
///
/// # Examples
///
/// ```
/// use recomendar::similarity::cosine_similarity;
///
/// let sim = cosine_similarity(&[0.5, -0.5], &[0.5, -0.5]);
/// assert!((sim - 1.0).abs() < 1e-6);
/// ```
///
/// # Panics
///
/// Panics if the vectors have different lengths.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
    }
}

/// Similarity between two users: cosine over their mean-centered
/// co-rated ratings.
///
/// There is no minimum-overlap requirement here. A single co-rated item
/// always yields a degenerate +/-1 signal, so neighbor selection gates on
/// overlap before trusting this value; the gate is a quality filter, not
/// part of the similarity definition.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use recomendar::similarity::user_similarity;
///
/// let a: BTreeMap<u32, f32> = [(10, 4.0), (20, 3.0)].into_iter().collect();
/// let b: BTreeMap<u32, f32> = [(10, 5.0), (20, 4.0)].into_iter().collect();
/// assert!((user_similarity(&a, &b) - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn user_similarity(a: &BTreeMap<ItemId, f32>, b: &BTreeMap<ItemId, f32>) -> f32 {
    let (centered_a, centered_b) = centered_overlap(a, b);
    cosine_similarity(&centered_a, &centered_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(pairs: &[(ItemId, f32)]) -> BTreeMap<ItemId, f32> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_identical_patterns_similarity_one() {
        let a = ratings(&[(1, 5.0), (2, 3.0), (3, 1.0)]);
        let b = ratings(&[(1, 5.0), (2, 3.0), (3, 1.0)]);
        assert!((user_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_opposite_patterns_similarity_negative_one() {
        // Centered: a -> (2, -2), b -> (-2, 2).
        let a = ratings(&[(1, 5.0), (2, 1.0)]);
        let b = ratings(&[(1, 1.0), (2, 5.0)]);
        assert!((user_similarity(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = ratings(&[(1, 4.0), (2, 2.0), (3, 5.0), (7, 1.0)]);
        let b = ratings(&[(1, 3.0), (2, 4.0), (3, 2.0), (9, 5.0)]);
        let ab = user_similarity(&a, &b);
        let ba = user_similarity(&b, &a);
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_zero_variance_user_similarity_zero() {
        // Constant rater: centered vector is all zeros, norm is zero.
        let a = ratings(&[(1, 3.0), (2, 3.0)]);
        let b = ratings(&[(1, 5.0), (2, 1.0)]);
        assert_eq!(user_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_no_overlap_similarity_zero() {
        let a = ratings(&[(1, 4.0), (2, 2.0)]);
        let b = ratings(&[(3, 3.0), (4, 5.0)]);
        assert_eq!(user_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_centered_overlap_restricts_to_intersection() {
        let a = ratings(&[(1, 4.0), (2, 3.0), (5, 2.0)]);
        let b = ratings(&[(2, 5.0), (5, 1.0), (9, 4.0)]);
        let (ca, cb) = centered_overlap(&a, &b);
        assert_eq!(ca.len(), 2);
        assert_eq!(cb.len(), 2);
        // avg_a = 3.0, avg_b = 10/3; items 2 and 5 in ascending order.
        assert!((ca[0] - 0.0).abs() < 1e-6);
        assert!((ca[1] + 1.0).abs() < 1e-6);
        assert!((cb[0] - (5.0 - 10.0 / 3.0)).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_empty_vectors() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_cosine_orthogonal() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_never_exceeds_unit_bound() {
        // Without clamping, the rounded norm product of these vectors
        // lands just below the dot product and the ratio tops 1.0.
        let sim = cosine_similarity(&[0.5, -0.5], &[0.5, -0.5]);
        assert!(sim <= 1.0);
        assert!((sim - 1.0).abs() < 1e-6);

        let sim = cosine_similarity(&[0.5, -0.5], &[-0.5, 0.5]);
        assert!(sim >= -1.0);
        assert!((sim + 1.0).abs() < 1e-6);
    }
}
