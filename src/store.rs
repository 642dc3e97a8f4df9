//! Sparse rating storage: user -> item -> rating.
//!
//! The store is built once from training records and read-only afterwards.
//! Lookups for unknown users or items yield empty results, never errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::similarity::mean_rating;

/// Identifier for a user in the rating table.
pub type UserId = u32;

/// Identifier for a rated item.
pub type ItemId = u32;

/// One training observation: a user's rating for an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// User who gave the rating.
    pub user: UserId,
    /// Rated item.
    pub item: ItemId,
    /// Rating value.
    pub rating: f32,
}

impl RatingRecord {
    /// Creates a new rating record.
    #[must_use]
    pub fn new(user: UserId, item: ItemId, rating: f32) -> Self {
        Self { user, item, rating }
    }
}

/// One prediction request: which rating would `user` give `item`?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryPair {
    /// User to predict for.
    pub user: UserId,
    /// Item to predict the rating of.
    pub item: ItemId,
}

impl QueryPair {
    /// Creates a new query pair.
    #[must_use]
    pub fn new(user: UserId, item: ItemId) -> Self {
        Self { user, item }
    }
}

/// Sparse user-item rating table with a running global average.
///
/// `BTreeMap` keeps user and item iteration in ascending id order, so
/// candidate scans, similarity ties, and floating-point accumulation
/// are reproducible across runs.
///
/// # Examples
///
/// ```
/// use recomendar::store::{RatingRecord, RatingStore};
///
/// let mut store = RatingStore::new();
/// store.ingest(RatingRecord::new(1, 10, 4.0));
/// store.ingest(RatingRecord::new(1, 20, 3.0));
///
/// assert_eq!(store.n_users(), 1);
/// assert!((store.user_average(1) - 3.5).abs() < 1e-6);
/// assert!(store.ratings_of(99).is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingStore {
    /// user -> (item -> rating)
    ratings: BTreeMap<UserId, BTreeMap<ItemId, f32>>,
    /// Running sum over every ingested rating.
    rating_sum: f32,
    /// Running count over every ingested rating.
    rating_count: usize,
}

impl RatingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rating, overwriting any previous rating for the same
    /// `(user, item)` pair (last write wins).
    ///
    /// Every ingested record feeds the global-average accumulator, including
    /// records later overwritten: the accumulator mirrors the raw stream,
    /// not the deduplicated table.
    pub fn ingest(&mut self, record: RatingRecord) {
        self.ratings
            .entry(record.user)
            .or_default()
            .insert(record.item, record.rating);
        self.rating_sum += record.rating;
        self.rating_count += 1;
    }

    /// Ingests every record from an iterator.
    pub fn ingest_all<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = RatingRecord>,
    {
        for record in records {
            self.ingest(record);
        }
    }

    /// Returns a user's ratings, or `None` for an unknown user.
    #[must_use]
    pub fn ratings_of(&self, user: UserId) -> Option<&BTreeMap<ItemId, f32>> {
        self.ratings.get(&user)
    }

    /// Whether the user appears in the table.
    #[must_use]
    pub fn contains_user(&self, user: UserId) -> bool {
        self.ratings.contains_key(&user)
    }

    /// Mean of the user's ratings; 0.0 for an unknown user.
    #[must_use]
    pub fn user_average(&self, user: UserId) -> f32 {
        self.ratings_of(user).map_or(0.0, mean_rating)
    }

    /// Mean of every ingested rating; 0.0 if nothing was ingested.
    #[must_use]
    pub fn global_average(&self) -> f32 {
        if self.rating_count == 0 {
            0.0
        } else {
            self.rating_sum / self.rating_count as f32
        }
    }

    /// Number of distinct users.
    #[must_use]
    pub fn n_users(&self) -> usize {
        self.ratings.len()
    }

    /// Number of ingested records (overwrites included).
    #[must_use]
    pub fn n_ratings(&self) -> usize {
        self.rating_count
    }

    /// Whether the store holds no ratings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rating_count == 0
    }

    /// Iterates users with their rating maps, in ascending user id order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &BTreeMap<ItemId, f32>)> + '_ {
        self.ratings.iter().map(|(&user, ratings)| (user, ratings))
    }

    /// Iterates user ids in ascending order.
    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.ratings.keys().copied()
    }
}
