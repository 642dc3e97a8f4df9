//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recomendar::prelude::*;
//! ```

pub use crate::dataset::{read_split, write_predictions, TrainTestSplit};
pub use crate::neighbors::{select_neighbors, Neighbor, NeighborhoodPolicy};
pub use crate::recommend::UserBasedRecommender;
pub use crate::similarity::{cosine_similarity, user_similarity};
pub use crate::store::{ItemId, QueryPair, RatingRecord, RatingStore, UserId};
