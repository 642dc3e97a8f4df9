//! Recomendar: user-based collaborative filtering in pure Rust.
//!
//! Predicts a user's rating for an item from the ratings of users with
//! similar taste: mean-centered cosine similarity over co-rated items,
//! top-K neighbor selection, and a similarity-weighted deviation
//! prediction with graceful fallbacks for sparse data.
//!
//! # Quick Start
//!
//! ```
//! use recomendar::prelude::*;
//!
//! let training = vec![
//!     RatingRecord::new(1, 10, 4.0),
//!     RatingRecord::new(2, 10, 5.0),
//!     RatingRecord::new(1, 20, 3.0),
//!     RatingRecord::new(2, 20, 4.0),
//!     RatingRecord::new(3, 10, 2.0),
//! ];
//!
//! let mut model = UserBasedRecommender::new().with_k(30);
//! model.fit(&training).unwrap();
//!
//! // User 2 rates like user 1 but half a point higher, so user 1's
//! // predicted rating for item 10 lands above their own average.
//! let prediction = model.predict(1, 10);
//! assert!((prediction - 4.0).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`store`]: Sparse user-item rating table with global/user averages
//! - [`similarity`]: Mean-centered cosine similarity between users
//! - [`neighbors`]: Top-K neighbor selection with quality filters
//! - [`recommend`]: The [`recommend::UserBasedRecommender`] fit/predict model
//! - [`dataset`]: Two-section rating stream parsing and output formatting
//! - [`error`]: Error types for configuration and I/O seams

pub mod dataset;
pub mod error;
pub mod neighbors;
pub mod prelude;
pub mod recommend;
pub mod similarity;
pub mod store;
