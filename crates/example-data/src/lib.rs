//! Fixed sample data for seeding the watchlist store.
//!
//! This crate describes the demonstration user and movies that the `forge`
//! command writes. It is independent of backend domain types so the dataset
//! can be validated and inspected without a database.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - The built-in dataset used when no file is supplied
//! - Loading alternative datasets from JSON files
//! - Length checks matching the backend storage caps
//!
//! # Example
//!
//! ```
//! use example_data::default_dataset;
//!
//! let dataset = default_dataset();
//! assert_eq!(dataset.user().name(), "Sofia Xia");
//! assert_eq!(dataset.movies().len(), 10);
//! ```

mod dataset;
mod error;
mod validation;

pub use dataset::{MovieSeed, SeedDataset, UserSeed, default_dataset};
pub use error::DatasetError;
pub use validation::{MOVIE_TITLE_MAX, MOVIE_YEAR_MAX, USER_NAME_MAX};
