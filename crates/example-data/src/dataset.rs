//! Seed dataset types and JSON parsing.
//!
//! A dataset holds exactly one user and a non-empty list of movies. The
//! built-in dataset is returned by [`default_dataset`]; alternative datasets
//! are read from JSON files shaped like:
//!
//! ```json
//! {
//!     "version": 1,
//!     "user": { "name": "Sofia Xia" },
//!     "movies": [{ "title": "WALL-E", "year": "2008" }]
//! }
//! ```

use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::DatasetError;
use crate::validation::{check_movie, check_user_name};

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

const DEFAULT_USER_NAME: &str = "Sofia Xia";

const DEFAULT_MOVIES: [(&str, &str); 10] = [
    ("My Neighbor Totoro", "1988"),
    ("Dead Poets Society", "1989"),
    ("A Perfect World", "1993"),
    ("Leon", "1994"),
    ("Mahjong", "1996"),
    ("Swallowtail Butterfly", "1996"),
    ("King of Comedy", "1999"),
    ("Devils on the Doorstep", "1999"),
    ("WALL-E", "2008"),
    ("The Pork of Music", "2012"),
];

/// The user written by a seed run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSeed {
    name: String,
}

impl UserSeed {
    /// Returns the user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A movie written by a seed run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovieSeed {
    title: String,
    year: String,
}

impl MovieSeed {
    /// Returns the movie title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the release year as stored text.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }
}

/// A validated set of seed records.
///
/// # Example
///
/// ```
/// use example_data::SeedDataset;
///
/// let json = r#"{
///     "version": 1,
///     "user": {"name": "Ada"},
///     "movies": [{"title": "Leon", "year": "1994"}]
/// }"#;
///
/// let dataset = SeedDataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.movies()[0].title(), "Leon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    user: UserSeed,
    movies: Vec<MovieSeed>,
}

impl SeedDataset {
    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the JSON is malformed, the version is
    /// unsupported, or any record breaks the storage caps.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawSeedDataset =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
                message: e.to_string(),
            })?;

        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Self::validated(raw.user, raw.movies)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let io_error = |message: String| DatasetError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("dataset path must be a file".to_owned()))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(Path::new(file_name))
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    fn validated(user: UserSeed, movies: Vec<MovieSeed>) -> Result<Self, DatasetError> {
        check_user_name(&user.name)?;
        if movies.is_empty() {
            return Err(DatasetError::EmptyMovies);
        }
        for (index, movie) in movies.iter().enumerate() {
            check_movie(index, &movie.title, &movie.year)?;
        }
        Ok(Self { user, movies })
    }

    /// Returns the seed user.
    #[must_use]
    pub fn user(&self) -> &UserSeed {
        &self.user
    }

    /// Returns the seed movies in insertion order.
    #[must_use]
    pub fn movies(&self) -> &[MovieSeed] {
        &self.movies
    }
}

/// Returns the built-in dataset: one user and ten movies from 1988 to 2012.
#[must_use]
pub fn default_dataset() -> SeedDataset {
    SeedDataset {
        user: UserSeed {
            name: DEFAULT_USER_NAME.to_owned(),
        },
        movies: DEFAULT_MOVIES
            .iter()
            .map(|(title, year)| MovieSeed {
                title: (*title).to_owned(),
                year: (*year).to_owned(),
            })
            .collect(),
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSeedDataset {
    version: u32,
    user: UserSeed,
    movies: Vec<MovieSeed>,
}
