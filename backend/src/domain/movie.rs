//! Movie record.

use std::fmt;

use super::validation::{RecordValidationError, bounded_text};

pub use example_data::{MOVIE_TITLE_MAX, MOVIE_YEAR_MAX};

/// Store-assigned movie identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(i64);

impl MovieId {
    /// Wrap a raw row identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw row identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// Movie title of at most [`MOVIE_TITLE_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTitle(String);

impl MovieTitle {
    /// Validate and construct a title.
    pub fn new(title: impl Into<String>) -> Result<Self, RecordValidationError> {
        bounded_text("movie title", title.into(), MOVIE_TITLE_MAX).map(Self)
    }

    pub(crate) fn from_stored(title: String) -> Self {
        Self(title)
    }
}

impl AsRef<str> for MovieTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MovieTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Release year kept as text.
///
/// Only the length cap is checked; `"198x"` is a valid year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieYear(String);

impl MovieYear {
    /// Validate and construct a year.
    ///
    /// # Examples
    /// ```
    /// use watchlist::domain::MovieYear;
    ///
    /// assert!(MovieYear::new("2008").is_ok());
    /// assert!(MovieYear::new("20080").is_err());
    /// ```
    pub fn new(year: impl Into<String>) -> Result<Self, RecordValidationError> {
        bounded_text("movie year", year.into(), MOVIE_YEAR_MAX).map(Self)
    }

    pub(crate) fn from_stored(year: String) -> Self {
        Self(year)
    }
}

impl AsRef<str> for MovieYear {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MovieYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    id: MovieId,
    title: MovieTitle,
    year: MovieYear,
}

impl Movie {
    /// Build a movie from its stored parts.
    #[must_use]
    pub fn new(id: MovieId, title: MovieTitle, year: MovieYear) -> Self {
        Self { id, title, year }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> MovieId {
        self.id
    }

    /// Movie title.
    #[must_use]
    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    /// Release year.
    #[must_use]
    pub fn year(&self) -> &MovieYear {
        &self.year
    }
}

/// A movie that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    title: MovieTitle,
    year: MovieYear,
}

impl NewMovie {
    /// Prepare a movie for insertion.
    #[must_use]
    pub fn new(title: MovieTitle, year: MovieYear) -> Self {
        Self { title, year }
    }

    /// Movie title.
    #[must_use]
    pub fn title(&self) -> &MovieTitle {
        &self.title
    }

    /// Release year.
    #[must_use]
    pub fn year(&self) -> &MovieYear {
        &self.year
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie::new(id, self.title, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1988")]
    #[case("198x")]
    #[case("99")]
    #[case("")]
    fn year_accepts_short_text(#[case] year: &str) {
        assert_eq!(MovieYear::new(year).map(|y| y.to_string()), Ok(year.to_owned()));
    }

    #[rstest]
    fn title_over_cap_is_rejected() {
        let result = MovieTitle::new("t".repeat(MOVIE_TITLE_MAX + 1));
        assert!(matches!(
            result,
            Err(RecordValidationError::TooLong { max, .. }) if max == MOVIE_TITLE_MAX
        ));
    }

    #[rstest]
    fn new_movie_keeps_fields_when_persisted() {
        let title = MovieTitle::new("WALL-E").expect("valid title");
        let year = MovieYear::new("2008").expect("valid year");
        let movie = NewMovie::new(title.clone(), year.clone()).into_movie(MovieId::new(9));
        assert_eq!(movie.id().get(), 9);
        assert_eq!(movie.title(), &title);
        assert_eq!(movie.year(), &year);
    }
}
