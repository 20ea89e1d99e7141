//! Length checks mirroring the backend storage caps.
//!
//! The backend declares `name VARCHAR(20)`, `title VARCHAR(60)` and
//! `year VARCHAR(4)`. SQLite does not enforce these, so datasets are checked
//! here before anything reaches the database. Values are otherwise free-form;
//! blank strings are accepted.

use crate::error::DatasetError;

/// Maximum length of a user name, in characters.
pub const USER_NAME_MAX: usize = 20;

/// Maximum length of a movie title, in characters.
pub const MOVIE_TITLE_MAX: usize = 60;

/// Maximum length of a movie year, in characters.
pub const MOVIE_YEAR_MAX: usize = 4;

pub(crate) fn check_user_name(name: &str) -> Result<(), DatasetError> {
    if name.chars().count() > USER_NAME_MAX {
        return Err(DatasetError::UserNameTooLong {
            name: name.to_owned(),
            max: USER_NAME_MAX,
        });
    }
    Ok(())
}

pub(crate) fn check_movie(index: usize, title: &str, year: &str) -> Result<(), DatasetError> {
    if title.chars().count() > MOVIE_TITLE_MAX {
        return Err(DatasetError::MovieTitleTooLong {
            index,
            max: MOVIE_TITLE_MAX,
        });
    }
    if year.chars().count() > MOVIE_YEAR_MAX {
        return Err(DatasetError::MovieYearTooLong {
            index,
            year: year.to_owned(),
            max: MOVIE_YEAR_MAX,
        });
    }
    Ok(())
}
