//! Internal Diesel row structs.
//!
//! Rows are converted to domain records at the adapter boundary and never
//! leave this module tree. Stored values are taken as they are; caps are
//! checked on the way in, not on every read.

use diesel::prelude::*;

use crate::domain::{Movie, MovieId, MovieTitle, MovieYear, User, UserId, UserName};

use super::schema::{movies, users};

/// Row read from the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), UserName::from_stored(row.name))
    }
}

/// Insertable user.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
}

/// Row read from the `movies` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct MovieRow {
    pub id: i64,
    pub title: String,
    pub year: String,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie::new(
            MovieId::new(row.id),
            MovieTitle::from_stored(row.title),
            MovieYear::from_stored(row.year),
        )
    }
}

/// Insertable movie.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = movies)]
pub(crate) struct NewMovieRow<'a> {
    pub title: &'a str,
    pub year: &'a str,
}
