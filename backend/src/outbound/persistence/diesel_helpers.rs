//! Query helpers shared by the SQLite repositories.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::{Movie, MovieId, NewMovie, NewUser, User, UserId};

use super::models::{NewMovieRow, NewUserRow};
use super::pool::DbConnection;
use super::schema::{movies, users};

diesel::define_sql_function! {
    /// Row id of the most recent successful insert on this connection.
    fn last_insert_rowid() -> BigInt;
}

/// Insert `user` and return it with its assigned id.
///
/// Must run inside a transaction so the row id read back belongs to this
/// insert.
pub(crate) async fn insert_user(
    conn: &mut DbConnection,
    user: &NewUser,
) -> QueryResult<User> {
    diesel::insert_into(users::table)
        .values(NewUserRow {
            name: user.name().as_ref(),
        })
        .execute(conn)
        .await?;
    let id = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .await?;
    Ok(user.clone().into_user(UserId::new(id)))
}

/// Insert `movie` and return it with its assigned id.
///
/// Must run inside a transaction, as for [`insert_user`].
pub(crate) async fn insert_movie(
    conn: &mut DbConnection,
    movie: &NewMovie,
) -> QueryResult<Movie> {
    diesel::insert_into(movies::table)
        .values(NewMovieRow {
            title: movie.title().as_ref(),
            year: movie.year().as_ref(),
        })
        .execute(conn)
        .await?;
    let id = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .await?;
    Ok(movie.clone().into_movie(MovieId::new(id)))
}
