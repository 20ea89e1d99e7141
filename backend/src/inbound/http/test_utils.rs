//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{MockMovieRepository, MockUserRepository, RecordPersistenceError};
use crate::domain::{Movie, MovieId, MovieTitle, MovieYear, User, UserId, UserName};

use super::state::HttpState;

/// The seeded user.
pub fn sofia() -> User {
    User::new(
        UserId::new(1),
        UserName::new("Sofia Xia").expect("valid name"),
    )
}

/// Build a stored movie.
pub fn movie(id: i64, title: &str, year: &str) -> Movie {
    Movie::new(
        MovieId::new(id),
        MovieTitle::new(title).expect("valid title"),
        MovieYear::new(year).expect("valid year"),
    )
}

/// User repository double answering reads with `user`.
pub fn users_returning(user: Option<User>) -> MockUserRepository {
    let mut users = MockUserRepository::new();
    let all = user.clone().into_iter().collect::<Vec<_>>();
    users.expect_first().returning(move || Ok(user.clone()));
    users.expect_all().returning(move || Ok(all.clone()));
    users
}

/// Movie repository double answering reads with `movies`.
pub fn movies_returning(movies: Vec<Movie>) -> MockMovieRepository {
    let mut repo = MockMovieRepository::new();
    let first = movies.first().cloned();
    repo.expect_all().returning(move || Ok(movies.clone()));
    repo.expect_first().returning(move || Ok(first.clone()));
    repo
}

/// Movie repository double whose reads fail with `error`.
pub fn movies_failing(error: RecordPersistenceError) -> MockMovieRepository {
    let mut repo = MockMovieRepository::new();
    repo.expect_all().returning(move || Err(error.clone()));
    repo
}

/// Bundle doubles into handler state.
pub fn state(users: MockUserRepository, movies: MockMovieRepository) -> HttpState {
    HttpState::new(Arc::new(users), Arc::new(movies))
}
