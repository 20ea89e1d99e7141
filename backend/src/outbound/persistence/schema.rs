//! Diesel table definitions for the SQLite schema.
//!
//! These must match `backend/migrations`. SQLite does not enforce the
//! `VARCHAR` lengths declared there; the domain constructors do.

diesel::table! {
    /// The site owner. Zero or one row in practice.
    users (id) {
        /// Auto-assigned row identifier.
        id -> BigInt,
        /// Display name, at most 20 characters.
        name -> Text,
    }
}

diesel::table! {
    /// Watched movies.
    movies (id) {
        /// Auto-assigned row identifier.
        id -> BigInt,
        /// Title, at most 60 characters.
        title -> Text,
        /// Release year as text, at most 4 characters.
        year -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, movies);
