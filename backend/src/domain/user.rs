//! User record.
//!
//! The store holds zero or one user in practice; nothing enforces that, and
//! readers that need "the" user take the first row by id.

use std::fmt;

use super::validation::{RecordValidationError, bounded_text};

/// Maximum length of a user name, matching `name VARCHAR(20)`.
pub use example_data::USER_NAME_MAX;

/// Store-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
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

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form user name of at most [`USER_NAME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a user name.
    ///
    /// # Examples
    /// ```
    /// use watchlist::domain::UserName;
    ///
    /// assert!(UserName::new("Sofia Xia").is_ok());
    /// assert!(UserName::new("a name that is far too long").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, RecordValidationError> {
        bounded_text("user name", name.into(), USER_NAME_MAX).map(Self)
    }

    /// Wrap a name read back from storage without checking it again.
    pub(crate) fn from_stored(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    /// Build a user from its stored parts.
    #[must_use]
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The user's name.
    #[must_use]
    pub fn name(&self) -> &UserName {
        &self.name
    }
}

/// A user that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: UserName,
}

impl NewUser {
    /// Prepare a user for insertion.
    #[must_use]
    pub fn new(name: UserName) -> Self {
        Self { name }
    }

    /// The user's name.
    #[must_use]
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.name)
    }
}
