//! Askama views and the per-render page context.
//!
//! Templates live in `backend/templates`. Every page that extends
//! `base.html` needs a [`PageContext`], which handlers load explicitly and
//! pass to the view.

use askama::Template;

use crate::domain::ports::UserRepository;
use crate::domain::{Error, Movie, User};

/// Values shared by every full-page template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    user: Option<User>,
}

impl PageContext {
    /// Wrap an already loaded user.
    #[must_use]
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    /// Load the first stored user, if any.
    ///
    /// # Errors
    ///
    /// Propagates repository failures as domain errors.
    pub async fn load(users: &dyn UserRepository) -> Result<Self, Error> {
        Ok(Self::new(users.first().await?))
    }

    /// The current user, if one is stored.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The current user's name, or an empty string without a user.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map_or("", |user| user.name().as_ref())
    }
}

/// Movie list rendered at `/sofia`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView<'a> {
    /// Page context.
    pub page: &'a PageContext,
    /// Movies in storage order.
    pub movies: &'a [Movie],
}

/// Page rendered for unmatched routes.
#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundView<'a> {
    /// Page context.
    pub page: &'a PageContext,
}

/// Greeting fragment for `/user/{name}`.
#[derive(Template)]
#[template(path = "user_page.html")]
pub struct UserGreetingView {
    name: String,
}

impl UserGreetingView {
    /// Greet `name`, escaping it for HTML text.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: escape_html(name),
        }
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` using named entities for the first
/// three and numeric references for the quotes.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
