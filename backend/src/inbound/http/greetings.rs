//! Greeting and diagnostic routes.
//!
//! ```text
//! GET /              -> Hello
//! GET /user/{name}   -> <h1>Hello {name}!</h1>...
//! GET /test          -> Test Page, plus generated URLs on stdout
//! ```
//!
//! Route names used for URL generation are assigned in
//! [`configure`](crate::inbound::http::configure).

use std::io::{self, Write};

use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, web};
use askama::Template;
use url::Url;

use crate::inbound::http::ApiResult;
use crate::inbound::http::not_found;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::UserGreetingView;

/// Plain greeting.
pub async fn hello() -> &'static str {
    "Hello"
}

/// Greet the decoded `name` path segment.
///
/// The name is HTML-escaped when the fragment is rendered. A name that
/// decodes to contain `/` spans more than one segment and is not found.
pub async fn user_page(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<HttpResponse> {
    if name.contains('/') {
        return not_found::not_found(state).await;
    }
    let body = UserGreetingView::new(name.as_str()).render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// Print the URLs generated for the named routes, then answer `Test Page`.
pub async fn test_url_for(req: HttpRequest) -> ApiResult<&'static str> {
    let urls = route_urls(&req)?;
    let mut stdout = io::stdout().lock();
    for url in &urls {
        if writeln!(stdout, "{url}").is_err() {
            break;
        }
    }
    Ok("Test Page")
}

/// Paths for `hello`, `user_page` with `sofia`, and `test_url_for` with and
/// without `num=2`.
pub fn route_urls(req: &HttpRequest) -> ApiResult<[String; 4]> {
    let root = req.url_for_static("hello")?;
    let user = req.url_for("user_page", ["sofia"])?;
    let test = req.url_for_static("test_url_for")?;
    let mut with_query = test.clone();
    with_query.query_pairs_mut().append_pair("num", "2");

    Ok([
        relative(&root),
        relative(&user),
        relative(&test),
        relative(&with_query),
    ])
}

fn relative(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::configure;
    use crate::inbound::http::test_utils::{movies_returning, sofia, state, users_returning};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    async fn urls_handler(req: HttpRequest) -> ApiResult<String> {
        Ok(route_urls(&req)?.join("\n"))
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let state = state(users_returning(Some(sofia())), movies_returning(Vec::new()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/urls", web::get().to(urls_handler))
                .configure(configure),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn hello_returns_plain_greeting() {
        let (status, body) = get_body("/").await;
        assert!(status.is_success());
        assert_eq!(body, "Hello");
    }

    #[rstest]
    #[case("/user/sofia", "<h1>Hello sofia!</h1>")]
    #[case("/user/Sofia%20Xia", "<h1>Hello Sofia Xia!</h1>")]
    #[case("/user/%3Cscript%3E", "<h1>Hello &lt;script&gt;!</h1>")]
    #[case("/user/Tom%20%26%20Jerry", "<h1>Hello Tom &amp; Jerry!</h1>")]
    #[actix_web::test]
    async fn user_page_embeds_escaped_name(#[case] uri: &str, #[case] expected: &str) {
        let (status, body) = get_body(uri).await;
        assert!(status.is_success());
        assert!(body.starts_with(expected), "unexpected body: {body}");
        assert!(body.contains(r#"<img src="http://helloflask.com/totoro.gif">"#));
    }

    #[rstest]
    #[case("/user/a%2Fb")]
    #[case("/user/%2F")]
    #[actix_web::test]
    async fn user_page_rejects_encoded_slash(#[case] uri: &str) {
        let (status, body) = get_body(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found - 404"));
        assert!(!body.contains("Hello a/b!"));
    }

    #[rstest]
    #[actix_web::test]
    async fn test_page_answers_with_fixed_text() {
        let (status, body) = get_body("/test").await;
        assert!(status.is_success());
        assert_eq!(body, "Test Page");
    }

    #[rstest]
    #[actix_web::test]
    async fn route_urls_follow_named_routes() {
        let (_, body) = get_body("/urls").await;
        assert_eq!(body, "/\n/user/sofia\n/test\n/test?num=2");
    }
}
