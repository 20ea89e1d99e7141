//! Fallback for unmatched routes.

use actix_web::{HttpResponse, http::header::ContentType, web};
use askama::Template;

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{NotFoundView, PageContext};

/// Render the not-found page with status 404.
///
/// Registered as the application's default service.
pub async fn not_found(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let page = PageContext::load(state.users.as_ref()).await?;
    let body = NotFoundView { page: &page }.render()?;
    Ok(HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{movies_returning, sofia, state, users_returning};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[case("/missing")]
    #[case("/user")]
    #[case("/sofia/extra")]
    #[actix_web::test]
    async fn unmatched_paths_render_not_found_page(#[case] uri: &str) {
        let state = state(users_returning(Some(sofia())), movies_returning(Vec::new()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .default_service(web::to(not_found)),
        )
        .await;

        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = actix_test::read_body(response).await;
        let body = String::from_utf8(body.to_vec()).expect("utf-8 body");
        assert!(body.contains("Page Not Found - 404"));
        assert!(body.contains("Sofia Xia"));
    }
}
