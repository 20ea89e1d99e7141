//! Movie list page.

use actix_web::{HttpResponse, http::header::ContentType, web};
use askama::Template;

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{IndexView, PageContext};

/// Render every stored movie under the current user's name.
pub async fn index(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let page = PageContext::load(state.users.as_ref()).await?;
    let movies = state.movies.all().await?;
    let body = IndexView {
        page: &page,
        movies: &movies,
    }
    .render()?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RecordPersistenceError;
    use crate::inbound::http::test_utils::{
        movie, movies_failing, movies_returning, sofia, state, users_returning,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    async fn call_index(state: HttpState) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/sofia", web::get().to(index)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/sofia").to_request(),
        )
        .await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn index_renders_movies_with_user() {
        let movies = vec![
            movie(1, "My Neighbor Totoro", "1988"),
            movie(2, "WALL-E", "2008"),
        ];
        let (status, body) =
            call_index(state(users_returning(Some(sofia())), movies_returning(movies))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sofia Xia"));
        assert!(body.contains("2 Titles"));
        assert!(body.contains("My Neighbor Totoro - 1988"));
        assert!(body.contains("WALL-E - 2008"));
    }

    #[rstest]
    #[actix_web::test]
    async fn index_renders_empty_store() {
        let (status, body) =
            call_index(state(users_returning(None), movies_returning(Vec::new()))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("0 Titles"));
    }

    #[rstest]
    #[case(RecordPersistenceError::query("no such table: movies"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(RecordPersistenceError::connection("timed out"), StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn store_failures_surface_as_errors(
        #[case] error: RecordPersistenceError,
        #[case] expected: StatusCode,
    ) {
        let (status, body) =
            call_index(state(users_returning(Some(sofia())), movies_failing(error))).await;

        assert_eq!(status, expected);
        assert!(!body.contains("no such table"));
    }
}
