//! Blog post handlers - the five CRUD endpoints.

use actix_web::{HttpResponse, web};

use blog_core::ports::PostPatch;
use blog_shared::dto::{CreatePostRequest, PostMessageResponse, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse the id path segment. The route accepts any segment, so a
/// non-integer id is reported the same way a non-positive one is.
fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid blog post ID".to_string()))
}

/// POST /blog
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    // A missing field and an empty one are validated identically.
    let post = state
        .blog
        .create(
            req.title.as_deref().unwrap_or(""),
            req.content.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(HttpResponse::Created().json(PostMessageResponse {
        message: "Blog post created successfully".to_string(),
        post: post.into(),
    }))
}

/// GET /blog
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.list().await?;
    let posts: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blog/{id}
pub async fn get_one(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.blog.get(id).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// PUT /blog/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();
    let post = state
        .blog
        .update(
            id,
            PostPatch {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(PostMessageResponse {
        message: "Blog post updated successfully".to_string(),
        post: post.into(),
    }))
}

/// DELETE /blog/{id}
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.blog.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use blog_core::BlogService;
    use blog_infra::InMemoryPostRepository;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            blog: Arc::new(BlogService::new(Arc::new(InMemoryPostRepository::new()))),
        }
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(test_state()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn crud_round_trip() {
        let app = test_app!();

        // create
        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(json!({"title": "Hello", "content": "World"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Blog post created successfully");
        assert_eq!(body["post"]["id"], 1);
        assert_eq!(body["post"]["createdAt"], body["post"]["updatedAt"]);

        // read it back
        let req = test::TestRequest::get().uri("/blog/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["content"], "World");

        // partial update: content stays untouched
        let req = test::TestRequest::put()
            .uri("/blog/1")
            .set_json(json!({"title": "Hi"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Blog post updated successfully");
        assert_eq!(body["post"]["title"], "Hi");
        assert_eq!(body["post"]["content"], "World");

        // delete
        let req = test::TestRequest::delete().uri("/blog/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        // gone
        let req = test::TestRequest::get().uri("/blog/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn non_positive_ids_are_rejected_as_invalid_not_missing() {
        let app = test_app!();

        for uri in ["/blog/0", "/blog/-5"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["detail"], "Invalid blog post ID");
        }
    }

    #[actix_web::test]
    async fn non_integer_ids_are_rejected_as_invalid() {
        let app = test_app!();

        let get = test::TestRequest::get().uri("/blog/abc").to_request();
        let put = test::TestRequest::put()
            .uri("/blog/abc")
            .set_json(json!({"title": "Hi"}))
            .to_request();
        let delete = test::TestRequest::delete().uri("/blog/abc").to_request();

        for req in [get, put, delete] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["detail"], "Invalid blog post ID");
        }
    }

    #[actix_web::test]
    async fn create_requires_title_and_content() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(json!({"title": "   ", "content": "body"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");
        assert_eq!(body["detail"], "Title is required");

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(json!({"title": "Hello", "content": ""}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Content is required");
    }

    #[actix_web::test]
    async fn create_treats_missing_fields_like_empty_ones() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(json!({"content": "body"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["title"], "Bad Request");
        assert_eq!(body["detail"], "Title is required");

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(json!({"title": "Hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Content is required");
    }

    #[actix_web::test]
    async fn update_of_missing_post_is_404_even_with_invalid_body() {
        let app = test_app!();

        let req = test::TestRequest::put()
            .uri("/blog/7")
            .set_json(json!({"title": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Blog post with ID 7 not found");
    }

    #[actix_web::test]
    async fn update_with_empty_field_is_rejected() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/blog")
            .set_json(json!({"title": "Hello", "content": "World"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/blog/1")
            .set_json(json!({"content": "  "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Content cannot be empty");
    }

    #[actix_web::test]
    async fn list_returns_posts_newest_first() {
        let app = test_app!();

        // empty store lists as an empty array
        let req = test::TestRequest::get().uri("/blog").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([]));

        for title in ["First", "Second"] {
            let req = test::TestRequest::post()
                .uri("/blog")
                .set_json(json!({"title": title, "content": "body"}))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/blog").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[actix_web::test]
    async fn delete_of_missing_post_is_404() {
        let app = test_app!();

        let req = test::TestRequest::delete().uri("/blog/3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
