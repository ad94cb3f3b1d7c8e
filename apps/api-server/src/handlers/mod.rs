//! HTTP handlers and route configuration.

mod blog;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blog")
                .route("", web::post().to(blog::create))
                .route("", web::get().to(blog::list))
                .route("/{id}", web::get().to(blog::get_one))
                .route("/{id}", web::put().to(blog::update))
                .route("/{id}", web::delete().to(blog::remove)),
        );
}
