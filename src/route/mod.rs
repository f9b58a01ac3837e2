use crate::config::db::DB;
use crate::middleware::check_access::check_access;
use crate::AppState;
use axum::routing::{get, post, put};
use axum::{middleware, Router};
use std::sync::Arc;

pub mod admin_api;
pub mod public_api;

// One router carries the whole REST surface; the access-check layer decides
// per request whether a session is required. Blog reads and writes share
// paths, which is why they cannot live in separate routers.
pub fn create_routes(db: Arc<DB>) -> Router<AppState> {
    Router::new()
        .route(
            "/contacts",
            post(public_api::create_contact).get(public_api::list_contacts),
        )
        .route("/projects", get(public_api::list_projects))
        .route("/projects/{id}", get(public_api::get_project))
        .route("/tech-stack", get(public_api::list_tech_stack))
        .route("/tech-stack/{id}", get(public_api::get_tech_item))
        .route(
            "/blog",
            get(public_api::list_blog_posts).post(admin_api::create_blog_post),
        )
        .route(
            "/blog/{id}",
            get(public_api::get_blog_post)
                .put(admin_api::update_blog_post)
                .delete(admin_api::delete_blog_post),
        )
        .route("/admin/login", post(public_api::login))
        .route("/admin/logout", post(admin_api::logout))
        .route("/admin/me", get(admin_api::me))
        .route(
            "/admin/create-default",
            post(public_api::create_default_admin),
        )
        .route("/admin/projects", post(admin_api::create_project))
        .route(
            "/admin/projects/{id}",
            put(admin_api::update_project).delete(admin_api::delete_project),
        )
        .route("/admin/tech-stack", post(admin_api::create_tech_item))
        .route(
            "/admin/tech-stack/{id}",
            put(admin_api::update_tech_item).delete(admin_api::delete_tech_item),
        )
        .layer(middleware::from_fn(move |req, next| {
            check_access(db.clone(), req, next)
        }))
}
