pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeFile;

use crate::directory::handlers as directory;
use crate::showcase::handlers as showcase;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let index = ServeFile::new(&state.config.static_index);

    Router::new()
        .route("/health", get(health::health_handler))
        // Showcase profile (GET/PUT) and directory create (POST) share the path
        .route(
            "/profile",
            get(showcase::handle_get_profile)
                .put(showcase::handle_update_profile)
                .post(directory::handle_create_profile),
        )
        .route(
            "/projects",
            get(showcase::handle_list_projects).post(showcase::handle_create_project),
        )
        .route("/search", get(showcase::handle_search))
        .route("/skills/top", get(showcase::handle_top_skills))
        // Profile directory
        .route(
            "/profile/:id",
            get(directory::handle_get_profile)
                .put(directory::handle_update_profile)
                .delete(directory::handle_delete_profile),
        )
        .route("/profiles", get(directory::handle_list_profiles))
        .route_service("/", index)
        .with_state(state)
}
