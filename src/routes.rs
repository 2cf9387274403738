use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use crate::config::settings::AppConfig;
use crate::state::AppState;

use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes(config: &AppConfig) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(crate::modules::system::router())
        .merge(crate::modules::upload::router(config.max_upload_bytes))
        .merge(crate::modules::process::router())
        .merge(crate::modules::rocket::router())
        .merge(crate::modules::share::router())
        .layer(cors)
}
