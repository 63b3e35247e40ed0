// File: services/tailortalk_backend/src/main.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tailortalk_agent::routes as agent_routes;
use tailortalk_config::load_config;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod app_state;
use app_state::AppState;

#[tokio::main]
async fn main() {
    tailortalk_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let state = AppState::new(config.clone());

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to TailorTalk API!" }))
        .merge(agent_routes(
            config.clone(),
            state.engine.clone(),
            state.extractor.clone(),
        ));

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use tailortalk_agent::doc::AgentApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "TailorTalk API",
                version = "0.1.0",
                description = "TailorTalk booking agent API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "TailorTalk", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AgentApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // The chat frontend is served elsewhere; allow it to call the API directly.
    app = app.layer(CorsLayer::permissive());

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
