use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod models;
mod routes;
mod services;

use adapters::PgStateRepository;
use application::{BattleService, CareService, ChatService, PowerVault, ToDoService};
use kokoro::{CompanionProvider, WeatherProvider};
use services::{GeminiCompanion, OpenWeatherClient};

/// Type aliases for application services with concrete repository implementations
pub type AppCareService = CareService<PgStateRepository>;
pub type AppToDoService = ToDoService<PgStateRepository>;
pub type AppBattleService = BattleService<PgStateRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<PgStateRepository>,
    pub care_service: Arc<AppCareService>,
    pub todo_service: Arc<AppToDoService>,
    pub battle_service: Arc<AppBattleService>,
    pub chat_service: Arc<ChatService>,
    pub weather: Option<Arc<dyn WeatherProvider>>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Kokoro API is running - turning stress into beatable monsters".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🌸 Kokoro API initializing...");

    // Initialize API key from secrets
    if let Some(api_key) = secrets.get("KOKORO_API_KEY") {
        auth::init_api_key(api_key);
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No KOKORO_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    // Initialize the Gemini companion if configured
    let companion: Option<Arc<dyn CompanionProvider>> = secrets.get("GEMINI_API_KEY").map(|key| {
        tracing::info!("🤖 Companion (Gemini) initialized");
        Arc::new(GeminiCompanion::new(key)) as Arc<dyn CompanionProvider>
    });

    if companion.is_none() {
        tracing::warn!("⚠️  No GEMINI_API_KEY set - chat degrades to canned replies");
    }

    // Initialize the weather provider if configured
    let weather: Option<Arc<dyn WeatherProvider>> = secrets.get("OWM_API_KEY").map(|key| {
        tracing::info!("🌤 Weather proxy (OpenWeatherMap) initialized");
        Arc::new(OpenWeatherClient::new(key)) as Arc<dyn WeatherProvider>
    });

    if weather.is_none() {
        tracing::warn!("⚠️  No OWM_API_KEY set - weather endpoint will report a config error");
    }

    // Initialize application services around the shared repository and
    // the process-wide power bank
    let repo = Arc::new(PgStateRepository::new(pool));
    let vault = Arc::new(PowerVault::new());
    let care_service = Arc::new(CareService::new(Arc::clone(&repo), Arc::clone(&vault)));
    let todo_service = Arc::new(ToDoService::new(Arc::clone(&repo), Arc::clone(&vault)));
    let battle_service = Arc::new(BattleService::new(Arc::clone(&repo), Arc::clone(&vault)));
    let chat_service = Arc::new(ChatService::new(companion));

    let state = AppState {
        repo,
        care_service,
        todo_service,
        battle_service,
        chat_service,
        weather,
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::assistant::router())
        .merge(routes::chat::router())
        .merge(routes::monster::router())
        .merge(routes::login::router())
        .merge(routes::diary::router())
        .merge(routes::sleep::router())
        .merge(routes::mood::router())
        .merge(routes::todos::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::weather::router())
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Kokoro API ready - お疲れさまです");

    Ok(router.into())
}
