use std::net::SocketAddr;

use axum::{Router, extract::{Path, State}, http::Method, response::{IntoResponse, Response}, Json};
use reqwest::StatusCode;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::{Any, CorsLayer}, trace::TraceLayer};
use tracing::log;

use crate::error::StatsError;
use crate::models_api::player_stats::PlayerStats;
use crate::player_stats_service::SafePlayerStatsService;

#[derive(Clone)]
pub struct ApiState {
    pub stats_service: SafePlayerStatsService,
}

/// Body of every non-200 response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    fn new(status: StatusCode, message: &str) -> ApiError {
        ApiError { message: message.to_string(), status: status.as_u16() }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::InvalidPlatform(platform) => {
                log::info!("[API] Invalid platform {platform}");
                ApiError::new(StatusCode::BAD_REQUEST, "Platform provided is not a valid option")
            },
            StatsError::PlayerNotFound => ApiError::new(StatusCode::NOT_FOUND, "Player not found"),
            e if e.is_fetch_failure() => {
                log::error!("[API] Failed to retrieve player stats: {e}");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to retrieve player stats")
            },
            e => {
                log::error!("[API] Failed to parse player profile: {e}");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to parse player profile")
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

pub struct Api;
impl Api {
    pub async fn serve(port: u16, stats_service: SafePlayerStatsService) -> anyhow::Result<()> {
        let app = Api::router(ApiState { stats_service });
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await?;
        Ok(())
    }

    pub fn router(state: ApiState) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]);

        Router::new()
            .route("/stats/:platform/:tag", axum::routing::get(Api::get_stats))
            .route("/healthcheck", axum::routing::get(Api::healthcheck))
            .route("/", axum::routing::get(Api::root))
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
            )
    }

    async fn root() -> &'static str {
        "Overwatch stats, try /stats/pc/{battletag}"
    }

    async fn healthcheck() -> impl IntoResponse {
        Json(serde_json::json!({ "status": "OK" }))
    }

    async fn get_stats(
        Path((platform, tag)): Path<(String, String)>,
        State(state): State<ApiState>) -> Result<Json<PlayerStats>, ApiError> {

        let stats = state.stats_service.lookup(&platform, &tag).await?;
        Ok(Json(stats))
    }
}
