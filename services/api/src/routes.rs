use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use jobscout::workflows::matching::{
    JobMatchService, ListingProvider, ProfileSignals, RawProfile, ScoredPosting, SearchMetadata,
};

use crate::infra::{AppState, ProfileRecord, ProfileRepository};

pub(crate) struct ApiContext<P, R> {
    pub(crate) matcher: JobMatchService<P>,
    pub(crate) profiles: R,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRequest {
    pub(crate) profile: RawProfile,
    #[serde(default)]
    pub(crate) signals: ProfileSignals,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) feed: Vec<ScoredPosting>,
    pub(crate) more_available: bool,
    pub(crate) metadata: SearchMetadata,
}

pub(crate) fn match_router<P, R>(context: Arc<ApiContext<P, R>>) -> Router
where
    P: ListingProvider + 'static,
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/match/search", post(search_endpoint::<P, R>))
        .route(
            "/api/v1/profiles/:user_id",
            put(upsert_profile_endpoint::<P, R>),
        )
        .route(
            "/api/v1/profiles/:user_id/feed",
            get(profile_feed_endpoint::<P, R>),
        )
        .with_state(context)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// One-shot search with an inline profile document.
pub(crate) async fn search_endpoint<P, R>(
    State(context): State<Arc<ApiContext<P, R>>>,
    Json(payload): Json<SearchRequest>,
) -> Json<SearchResponse>
where
    P: ListingProvider + 'static,
    R: ProfileRepository + 'static,
{
    let outcome = context
        .matcher
        .search(&payload.profile, &payload.signals)
        .await;

    Json(SearchResponse {
        feed: outcome.feed,
        more_available: outcome.more_available,
        metadata: outcome.metadata,
    })
}

pub(crate) async fn upsert_profile_endpoint<P, R>(
    State(context): State<Arc<ApiContext<P, R>>>,
    Path(user_id): Path<String>,
    Json(payload): Json<SearchRequest>,
) -> impl IntoResponse
where
    P: ListingProvider + 'static,
    R: ProfileRepository + 'static,
{
    context.profiles.upsert(
        &user_id,
        ProfileRecord {
            profile: payload.profile,
            signals: payload.signals,
        },
    );
    (StatusCode::NO_CONTENT, ())
}

/// Personalized feed for a stored profile.
pub(crate) async fn profile_feed_endpoint<P, R>(
    State(context): State<Arc<ApiContext<P, R>>>,
    Path(user_id): Path<String>,
) -> axum::response::Response
where
    P: ListingProvider + 'static,
    R: ProfileRepository + 'static,
{
    let Some(record) = context.profiles.fetch(&user_id) else {
        let payload = json!({ "error": format!("no profile stored for '{user_id}'") });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    };

    let outcome = context.matcher.search(&record.profile, &record.signals).await;
    let response = SearchResponse {
        feed: outcome.feed,
        more_available: outcome.more_available,
        metadata: outcome.metadata,
    };
    (StatusCode::OK, Json(response)).into_response()
}
