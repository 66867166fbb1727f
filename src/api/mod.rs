use crate::common::context::Context;
use crate::common::init;
use crate::common::state::AppState;
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::get;
use sqlx::{Pool, Sqlite};
use std::convert::Infallible;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub mod messages;

pub struct RequestContext {
    pub db: Pool<Sqlite>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::index).post(messages::create))
        .route(
            "/messages/{message_id}",
            get(messages::fetch_one)
                .patch(messages::update)
                .delete(messages::delete),
        )
        .layer(CorsLayer::permissive())
}

pub async fn serve(settings: &AppSettings) -> anyhow::Result<()> {
    let state = init::initialize_state(settings).await?;
    let app = router().with_state(state);

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            db: state.db.clone(),
        })
    }
}

impl Context for RequestContext {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }
}
