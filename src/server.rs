use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use derive_more::From;

use crate::{api, db};

pub struct AppState {
    pub db_client: db::Client,
}

pub type SharedAppState = Arc<AppState>;

pub fn router(state: SharedAppState) -> Router {
    Router::new().route("/", get(list_users)).with_state(state)
}

async fn list_users(
    State(state): State<SharedAppState>,
) -> Result<Json<Vec<api::User>>, ListUsersError> {
    let users = state.db_client.find_all_users().await?;

    Ok(Json(
        users
            .into_iter()
            .map(|u| api::User {
                id: u.id,
                name: u.name,
            })
            .collect(),
    ))
}

#[derive(Debug, From)]
pub enum ListUsersError {
    #[from]
    DbError(db::Error),
}

impl IntoResponse for ListUsersError {
    fn into_response(self) -> Response {
        match self {
            Self::DbError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
