use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// Write payload for create and update; the id is server-assigned and
/// never part of the body.
#[derive(Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

// BTreeMap keeps listings ordered by id so repeated fetches compare equal.
pub type Db = Arc<RwLock<BTreeMap<u64, User>>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    next_id: Arc<AtomicU64>,
}

pub fn app() -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(BTreeMap::new())),
        next_id: Arc::new(AtomicU64::new(1)),
    };
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.db.read().await;
    Json(users.values().cloned().collect())
}

async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<UserDraft>,
) -> (StatusCode, Json<User>) {
    let user = User {
        id: state.next_id.fetch_add(1, Ordering::Relaxed),
        name: input.name,
        email: input.email,
    };
    state.db.write().await.insert(user.id, user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, StatusCode> {
    let users = state.db.read().await;
    users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(input): Json<UserDraft>,
) -> Result<Json<User>, StatusCode> {
    let mut users = state.db.write().await;
    let user = users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    user.name = input.name;
    user.email = input.email;
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut users = state.db.write().await;
    users.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
