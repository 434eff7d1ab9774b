use anyhow::Context;
use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse},
        password::verify_password,
    },
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

const USER_NOT_FOUND: &str = "Utilisateur non trouvé";
const WRONG_PASSWORD: &str = "Mot de passe incorrect";
const INVALID_CREDENTIALS: &str = "Identifiants invalides";

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

/// Login answers only 200, 401 or 500: an unreadable body takes the generic
/// server-error path like any other unexpected failure.
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: Result<ApiJson<LoginRequest>, ApiError>,
) -> Result<Json<LoginResponse>, ApiError> {
    let ApiJson(payload) = body.context("read login body")?;
    let generic = state.config.login_generic_errors;

    let Some(user) = state
        .users
        .find_by_email(&payload.email)
        .await
        .context("find user by email")?
    else {
        warn!(email = %payload.email, "login unknown email");
        return Err(ApiError::InvalidCredentials(if generic {
            INVALID_CREDENTIALS
        } else {
            USER_NOT_FOUND
        }));
    };

    if !verify_password(&payload.password, &user.password).context("verify password")? {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials(if generic {
            INVALID_CREDENTIALS
        } else {
            WRONG_PASSWORD
        }));
    }

    let token = state.keys.sign(user.id, &user.email).context("sign token")?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(LoginResponse { token }))
}
