//! HTTP handlers for the setup wizard and dashboard.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth;
use crate::collectors;
use crate::config::PanelConfig;
use crate::error::{AppError, Result};
use crate::lang;

use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetupForm {
    pub username: String,
    pub password: String,
}

/// `GET /api/setup` — first-run page data: detected host hardware plus the
/// default-language catalog. Available in every state so the page can also
/// be shown read-only after setup.
pub async fn setup_page(State(state): State<AppState>) -> Json<serde_json::Value> {
    let first_run = !state.is_configured().await;
    let sys = collectors::get_sys_info(&state.version);
    let t = lang::load_catalog(&state.lang_dir, lang::DEFAULT_LANG);

    Json(json!({
        "first_run": first_run,
        "sys": sys,
        "t": t,
    }))
}

/// `POST /api/setup` — create the admin account and baseline configuration.
/// Rejected once a configuration record exists.
pub async fn do_setup(
    State(state): State<AppState>,
    Form(form): Form<SetupForm>,
) -> Result<impl IntoResponse> {
    // The write guard spans the configured check, the disk write and the
    // state update, so concurrent setup attempts serialize and the loser
    // sees the winner's record instead of overwriting it.
    let mut guard = state.config.write().await;
    if guard.is_some() {
        return Err(AppError::AlreadyConfigured);
    }

    let hashed = auth::hash_password(&form.password);
    let config = PanelConfig::bootstrap(&form.username, &hashed, &state.version);
    config.store(&state.config_dir)?;

    *guard = Some(config);
    tracing::info!(admin = %form.username, "initial setup completed");

    Ok(Redirect::to("/"))
}

/// `GET /` and `GET /api/dashboard` — configuration (password redacted) plus
/// the catalog for the configured language.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    let guard = state.config.read().await;
    let config = guard.as_ref().ok_or(AppError::NotConfigured)?;
    let t = lang::load_catalog(&state.lang_dir, &config.system.lang);

    Ok(Json(json!({
        "config": {
            "system": config.system,
            "admin": { "username": config.admin.username },
            "modules": config.modules,
        },
        "t": t,
    })))
}
