use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/sum", post(handlers::sum))
        .route("/api/greet", post(handlers::greet))
        .route("/api/counter/click", post(handlers::counter_click))
        .route("/api/class/toggle", post(handlers::toggle_class))
        .route("/api/card/flip", post(handlers::card_flip))
        .route("/api/card/key", post(handlers::card_key))
        .route("/api/loader/toggle", post(handlers::loader_toggle))
        .route("/api/modal/open", post(handlers::modal_open))
        .route("/api/modal/close", post(handlers::modal_close))
        .with_state(state)
}
