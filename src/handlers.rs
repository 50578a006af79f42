use crate::errors::AppError;
use crate::logic::{add_numbers, create_greeting};
use crate::models::{
    CardKeyRequest, CardKeyResponse, CardView, ClassToggleRequest, ClassToggleResponse,
    CounterResponse, GreetRequest, GreetResponse, LoaderView, ModalView, StateResponse,
    SumRequest, SumResponse,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let demo = state.demo.lock().await;
    Html(render_index(&demo))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let demo = state.demo.lock().await;
    Json(demo.snapshot())
}

pub async fn sum(Json(payload): Json<SumRequest>) -> Json<SumResponse> {
    Json(SumResponse {
        sum: add_numbers(payload.a, payload.b),
    })
}

pub async fn greet(Json(payload): Json<GreetRequest>) -> Json<GreetResponse> {
    let greeting = create_greeting(&payload.name);
    Json(GreetResponse {
        message: greeting.message,
        valid: greeting.valid,
    })
}

pub async fn counter_click(State(state): State<AppState>) -> Json<CounterResponse> {
    let mut demo = state.demo.lock().await;
    let count = demo.counter.increment();
    Json(CounterResponse { count })
}

pub async fn toggle_class(
    State(state): State<AppState>,
    Json(payload): Json<ClassToggleRequest>,
) -> Result<Json<ClassToggleResponse>, AppError> {
    let element = payload.element.trim();
    let class = payload.class.trim();
    if class.is_empty() {
        return Err(AppError::bad_request("class must not be empty"));
    }

    let mut demo = state.demo.lock().await;
    let classes = demo
        .class_set_mut(element)
        .ok_or_else(|| AppError::bad_request(format!("unknown element '{element}'")))?;
    let present = classes.toggle(class);

    Ok(Json(ClassToggleResponse {
        element: element.to_string(),
        class: class.to_string(),
        present,
    }))
}

pub async fn card_flip(State(state): State<AppState>) -> Json<CardView> {
    let mut demo = state.demo.lock().await;
    let flipped = demo.card.flip();
    Json(CardView { flipped })
}

pub async fn card_key(
    State(state): State<AppState>,
    Json(payload): Json<CardKeyRequest>,
) -> Json<CardKeyResponse> {
    let mut demo = state.demo.lock().await;
    Json(demo.card.handle_key(&payload.key))
}

pub async fn loader_toggle(State(state): State<AppState>) -> Json<LoaderView> {
    let mut demo = state.demo.lock().await;
    Json(demo.loader.toggle())
}

pub async fn modal_open(State(state): State<AppState>) -> Json<ModalView> {
    let mut demo = state.demo.lock().await;
    Json(demo.modal.open())
}

pub async fn modal_close(State(state): State<AppState>) -> Json<ModalView> {
    let mut demo = state.demo.lock().await;
    Json(demo.modal.close())
}
